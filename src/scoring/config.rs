use serde::{Deserialize, Serialize};

use super::metric::{Configuration, MetricEntry, ScoreError};

/// A metric as written in the YAML config file.
///
/// Example YAML:
/// ```yaml
/// metrics:
///   - { name: Factual Accuracy, score: 8.7, weight: 0.9 }
///   - { name: Coherence, score: 9.2, weight: 0.8 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    pub name: String,

    /// Fixed demo score in [0, 10]
    pub score: f64,

    /// Starting weight in [0, 1]
    pub weight: f64,
}

/// Built-in demo metrics: (name, score, weight).
pub const DEFAULT_METRICS: &[(&str, f64, f64)] = &[
    ("Factual Accuracy", 8.7, 0.9),
    ("Coherence", 9.2, 0.8),
    ("Relevance", 8.9, 0.85),
    ("Completeness", 7.8, 0.7),
    ("Citation Quality", 8.1, 0.75),
    ("Domain Specificity", 8.5, 0.8),
    ("Clarity", 9.0, 0.7),
    ("Consistency", 8.3, 0.6),
    ("Novelty", 7.5, 0.5),
    ("Readability", 8.8, 0.6),
    ("Technical Depth", 8.0, 0.7),
    ("Evidence Support", 8.4, 0.8),
    ("Contextual Fit", 8.6, 0.7),
    ("Timeliness", 7.9, 0.6),
    ("Bias Detection", 8.2, 0.7),
];

/// The built-in defaults as a configuration.
pub fn default_metrics() -> Configuration {
    let mut config = Configuration::new();
    for (name, score, weight) in DEFAULT_METRICS {
        // The table has unique names; a duplicate would simply be skipped.
        let _ = config.insert(MetricEntry::clamped(name, *score, *weight));
    }
    config
}

/// The built-in defaults in config-file form (used by `adams init`).
pub fn default_metric_configs() -> Vec<MetricConfig> {
    DEFAULT_METRICS
        .iter()
        .map(|(name, score, weight)| MetricConfig {
            name: name.to_string(),
            score: *score,
            weight: *weight,
        })
        .collect()
}

/// Turn config-file metrics into a validated configuration.
/// Stops at the first bad entry; use `validate_metrics` to report them all.
pub fn build_configuration(metrics: &[MetricConfig]) -> Result<Configuration, ScoreError> {
    Configuration::from_entries(
        metrics
            .iter()
            .map(|m| MetricEntry::new(m.name.clone(), m.score, m.weight))
            .collect::<Result<Vec<_>, _>>()?,
    )
}
