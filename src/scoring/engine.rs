use super::metric::{Configuration, ScoreError};
use super::snapshot::{ExportRecord, MetricValues, MetricsMap};

/// Weighted mean of all metric scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    /// Unrounded value; use this when composing further.
    pub final_score: f64,
}

impl AggregateResult {
    /// Final score rounded to one decimal place.
    pub fn rounded(&self) -> f64 {
        (self.final_score * 10.0).round() / 10.0
    }

    /// Final score formatted for display ("8.9").
    pub fn display(&self) -> String {
        format!("{:.1}", self.final_score)
    }
}

/// Fresh, independent copy of the defaults.
pub fn initialize(defaults: &Configuration) -> Configuration {
    defaults.clone()
}

/// Discard all weight edits by starting over from the defaults.
pub fn reset(defaults: &Configuration) -> Configuration {
    initialize(defaults)
}

/// Update one metric's weight in place.
///
/// Finite values are clamped into [0, 1] (slider semantics). NaN and
/// infinities are rejected. Returns the configuration for chaining.
pub fn set_weight<'a>(
    config: &'a mut Configuration,
    name: &str,
    new_weight: f64,
) -> Result<&'a mut Configuration, ScoreError> {
    let entry = config
        .get_mut(name)
        .ok_or_else(|| ScoreError::UnknownMetric(name.to_string()))?;

    if !new_weight.is_finite() {
        return Err(ScoreError::NonFiniteWeight {
            name: name.to_string(),
        });
    }

    entry.store_weight(new_weight);
    Ok(config)
}

/// sum(score * weight) / sum(weight), or 0 when the total weight is 0.
pub fn compute_aggregate(config: &Configuration) -> AggregateResult {
    let weighted_sum: f64 = config.iter().map(|e| e.score() * e.weight()).sum();
    let total_weight = config.total_weight();

    let final_score = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    AggregateResult { final_score }
}

/// The `k` heaviest metrics as `(name, weight)`, heaviest first.
/// Ties keep insertion order.
pub fn top_k(config: &Configuration, k: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<_> = config.iter().collect();
    // sort_by is stable, which gives the insertion-order tie-break
    ranked.sort_by(|a, b| {
        b.weight()
            .partial_cmp(&a.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(k)
        .map(|e| (e.name().to_string(), e.weight()))
        .collect()
}

/// Snapshot of every entry plus the aggregate, ready for serialization.
pub fn to_export(config: &Configuration, aggregate: &AggregateResult) -> ExportRecord {
    let metrics = config
        .iter()
        .map(|e| {
            (
                e.name().to_string(),
                MetricValues {
                    score: e.score(),
                    weight: e.weight(),
                },
            )
        })
        .collect();

    ExportRecord {
        metrics: MetricsMap(metrics),
        final_score: aggregate.final_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{default_metrics, MetricEntry};

    fn config_of(entries: &[(&str, f64, f64)]) -> Configuration {
        Configuration::from_entries(
            entries
                .iter()
                .map(|(name, score, weight)| MetricEntry::new(*name, *score, *weight).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn test_equal_weights_midpoint() {
        let config = config_of(&[("A", 10.0, 1.0), ("B", 0.0, 1.0)]);
        let result = compute_aggregate(&config);
        assert_eq!(result.final_score, 5.0);
        assert_eq!(result.display(), "5.0");
    }

    #[test]
    fn test_weighted_mean_two_metrics() {
        let config = config_of(&[("A", 8.7, 0.9), ("B", 9.2, 0.8)]);
        let result = compute_aggregate(&config);
        // (7.83 + 7.36) / 1.7
        assert!((result.final_score - 8.935294).abs() < 1e-5);
        assert_eq!(result.rounded(), 8.9);
        assert_eq!(result.display(), "8.9");
    }

    #[test]
    fn test_all_zero_weights_yield_zero() {
        let config = config_of(&[("A", 8.7, 0.0), ("B", 9.2, 0.0)]);
        assert_eq!(compute_aggregate(&config).final_score, 0.0);
    }

    #[test]
    fn test_empty_configuration_yields_zero() {
        assert_eq!(compute_aggregate(&Configuration::new()).final_score, 0.0);
    }

    #[test]
    fn test_aggregate_independent_of_order() {
        let forward = config_of(&[("A", 8.7, 0.9), ("B", 9.2, 0.8), ("C", 7.5, 0.5)]);
        let backward = config_of(&[("C", 7.5, 0.5), ("B", 9.2, 0.8), ("A", 8.7, 0.9)]);
        let a = compute_aggregate(&forward).final_score;
        let b = compute_aggregate(&backward).final_score;
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_set_weight_reflected_in_aggregate() {
        let mut config = config_of(&[("A", 10.0, 1.0), ("B", 0.0, 1.0)]);
        set_weight(&mut config, "B", 0.0).unwrap();
        assert_eq!(compute_aggregate(&config).final_score, 10.0);
    }

    #[test]
    fn test_set_weight_chains() {
        let mut config = config_of(&[("A", 10.0, 1.0), ("B", 0.0, 1.0)]);
        let len = set_weight(&mut config, "A", 0.5).unwrap().len();
        assert_eq!(len, 2);
        assert_eq!(config.get("A").unwrap().weight(), 0.5);
    }

    #[test]
    fn test_set_weight_clamps_out_of_range() {
        let mut config = config_of(&[("A", 5.0, 0.5)]);
        set_weight(&mut config, "A", -5.0).unwrap();
        assert_eq!(config.get("A").unwrap().weight(), 0.0);
        set_weight(&mut config, "A", 12.0).unwrap();
        assert_eq!(config.get("A").unwrap().weight(), 1.0);
    }

    #[test]
    fn test_set_weight_negative_zero_is_plain_zero() {
        let mut config = config_of(&[("A", 5.0, 0.5), ("B", 8.0, 0.5)]);
        set_weight(&mut config, "A", -0.0).unwrap();
        let weight = config.get("A").unwrap().weight();
        assert!(weight.is_sign_positive());
        assert_eq!(format!("{:.2}", weight), "0.00");

        let record = to_export(&config, &compute_aggregate(&config));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""A":{"score":5.0,"weight":0.0}"#));
    }

    #[test]
    fn test_set_weight_unknown_metric() {
        let mut config = config_of(&[("A", 5.0, 0.5)]);
        let err = set_weight(&mut config, "Missing", 0.3).unwrap_err();
        assert_eq!(err, ScoreError::UnknownMetric("Missing".to_string()));
    }

    #[test]
    fn test_set_weight_rejects_nan() {
        let mut config = config_of(&[("A", 5.0, 0.5)]);
        assert!(set_weight(&mut config, "A", f64::NAN).is_err());
        assert_eq!(config.get("A").unwrap().weight(), 0.5);
    }

    #[test]
    fn test_initialize_is_deep_copy() {
        let defaults = default_metrics();
        let mut working = initialize(&defaults);
        set_weight(&mut working, "Coherence", 0.0).unwrap();
        assert_eq!(defaults.get("Coherence").unwrap().weight(), 0.8);
        assert_eq!(working.get("Coherence").unwrap().weight(), 0.0);
    }

    #[test]
    fn test_reset_restores_default_aggregate() {
        let defaults = default_metrics();
        let expected = compute_aggregate(&defaults);

        let mut working = initialize(&defaults);
        for name in ["Coherence", "Novelty", "Clarity"] {
            set_weight(&mut working, name, 0.05).unwrap();
        }
        set_weight(&mut working, "Bias Detection", 1.0).unwrap();
        assert_ne!(compute_aggregate(&working), expected);

        let working = reset(&defaults);
        assert_eq!(compute_aggregate(&working), expected);
        assert_eq!(working, defaults);
    }

    #[test]
    fn test_top_k_orders_by_weight() {
        let config = config_of(&[("A", 1.0, 0.2), ("B", 1.0, 0.9), ("C", 1.0, 0.5)]);
        let top = top_k(&config, 2);
        assert_eq!(
            top,
            vec![("B".to_string(), 0.9), ("C".to_string(), 0.5)]
        );
    }

    #[test]
    fn test_top_k_ties_keep_insertion_order() {
        let config = config_of(&[("First", 1.0, 0.7), ("Heavy", 1.0, 0.9), ("Second", 1.0, 0.7)]);
        let names: Vec<_> = top_k(&config, 3).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Heavy", "First", "Second"]);
    }

    #[test]
    fn test_top_k_larger_than_config() {
        let config = config_of(&[("A", 1.0, 0.2)]);
        assert_eq!(top_k(&config, 3).len(), 1);
        assert!(top_k(&config, 0).is_empty());
    }

    #[test]
    fn test_default_top_three() {
        let names: Vec<_> = top_k(&default_metrics(), 3)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, vec!["Factual Accuracy", "Relevance", "Coherence"]);
    }

    #[test]
    fn test_export_json_round_trip() {
        let config = config_of(&[("A", 8.7, 0.9), ("B", 9.2, 0.8)]);
        let aggregate = compute_aggregate(&config);
        let record = to_export(&config, &aggregate);

        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: ExportRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        assert_eq!(parsed.final_score, aggregate.final_score);
        assert_eq!(parsed.metrics.get("A"), Some(&MetricValues { score: 8.7, weight: 0.9 }));
        assert_eq!(parsed.metrics.get("B"), Some(&MetricValues { score: 9.2, weight: 0.8 }));
    }
}
