use std::collections::HashSet;

use super::config::MetricConfig;
use super::metric::{MAX_SCORE, MAX_WEIGHT, MIN_SCORE, MIN_WEIGHT};

/// Validate configured metrics at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_metrics(metrics: &[MetricConfig]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, metric) in metrics.iter().enumerate() {
        let name = metric.name.trim();
        if name.is_empty() {
            errors.push(format!("metrics[{}].name: must not be empty", i));
        } else if !seen.insert(name) {
            errors.push(format!("metrics[{}].name: duplicate metric '{}'", i, name));
        }

        if !metric.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&metric.score) {
            errors.push(format!(
                "metrics[{}].score: {} must be between {} and {}",
                i, metric.score, MIN_SCORE, MAX_SCORE
            ));
        }

        if !metric.weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&metric.weight) {
            errors.push(format!(
                "metrics[{}].weight: {} must be between {} and {}",
                i, metric.weight, MIN_WEIGHT, MAX_WEIGHT
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
