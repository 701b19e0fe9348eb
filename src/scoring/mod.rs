pub mod config;
pub mod engine;
pub mod impact;
pub mod metric;
pub mod snapshot;
pub mod validation;

pub use config::{
    build_configuration, default_metric_configs, default_metrics, MetricConfig, DEFAULT_METRICS,
};
pub use engine::{
    compute_aggregate, initialize, reset, set_weight, to_export, top_k, AggregateResult,
};
pub use impact::{analyze_impact, ImpactAnalysis, ImpactTier};
pub use metric::{
    Configuration, MetricEntry, ScoreError, MAX_SCORE, MAX_WEIGHT, MIN_SCORE, MIN_WEIGHT,
};
pub use snapshot::{ExportRecord, MetricValues, MetricsMap};
pub use validation::validate_metrics;
