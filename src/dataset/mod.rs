pub mod stats;
pub mod types;

pub use stats::DatasetStats;
pub use types::{sample_dataset, SampleRecord, COLUMNS, SAMPLE_QUERY, SAMPLE_RESPONSE};
