use super::types::SampleRecord;

/// Summary of the `ADAMS_Score` column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStats {
    pub total: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl DatasetStats {
    /// `None` for an empty dataset.
    pub fn compute(records: &[SampleRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let scores = records.iter().map(|r| r.adams_score);
        let sum: f64 = scores.clone().sum();
        let highest = scores.clone().fold(f64::NEG_INFINITY, f64::max);
        let lowest = scores.fold(f64::INFINITY, f64::min);

        Some(Self {
            total: records.len(),
            average: sum / records.len() as f64,
            highest,
            lowest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_dataset;

    #[test]
    fn test_sample_stats() {
        let stats = DatasetStats::compute(&sample_dataset()).unwrap();
        assert_eq!(stats.total, 3);
        assert!((stats.average - 8.8).abs() < 1e-9);
        assert_eq!(stats.highest, 9.1);
        assert_eq!(stats.lowest, 8.4);
        assert_eq!(format!("{:.2}", stats.average), "8.80");
    }

    #[test]
    fn test_empty_dataset_has_no_stats() {
        assert!(DatasetStats::compute(&[]).is_none());
    }

    #[test]
    fn test_single_record() {
        let mut records = sample_dataset();
        records.truncate(1);
        let stats = DatasetStats::compute(&records).unwrap();
        assert_eq!(stats.highest, stats.lowest);
        assert_eq!(stats.average, 8.4);
    }
}
