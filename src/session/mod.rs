pub mod comments;
pub mod pipeline;

pub use comments::{CommentMode, SavedComments, TIMESTAMP_FORMAT};
pub use pipeline::{accept_upload, AnalysisRun, UploadedFile};

use chrono::NaiveDateTime;

use crate::dataset::{sample_dataset, SampleRecord};
use crate::judge::Judge;
use crate::scoring::{
    analyze_impact, compute_aggregate, initialize, reset, set_weight, AggregateResult,
    Configuration, ImpactAnalysis, ScoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Upload,
    Dataset,
    Config,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Upload, Page::Dataset, Page::Config];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Upload => "Dataset Upload",
            Page::Dataset => "Dataset Review",
            Page::Config => "Configuration",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Page::Upload => 0,
            Page::Dataset => 1,
            Page::Config => 2,
        }
    }

    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Everything one user works on. Owned by the shell (TUI or CLI); the
/// scoring engine only ever sees the configurations passed to it.
#[derive(Debug, Clone)]
pub struct Session {
    pub page: Page,
    pub judge: Judge,
    pub upload: Option<UploadedFile>,
    pub processing_complete: bool,
    pub dataset: Option<Vec<SampleRecord>>,
    pub comments: Option<SavedComments>,
    pub metrics: Configuration,
    defaults: Configuration,
}

impl Session {
    pub fn new(defaults: Configuration, judge: Judge) -> Self {
        Self {
            page: Page::Upload,
            judge,
            upload: None,
            processing_complete: false,
            dataset: None,
            comments: None,
            metrics: initialize(&defaults),
            defaults,
        }
    }

    pub fn defaults(&self) -> &Configuration {
        &self.defaults
    }

    pub fn set_weight(&mut self, name: &str, weight: f64) -> Result<(), ScoreError> {
        set_weight(&mut self.metrics, name, weight)?;
        Ok(())
    }

    /// Move a weight by `delta`, clamped like any other update.
    pub fn nudge_weight(&mut self, name: &str, delta: f64) -> Result<f64, ScoreError> {
        let current = self
            .metrics
            .get(name)
            .map(|e| e.weight())
            .ok_or_else(|| ScoreError::UnknownMetric(name.to_string()))?;
        // Round to the slider grid so repeated steps don't drift
        let target = ((current + delta) * 100.0).round() / 100.0;
        set_weight(&mut self.metrics, name, target)?;
        Ok(self.metrics.get(name).map(|e| e.weight()).unwrap_or(target))
    }

    pub fn aggregate(&self) -> AggregateResult {
        compute_aggregate(&self.metrics)
    }

    pub fn impact(&self) -> ImpactAnalysis {
        analyze_impact(&self.metrics)
    }

    /// Restore the default weights. Everything else is kept.
    pub fn reset_weights(&mut self) {
        self.metrics = reset(&self.defaults);
    }

    /// Mark the scripted analysis done and load the sample dataset.
    pub fn complete_processing(&mut self) {
        self.processing_complete = true;
        self.dataset = Some(sample_dataset());
    }

    pub fn save_comments(&mut self, comment: &str, mode: &CommentMode, saved_at: NaiveDateTime) {
        self.comments = Some(SavedComments::new(comment, mode, saved_at));
    }

    /// Back to a fresh session. The judge selection survives.
    pub fn reset(&mut self) {
        self.page = Page::Upload;
        self.upload = None;
        self.processing_complete = false;
        self.dataset = None;
        self.comments = None;
        self.reset_weights();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::default_metrics;
    use chrono::NaiveDate;

    fn session() -> Session {
        Session::new(default_metrics(), Judge::Qwen)
    }

    #[test]
    fn test_new_session_state() {
        let s = session();
        assert_eq!(s.page, Page::Upload);
        assert!(!s.processing_complete);
        assert!(s.dataset.is_none());
        assert_eq!(s.metrics, *s.defaults());
    }

    #[test]
    fn test_nudge_weight_steps_and_clamps() {
        let mut s = session();
        assert_eq!(s.nudge_weight("Factual Accuracy", 0.05).unwrap(), 0.95);
        assert_eq!(s.nudge_weight("Factual Accuracy", 0.05).unwrap(), 1.0);
        assert_eq!(s.nudge_weight("Factual Accuracy", 0.05).unwrap(), 1.0);

        for _ in 0..30 {
            s.nudge_weight("Novelty", -0.05).unwrap();
        }
        assert_eq!(s.metrics.get("Novelty").unwrap().weight(), 0.0);
    }

    #[test]
    fn test_nudge_unknown_metric() {
        let mut s = session();
        assert_eq!(
            s.nudge_weight("Vibes", 0.05),
            Err(ScoreError::UnknownMetric("Vibes".to_string()))
        );
    }

    #[test]
    fn test_reset_weights_keeps_progress() {
        let mut s = session();
        s.complete_processing();
        let before = s.aggregate();
        s.set_weight("Coherence", 0.0).unwrap();
        assert_ne!(s.aggregate(), before);

        s.reset_weights();
        assert_eq!(s.aggregate(), before);
        assert!(s.processing_complete);
    }

    #[test]
    fn test_full_reset() {
        let mut s = session();
        s.judge = Judge::Mistral;
        s.page = Page::Config;
        s.complete_processing();
        s.set_weight("Clarity", 0.1).unwrap();
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        s.save_comments("note", &CommentMode::Final, at);

        s.reset();
        assert_eq!(s.page, Page::Upload);
        assert!(!s.processing_complete);
        assert!(s.dataset.is_none());
        assert!(s.comments.is_none());
        assert_eq!(s.metrics, *s.defaults());
        assert_eq!(s.judge, Judge::Mistral);
    }

    #[test]
    fn test_page_cycle() {
        assert_eq!(Page::Upload.next(), Page::Dataset);
        assert_eq!(Page::Config.next(), Page::Upload);
    }
}
