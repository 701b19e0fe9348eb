//! Scripted analysis run.
//!
//! The uploaded file is checked for a supported extension and never read.
//! Stages are fixed text; nothing is evaluated.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::judge::Judge;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "json", "xlsx"];

/// A file the user picked for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub extension: String,
}

impl UploadedFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Accept a path for analysis if it is an existing file with a supported extension.
pub fn accept_upload(path: &Path) -> Result<UploadedFile> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "Unsupported file type '{}': expected one of {}",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }

    Ok(UploadedFile {
        path: path.to_path_buf(),
        extension,
    })
}

/// Stage messages, in order. The first names the judge.
pub fn stages(judge: Judge) -> Vec<String> {
    vec![
        format!("Initializing {} evaluation matrix...", judge),
        "Deploying multi-agent analysis swarm...".to_string(),
        "Processing domain-specific parameters...".to_string(),
        "Calibrating metric weighting algorithms...".to_string(),
        "Synthesizing evaluation confidence scores...".to_string(),
        "ADAMS processing complete ⚡".to_string(),
    ]
}

/// Progress through the scripted stages.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    stages: Vec<String>,
    shown: usize,
}

impl AnalysisRun {
    pub fn new(judge: Judge) -> Self {
        Self {
            stages: stages(judge),
            shown: 0,
        }
    }

    /// Show the next stage. Returns false once every stage has been shown.
    pub fn advance(&mut self) -> bool {
        if self.shown < self.stages.len() {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    /// Message of the stage most recently shown.
    pub fn current_stage(&self) -> Option<&str> {
        self.shown
            .checked_sub(1)
            .and_then(|i| self.stages.get(i))
            .map(String::as_str)
    }

    /// Fraction of stages shown, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.stages.is_empty() {
            1.0
        } else {
            self.shown as f64 / self.stages.len() as f64
        }
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.stages.len()
    }
}

/// Play the whole script, calling `on_stage(message, progress)` per stage
/// and pausing `delay` after each one.
pub async fn play<F>(judge: Judge, delay: Duration, mut on_stage: F)
where
    F: FnMut(&str, f64),
{
    let mut run = AnalysisRun::new(judge);
    while run.advance() {
        if let Some(stage) = run.current_stage() {
            on_stage(stage, run.progress());
        }
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_stages_name_judge() {
        let stages = stages(Judge::Mistral);
        assert_eq!(stages.len(), 6);
        assert_eq!(stages[0], "Initializing Mistral evaluation matrix...");
        assert!(stages[5].starts_with("ADAMS processing complete"));
    }

    #[test]
    fn test_run_progress() {
        let mut run = AnalysisRun::new(Judge::Qwen);
        assert_eq!(run.progress(), 0.0);
        assert!(run.current_stage().is_none());

        assert!(run.advance());
        assert!((run.progress() - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(run.current_stage(), Some("Initializing Qwen evaluation matrix..."));

        while run.advance() {}
        assert!(run.is_finished());
        assert_eq!(run.progress(), 1.0);
        assert!(!run.advance());
    }

    #[test]
    fn test_accept_supported_file() {
        let path = env::temp_dir().join("adams_test_upload.JSON");
        fs::write(&path, "not even json").unwrap();
        let upload = accept_upload(&path).unwrap();
        assert_eq!(upload.extension, "json");
        assert_eq!(upload.file_name(), "adams_test_upload.JSON");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_reject_unsupported_extension() {
        let err = accept_upload(Path::new("notes.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn test_reject_missing_file() {
        let path = env::temp_dir().join("adams_test_missing_upload.csv");
        let _ = fs::remove_file(&path);
        let err = accept_upload(&path).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[tokio::test]
    async fn test_play_reports_every_stage() {
        let mut seen = Vec::new();
        play(Judge::Deepseek, Duration::from_millis(1), |stage, progress| {
            seen.push((stage.to_string(), progress));
        })
        .await;
        assert_eq!(seen.len(), 6);
        assert_eq!(seen.last().unwrap().1, 1.0);
    }
}
