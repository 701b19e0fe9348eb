pub mod formats;
pub mod storage;

pub use formats::{
    comments_json, config_json, dataset_csv, dataset_json, full_report_json, text_report,
};
pub use storage::write_export;

use anyhow::{bail, Result};
use chrono::NaiveDateTime;

use crate::scoring::to_export;
use crate::session::{Session, TIMESTAMP_FORMAT};

const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Lower-cased label with anything outside `[a-z0-9_.-]` replaced by `_`,
/// so a user-typed mode can never turn the file name into a path.
fn file_name_part(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '.' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// Downloads the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    /// Metrics, final score, judge and timestamp (JSON)
    Config,
    /// Plain-text score report
    Report,
    /// Dataset, metrics, comments and score (JSON)
    Full,
    /// Saved reviewer comments with the current weights (JSON)
    Comments,
    /// Processed dataset as CSV
    DatasetCsv,
    /// Processed dataset as JSON
    DatasetJson,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Config => "configuration",
            ExportKind::Report => "report",
            ExportKind::Full => "full report",
            ExportKind::Comments => "comments",
            ExportKind::DatasetCsv => "dataset (CSV)",
            ExportKind::DatasetJson => "dataset (JSON)",
        }
    }
}

/// An export ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub file_name: String,
    pub contents: String,
}

/// Produce one export from the current session state.
///
/// Dataset exports need a completed analysis; comment exports need saved
/// comments. Everything else always works.
pub fn render(kind: ExportKind, session: &Session, now: NaiveDateTime) -> Result<Rendered> {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    let stamp = now.format(FILE_STAMP_FORMAT).to_string();
    let record = to_export(&session.metrics, &session.aggregate());

    let rendered = match kind {
        ExportKind::Config => Rendered {
            file_name: format!("adams_config_{}.json", stamp),
            contents: config_json(&record, session.judge, &timestamp)?,
        },
        ExportKind::Report => Rendered {
            file_name: format!("adams_report_{}.txt", stamp),
            contents: text_report(&record),
        },
        ExportKind::Full => Rendered {
            file_name: format!("adams_full_report_{}.json", stamp),
            contents: full_report_json(
                &record,
                session.dataset.as_deref(),
                session.comments.as_ref(),
                session.judge,
                &timestamp,
            )?,
        },
        ExportKind::Comments => {
            let Some(ref comments) = session.comments else {
                bail!("No reviewer comments saved. Save a comment before exporting.");
            };
            Rendered {
                file_name: format!(
                    "reviewer_comments_{}_{}.json",
                    file_name_part(&comments.mode),
                    stamp
                ),
                contents: comments_json(comments, &record.metrics, session.judge)?,
            }
        }
        ExportKind::DatasetCsv | ExportKind::DatasetJson => {
            let Some(ref dataset) = session.dataset else {
                bail!("No processed dataset available. Run the analysis first.");
            };
            if kind == ExportKind::DatasetCsv {
                Rendered {
                    file_name: format!("adams_dataset_{}.csv", session.judge.slug()),
                    contents: dataset_csv(dataset),
                }
            } else {
                Rendered {
                    file_name: format!("adams_dataset_{}.json", session.judge.slug()),
                    contents: dataset_json(dataset)?,
                }
            }
        }
    };

    Ok(rendered)
}
