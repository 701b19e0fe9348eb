use anyhow::{Context, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::dataset::{SampleRecord, COLUMNS};
use crate::judge::Judge;
use crate::scoring::{ExportRecord, MetricsMap};
use crate::session::SavedComments;

pub const REPORT_HEADER: &str = "ADAMS Evaluation Report";

/// `Save Configuration` download.
#[derive(Debug, Serialize)]
pub struct ConfigExport<'a> {
    pub metrics: &'a MetricsMap,
    pub final_score: f64,
    pub llm_judge: Judge,
    pub timestamp: &'a str,
}

/// `Export Full Report` download.
#[derive(Debug, Serialize)]
pub struct FullReport<'a> {
    pub dataset: Option<&'a [SampleRecord]>,
    pub metrics: &'a MetricsMap,
    pub final_score: f64,
    pub llm_judge: Judge,
    #[serde(serialize_with = "comments_or_empty")]
    pub reviewer_comments: Option<&'a SavedComments>,
    pub timestamp: &'a str,
}

/// `Export Comments` download.
#[derive(Debug, Serialize)]
pub struct CommentsExport<'a> {
    pub comment: &'a str,
    pub mode: &'a str,
    pub timestamp: &'a str,
    pub llm_judge: Judge,
    pub metric_weights: &'a MetricsMap,
}

// Unsaved comments are written as `{}`, not `null`.
fn comments_or_empty<S: Serializer>(
    comments: &Option<&SavedComments>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match comments {
        Some(c) => c.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

pub fn config_json(record: &ExportRecord, judge: Judge, timestamp: &str) -> Result<String> {
    let export = ConfigExport {
        metrics: &record.metrics,
        final_score: record.final_score,
        llm_judge: judge,
        timestamp,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize configuration")
}

pub fn full_report_json(
    record: &ExportRecord,
    dataset: Option<&[SampleRecord]>,
    comments: Option<&SavedComments>,
    judge: Judge,
    timestamp: &str,
) -> Result<String> {
    let report = FullReport {
        dataset,
        metrics: &record.metrics,
        final_score: record.final_score,
        llm_judge: judge,
        reviewer_comments: comments,
        timestamp,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize full report")
}

pub fn comments_json(
    comments: &SavedComments,
    metrics: &MetricsMap,
    judge: Judge,
) -> Result<String> {
    let export = CommentsExport {
        comment: &comments.main_comment,
        mode: &comments.mode,
        timestamp: &comments.timestamp,
        llm_judge: judge,
        metric_weights: metrics,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize reviewer comments")
}

/// Plain-text report:
///
/// ```text
/// ADAMS Evaluation Report
/// =======================
/// Final Score: 8.5
/// Factual Accuracy: Score=8.7, Weight=0.90
/// ```
pub fn text_report(record: &ExportRecord) -> String {
    let mut lines = vec![
        REPORT_HEADER.to_string(),
        "=".repeat(REPORT_HEADER.len()),
        format!("Final Score: {:.1}", record.final_score),
    ];
    for (name, values) in record.metrics.iter() {
        lines.push(format!(
            "{}: Score={}, Weight={:.2}",
            name,
            format_number(values.score),
            values.weight
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn dataset_csv(records: &[SampleRecord]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for record in records {
        let row = [
            csv_field(&record.question),
            csv_field(&record.reference_answer),
            csv_field(&record.model_answer),
            format_number(record.adams_score),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn dataset_json(records: &[SampleRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize dataset")
}

/// Quote a CSV field when it holds a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Whole numbers keep one decimal ("9.0"), others print as-is ("8.7").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_dataset;
    use crate::scoring::{compute_aggregate, to_export, Configuration, MetricEntry};
    use serde_json::Value;

    fn record() -> ExportRecord {
        let config = Configuration::from_entries(vec![
            MetricEntry::new("Factual Accuracy", 8.7, 0.9).unwrap(),
            MetricEntry::new("Clarity", 9.0, 0.7).unwrap(),
        ])
        .unwrap();
        to_export(&config, &compute_aggregate(&config))
    }

    fn saved() -> SavedComments {
        SavedComments {
            main_comment: "Weights look sane".to_string(),
            mode: "Review".to_string(),
            timestamp: "2025-03-14 12:30:05".to_string(),
        }
    }

    #[test]
    fn test_text_report_layout() {
        let report = text_report(&record());
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "ADAMS Evaluation Report");
        assert_eq!(lines[1], "=======================");
        assert_eq!(lines[2], "Final Score: 8.8");
        assert_eq!(lines[3], "Factual Accuracy: Score=8.7, Weight=0.90");
        assert_eq!(lines[4], "Clarity: Score=9.0, Weight=0.70");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_config_json_fields() {
        let rec = record();
        let json = config_json(&rec, Judge::DistilledQwen, "2025-03-14 12:30:05").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["llm_judge"], "Distilled Qwen");
        assert_eq!(value["timestamp"], "2025-03-14 12:30:05");
        assert_eq!(value["final_score"].as_f64(), Some(rec.final_score));
        assert_eq!(value["metrics"]["Clarity"]["weight"].as_f64(), Some(0.7));
    }

    #[test]
    fn test_config_json_round_trip() {
        let rec = record();
        let json = config_json(&rec, Judge::Qwen, "ts").unwrap();
        // llm_judge and timestamp are ignored when reading back
        let parsed: ExportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rec);
    }

    #[test]
    fn test_full_report_without_comments() {
        let rec = record();
        let json = full_report_json(&rec, None, None, Judge::Qwen, "ts").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["dataset"].is_null());
        assert_eq!(value["reviewer_comments"], serde_json::json!({}));
    }

    #[test]
    fn test_full_report_with_everything() {
        let rec = record();
        let dataset = sample_dataset();
        let comments = saved();
        let json =
            full_report_json(&rec, Some(&dataset), Some(&comments), Judge::Mistral, "ts").unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dataset"].as_array().unwrap().len(), 3);
        assert_eq!(value["dataset"][2]["ADAMS_Score"].as_f64(), Some(9.1));
        assert_eq!(value["reviewer_comments"]["mode"], "Review");
        assert_eq!(value["llm_judge"], "Mistral");
    }

    #[test]
    fn test_comments_json_fields() {
        let rec = record();
        let json = comments_json(&saved(), &rec.metrics, Judge::Llama31).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comment"], "Weights look sane");
        assert_eq!(value["llm_judge"], "LLaMA 3.1");
        assert_eq!(value["metric_weights"]["Factual Accuracy"]["score"].as_f64(), Some(8.7));
    }

    #[test]
    fn test_dataset_csv_quotes_fields() {
        let csv = dataset_csv(&sample_dataset());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Question,Reference Answer,Model Answer,ADAMS_Score")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("What are the key benefits of using RAG systems in healthcare?,\"RAG systems provide"));
        assert!(first.ends_with(",8.4"));
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_csv_field_escapes_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_dataset_json_parses_back() {
        let json = dataset_json(&sample_dataset()).unwrap();
        let parsed: Vec<SampleRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_dataset());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(9.0), "9.0");
        assert_eq!(format_number(8.7), "8.7");
        assert_eq!(format_number(0.0), "0.0");
    }
}
