use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::dataset::{DatasetStats, SampleRecord};
use crate::scoring::{AggregateResult, Configuration, ImpactAnalysis, ImpactTier};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Text bar for a weight in [0, 1]: "██████░░░░"
pub fn weight_bar(weight: f64, width: usize) -> String {
    let filled = (weight.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)))
}

/// Format metrics as a table with columns: Index, Name, Score, Weight, Bar
/// Name column is padded to the longest metric name.
pub fn format_metric_table(config: &Configuration, use_colors: bool) -> String {
    if config.is_empty() {
        return "No metrics configured.".to_string();
    }

    let name_width = config.names().map(|n| n.chars().count()).max().unwrap_or(0);

    config
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let name = format!("{:<width$}", entry.name(), width = name_width);
            let score = format!("{:>4.1}", entry.score());
            let weight = format!("{:.2}", entry.weight());
            let bar = weight_bar(entry.weight(), 10);

            if use_colors {
                format!(
                    "{} {}  {}  {}  {}",
                    index_str.dimmed(),
                    name.bold(),
                    score.cyan(),
                    weight,
                    bar.cyan()
                )
            } else {
                format!("{} {}  {}  {}  {}", index_str, name, score, weight, bar)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "Final ADAMS Score: 8.5"
pub fn format_aggregate(aggregate: &AggregateResult, use_colors: bool) -> String {
    if use_colors {
        format!("Final ADAMS Score: {}", aggregate.display().bold().cyan())
    } else {
        format!("Final ADAMS Score: {}", aggregate.display())
    }
}

pub fn format_impact(impact: &ImpactAnalysis, use_colors: bool) -> String {
    let summary = impact.summary();
    if !use_colors {
        return format!("Impact Analysis: {}", summary);
    }
    let colored = match impact.tier {
        ImpactTier::High => summary.green().to_string(),
        ImpactTier::Moderate => summary.yellow().to_string(),
        ImpactTier::Low => summary.red().to_string(),
    };
    format!("{} {}", "Impact Analysis:".bold(), colored)
}

/// Top-k list: "1. Factual Accuracy (0.90)"
pub fn format_top(top: &[(String, f64)]) -> String {
    top.iter()
        .enumerate()
        .map(|(i, (name, weight))| format!("{}. {} ({:.2})", i + 1, name, weight))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Metric cards after the analysis: three per row, "8.7  Factual Accuracy"
pub fn format_metric_grid(config: &Configuration, use_colors: bool) -> String {
    let cells: Vec<String> = config
        .iter()
        .map(|entry| {
            let score = format!("{:>4.1}", entry.score());
            let name = format!("{:<22}", entry.name().to_uppercase());
            if use_colors {
                format!("{} {}", score.bold().cyan(), name.dimmed())
            } else {
                format!("{} {}", score, name)
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("  ").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the dataset as one block per record.
/// Answers are truncated to the terminal width; pipes get full text.
pub fn format_dataset(records: &[SampleRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No processed dataset available.".to_string();
    }

    let width = get_terminal_width().map(|w| w.saturating_sub(12).max(20));
    let fit = |text: &str| match width {
        Some(w) => truncate_text(text, w),
        None => text.to_string(),
    };

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let score = format!("{:.1}", record.adams_score);
            if use_colors {
                format!(
                    "{} {}  {}\n  Reference: {}\n  Model:     {}",
                    format!("{:>2}.", idx + 1).dimmed(),
                    score.bold().cyan(),
                    fit(&record.question).bold(),
                    fit(&record.reference_answer),
                    fit(&record.model_answer)
                )
            } else {
                format!(
                    "{:>2}. {}  {}\n  Reference: {}\n  Model:     {}",
                    idx + 1,
                    score,
                    fit(&record.question),
                    fit(&record.reference_answer),
                    fit(&record.model_answer)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// "Total Samples: 3 | Average: 8.80 | Highest: 9.10 | Lowest: 8.40"
pub fn format_stats(stats: &DatasetStats) -> String {
    format!(
        "Total Samples: {} | Average ADAMS Score: {:.2} | Highest: {:.2} | Lowest: {:.2}",
        stats.total, stats.average, stats.highest, stats.lowest
    )
}

/// One progress line for the scripted analysis: "[███░░░]  50% stage text"
pub fn format_progress(stage: &str, progress: f64, use_colors: bool) -> String {
    let bar = weight_bar(progress, 20);
    let percent = format!("{:>3.0}%", progress * 100.0);
    if use_colors {
        format!("[{}] {} {}", bar.cyan(), percent, stage.cyan())
    } else {
        format!("[{}] {} {}", bar, percent, stage)
    }
}
