pub mod formatter;

pub use formatter::{
    format_aggregate, format_dataset, format_impact, format_metric_grid, format_metric_table,
    format_progress, format_stats, format_top, should_use_colors, truncate_text, weight_bar,
};
