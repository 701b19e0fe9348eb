use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used in saved comments and exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a saved comment is marked as.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommentMode {
    #[default]
    Draft,
    Review,
    Final,
    /// User-named mode. A blank name reads as "Custom".
    Custom(String),
}

impl CommentMode {
    pub fn label(&self) -> &str {
        match self {
            CommentMode::Draft => "Draft",
            CommentMode::Review => "Review",
            CommentMode::Final => "Final",
            CommentMode::Custom(name) if !name.trim().is_empty() => name.trim(),
            CommentMode::Custom(_) => "Custom",
        }
    }

    /// Draft -> Review -> Final -> Custom -> Draft
    pub fn next(&self) -> CommentMode {
        match self {
            CommentMode::Draft => CommentMode::Review,
            CommentMode::Review => CommentMode::Final,
            CommentMode::Final => CommentMode::Custom(String::new()),
            CommentMode::Custom(_) => CommentMode::Draft,
        }
    }

    /// Parse a mode name; anything that is not a preset becomes a custom mode.
    pub fn parse(s: &str) -> CommentMode {
        match s.trim().to_lowercase().as_str() {
            "draft" => CommentMode::Draft,
            "review" => CommentMode::Review,
            "final" => CommentMode::Final,
            "custom" | "" => CommentMode::Custom(String::new()),
            _ => CommentMode::Custom(s.trim().to_string()),
        }
    }
}

/// A reviewer comment after it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedComments {
    pub main_comment: String,
    pub mode: String,
    pub timestamp: String,
}

impl SavedComments {
    pub fn new(comment: &str, mode: &CommentMode, saved_at: NaiveDateTime) -> Self {
        Self {
            main_comment: comment.to_string(),
            mode: mode.label().to_string(),
            timestamp: saved_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
