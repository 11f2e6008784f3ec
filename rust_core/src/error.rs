//! Error taxonomy for the gamelog core.
//!
//! Every fallible ingestion path surfaces one of these variants; a malformed
//! field is terminal for the batch rather than silently skipped.

use thiserror::Error;

/// Errors raised while parsing and normalizing raw game-log rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GamelogError {
    // Field-level parse errors
    #[error("failed to parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },

    #[error("failed to parse date from {value:?}")]
    DateParse { value: String },

    // Line-score parse errors
    #[error("failed to parse line score {value:?}: {reason}")]
    LineScoreParse { value: String, reason: String },

    // Record-shape errors
    #[error("truncated record: {len} fields, need at least {min}")]
    TruncatedRecord { len: usize, min: usize },
}

/// Result alias for fallible gamelog-core operations.
pub type Result<T> = std::result::Result<T, GamelogError>;
