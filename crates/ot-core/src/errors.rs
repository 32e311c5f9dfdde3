//! Archive error types.

use thiserror::Error;

/// Errors raised while loading or validating a news archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A year group does not come strictly after (older than) its predecessor.
    #[error("year group {year} follows {previous}; years must be strictly descending")]
    YearOrder {
        /// Year of the preceding group.
        previous: i32,
        /// Year of the offending group.
        year: i32,
    },

    /// An entry is newer than the entry rendered above it.
    #[error("entry '{date}' in {year} is newer than the preceding entry '{previous}'")]
    EntryOrder {
        /// Year group containing both entries.
        year: i32,
        /// Display date of the preceding entry.
        previous: String,
        /// Display date of the offending entry.
        date: String,
    },

    /// An entry is filed under a year group it does not belong to.
    #[error("entry '{date}' is filed under year {year}")]
    YearMismatch {
        /// Year of the enclosing group.
        year: i32,
        /// Display date of the entry.
        date: String,
    },

    /// A month-only date names a month outside 1-12.
    #[error("entry '{date}' has month {month}, expected 1-12")]
    InvalidMonth {
        /// Display label of the entry.
        date: String,
        /// The rejected month number.
        month: u32,
    },

    /// A year group has no entries.
    #[error("year group {0} has no entries")]
    EmptyGroup(i32),

    /// Failed to read an archive file.
    #[error("failed to read archive file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse archive JSON.
    #[error("failed to parse archive JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
