//! Error handling for variety index computation.

use arrow::error::ArrowError;

/// Errors raised while building a variety index
///
/// Every variant is fatal for the run: the indexes are compared across the
/// whole panel, so a failing region-year is never dropped silently.
#[derive(Debug, thiserror::Error)]
pub enum VarietyError {
    /// A (year, region) group violates the data model
    #[error("Malformed group ({year}, {region}): {reason}")]
    MalformedGroup {
        year: i32,
        region: String,
        reason: String,
    },

    /// An industry label is too short for a 2-digit code and the policy rejects it
    #[error("Industry label '{label}' is shorter than the 2-digit prefix")]
    DegenerateIndustryLabel { label: String },

    /// An input record breaks the cleaned-panel guarantees
    #[error("Invalid employment record at row {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A measure is absent for a group present in another measure
    #[error("Missing {measure} for group ({year}, {region})")]
    MissingMeasure {
        year: i32,
        region: String,
        measure: &'static str,
    },

    /// The three measures were computed over different group sets
    #[error(
        "Measure group sets differ: related={related}, unrelated={unrelated}, total={total}"
    )]
    GroupSetMismatch {
        related: usize,
        unrelated: usize,
        total: usize,
    },

    /// A required column is absent from a record batch
    #[error("Column '{column}' not found in record batch")]
    ColumnNotFound { column: String },

    /// Conversion between record batches and models failed
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// The worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl VarietyError {
    /// Create a malformed group error
    pub fn malformed_group(year: i32, region: &str, reason: impl Into<String>) -> Self {
        Self::MalformedGroup {
            year,
            region: region.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type for variety index operations
pub type Result<T> = std::result::Result<T, VarietyError>;
