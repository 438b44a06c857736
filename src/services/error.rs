use crate::models::SeriesError;
use thiserror::Error;

/// Malformed input detected while loading a price series.
///
/// Loading fails fast on the first problem; nothing is recovered or skipped.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("line {line}: invalid number in column '{column}': {value:?}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("line {line}: invalid date: {value:?}")]
    InvalidDate { line: u64, value: String },

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("price file contains no rows")]
    Empty,
}
