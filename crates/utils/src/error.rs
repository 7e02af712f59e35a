//! Error types for utility functions.

use hotelprep_traits::TransformError;

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Column has the wrong data type.
    #[error("column {column} has type {actual}, expected {expected}")]
    WrongType {
        /// Offending column.
        column: String,
        /// Expected kind of type.
        expected: &'static str,
        /// Actual polars type.
        actual: String,
    },

    /// A value cannot be represented in the requested type.
    #[error("column {column} row {row}: {reason}")]
    InvalidValue {
        /// Offending column.
        column: String,
        /// Row index.
        row: usize,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<UtilsError> for TransformError {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::Polars(e) => Self::Polars(e),
            UtilsError::MissingColumn(c) => Self::MissingColumn(c),
            other => Self::InvalidArgument(other.to_string()),
        }
    }
}
