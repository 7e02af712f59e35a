//! Error types for feature derivation.

use hotelprep_traits::TransformError;
use hotelprep_utils::UtilsError;

/// Errors that can occur during feature derivation.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Missing required raw column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Arrival date components absent or not a calendar date.
    #[error("row {row}: cannot parse arrival date from year {year:?}, month {month:?}, day {day:?}")]
    InvalidDate {
        /// Row index.
        row: usize,
        /// Arrival year.
        year: Option<i64>,
        /// Arrival month name.
        month: Option<String>,
        /// Arrival day of month.
        day: Option<i64>,
    },

    /// Booking date (arrival minus lead time) is not representable.
    #[error("row {row}: booking date out of range for lead_time {lead_time}")]
    BookingDateOutOfRange {
        /// Row index.
        row: usize,
        /// Lead time in days.
        lead_time: i64,
    },

    /// Null in a column that must be present on every row.
    #[error("column {column} row {row}: missing value")]
    MissingValue {
        /// Offending column.
        column: &'static str,
        /// Row index.
        row: usize,
    },

    /// Column could not be read as the expected type.
    #[error("utility error: {0}")]
    Utils(UtilsError),

    /// Fitting or applying a learned statistic failed.
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl From<UtilsError> for FeatureError {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::MissingColumn(c) => Self::MissingColumn(c),
            UtilsError::Polars(e) => Self::Polars(e),
            other => Self::Utils(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeatureError::InvalidDate {
            row: 3,
            year: Some(2016),
            month: Some("Juli".to_string()),
            day: Some(1),
        };
        assert!(err.to_string().starts_with("row 3: cannot parse arrival date"));
        assert!(err.to_string().contains("Juli"));

        let err = FeatureError::MissingValue { column: "adults", row: 0 };
        assert_eq!(err.to_string(), "column adults row 0: missing value");
    }

    #[test]
    fn missing_column_maps_to_schema_error() {
        let err: FeatureError = UtilsError::MissingColumn("lead_time".to_string()).into();
        assert!(matches!(err, FeatureError::MissingColumn(c) if c == "lead_time"));
    }
}
