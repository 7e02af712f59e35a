//! Fit/transform trait definitions.

use polars::prelude::*;

/// Errors that can occur while fitting or applying a transformation.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Empty input data.
    #[error("empty input data")]
    EmptyData,

    /// Unrecognized strategy, method or parameter value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A statistic could not be learned because the column has no values.
    #[error("cannot fit {statistic} on column {column}: no non-null values")]
    NoValues {
        /// Statistic being fitted.
        statistic: &'static str,
        /// Offending column.
        column: String,
    },

    /// Numerical error (NaN, Inf).
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl TransformError {
    /// Returns whether this error is recoverable.
    ///
    /// The pipeline is deterministic, so every error aborts the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

/// A transformation learned from one frame.
///
/// Implementors hold only configuration. Fitting reads the frame once and
/// returns the frozen statistic; the configuration itself is never mutated,
/// so the statistic cannot drift between partitions.
pub trait Fit {
    /// The frozen statistic produced by fitting.
    type Fitted: Transform;

    /// Learn the statistic from `df`.
    ///
    /// # Errors
    /// Returns `TransformError` if required columns are missing or the
    /// statistic is undefined on `df`.
    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError>;

    /// Fit on `df` and apply the result to the same frame.
    ///
    /// # Errors
    /// Returns `TransformError` if fitting or transforming fails.
    fn fit_transform(&self, df: DataFrame) -> Result<(Self::Fitted, DataFrame), TransformError> {
        let fitted = self.fit(&df)?;
        let out = fitted.transform(df)?;
        Ok((fitted, out))
    }
}

/// A transformation applied to a frame without learning anything from it.
pub trait Transform {
    /// Apply the transformation.
    ///
    /// # Errors
    /// Returns `TransformError` if required columns are missing.
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError>;

    /// Returns the name of this transformation.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddOne;

    impl Transform for AddOne {
        fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
            Ok(df.lazy().with_column(col("x") + lit(1.0)).collect()?)
        }

        fn name(&self) -> &str {
            "add_one"
        }
    }

    struct FitAddOne;

    impl Fit for FitAddOne {
        type Fitted = AddOne;

        fn fit(&self, df: &DataFrame) -> Result<AddOne, TransformError> {
            if df.height() == 0 {
                return Err(TransformError::EmptyData);
            }
            Ok(AddOne)
        }
    }

    #[test]
    fn transform_error_display() {
        let err = TransformError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = TransformError::InvalidArgument("bad value".to_string());
        assert_eq!(err.to_string(), "invalid argument: bad value");

        let err = TransformError::NoValues { statistic: "mode", column: "children".to_string() };
        assert_eq!(err.to_string(), "cannot fit mode on column children: no non-null values");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn fit_transform_applies_to_same_frame() {
        let df = df! { "x" => &[1.0, 2.0] }.unwrap();
        let (fitted, out) = FitAddOne.fit_transform(df).unwrap();
        assert_eq!(fitted.name(), "add_one");
        let values: Vec<f64> = out.column("x").unwrap().f64().unwrap().into_no_null_iter().collect();
        assert_eq!(values, vec![2.0, 3.0]);
    }

    #[test]
    fn fit_rejects_empty() {
        let df = DataFrame::empty();
        assert!(matches!(FitAddOne.fit(&df), Err(TransformError::EmptyData)));
    }
}
