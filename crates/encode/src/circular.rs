//! Sine/cosine encoding of cyclic integers.

use std::{collections::BTreeMap, f64::consts::TAU};

use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::{float_values, require_columns};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for circular encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircularEncoder {
    columns: Vec<String>,
}

impl CircularEncoder {
    /// Encode the given columns.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl Fit for CircularEncoder {
    type Fitted = CircularRange;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        require_columns(df, &names)?;

        let mut maxima = BTreeMap::new();
        for column in &self.columns {
            let max = float_values(df, column)?
                .into_iter()
                .flatten()
                .reduce(f64::max)
                .ok_or_else(|| TransformError::NoValues {
                    statistic: "circular maximum",
                    column: column.clone(),
                })?;
            if max <= 0.0 {
                return Err(TransformError::Numerical(format!(
                    "circular period of {column} must be positive, got {max}"
                )));
            }
            debug!(column = %column, max, "fitted circular period");
            maxima.insert(column.clone(), max);
        }
        Ok(CircularRange { maxima })
    }
}

/// Period (observed maximum) per column, learned from one frame.
///
/// A value `v` encodes as `sin(2πv/max)` and `cos(2πv/max)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircularRange {
    maxima: BTreeMap<String, f64>,
}

impl CircularRange {
    /// Period of `column`.
    #[must_use]
    pub fn period(&self, column: &str) -> Option<f64> {
        self.maxima.get(column).copied()
    }
}

impl Transform for CircularRange {
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
        let mut df = df;
        let mut encoded = Vec::with_capacity(2 * self.maxima.len());

        for (column, &max) in &self.maxima {
            let angles: Vec<Option<f64>> =
                float_values(&df, column)?.into_iter().map(|v| v.map(|v| TAU * v / max)).collect();
            encoded.push(Column::new(
                format!("{column}_sin").into(),
                angles.iter().map(|a| a.map(f64::sin)).collect::<Vec<_>>(),
            ));
            encoded.push(Column::new(
                format!("{column}_cos").into(),
                angles.iter().map(|a| a.map(f64::cos)).collect::<Vec<_>>(),
            ));
            df = df.drop(column)?;
        }

        Ok(df.hstack(&encoded)?)
    }

    fn name(&self) -> &str {
        "circular"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn floats(df: &DataFrame, name: &str) -> Vec<f64> {
        df.column(name).unwrap().f64().unwrap().into_no_null_iter().collect()
    }

    #[test]
    fn unit_circle() {
        let df = df! { "week" => &[1i32, 13, 26, 39, 52] }.unwrap();
        let (fitted, out) = CircularEncoder::new(["week"]).fit_transform(df).unwrap();

        assert_eq!(fitted.period("week"), Some(52.0));
        assert!(out.column("week").is_err());
        let sin = floats(&out, "week_sin");
        let cos = floats(&out, "week_cos");
        for (s, c) in sin.iter().zip(&cos) {
            assert_relative_eq!(s * s + c * c, 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(sin[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(cos[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn period_is_frozen() {
        let train = df! { "week" => &[10i64, 20, 40] }.unwrap();
        let fitted = CircularEncoder::new(["week"]).fit(&train).unwrap();
        let out = fitted.transform(df! { "week" => &[20i64] }.unwrap()).unwrap();
        assert_relative_eq!(floats(&out, "week_cos")[0], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_column_fails() {
        let df = df! { "week" => &[None::<i64>, None] }.unwrap();
        let err = CircularEncoder::new(["week"]).fit(&df).unwrap_err();
        assert!(matches!(err, TransformError::NoValues { .. }));
    }

    #[test]
    fn zero_period_fails() {
        let df = df! { "week" => &[0i64, 0] }.unwrap();
        let err = CircularEncoder::new(["week"]).fit(&df).unwrap_err();
        assert!(matches!(err, TransformError::Numerical(_)));
    }
}
