//! Fit-once column scaling.

use std::str::FromStr;

use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::{float_values, is_numeric};
use ndarray::Array1;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{MathError, mean, min_max, population_std, quantile};

/// Scaling method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMethod {
    /// Zero mean, unit (population) variance.
    Standard,
    /// Rescale the observed range to [0, 1].
    MinMax,
    /// Subtract the median, divide by the inter-quartile range.
    Robust,
}

impl FromStr for ScaleMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "minmax" => Ok(Self::MinMax),
            "robust" => Ok(Self::Robust),
            other => Err(TransformError::InvalidArgument(format!(
                "scale method must be 'standard', 'minmax', or 'robust', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::MinMax => write!(f, "minmax"),
            Self::Robust => write!(f, "robust"),
        }
    }
}

/// Whether every present value of a numeric column is 0 or 1.
///
/// A column with no values counts as binary.
#[must_use]
pub fn is_binary(values: &[Option<f64>]) -> bool {
    values.iter().flatten().all(|&v| v == 0.0 || v == 1.0)
}

/// Scaler configuration.
#[derive(Debug, Clone)]
pub struct Scaler {
    method: ScaleMethod,
}

impl Scaler {
    /// Create a scaler for `method`.
    #[must_use]
    pub const fn new(method: ScaleMethod) -> Self {
        Self { method }
    }

    /// Get the method.
    #[must_use]
    pub const fn method(&self) -> ScaleMethod {
        self.method
    }

    fn column_scale(&self, name: &str, data: &Array1<f64>) -> Result<ColumnScale, MathError> {
        let (center, spread) = match self.method {
            ScaleMethod::Standard => (mean(data)?, population_std(data)?),
            ScaleMethod::MinMax => {
                let (lo, hi) = min_max(data)?;
                (lo, hi - lo)
            }
            ScaleMethod::Robust => {
                let median = quantile(data, 0.5)?;
                (median, quantile(data, 0.75)? - quantile(data, 0.25)?)
            }
        };
        // constant columns pass through shifted but unscaled
        let scale = if spread > 0.0 && spread.is_finite() { spread } else { 1.0 };
        Ok(ColumnScale { column: name.to_string(), center, scale })
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new(ScaleMethod::MinMax)
    }
}

impl Fit for Scaler {
    type Fitted = ScalerParams;

    fn fit(&self, df: &DataFrame) -> Result<ScalerParams, TransformError> {
        let mut columns = Vec::new();
        for column in df.get_columns() {
            if !is_numeric(column) {
                continue;
            }
            let name = column.name().as_str();
            let values = float_values(df, name)?;
            if is_binary(&values) {
                continue;
            }

            let data: Array1<f64> = values.into_iter().flatten().collect();
            let scale = self
                .column_scale(name, &data)
                .map_err(|e| TransformError::Numerical(format!("{name}: {e}")))?;
            debug!(column = name, center = scale.center, scale = scale.scale, "fitted scale");
            columns.push(scale);
        }

        Ok(ScalerParams { method: self.method, columns })
    }
}

/// Location and spread learned for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    /// Column name.
    pub column: String,
    /// Subtracted from every value (mean, min or median).
    pub center: f64,
    /// Divisor (std, range or IQR; 1 when that is zero).
    pub scale: f64,
}

impl ColumnScale {
    /// Scale one value.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        (value - self.center) / self.scale
    }
}

/// Frozen scaling parameters.
///
/// Values outside the fitted range are not clipped: min-max output on a
/// partition other than the one fitted may fall outside [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Method used when fitting.
    pub method: ScaleMethod,
    /// Per-column parameters, in frame order.
    pub columns: Vec<ColumnScale>,
}

impl ScalerParams {
    /// Parameters for a column, if it was scaled.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnScale> {
        self.columns.iter().find(|c| c.column == column)
    }
}

impl Transform for ScalerParams {
    fn transform(&self, mut df: DataFrame) -> Result<DataFrame, TransformError> {
        for scale in &self.columns {
            let values = float_values(&df, &scale.column)?;
            let scaled: Vec<Option<f64>> =
                values.into_iter().map(|v| v.map(|x| scale.apply(x))).collect();
            df.with_column(Column::new(scale.column.as_str().into(), scaled))?;
        }
        Ok(df)
    }

    fn name(&self) -> &str {
        "scale"
    }
}

/// Fit `method` on `train` and scale it with the fitted parameters.
///
/// # Errors
/// Returns `TransformError` if a numeric column has no values to fit on.
pub fn fit_scale(
    train: DataFrame,
    method: ScaleMethod,
) -> Result<(ScalerParams, DataFrame), TransformError> {
    Scaler::new(method).fit_transform(train)
}

/// Scale `df` with parameters fitted elsewhere.
///
/// # Errors
/// Returns `TransformError::MissingColumn` if a fitted column is absent.
pub fn apply_scale(df: DataFrame, params: &ScalerParams) -> Result<DataFrame, TransformError> {
    params.transform(df)
}
