//! Fit-on-train cleaning: mode filling and invalid guest rows.

use std::collections::BTreeMap;

use hotelprep_math::{MathError, mode};
use hotelprep_primitives::columns as c;
use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::{fill_nulls, float_values, require_columns};
use ndarray::Array1;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Columns whose missing values are filled with the training mode.
pub const MODE_COLUMNS: &[&str] = &[c::CHILDREN, c::TOTAL_PEOPLE, c::IS_SOLO_TRAVELER];

/// Learns the most frequent value of each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeImputer {
    columns: Vec<String>,
}

impl Default for ModeImputer {
    fn default() -> Self {
        Self::new(MODE_COLUMNS.iter().copied())
    }
}

impl ModeImputer {
    /// Impute the given columns.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl Fit for ModeImputer {
    type Fitted = ModeValues;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let mut modes = BTreeMap::new();
        for column in &self.columns {
            let data: Array1<f64> = float_values(df, column)?.into_iter().flatten().collect();
            let value = mode(&data).map_err(|e| match e {
                MathError::EmptyData => {
                    TransformError::NoValues { statistic: "mode", column: column.clone() }
                }
                other => TransformError::Numerical(format!("{column}: {other}")),
            })?;
            debug!(column = %column, mode = value, "fitted mode");
            modes.insert(column.clone(), value);
        }
        Ok(ModeValues { modes })
    }
}

/// Fill values learned from the training partition.
///
/// Applying them fills missing values and then removes rows with babies but
/// no adults. The same values serve every partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeValues {
    modes: BTreeMap<String, f64>,
}

impl ModeValues {
    /// Fill value of `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        self.modes.get(column).copied()
    }
}

impl Transform for ModeValues {
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
        let fills: Vec<(String, f64)> = self.modes.iter().map(|(k, &v)| (k.clone(), v)).collect();
        let df = fill_nulls(df, &fills)?;
        drop_invalid_guest_rows(df)
    }

    fn name(&self) -> &str {
        "clean"
    }
}

/// Remove rows with `adults == 0` and `babies > 0`.
///
/// Rows with a missing adult or baby count are kept.
///
/// # Errors
/// Returns `TransformError::MissingColumn` if `adults` or `babies` is absent.
pub fn drop_invalid_guest_rows(df: DataFrame) -> Result<DataFrame, TransformError> {
    require_columns(&df, &[c::ADULTS, c::BABIES])?;
    let before = df.height();

    let invalid = col(c::ADULTS).eq(lit(0)).and(col(c::BABIES).gt(lit(0))).fill_null(lit(false));
    let df = df.lazy().filter(invalid.not()).collect()?;

    info!(dropped = before - df.height(), rows = df.height(), "dropped babies-without-adults rows");
    Ok(df)
}

/// Learn modes from `train` and clean it with them.
///
/// # Errors
/// Returns `TransformError` if a mode column is absent or entirely missing.
pub fn fit_clean(train: DataFrame) -> Result<(ModeValues, DataFrame), TransformError> {
    ModeImputer::default().fit_transform(train)
}

/// Clean `df` with modes learned elsewhere.
///
/// # Errors
/// Returns `TransformError::MissingColumn` if a required column is absent.
pub fn apply_clean(df: DataFrame, modes: &ModeValues) -> Result<DataFrame, TransformError> {
    modes.transform(df)
}
