//! Typed column access.

use polars::prelude::*;

use crate::UtilsError;

/// Ensure every column in `names` exists in `df`.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` naming the first absent column.
pub fn require_columns(df: &DataFrame, names: &[&str]) -> Result<(), UtilsError> {
    match names.iter().find(|&&name| df.column(name).is_err()) {
        Some(missing) => Err(UtilsError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}

/// Whether a column holds a numeric (integer or float) type.
#[must_use]
pub fn is_numeric(column: &Column) -> bool {
    column.dtype().is_primitive_numeric()
}

fn numeric_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, UtilsError> {
    let column = df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))?;
    if !is_numeric(column) {
        return Err(UtilsError::WrongType {
            column: name.to_string(),
            expected: "numeric",
            actual: column.dtype().to_string(),
        });
    }
    Ok(column)
}

/// Read a numeric column as floats. NaN is reported as missing.
///
/// # Errors
/// Returns `UtilsError` if the column is absent or not numeric.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, UtilsError> {
    let cast = numeric_column(df, name)?.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().map(|v| v.filter(|x| !x.is_nan())).collect())
}

/// Read a numeric column as integers.
///
/// Float columns are accepted when every present value is whole
/// (`2.0` reads as `2`), which is how nullable counts arrive from CSV.
///
/// # Errors
/// Returns `UtilsError` if the column is absent, not numeric, or holds a
/// fractional or non-finite value.
pub fn int_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, UtilsError> {
    float_values(df, name)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            None => Ok(None),
            Some(v) if v.is_finite() && v.fract() == 0.0 => Ok(Some(v as i64)),
            Some(v) => Err(UtilsError::InvalidValue {
                column: name.to_string(),
                row,
                reason: format!("{v} is not a whole number"),
            }),
        })
        .collect()
}

/// Read a column as strings.
///
/// Numeric columns are rendered without a trailing `.0` for whole values, so
/// an identifier stored as `9.0` reads as `"9"`.
///
/// # Errors
/// Returns `UtilsError` if the column is absent or cannot be cast.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, UtilsError> {
    let column = df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))?;
    if is_numeric(column) {
        let values = float_values(df, name)?;
        return Ok(values.into_iter().map(|v| v.map(render_number)).collect());
    }
    let cast = column.cast(&DataType::String)?;
    Ok(cast.str()?.into_iter().map(|v| v.map(str::to_owned)).collect())
}

fn render_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 { format!("{}", v as i64) } else { v.to_string() }
}
