//! Null filling with precomputed values.

use polars::prelude::*;

use crate::UtilsError;

/// Replace missing values with fixed per-column values.
///
/// Nulls (and NaN in float columns) are replaced; each column keeps its
/// original data type. Nothing is learned from `df`.
///
/// # Arguments
/// * `df` - Input DataFrame
/// * `fills` - `(column, value)` pairs
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if a fill column is absent.
pub fn fill_nulls(df: DataFrame, fills: &[(String, f64)]) -> Result<DataFrame, UtilsError> {
    let mut exprs = Vec::with_capacity(fills.len());
    for (name, value) in fills {
        let dtype =
            df.column(name).map_err(|_| UtilsError::MissingColumn(name.clone()))?.dtype().clone();
        let filled = if dtype.is_float() {
            col(name.as_str()).fill_nan(lit(*value)).fill_null(lit(*value))
        } else {
            col(name.as_str()).fill_null(lit(*value))
        };
        exprs.push(filled.cast(dtype).alias(name.as_str()));
    }

    Ok(df.lazy().with_columns(exprs).collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_nulls_keeps_dtype() {
        let df = df! {
            "children" => &[Some(1i64), None, Some(0)],
            "ratio" => &[Some(0.5), Some(f64::NAN), None],
            "other" => &[None::<i64>, Some(3), None],
        }
        .unwrap();

        let fills = vec![("children".to_string(), 0.0), ("ratio".to_string(), 2.0)];
        let result = fill_nulls(df, &fills).unwrap();

        let children: Vec<Option<i64>> =
            result.column("children").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(children, vec![Some(1), Some(0), Some(0)]);

        let ratio: Vec<Option<f64>> =
            result.column("ratio").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(ratio, vec![Some(0.5), Some(2.0), Some(2.0)]);

        // Columns without a fill value are untouched
        assert_eq!(result.column("other").unwrap().null_count(), 2);
    }

    #[test]
    fn fill_nulls_missing_column() {
        let df = df! { "a" => &[1i64] }.unwrap();
        let err = fill_nulls(df, &[("b".to_string(), 1.0)]).unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(c) if c == "b"));
    }
}
