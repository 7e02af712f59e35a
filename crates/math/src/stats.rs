//! Column statistics over finite values.
//!
//! NaN and infinite entries are ignored by every statistic here, so a column
//! read with missing values can be passed in directly.

use ndarray::Array1;

use crate::MathError;

fn finite(data: &Array1<f64>) -> Vec<f64> {
    data.iter().copied().filter(|x| x.is_finite()).collect()
}

fn sorted_finite(data: &Array1<f64>) -> Result<Vec<f64>, MathError> {
    let mut values = finite(data);
    if values.is_empty() {
        return Err(MathError::EmptyData);
    }
    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Arithmetic mean.
///
/// # Errors
/// Returns `MathError::EmptyData` if there are no finite values.
pub fn mean(data: &Array1<f64>) -> Result<f64, MathError> {
    let values = finite(data);
    if values.is_empty() {
        return Err(MathError::EmptyData);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor `n`).
///
/// # Errors
/// Returns `MathError::EmptyData` if there are no finite values.
pub fn population_std(data: &Array1<f64>) -> Result<f64, MathError> {
    let m = mean(data)?;
    let values = finite(data);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Quantile with linear interpolation between closest ranks.
///
/// # Errors
/// Returns `MathError::InvalidQuantile` if `q` is outside [0, 1], or
/// `MathError::EmptyData` if there are no finite values.
pub fn quantile(data: &Array1<f64>, q: f64) -> Result<f64, MathError> {
    if !(0.0..=1.0).contains(&q) {
        return Err(MathError::InvalidQuantile(q));
    }
    let values = sorted_finite(data)?;

    let pos = q * (values.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;

    Ok(values[lower] + (values[upper] - values[lower]) * weight)
}

/// Minimum and maximum.
///
/// # Errors
/// Returns `MathError::EmptyData` if there are no finite values.
pub fn min_max(data: &Array1<f64>) -> Result<(f64, f64), MathError> {
    let values = sorted_finite(data)?;
    Ok((values[0], values[values.len() - 1]))
}

/// Most frequent value; ties resolve to the smallest value.
///
/// # Errors
/// Returns `MathError::EmptyData` if there are no finite values.
pub fn mode(data: &Array1<f64>) -> Result<f64, MathError> {
    let values = sorted_finite(data)?;

    let mut best = (values[0], 0usize);
    let mut run = (values[0], 0usize);
    for &v in &values {
        if v == run.0 {
            run.1 += 1;
        } else {
            run = (v, 1);
        }
        // strict comparison keeps the earliest (smallest) value on ties
        if run.1 > best.1 {
            best = run;
        }
    }

    Ok(best.0)
}
