//! Seeded random partitioning.

use polars::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::UtilsError;

/// Split a frame into two disjoint parts by a shuffle-then-cut.
///
/// Row indices are shuffled with a generator seeded from `seed`, the last
/// `ceil(ratio * n)` shuffled rows form the second part and the rest the
/// first. Both parts keep the shuffled order.
///
/// # Arguments
/// * `df` - Input DataFrame
/// * `ratio` - Share of rows in the second part, in (0, 1)
/// * `seed` - Seed for the shuffle
///
/// # Returns
/// Tuple of (part_a, part_b).
///
/// # Errors
/// Returns `UtilsError::InvalidParameter` if `ratio` is outside (0, 1).
pub fn split_frame(
    df: &DataFrame,
    ratio: f64,
    seed: u64,
) -> Result<(DataFrame, DataFrame), UtilsError> {
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(UtilsError::InvalidParameter(format!(
            "split ratio must be in (0, 1), got {ratio}"
        )));
    }

    let n = df.height();
    let n_b = ((n as f64) * ratio).ceil() as usize;

    let mut indices: Vec<IdxSize> = (0..n as IdxSize).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let b_idx = indices.split_off(n - n_b);
    let part_a = df.take(&IdxCa::from_vec("idx".into(), indices))?;
    let part_b = df.take(&IdxCa::from_vec("idx".into(), b_idx))?;

    Ok((part_a, part_b))
}

/// Configuration for the train/validation/holdout split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Share of rows held out from training.
    pub test_fraction: f64,
    /// Share of the held-out rows that become the holdout set; the rest
    /// become validation.
    pub holdout_fraction: f64,
    /// Seed used for both cuts.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { test_fraction: 0.30, holdout_fraction: 0.50, seed: 42 }
    }
}

/// Disjoint train/validation/holdout partitions.
#[derive(Debug, Clone)]
pub struct Partitions {
    /// Training partition; the only source of fitted statistics.
    pub train: DataFrame,
    /// Validation partition.
    pub validation: DataFrame,
    /// Holdout partition.
    pub holdout: DataFrame,
}

impl Partitions {
    /// Split `df` twice: train vs. held-out, then held-out into
    /// validation vs. holdout.
    ///
    /// # Errors
    /// Returns `UtilsError::InvalidParameter` if either fraction is outside (0, 1).
    pub fn split(df: &DataFrame, config: &SplitConfig) -> Result<Self, UtilsError> {
        let (train, rest) = split_frame(df, config.test_fraction, config.seed)?;
        let (validation, holdout) = split_frame(&rest, config.holdout_fraction, config.seed)?;
        Ok(Self { train, validation, holdout })
    }

    /// Apply the same fallible function to every partition.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<E>(self, mut f: impl FnMut(DataFrame) -> Result<DataFrame, E>) -> Result<Self, E> {
        Ok(Self { train: f(self.train)?, validation: f(self.validation)?, holdout: f(self.holdout)? })
    }

    /// Row counts as (train, validation, holdout).
    #[must_use]
    pub fn heights(&self) -> (usize, usize, usize) {
        (self.train.height(), self.validation.height(), self.holdout.height())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    fn ids(n: i64) -> DataFrame {
        df! { "id" => (0..n).collect::<Vec<i64>>() }.unwrap()
    }

    fn id_set(df: &DataFrame) -> HashSet<i64> {
        df.column("id").unwrap().i64().unwrap().into_no_null_iter().collect()
    }

    #[test]
    fn split_is_disjoint_and_complete() {
        let df = ids(100);
        let (a, b) = split_frame(&df, 0.3, 42).unwrap();
        assert_eq!(a.height(), 70);
        assert_eq!(b.height(), 30);

        let (sa, sb) = (id_set(&a), id_set(&b));
        assert!(sa.is_disjoint(&sb));
        assert_eq!(sa.len() + sb.len(), 100);
    }

    #[test]
    fn split_rounds_second_part_up() {
        let (a, b) = split_frame(&ids(15), 0.5, 1).unwrap();
        assert_eq!((a.height(), b.height()), (7, 8));
    }

    #[test]
    fn split_is_deterministic_for_seed() {
        let df = ids(50);
        let (_, b1) = split_frame(&df, 0.2, 7).unwrap();
        let (_, b2) = split_frame(&df, 0.2, 7).unwrap();
        assert!(b1.equals(&b2));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.2)]
    #[case(f64::NAN)]
    fn invalid_ratio_errors(#[case] ratio: f64) {
        assert!(matches!(split_frame(&ids(10), ratio, 0), Err(UtilsError::InvalidParameter(_))));
    }

    #[test]
    fn three_way_split_sizes() {
        let parts = Partitions::split(&ids(200), &SplitConfig::default()).unwrap();
        assert_eq!(parts.heights(), (140, 30, 30));

        let all: HashSet<i64> = [&parts.train, &parts.validation, &parts.holdout]
            .iter()
            .flat_map(|df| id_set(df))
            .collect();
        assert_eq!(all.len(), 200);
    }
}
