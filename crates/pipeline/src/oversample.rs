//! Minority-class oversampling of the training partition.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};

use hotelprep_utils::{float_values, int_values, is_numeric};
use ndarray::{Array1, Array2, ArrayView1};
use polars::prelude::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::PipelineError;

/// A feature matrix and labels after resampling.
#[derive(Debug, Clone)]
pub struct Resampled {
    /// Original rows followed by synthetic rows.
    pub x: Array2<f64>,
    /// Labels of `x`.
    pub y: Array1<i64>,
    /// Synthetic rows added per class.
    pub synthetic: BTreeMap<i64, usize>,
}

impl Resampled {
    /// Rebuild a frame with `features` as column names and `label` last.
    ///
    /// # Errors
    /// Returns `PipelineError::Oversample` if `features` does not match the
    /// matrix width.
    pub fn into_frame(self, features: &[String], label: &str) -> Result<DataFrame, PipelineError> {
        if features.len() != self.x.ncols() {
            return Err(PipelineError::Oversample(format!(
                "{} feature names for {} columns",
                features.len(),
                self.x.ncols()
            )));
        }
        let mut columns: Vec<Column> = features
            .iter()
            .zip(self.x.columns())
            .map(|(name, values)| Column::new(name.as_str().into(), values.to_vec()))
            .collect();
        columns.push(Column::new(label.into(), self.y.to_vec()));
        Ok(DataFrame::new(columns)?)
    }
}

/// Resamples a labelled feature matrix.
pub trait Oversampler {
    /// Return `x` and `y` with synthetic rows appended.
    ///
    /// # Errors
    /// Returns `PipelineError::Oversample` if the input cannot be resampled.
    fn resample(&self, x: &Array2<f64>, y: &Array1<i64>) -> Result<Resampled, PipelineError>;
}

/// Nearest-neighbour interpolation oversampler.
///
/// Every class is grown to `sampling_ratio` times the majority count. Each
/// synthetic row lies on the segment between a random row of the class and
/// one of its `k_neighbors` nearest same-class rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smote {
    /// Neighbours considered per row.
    pub k_neighbors: usize,
    /// Target size of every class relative to the majority class.
    pub sampling_ratio: f64,
    /// Random seed.
    pub seed: u64,
}

impl Default for Smote {
    fn default() -> Self {
        Self { k_neighbors: 5, sampling_ratio: 1.0, seed: 42 }
    }
}

impl Smote {
    /// Set the neighbour count.
    #[must_use]
    pub const fn with_k_neighbors(mut self, k: usize) -> Self {
        self.k_neighbors = k;
        self
    }

    /// Set the sampling ratio.
    #[must_use]
    pub const fn with_sampling_ratio(mut self, ratio: f64) -> Self {
        self.sampling_ratio = ratio;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Neighbor(f64, usize);

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
    }
}

fn distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b).map(|(p, q)| (p - q).powi(2)).sum::<f64>().sqrt()
}

/// The `k` rows of `members` nearest to `members[at]`, excluding itself.
fn nearest(x: &Array2<f64>, members: &[usize], at: usize, k: usize) -> Vec<usize> {
    let point = x.row(members[at]);
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (j, &row) in members.iter().enumerate() {
        if j == at {
            continue;
        }
        heap.push(Neighbor(distance(point, x.row(row)), j));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_iter().map(|Neighbor(_, j)| j).collect()
}

impl Oversampler for Smote {
    fn resample(&self, x: &Array2<f64>, y: &Array1<i64>) -> Result<Resampled, PipelineError> {
        if x.nrows() != y.len() {
            return Err(PipelineError::Oversample(format!(
                "{} rows but {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if self.k_neighbors == 0 || self.sampling_ratio.is_nan() || self.sampling_ratio <= 0.0 {
            return Err(PipelineError::Oversample(
                "k_neighbors and sampling_ratio must be positive".to_string(),
            ));
        }

        let mut classes: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (i, &label) in y.iter().enumerate() {
            classes.entry(label).or_default().push(i);
        }
        if classes.len() < 2 {
            return Err(PipelineError::Oversample("need at least two classes".to_string()));
        }
        let majority = classes.values().map(Vec::len).max().unwrap_or(0);
        let target = (majority as f64 * self.sampling_ratio).floor() as usize;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut rows: Vec<f64> = Vec::new();
        let mut labels: Vec<i64> = Vec::new();
        let mut synthetic = BTreeMap::new();

        for (&class, members) in &classes {
            let needed = target.saturating_sub(members.len());
            synthetic.insert(class, needed);
            if needed == 0 {
                continue;
            }
            if members.len() < 2 {
                return Err(PipelineError::Oversample(format!(
                    "class {class} has a single row to interpolate from"
                )));
            }

            let k = self.k_neighbors.min(members.len() - 1);
            let mut neighbors: Vec<Option<Vec<usize>>> = vec![None; members.len()];
            for _ in 0..needed {
                let at = rng.gen_range(0..members.len());
                let near = neighbors[at].get_or_insert_with(|| nearest(x, members, at, k));
                let other = near[rng.gen_range(0..near.len())];
                let gap: f64 = rng.r#gen();

                let a = x.row(members[at]);
                let b = x.row(members[other]);
                rows.extend(a.iter().zip(b).map(|(p, q)| p + gap * (q - p)));
                labels.push(class);
            }
        }

        let added = labels.len();
        let n = x.nrows();
        let width = x.ncols();
        let resampled_x = Array2::from_shape_fn((n + added, width), |(i, j)| {
            if i < n { x[[i, j]] } else { rows[(i - n) * width + j] }
        });
        let mut all_labels = y.to_vec();
        all_labels.extend(labels);

        info!(original = n, synthetic = added, "oversampled training rows");
        Ok(Resampled { x: resampled_x, y: Array1::from_vec(all_labels), synthetic })
    }
}

/// Split a frame into a numeric feature matrix and integer labels.
///
/// Every numeric column except `label` becomes a feature; string columns
/// are skipped. Returns the feature names in matrix order.
///
/// # Errors
/// Returns `PipelineError::Oversample` if a feature or label value is
/// missing, or a column error if `label` is absent or not integral.
pub fn training_matrix(
    df: &DataFrame,
    label: &str,
) -> Result<(Array2<f64>, Array1<i64>, Vec<String>), PipelineError> {
    let y = int_values(df, label)?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| PipelineError::Oversample(format!("label {label} missing at row {row}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let features: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| is_numeric(c) && c.name().as_str() != label)
        .map(|c| c.name().to_string())
        .collect();

    let mut x = Array2::zeros((df.height(), features.len()));
    for (j, name) in features.iter().enumerate() {
        for (i, value) in float_values(df, name)?.into_iter().enumerate() {
            x[[i, j]] = value.ok_or_else(|| {
                PipelineError::Oversample(format!("column {name} missing at row {i}"))
            })?;
        }
    }

    Ok((x, Array1::from_vec(y), features))
}
