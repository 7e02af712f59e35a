//! Drop-first one-hot encoding.

use std::collections::{BTreeMap, BTreeSet};

use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::{require_columns, string_values};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for one-hot encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    columns: Vec<String>,
}

impl OneHotEncoder {
    /// Encode the given columns.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl Fit for OneHotEncoder {
    type Fitted = OneHotLevels;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        require_columns(df, &names)?;

        let mut levels = BTreeMap::new();
        for column in &self.columns {
            let observed: BTreeSet<String> =
                string_values(df, column)?.into_iter().flatten().collect();
            debug!(column = %column, levels = observed.len(), "fitted one-hot levels");
            levels.insert(column.clone(), observed.into_iter().collect());
        }
        Ok(OneHotLevels { levels })
    }
}

/// Sorted category levels per column, learned from one frame.
///
/// The first level of each column is the reference level and gets no
/// indicator. A category not seen at fit time, or a missing value, sets
/// every indicator of its row to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotLevels {
    levels: BTreeMap<String, Vec<String>>,
}

impl OneHotLevels {
    /// Levels observed for `column`, in sorted order.
    #[must_use]
    pub fn levels(&self, column: &str) -> Option<&[String]> {
        self.levels.get(column).map(Vec::as_slice)
    }

    /// Names of the indicator columns this encoder produces.
    #[must_use]
    pub fn dummy_columns(&self) -> Vec<String> {
        self.levels
            .iter()
            .flat_map(|(column, levels)| levels.iter().skip(1).map(move |l| dummy_name(column, l)))
            .collect()
    }
}

fn dummy_name(column: &str, level: &str) -> String {
    format!("{column}_{level}")
}

impl Transform for OneHotLevels {
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
        let mut df = df;
        let mut dummies = Vec::new();

        for (column, levels) in &self.levels {
            let values = string_values(&df, column)?;
            for level in levels.iter().skip(1) {
                let indicator: Vec<i32> =
                    values.iter().map(|v| i32::from(v.as_deref() == Some(level.as_str()))).collect();
                dummies.push(Column::new(dummy_name(column, level).into(), indicator));
            }
            df = df.drop(column)?;
        }

        Ok(df.hstack(&dummies)?)
    }

    fn name(&self) -> &str {
        "onehot"
    }
}
