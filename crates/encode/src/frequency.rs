//! Frequency encoding.

use std::collections::BTreeMap;

use hotelprep_traits::{Fit, Transform, TransformError};
use hotelprep_utils::{require_columns, string_values};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Suffix of a frequency encoded column.
pub const FREQUENCY_SUFFIX: &str = "_frequency_encoded";

/// Configuration for frequency encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEncoder {
    columns: Vec<String>,
}

impl FrequencyEncoder {
    /// Encode the given columns.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self { columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl Fit for FrequencyEncoder {
    type Fitted = FrequencyMap;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        require_columns(df, &names)?;

        let mut counts = BTreeMap::new();
        for column in &self.columns {
            let mut column_counts: BTreeMap<String, u64> = BTreeMap::new();
            for value in string_values(df, column)?.into_iter().flatten() {
                *column_counts.entry(value).or_insert(0) += 1;
            }
            debug!(column = %column, categories = column_counts.len(), "fitted frequencies");
            counts.insert(column.clone(), column_counts);
        }
        Ok(FrequencyMap { counts })
    }
}

/// Category counts per column, learned from one frame.
///
/// Categories unseen at fit time encode as 0; missing values stay missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyMap {
    counts: BTreeMap<String, BTreeMap<String, u64>>,
}

impl FrequencyMap {
    /// Occurrences of `category` in `column` at fit time.
    #[must_use]
    pub fn count(&self, column: &str, category: &str) -> u64 {
        self.counts.get(column).and_then(|c| c.get(category)).copied().unwrap_or(0)
    }
}

impl Transform for FrequencyMap {
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
        let mut df = df;
        let mut encoded = Vec::with_capacity(self.counts.len());

        for (column, counts) in &self.counts {
            let values: Vec<Option<i64>> = string_values(&df, column)?
                .into_iter()
                .map(|v| v.map(|v| counts.get(&v).map_or(0, |&n| n as i64)))
                .collect();
            encoded.push(Column::new(format!("{column}{FREQUENCY_SUFFIX}").into(), values));
            df = df.drop(column)?;
        }

        Ok(df.hstack(&encoded)?)
    }

    fn name(&self) -> &str {
        "frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        df.column(name).unwrap().i64().unwrap().into_iter().collect()
    }

    #[test]
    fn replaces_with_counts() {
        let df = df! { "country" => &["PRT", "GBR", "PRT", "unknown", "PRT"] }.unwrap();
        let (fitted, out) = FrequencyEncoder::new(["country"]).fit_transform(df).unwrap();

        assert_eq!(fitted.count("country", "PRT"), 3);
        assert!(out.column("country").is_err());
        assert_eq!(
            encoded(&out, "country_frequency_encoded"),
            vec![Some(3), Some(1), Some(3), Some(1), Some(3)]
        );
    }

    #[test]
    fn counts_come_from_fit_frame_only() {
        let train = df! { "agent" => &["9", "9", "240"] }.unwrap();
        let fitted = FrequencyEncoder::new(["agent"]).fit(&train).unwrap();

        let other = df! { "agent" => &[Some("240"), Some("240"), Some("14"), None] }.unwrap();
        let out = fitted.transform(other.clone()).unwrap();
        assert_eq!(encoded(&out, "agent_frequency_encoded"), vec![Some(1), Some(1), Some(0), None]);

        // Refitting on the other frame gives different values.
        let (_, local) = FrequencyEncoder::new(["agent"]).fit_transform(other).unwrap();
        assert_eq!(
            encoded(&local, "agent_frequency_encoded"),
            vec![Some(2), Some(2), Some(1), None]
        );
    }
}
