//! Pipeline configuration.

use std::{fmt, path::Path, str::FromStr};

use hotelprep_encode::{
    DEFAULT_CIRCULAR_COLUMNS, DEFAULT_FREQUENCY_COLUMNS, DEFAULT_ONE_HOT_COLUMNS, Encoder,
    EncodingStrategy,
};
use hotelprep_features::DEFAULT_LOW_ACTIVITY_THRESHOLD;
use hotelprep_math::ScaleMethod;
use hotelprep_primitives::FeatureTables;
use hotelprep_traits::TransformError;
use hotelprep_utils::SplitConfig;
use serde::{Deserialize, Serialize};

use crate::{OutlierBounds, PipelineError};

/// Where cross-row statistics are learned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Agent activity and encoders are fitted on the training partition.
    #[default]
    FitOnTrain,
    /// Agent activity and encoders are fitted on the whole frame before
    /// splitting. Cleaning and scaling are still fitted on train.
    Reference,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FitOnTrain => f.write_str("fit_on_train"),
            Self::Reference => f.write_str("reference"),
        }
    }
}

impl FromStr for RunMode {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fit_on_train" | "train" => Ok(Self::FitOnTrain),
            "reference" => Ok(Self::Reference),
            other => Err(TransformError::InvalidArgument(format!(
                "run mode must be 'fit_on_train' or 'reference', got '{other}'"
            ))),
        }
    }
}

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| (*c).to_string()).collect()
}

/// Configuration of a pipeline run.
///
/// Every key is optional in TOML; omitted keys keep their defaults.
///
/// ```toml
/// scale = "robust"
/// mode = "fit_on_train"
///
/// [split]
/// test_fraction = 0.2
///
/// [outliers]
/// max_adults = 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Partition fractions and seed.
    pub split: SplitConfig,
    /// Scaling method.
    pub scale: ScaleMethod,
    /// Where agent activity and encoders are fitted.
    pub mode: RunMode,
    /// Agents with fewer bookings are flagged as low activity.
    pub agent_threshold: u64,
    /// Columns one-hot encoded.
    pub one_hot_columns: Vec<String>,
    /// Columns frequency encoded.
    pub frequency_columns: Vec<String>,
    /// Columns circular encoded.
    pub circular_columns: Vec<String>,
    /// Lookup tables for derivation.
    pub tables: FeatureTables,
    /// Training outlier bounds.
    pub outliers: OutlierBounds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            split: SplitConfig::default(),
            scale: ScaleMethod::MinMax,
            mode: RunMode::default(),
            agent_threshold: DEFAULT_LOW_ACTIVITY_THRESHOLD,
            one_hot_columns: owned(DEFAULT_ONE_HOT_COLUMNS),
            frequency_columns: owned(DEFAULT_FREQUENCY_COLUMNS),
            circular_columns: owned(DEFAULT_CIRCULAR_COLUMNS),
            tables: FeatureTables::default(),
            outliers: OutlierBounds::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    /// Returns `PipelineError::InvalidConfig` if the document is malformed
    /// or a value is out of range.
    pub fn from_toml(text: &str) -> Result<Self, PipelineError> {
        let config: Self =
            toml::from_str(text).map_err(|e| PipelineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    /// Returns `PipelineError::Io` if the file cannot be read, or
    /// `PipelineError::InvalidConfig` if it is invalid.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Check value ranges.
    ///
    /// # Errors
    /// Returns `PipelineError::InvalidConfig` naming the offending key.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (key, value) in [
            ("split.test_fraction", self.split.test_fraction),
            ("split.holdout_fraction", self.split.holdout_fraction),
        ] {
            if value.is_nan() || value <= 0.0 || value >= 1.0 {
                return Err(PipelineError::InvalidConfig(format!(
                    "{key} must be in (0, 1), got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Encoders in application order, skipping empty column lists.
    #[must_use]
    pub fn encoders(&self) -> Vec<Encoder> {
        [
            (EncodingStrategy::OneHot, &self.one_hot_columns),
            (EncodingStrategy::Frequency, &self.frequency_columns),
            (EncodingStrategy::Circular, &self.circular_columns),
        ]
        .into_iter()
        .filter(|(_, columns)| !columns.is_empty())
        .map(|(strategy, columns)| Encoder::new(strategy, columns.iter().cloned()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use hotelprep_primitives::{MonthDay, columns as c};
    use rstest::rstest;

    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(PipelineConfig::from_toml("").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn partial_document_overrides() {
        let config = PipelineConfig::from_toml(
            r#"
            scale = "robust"
            mode = "reference"
            agent_threshold = 50
            frequency_columns = ["country"]

            [split]
            seed = 7

            [tables]
            special_days = [{ month = 7, day = 4 }]
            "#,
        )
        .unwrap();

        assert_eq!(config.scale, ScaleMethod::Robust);
        assert_eq!(config.mode, RunMode::Reference);
        assert_eq!(config.agent_threshold, 50);
        assert_eq!(config.frequency_columns, vec![c::COUNTRY]);
        assert_eq!(config.split.seed, 7);
        assert!((config.split.test_fraction - 0.30).abs() < f64::EPSILON);
        assert_eq!(config.tables.special_days, vec![MonthDay::new(7, 4)]);
        assert_eq!(config.outliers, OutlierBounds::default());
    }

    #[rstest]
    #[case("scale = \"zscore\"")]
    #[case("mode = \"streaming\"")]
    #[case("[split]\ntest_fraction = 1.5")]
    #[case("[split]\nholdout_fraction = 0.0")]
    fn rejects_invalid_values(#[case] text: &str) {
        assert!(matches!(PipelineConfig::from_toml(text), Err(PipelineError::InvalidConfig(_))));
    }

    #[rstest]
    #[case("fit_on_train", RunMode::FitOnTrain)]
    #[case("Fit-On-Train", RunMode::FitOnTrain)]
    #[case("reference", RunMode::Reference)]
    fn parses_run_mode(#[case] name: &str, #[case] mode: RunMode) {
        assert_eq!(name.parse::<RunMode>().unwrap(), mode);
        assert_eq!(mode.to_string().parse::<RunMode>().unwrap(), mode);
    }

    #[test]
    fn encoders_skip_empty_lists() {
        let config = PipelineConfig { circular_columns: Vec::new(), ..PipelineConfig::default() };
        let strategies: Vec<_> = config.encoders().iter().map(|e| e.strategy).collect();
        assert_eq!(strategies, vec![EncodingStrategy::OneHot, EncodingStrategy::Frequency]);
    }
}
