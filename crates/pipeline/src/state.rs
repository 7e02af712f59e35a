//! Statistics fitted during a run, and their persistence.

use std::path::Path;

use hotelprep_encode::FittedEncoder;
use hotelprep_features::{AgentActivityCounts, FeatureDeriver};
use hotelprep_math::ScalerParams;
use hotelprep_traits::Transform;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ModeValues, PipelineError, PipelineStage, RunMode, error::StageContext};

/// Everything a run learned, keyed by statistic and column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedState {
    /// Mode the statistics were fitted in.
    pub mode: RunMode,
    /// Booking counts per agent.
    pub agent_activity: AgentActivityCounts,
    /// Encoders in application order.
    pub encoders: Vec<FittedEncoder>,
    /// Fill values of the cleaner.
    pub modes: ModeValues,
    /// Scaling parameters.
    pub scaler: ScalerParams,
}

impl FittedState {
    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `PipelineError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    ///
    /// # Errors
    /// Returns `PipelineError::Json` if `text` is not a fitted state.
    pub fn from_json(text: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write as JSON to `path`.
    ///
    /// # Errors
    /// Returns `PipelineError` if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "saved fitted state");
        Ok(())
    }

    /// Read JSON from `path`.
    ///
    /// # Errors
    /// Returns `PipelineError` if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Prepare a new raw frame with the frozen statistics.
    ///
    /// Runs derivation, the agent flag, encoding, cleaning and scaling.
    /// Nothing is refitted and no outliers are removed.
    ///
    /// # Errors
    /// Returns `PipelineError::Stage` naming the failing stage.
    pub fn prepare(
        &self,
        raw: DataFrame,
        deriver: &FeatureDeriver,
    ) -> Result<DataFrame, PipelineError> {
        let df = deriver.derive(raw).stage(PipelineStage::Derive)?;
        let mut df = self.agent_activity.transform(df).stage(PipelineStage::Derive)?;
        for encoder in &self.encoders {
            df = encoder.transform(df).stage(PipelineStage::Encode)?;
        }
        let df = self.modes.transform(df).stage(PipelineStage::Clean)?;
        self.scaler.transform(df).stage(PipelineStage::Scale)
    }
}
