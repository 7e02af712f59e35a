//! Pipeline orchestration.

use hotelprep_encode::FittedEncoder;
use hotelprep_features::{AgentActivity, FeatureDeriver};
use hotelprep_math::{apply_scale, fit_scale};
use hotelprep_primitives::columns as c;
use hotelprep_traits::{Fit, Transform};
use hotelprep_utils::Partitions;
use polars::prelude::*;
use tracing::{info, info_span};

use crate::{
    FittedState, ModeValues, Oversampler, PipelineConfig, PipelineError, PipelineStage,
    RunMode, apply_clean, error::StageContext, filter_outliers, fit_clean, training_matrix,
};

/// Model-ready partitions and the statistics used to produce them.
#[derive(Debug, Clone)]
pub struct PreparedData {
    /// Training partition: cleaned, outlier-filtered and scaled.
    pub train: DataFrame,
    /// Validation partition: cleaned and scaled.
    pub validation: DataFrame,
    /// Holdout partition: cleaned and scaled.
    pub holdout: DataFrame,
    /// Statistics fitted during the run.
    pub fitted: FittedState,
}

impl PreparedData {
    /// Oversample the training partition with `sampler`.
    ///
    /// Validation and holdout are never resampled. Numeric columns other than
    /// `is_canceled` become features; the label column comes last.
    ///
    /// # Errors
    /// Returns `PipelineError::Stage` if the training frame has missing
    /// values or the sampler fails.
    pub fn oversample_train(&self, sampler: &impl Oversampler) -> Result<DataFrame, PipelineError> {
        let (x, y, features) =
            training_matrix(&self.train, c::IS_CANCELED).stage(PipelineStage::Oversample)?;
        let resampled = sampler.resample(&x, &y).stage(PipelineStage::Oversample)?;
        resampled.into_frame(&features, c::IS_CANCELED).stage(PipelineStage::Oversample)
    }
}

/// Runs raw booking frames through every preparation stage.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    deriver: FeatureDeriver,
}

impl Pipeline {
    /// Create a pipeline from `config`.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        let deriver = FeatureDeriver::new(config.tables.clone());
        Self { config, deriver }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The feature deriver, for preparing later frames with a
    /// [`FittedState`].
    #[must_use]
    pub const fn deriver(&self) -> &FeatureDeriver {
        &self.deriver
    }

    /// Prepare `raw` into train, validation and holdout partitions.
    ///
    /// # Errors
    /// Returns `PipelineError::Stage` naming the failing stage. No partial
    /// result is returned.
    pub fn run(&self, raw: DataFrame) -> Result<PreparedData, PipelineError> {
        let _span = info_span!("pipeline", mode = %self.config.mode).entered();
        self.config.validate().stage(PipelineStage::Config)?;
        info!(rows = raw.height(), columns = raw.width(), "starting run");

        let activity = AgentActivity::new(self.config.agent_threshold);
        let (parts, agent_activity, encoders) = match self.config.mode {
            RunMode::FitOnTrain => {
                let df = self.deriver.derive(raw).stage(PipelineStage::Derive)?;
                let parts = self.split(&df)?;

                let agent_activity = activity.fit(&parts.train).stage(PipelineStage::Derive)?;
                let mut parts = parts
                    .try_map(|df| agent_activity.transform(df))
                    .stage(PipelineStage::Derive)?;

                let mut encoders = Vec::new();
                for encoder in self.config.encoders() {
                    let fitted = encoder.fit(&parts.train).stage(PipelineStage::Encode)?;
                    parts = parts
                        .try_map(|df| fitted.transform(df))
                        .stage(PipelineStage::Encode)?;
                    encoders.push(fitted);
                }
                log_encoded(&encoders, &parts.train);
                (parts, agent_activity, encoders)
            }
            RunMode::Reference => {
                let (agent_activity, mut df) = self
                    .deriver
                    .derive_batch_local(raw, &activity)
                    .stage(PipelineStage::Derive)?;

                let mut encoders = Vec::new();
                for encoder in self.config.encoders() {
                    let (fitted, encoded) =
                        encoder.fit_transform(df).stage(PipelineStage::Encode)?;
                    df = encoded;
                    encoders.push(fitted);
                }
                log_encoded(&encoders, &df);
                (self.split(&df)?, agent_activity, encoders)
            }
        };

        let (modes, parts) = clean(parts)?;

        let mut parts = parts;
        parts.train =
            filter_outliers(parts.train, &self.config.outliers).stage(PipelineStage::Outliers)?;

        let (scaler, train) =
            fit_scale(parts.train, self.config.scale).stage(PipelineStage::Scale)?;
        let validation = apply_scale(parts.validation, &scaler).stage(PipelineStage::Scale)?;
        let holdout = apply_scale(parts.holdout, &scaler).stage(PipelineStage::Scale)?;
        info!(
            method = %self.config.scale,
            columns = scaler.columns.len(),
            "scaled numeric columns"
        );

        info!(
            train = train.height(),
            validation = validation.height(),
            holdout = holdout.height(),
            columns = train.width(),
            "run complete"
        );
        Ok(PreparedData {
            train,
            validation,
            holdout,
            fitted: FittedState {
                mode: self.config.mode,
                agent_activity,
                encoders,
                modes,
                scaler,
            },
        })
    }

    fn split(&self, df: &DataFrame) -> Result<Partitions, PipelineError> {
        let parts = Partitions::split(df, &self.config.split).stage(PipelineStage::Split)?;
        let (train, validation, holdout) = parts.heights();
        info!(train, validation, holdout, "split partitions");
        Ok(parts)
    }
}

fn clean(parts: Partitions) -> Result<(ModeValues, Partitions), PipelineError> {
    let (modes, train) = fit_clean(parts.train).stage(PipelineStage::Clean)?;
    let validation = apply_clean(parts.validation, &modes).stage(PipelineStage::Clean)?;
    let holdout = apply_clean(parts.holdout, &modes).stage(PipelineStage::Clean)?;
    Ok((modes, Partitions { train, validation, holdout }))
}

fn log_encoded(encoders: &[FittedEncoder], df: &DataFrame) {
    let strategies: Vec<String> = encoders.iter().map(|e| e.strategy().to_string()).collect();
    info!(strategies = ?strategies, columns = df.width(), "encoded categorical columns");
}
