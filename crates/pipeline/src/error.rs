//! Error types for pipeline runs.

use derive_more::Display;
use hotelprep_features::FeatureError;
use hotelprep_traits::TransformError;
use hotelprep_utils::UtilsError;

/// Stage of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PipelineStage {
    /// Configuration loading.
    #[display("config")]
    Config,
    /// Feature derivation and the agent activity flag.
    #[display("derive")]
    Derive,
    /// Categorical encoding.
    #[display("encode")]
    Encode,
    /// Train/validation/holdout partitioning.
    #[display("split")]
    Split,
    /// Mode filling and invalid row removal.
    #[display("clean")]
    Clean,
    /// Training outlier removal.
    #[display("outliers")]
    Outliers,
    /// Numeric scaling.
    #[display("scale")]
    Scale,
    /// Training oversampling.
    #[display("oversample")]
    Oversample,
    /// Fitted state persistence.
    #[display("persist")]
    Persist,
}

/// Errors that can occur while preparing booking data.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A stage failed.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// Failing stage.
        stage: PipelineStage,
        /// Underlying error.
        #[source]
        source: Box<Self>,
    },

    /// Feature derivation error.
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// Fit or transform error.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Frame utility error.
    #[error(transparent)]
    Utils(#[from] UtilsError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Oversampling input is unusable.
    #[error("cannot oversample: {0}")]
    Oversample(String),

    /// Fitted state could not be (de)serialized.
    #[error("fitted state serialization: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Returns whether this error is recoverable.
    ///
    /// Runs are deterministic; retrying a failed run fails the same way.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Stage that failed, if known.
    #[must_use]
    pub const fn stage(&self) -> Option<PipelineStage> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Attach the failing stage to an error.
pub(crate) trait StageContext<T> {
    fn stage(self, stage: PipelineStage) -> Result<T, PipelineError>;
}

impl<T, E: Into<PipelineError>> StageContext<T> for Result<T, E> {
    fn stage(self, stage: PipelineStage) -> Result<T, PipelineError> {
        self.map_err(|e| PipelineError::Stage { stage, source: Box::new(e.into()) })
    }
}
