#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cleaner;
pub use cleaner::{
    MODE_COLUMNS, ModeImputer, ModeValues, apply_clean, drop_invalid_guest_rows, fit_clean,
};

mod outliers;
pub use outliers::{OutlierBounds, filter_outliers};

mod oversample;
pub use oversample::{Oversampler, Resampled, Smote, training_matrix};

mod config;
pub use config::{PipelineConfig, RunMode};

mod state;
pub use state::FittedState;

mod pipeline;
pub use pipeline::{Pipeline, PreparedData};

mod error;
pub use error::{PipelineError, PipelineStage};

/// Re-export commonly used types.
pub mod prelude {
    pub use hotelprep_traits::{Fit, Transform};

    pub use super::{Pipeline, PipelineConfig, PipelineError, PreparedData, RunMode};
}
