#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{mean, min_max, mode, population_std, quantile};

mod scale;
pub use scale::{
    ColumnScale, ScaleMethod, Scaler, ScalerParams, apply_scale, fit_scale, is_binary,
};

mod error;
pub use error::MathError;
