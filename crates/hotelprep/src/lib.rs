//! # hotelprep
//!
//! Leakage-safe preparation of hotel booking data for cancellation models.
//!
//! This crate provides a unified interface to the hotelprep components.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Booking record, calendar helpers, lookup tables
//! - `traits`: The `Fit` / `Transform` protocol
//! - `math`: Column statistics and scaling
//! - `utils`: Frame access, null filling, partitioning
//! - `features`: Feature derivation
//! - `encode`: Categorical encoders
//! - `pipeline`: Cleaning, outlier filtering, orchestration, oversampling
//! - `cli`: The `prepare` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use hotelprep::pipeline::{Pipeline, PipelineConfig};
//!
//! let prepared = Pipeline::new(PipelineConfig::default()).run(raw)?;
//! let state = prepared.fitted.to_json()?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use hotelprep_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use hotelprep_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use hotelprep_math as math;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use hotelprep_utils as utils;
#[cfg(feature = "features")]
#[doc(inline)]
pub use hotelprep_features as features;
#[cfg(feature = "encode")]
#[doc(inline)]
pub use hotelprep_encode as encode;
#[cfg(feature = "pipeline")]
#[doc(inline)]
pub use hotelprep_pipeline as pipeline;
