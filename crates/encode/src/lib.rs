#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod strategy;
pub use strategy::{
    DEFAULT_CIRCULAR_COLUMNS, DEFAULT_FREQUENCY_COLUMNS, DEFAULT_ONE_HOT_COLUMNS, EncodingStrategy,
};

mod onehot;
pub use onehot::{OneHotEncoder, OneHotLevels};

mod frequency;
pub use frequency::{FREQUENCY_SUFFIX, FrequencyEncoder, FrequencyMap};

mod circular;
pub use circular::{CircularEncoder, CircularRange};

mod encoder;
pub use encoder::{Encoder, FittedEncoder, encode};
