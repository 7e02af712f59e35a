#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod frame;
pub use frame::{float_values, int_values, is_numeric, require_columns, string_values};

mod fill;
pub use fill::fill_nulls;

mod split;
pub use split::{Partitions, SplitConfig, split_frame};

mod error;
pub use error::UtilsError;
