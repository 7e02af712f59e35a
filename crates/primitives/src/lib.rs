#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod columns;

mod record;
pub use record::BookingRecord;

mod calendar;
pub use calendar::{Season, is_weekend, month_name, parse_month, weekday_name};

mod tables;
pub use tables::{FeatureTables, MonthDay};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
