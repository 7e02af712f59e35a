#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hotelprep/hotelprep-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod extract;
pub use extract::read_records;

mod room;
pub use room::RoomFeatures;

mod guests;
pub use guests::GuestFeatures;

mod calendar;
pub use calendar::{CalendarFeatures, arrival_date, booking_date};

mod history;
pub use history::HistoryFeatures;

mod ratios;
pub use ratios::{EPSILON, RatioFeatures, epsilon_ratio};

mod policy;
pub use policy::PolicyFeatures;

mod agent;
pub use agent::{AgentActivity, AgentActivityCounts, DEFAULT_LOW_ACTIVITY_THRESHOLD};

mod deriver;
pub use deriver::{DerivedFeatures, FeatureDeriver};

mod error;
pub use error::FeatureError;

#[cfg(feature = "fixtures")]
#[doc(hidden)]
pub mod fixtures;

#[cfg(all(test, not(feature = "fixtures")))]
#[allow(dead_code, unreachable_pub)]
mod fixtures;
