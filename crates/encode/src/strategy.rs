//! Encoding strategy names and default column lists.

use std::{fmt, str::FromStr};

use hotelprep_primitives::columns as c;
use hotelprep_traits::TransformError;
use serde::{Deserialize, Serialize};

/// How a categorical column is turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingStrategy {
    /// Drop-first indicator columns.
    OneHot,
    /// Category occurrence counts.
    Frequency,
    /// Sine and cosine of a cyclic integer.
    Circular,
}

impl EncodingStrategy {
    /// Canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneHot => "onehot",
            Self::Frequency => "frequency",
            Self::Circular => "circular",
        }
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingStrategy {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "onehot" | "one-hot" | "one_hot" | "ohe" => Ok(Self::OneHot),
            "frequency" | "freq" => Ok(Self::Frequency),
            "circular" | "cyclic" | "sincos" => Ok(Self::Circular),
            other => Err(TransformError::InvalidArgument(format!(
                "unknown encoding strategy '{other}', expected onehot, frequency or circular"
            ))),
        }
    }
}

/// Columns one-hot encoded by default.
pub const DEFAULT_ONE_HOT_COLUMNS: &[&str] = &[
    c::HOTEL,
    c::ARRIVAL_DATE_MONTH,
    c::MEAL,
    c::MARKET_SEGMENT,
    c::DISTRIBUTION_CHANNEL,
    c::RESERVED_ROOM_TYPE,
    c::ASSIGNED_ROOM_TYPE,
    c::DEPOSIT_TYPE,
    c::CUSTOMER_TYPE,
    c::ARRIVAL_WEEKDAY,
    c::BOOKING_DATE_MONTH,
    c::BOOKING_WEEKDAY,
    c::BOOKING_SEASON,
    c::ARRIVAL_SEASON,
];

/// Columns frequency encoded by default.
pub const DEFAULT_FREQUENCY_COLUMNS: &[&str] = &[c::COUNTRY, c::AGENT];

/// Columns circular encoded by default.
pub const DEFAULT_CIRCULAR_COLUMNS: &[&str] =
    &[c::ARRIVAL_DATE_WEEK_NUMBER, c::BOOKING_DATE_WEEK_NUMBER];
