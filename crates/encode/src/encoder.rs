//! Strategy-selected encoding.

use hotelprep_traits::{Fit, Transform, TransformError};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    CircularEncoder, CircularRange, EncodingStrategy, FrequencyEncoder, FrequencyMap,
    OneHotEncoder, OneHotLevels,
};

/// An encoding strategy applied to a list of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoder {
    /// Strategy to apply.
    pub strategy: EncodingStrategy,
    /// Columns to encode.
    pub columns: Vec<String>,
}

impl Encoder {
    /// Encode `columns` with `strategy`.
    pub fn new<S: Into<String>>(
        strategy: EncodingStrategy,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        Self { strategy, columns: columns.into_iter().map(Into::into).collect() }
    }
}

impl Fit for Encoder {
    type Fitted = FittedEncoder;

    fn fit(&self, df: &DataFrame) -> Result<Self::Fitted, TransformError> {
        let columns = self.columns.iter().cloned();
        Ok(match self.strategy {
            EncodingStrategy::OneHot => FittedEncoder::OneHot(OneHotEncoder::new(columns).fit(df)?),
            EncodingStrategy::Frequency => {
                FittedEncoder::Frequency(FrequencyEncoder::new(columns).fit(df)?)
            }
            EncodingStrategy::Circular => {
                FittedEncoder::Circular(CircularEncoder::new(columns).fit(df)?)
            }
        })
    }
}

/// A fitted encoder of any strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum FittedEncoder {
    /// One-hot levels.
    OneHot(OneHotLevels),
    /// Category counts.
    Frequency(FrequencyMap),
    /// Circular periods.
    Circular(CircularRange),
}

impl FittedEncoder {
    /// Strategy of this encoder.
    #[must_use]
    pub const fn strategy(&self) -> EncodingStrategy {
        match self {
            Self::OneHot(_) => EncodingStrategy::OneHot,
            Self::Frequency(_) => EncodingStrategy::Frequency,
            Self::Circular(_) => EncodingStrategy::Circular,
        }
    }
}

impl Transform for FittedEncoder {
    fn transform(&self, df: DataFrame) -> Result<DataFrame, TransformError> {
        match self {
            Self::OneHot(levels) => levels.transform(df),
            Self::Frequency(counts) => counts.transform(df),
            Self::Circular(range) => range.transform(df),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::OneHot(levels) => levels.name(),
            Self::Frequency(counts) => counts.name(),
            Self::Circular(range) => range.name(),
        }
    }
}

/// Fit `strategy` on `df` and encode `df` with it in one call.
///
/// The statistic comes from `df` itself. Calling this separately on
/// different partitions encodes them inconsistently; fit an [`Encoder`] once
/// and reuse the [`FittedEncoder`] instead.
///
/// # Errors
/// Returns `TransformError::MissingColumn` if a column is absent, or a
/// fitting error for a column with no usable values.
pub fn encode(
    df: DataFrame,
    strategy: EncodingStrategy,
    columns: &[&str],
) -> Result<DataFrame, TransformError> {
    let (_, df) = Encoder::new(strategy, columns.iter().copied()).fit_transform(df)?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn frame() -> DataFrame {
        df! {
            "hotel" => &["City Hotel", "Resort Hotel", "City Hotel"],
            "country" => &["PRT", "GBR", "PRT"],
            "week" => &[1i64, 26, 52],
        }
        .unwrap()
    }

    #[rstest]
    #[case(EncodingStrategy::OneHot, "hotel", &["hotel_Resort Hotel"])]
    #[case(EncodingStrategy::Frequency, "country", &["country_frequency_encoded"])]
    #[case(EncodingStrategy::Circular, "week", &["week_sin", "week_cos"])]
    fn encode_replaces_column(
        #[case] strategy: EncodingStrategy,
        #[case] column: &str,
        #[case] produced: &[&str],
    ) {
        let out = encode(frame(), strategy, &[column]).unwrap();
        assert!(out.column(column).is_err());
        for name in produced {
            assert!(out.column(name).is_ok(), "missing {name}");
        }
        assert_eq!(out.height(), 3);
    }

    #[test]
    fn strategy_name_selects_encoder() {
        let strategy: EncodingStrategy = "freq".parse().unwrap();
        let fitted = Encoder::new(strategy, ["country"]).fit(&frame()).unwrap();
        assert_eq!(fitted.strategy(), EncodingStrategy::Frequency);
        assert_eq!(fitted.name(), "frequency");
    }

    #[test]
    fn fitted_encoder_serializes_with_tag() {
        let fitted = Encoder::new(EncodingStrategy::OneHot, ["hotel"]).fit(&frame()).unwrap();
        let json = serde_json::to_string(&fitted).unwrap();
        assert!(json.contains("\"strategy\":\"one_hot\""));
        let back: FittedEncoder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fitted);
    }

    #[test]
    fn missing_column_propagates() {
        let err = encode(frame(), EncodingStrategy::Circular, &["booking_date_week_number"])
            .unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(_)));
    }
}
