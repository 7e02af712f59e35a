//! Removal of infeasible training rows.

use hotelprep_primitives::columns as c;
use hotelprep_traits::TransformError;
use hotelprep_utils::require_columns;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Inclusive upper bounds (and the adr floor) a training row must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierBounds {
    /// Lowest allowed adr.
    pub min_adr: f64,
    /// A single adr value known to be a data error; rows carrying it are removed.
    pub anomalous_adr: Option<f64>,
    /// Weekend nights.
    pub max_weekend_nights: i64,
    /// Week nights.
    pub max_week_nights: i64,
    /// Adults.
    pub max_adults: i64,
    /// Babies.
    pub max_babies: i64,
    /// Previous honoured bookings.
    pub max_previous_bookings_not_canceled: i64,
    /// Booking changes.
    pub max_booking_changes: i64,
    /// Parking spaces.
    pub max_car_parking_spaces: i64,
    /// Total guests.
    pub max_total_people: i64,
}

impl Default for OutlierBounds {
    fn default() -> Self {
        Self {
            min_adr: 0.0,
            anomalous_adr: Some(5400.0),
            max_weekend_nights: 8,
            max_week_nights: 20,
            max_adults: 6,
            max_babies: 5,
            max_previous_bookings_not_canceled: 20,
            max_booking_changes: 10,
            max_car_parking_spaces: 4,
            max_total_people: 6,
        }
    }
}

impl OutlierBounds {
    fn predicate(&self) -> Expr {
        // NaN adr compares as missing
        let adr = col(c::ADR).cast(DataType::Float64).fill_nan(lit(NULL));
        let mut keep = adr.clone().gt_eq(lit(self.min_adr));
        if let Some(anomaly) = self.anomalous_adr {
            keep = keep.and(adr.neq(lit(anomaly)));
        }

        let caps = [
            (c::STAYS_IN_WEEKEND_NIGHTS, self.max_weekend_nights),
            (c::STAYS_IN_WEEK_NIGHTS, self.max_week_nights),
            (c::ADULTS, self.max_adults),
            (c::BABIES, self.max_babies),
            (c::PREVIOUS_BOOKINGS_NOT_CANCELED, self.max_previous_bookings_not_canceled),
            (c::BOOKING_CHANGES, self.max_booking_changes),
            (c::REQUIRED_CAR_PARKING_SPACES, self.max_car_parking_spaces),
            (c::TOTAL_PEOPLE, self.max_total_people),
        ];
        caps.into_iter().fold(keep, |keep, (name, max)| keep.and(col(name).lt_eq(lit(max))))
    }
}

/// Columns read by the outlier filter.
const BOUNDED_COLUMNS: &[&str] = &[
    c::ADR,
    c::STAYS_IN_WEEKEND_NIGHTS,
    c::STAYS_IN_WEEK_NIGHTS,
    c::ADULTS,
    c::BABIES,
    c::PREVIOUS_BOOKINGS_NOT_CANCELED,
    c::BOOKING_CHANGES,
    c::REQUIRED_CAR_PARKING_SPACES,
    c::TOTAL_PEOPLE,
];

/// Keep the rows of `train` that satisfy every bound.
///
/// Only the training partition is filtered. A missing value in a bounded
/// column fails its check, as does a NaN adr.
///
/// # Errors
/// Returns `TransformError::MissingColumn` if a bounded column is absent.
pub fn filter_outliers(train: DataFrame, bounds: &OutlierBounds) -> Result<DataFrame, TransformError> {
    require_columns(&train, BOUNDED_COLUMNS)?;
    let before = train.height();

    let df = train.lazy().filter(bounds.predicate().fill_null(lit(false))).collect()?;

    info!(removed = before - df.height(), rows = df.height(), "filtered training outliers");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn row(column: &str, value: f64) -> DataFrame {
        let mut df = df! {
            c::ADR => &[100.0],
            c::STAYS_IN_WEEKEND_NIGHTS => &[2i64],
            c::STAYS_IN_WEEK_NIGHTS => &[5i64],
            c::ADULTS => &[2i64],
            c::BABIES => &[0i64],
            c::PREVIOUS_BOOKINGS_NOT_CANCELED => &[0i64],
            c::BOOKING_CHANGES => &[1i64],
            c::REQUIRED_CAR_PARKING_SPACES => &[0i64],
            c::TOTAL_PEOPLE => &[2i64],
        }
        .unwrap();
        let dtype = df.column(column).unwrap().dtype().clone();
        let replaced = Column::new(column.into(), &[value]).cast(&dtype).unwrap();
        df.with_column(replaced).unwrap();
        df
    }

    fn kept(df: DataFrame) -> bool {
        filter_outliers(df, &OutlierBounds::default()).unwrap().height() == 1
    }

    #[rstest]
    #[case(c::ADR, 0.0, true)]
    #[case(c::ADR, -6.38, false)]
    #[case(c::ADR, 5400.0, false)]
    #[case(c::ADR, 5399.0, true)]
    #[case(c::STAYS_IN_WEEKEND_NIGHTS, 8.0, true)]
    #[case(c::STAYS_IN_WEEKEND_NIGHTS, 9.0, false)]
    #[case(c::STAYS_IN_WEEK_NIGHTS, 20.0, true)]
    #[case(c::STAYS_IN_WEEK_NIGHTS, 21.0, false)]
    #[case(c::ADULTS, 6.0, true)]
    #[case(c::ADULTS, 7.0, false)]
    #[case(c::BABIES, 5.0, true)]
    #[case(c::BABIES, 9.0, false)]
    #[case(c::PREVIOUS_BOOKINGS_NOT_CANCELED, 21.0, false)]
    #[case(c::BOOKING_CHANGES, 10.0, true)]
    #[case(c::BOOKING_CHANGES, 11.0, false)]
    #[case(c::REQUIRED_CAR_PARKING_SPACES, 8.0, false)]
    #[case(c::TOTAL_PEOPLE, 6.0, true)]
    #[case(c::TOTAL_PEOPLE, 7.0, false)]
    fn bounds_are_inclusive(#[case] column: &str, #[case] value: f64, #[case] keep: bool) {
        assert_eq!(kept(row(column, value)), keep);
    }

    #[test]
    fn missing_values_fail() {
        let mut df = row(c::ADR, 1.0);
        df.with_column(Column::new(c::TOTAL_PEOPLE.into(), &[None::<i64>])).unwrap();
        assert!(!kept(df));
        assert!(!kept(row(c::ADR, f64::NAN)));
    }

    #[test]
    fn anomaly_exclusion_can_be_disabled() {
        let bounds = OutlierBounds { anomalous_adr: None, ..OutlierBounds::default() };
        let out = filter_outliers(row(c::ADR, 5400.0), &bounds).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn bounds_from_partial_toml() {
        let bounds: OutlierBounds = toml::from_str("max_adults = 4").unwrap();
        assert_eq!(bounds.max_adults, 4);
        assert_eq!(bounds.max_babies, 5);
    }

    #[test]
    fn missing_column() {
        let df = row(c::ADR, 1.0).drop(c::TOTAL_PEOPLE).unwrap();
        let err = filter_outliers(df, &OutlierBounds::default()).unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(col) if col == c::TOTAL_PEOPLE));
    }
}
