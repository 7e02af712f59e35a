//! Row-wise feature derivation over a booking frame.

use hotelprep_primitives::{BookingRecord, FeatureTables, columns as c};
use hotelprep_traits::Fit;
use hotelprep_utils::require_columns;
use polars::prelude::*;
use tracing::{debug, info};

use crate::{
    AgentActivity, AgentActivityCounts, CalendarFeatures, FeatureError, GuestFeatures, HistoryFeatures,
    PolicyFeatures, RatioFeatures, RoomFeatures, read_records,
};

/// Every derived feature of one booking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    /// Room assignment.
    pub room: RoomFeatures,
    /// Party composition and meals.
    pub guests: GuestFeatures,
    /// Arrival and booking dates.
    pub calendar: CalendarFeatures,
    /// Previous bookings.
    pub history: HistoryFeatures,
    /// Epsilon ratios.
    pub ratios: RatioFeatures,
    /// Deposit policy and booking window.
    pub policy: PolicyFeatures,
}

impl DerivedFeatures {
    /// Derive every feature of the booking at `row`.
    ///
    /// # Errors
    /// Returns `FeatureError` if the arrival or booking date is invalid.
    pub fn from_record(
        row: usize,
        record: &BookingRecord,
        tables: &FeatureTables,
    ) -> Result<Self, FeatureError> {
        Ok(Self {
            room: RoomFeatures::from_record(record, tables),
            guests: GuestFeatures::from_record(record, tables),
            calendar: CalendarFeatures::from_record(row, record, tables)?,
            history: HistoryFeatures::from_record(record),
            ratios: RatioFeatures::from_record(record),
            policy: PolicyFeatures::from_record(record),
        })
    }
}

/// Appends derived feature columns to a raw booking frame.
#[derive(Debug, Clone, Default)]
pub struct FeatureDeriver {
    tables: FeatureTables,
}

fn flag(name: &str, rows: &[DerivedFeatures], f: impl Fn(&DerivedFeatures) -> bool) -> Column {
    Column::new(name.into(), rows.iter().map(|r| i32::from(f(r))).collect::<Vec<_>>())
}

fn ratio(name: &str, rows: &[DerivedFeatures], f: impl Fn(&DerivedFeatures) -> f64) -> Column {
    Column::new(name.into(), rows.iter().map(f).collect::<Vec<_>>())
}

fn label(
    name: &str,
    rows: &[DerivedFeatures],
    f: impl Fn(&DerivedFeatures) -> String,
) -> Column {
    Column::new(name.into(), rows.iter().map(f).collect::<Vec<_>>())
}

fn filled(name: &str, values: impl Iterator<Item = Option<String>>) -> Column {
    Column::new(
        name.into(),
        values.map(|v| v.unwrap_or_else(|| c::UNKNOWN.to_string())).collect::<Vec<_>>(),
    )
}

impl FeatureDeriver {
    /// Create a deriver using the given lookup tables.
    #[must_use]
    pub const fn new(tables: FeatureTables) -> Self {
        Self { tables }
    }

    /// The lookup tables in use.
    #[must_use]
    pub const fn tables(&self) -> &FeatureTables {
        &self.tables
    }

    /// Derive the row-wise features of `df`.
    ///
    /// `children` is rewritten as a nullable integer column, missing
    /// `country` and `agent` become `"unknown"`, the derived columns are
    /// appended and the redundant raw columns dropped. Each output row depends
    /// only on the same input row. The agent activity flag is not added here;
    /// see [`AgentActivity`].
    ///
    /// # Errors
    /// Returns `FeatureError::MissingColumn` if a raw column is absent, or a
    /// data error for a malformed row.
    pub fn derive(&self, df: DataFrame) -> Result<DataFrame, FeatureError> {
        require_columns(&df, c::RECORD_COLUMNS)?;
        require_columns(&df, c::DROPPED_RAW_COLUMNS)?;

        let records = read_records(&df)?;
        let rows = records
            .iter()
            .enumerate()
            .map(|(row, record)| DerivedFeatures::from_record(row, record, &self.tables))
            .collect::<Result<Vec<_>, _>>()?;

        let mut df = df;
        df.with_column(Column::new(
            c::CHILDREN.into(),
            records.iter().map(|r| r.children).collect::<Vec<_>>(),
        ))?;
        df.with_column(filled(c::COUNTRY, records.iter().map(|r| r.country.clone())))?;
        df.with_column(filled(c::AGENT, records.iter().map(|r| r.agent.clone())))?;

        let derived = Self::columns(&rows);
        debug!(columns = derived.len(), rows = rows.len(), "derived feature columns");
        let mut df = df.hstack(&derived)?;
        for name in c::DROPPED_RAW_COLUMNS {
            df = df.drop(name)?;
        }

        info!(rows = df.height(), columns = df.width(), "derived features");
        Ok(df)
    }

    /// Derive features and flag low-activity agents by counts taken from
    /// `df` itself. Returns the counts used alongside the frame.
    ///
    /// Counts differ between frames, so the same agent can be flagged in one
    /// partition and not in another. Prefer fitting [`AgentActivity`] on the
    /// training partition.
    ///
    /// # Errors
    /// Returns `FeatureError` if derivation or the agent flag fails.
    pub fn derive_batch_local(
        &self,
        df: DataFrame,
        activity: &AgentActivity,
    ) -> Result<(AgentActivityCounts, DataFrame), FeatureError> {
        let df = self.derive(df)?;
        Ok(activity.fit_transform(df)?)
    }

    fn columns(rows: &[DerivedFeatures]) -> Vec<Column> {
        vec![
            flag(c::IS_RESERVED_ROOM_SAME_WITH_ASSIGNED_ROOM, rows, |r| {
                r.room.is_reserved_room_same_with_assigned_room
            }),
            ratio(c::WAITING_LIST_TO_ADR_RATIO, rows, |r| r.ratios.waiting_list_to_adr_ratio),
            ratio(c::TOTAL_SPECIAL_REQUESTS_TO_ADR_RATIO, rows, |r| {
                r.ratios.special_requests_to_adr_ratio
            }),
            ratio(c::LEAD_TIME_TO_ADR_RATIO, rows, |r| r.ratios.lead_time_to_adr_ratio),
            ratio(c::WEEKEND_WEEKDAY_RATIO, rows, |r| r.ratios.weekend_to_weekday_ratio),
            flag(c::IS_ONLY_CHILDREN_BOOKING, rows, |r| r.guests.is_only_children_booking),
            flag(c::IS_ONLY_ADULT_BOOKING, rows, |r| r.guests.is_only_adult_booking),
            label(c::ARRIVAL_WEEKDAY, rows, |r| r.calendar.arrival_weekday.to_string()),
            flag(c::IS_ONLY_ADULTS_ON_WEEKDAY, rows, |r| r.calendar.is_only_adults_on_weekday),
            label(c::BOOKING_DATE_MONTH, rows, |r| r.calendar.booking_date_month.to_string()),
            Column::new(
                c::BOOKING_DATE_WEEK_NUMBER.into(),
                rows.iter()
                    .map(|r| r.calendar.booking_date_week_number as i32)
                    .collect::<Vec<_>>(),
            ),
            label(c::BOOKING_WEEKDAY, rows, |r| r.calendar.booking_weekday.to_string()),
            label(c::BOOKING_SEASON, rows, |r| r.calendar.booking_season.to_string()),
            label(c::ARRIVAL_SEASON, rows, |r| r.calendar.arrival_season.to_string()),
            flag(c::IS_BOOKING_ON_SPECIAL_DAY, rows, |r| r.calendar.is_booking_on_special_day),
            flag(c::IS_ARRIVAL_ON_SPECIAL_DAY, rows, |r| r.calendar.is_arrival_on_special_day),
            flag(c::IS_ARRIVAL_ON_WEEKEND, rows, |r| r.calendar.is_arrival_on_weekend),
            flag(c::IS_BOOKING_ON_WEEKEND, rows, |r| r.calendar.is_booking_on_weekend),
            Column::new(
                c::TOTAL_PREVIOUS_BOOKINGS.into(),
                rows.iter().map(|r| r.history.total_previous_bookings).collect::<Vec<_>>(),
            ),
            ratio(c::PREVIOUS_CANCELLATION_PERCENTAGE, rows, |r| {
                r.history.previous_cancellation_percentage
            }),
            ratio(c::BOOKING_CHANGES_TO_LEAD_TIME_RATIO, rows, |r| {
                r.ratios.booking_changes_to_lead_time_ratio
            }),
            ratio(c::BOOKING_CHANGES_TO_ADR_RATIO, rows, |r| r.ratios.booking_changes_to_adr_ratio),
            ratio(c::TOTAL_SPECIAL_REQUESTS_TO_LEAD_TIME_RATIO, rows, |r| {
                r.ratios.special_requests_to_lead_time_ratio
            }),
            ratio(c::TOTAL_PREVIOUS_BOOKINGS_TO_TOTAL_SPECIAL_REQUESTS_RATIO, rows, |r| {
                r.ratios.previous_bookings_to_special_requests_ratio
            }),
            flag(c::IS_PREMIUM_ROOM_DOWNGRADED, rows, |r| r.room.is_premium_room_downgraded),
            flag(c::IS_ROOM_UPGRADED_TO_PREMIUM, rows, |r| r.room.is_room_upgraded_to_premium),
            flag(c::IS_EARLY_REFUNDABLE_BOOKING, rows, |r| {
                r.policy.is_early_booking_with_refundable_policy
            }),
            flag(c::IS_LATE_NON_REFUNDABLE_BOOKING, rows, |r| {
                r.policy.is_late_booking_with_non_refundable_policy
            }),
            ratio(c::LEAD_TIME_TO_TOTAL_STAY_RATIO, rows, |r| {
                r.ratios.lead_time_to_stay_length_ratio
            }),
            flag(c::IS_LONG_STAY_NO_MEAL, rows, |r| r.guests.is_long_stay_no_meal),
            flag(c::HAS_KIDS_BUT_NO_MEAL, rows, |r| r.guests.has_kids_but_no_meal),
            Column::new(
                c::TOTAL_PEOPLE.into(),
                rows.iter().map(|r| r.guests.total_people).collect::<Vec<_>>(),
            ),
            flag(c::IS_REPEATED_GUEST_BUT_CHANGED_ROOM, rows, |r| {
                r.room.is_repeated_guest_but_changed_room
            }),
            flag(c::IS_LATE_BOOKING, rows, |r| r.policy.is_late_booking),
            Column::new(
                c::IS_SOLO_TRAVELER.into(),
                rows.iter()
                    .map(|r| r.guests.is_solo_traveler.map(i32::from))
                    .collect::<Vec<_>>(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::fixtures::raw_bookings;

    fn derived() -> DataFrame {
        FeatureDeriver::default().derive(raw_bookings()).unwrap()
    }

    fn ints(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        let cast = df.column(name).unwrap().cast(&DataType::Int64).unwrap();
        cast.i64().unwrap().into_iter().collect()
    }

    fn strs(df: &DataFrame, name: &str) -> Vec<String> {
        df.column(name).unwrap().str().unwrap().into_no_null_iter().map(str::to_owned).collect()
    }

    #[test]
    fn drops_redundant_raw_columns() {
        let df = derived();
        for name in c::DROPPED_RAW_COLUMNS {
            assert!(df.column(name).is_err(), "{name} should be dropped");
        }
        assert!(df.column(c::ARRIVAL_DATE_MONTH).is_ok());
        assert!(df.column(c::IS_CANCELED).is_ok());
        assert!(df.column(c::IS_LOW_ACTIVITY_AGENT).is_err());
        assert_eq!(df.height(), 6);
    }

    #[test]
    fn room_flag_matches_room_equality() {
        let df = derived();
        let reserved = strs(&df, c::RESERVED_ROOM_TYPE);
        let assigned = strs(&df, c::ASSIGNED_ROOM_TYPE);
        let same = ints(&df, c::IS_RESERVED_ROOM_SAME_WITH_ASSIGNED_ROOM);
        for i in 0..df.height() {
            assert_eq!(same[i], Some(i64::from(reserved[i] == assigned[i])));
        }
    }

    #[test]
    fn fills_country_and_agent() {
        let df = derived();
        assert_eq!(strs(&df, c::COUNTRY)[1], c::UNKNOWN);
        assert_eq!(strs(&df, c::AGENT), vec!["unknown", "9", "240", "9", "9", "240"]);
    }

    #[test]
    fn calendar_columns() {
        let df = derived();
        assert_eq!(
            strs(&df, c::ARRIVAL_WEEKDAY),
            vec!["Wednesday", "Sunday", "Monday", "Sunday", "Saturday", "Tuesday"]
        );
        assert_eq!(
            strs(&df, c::BOOKING_WEEKDAY),
            vec!["Thursday", "Tuesday", "Sunday", "Sunday", "Wednesday", "Sunday"]
        );
        assert_eq!(ints(&df, c::BOOKING_DATE_WEEK_NUMBER)[..3], [Some(30), Some(51), Some(52)]);
        assert_eq!(strs(&df, c::ARRIVAL_SEASON)[2], "Spring");
        assert_eq!(strs(&df, c::BOOKING_SEASON)[2], "Winter");
        assert_eq!(
            ints(&df, c::IS_ARRIVAL_ON_SPECIAL_DAY),
            vec![Some(0), Some(1), Some(1), Some(1), Some(1), Some(0)]
        );
    }

    #[test]
    fn children_become_nullable_integers() {
        let df = derived();
        assert_eq!(df.column(c::CHILDREN).unwrap().dtype(), &DataType::Int64);
        assert_eq!(ints(&df, c::CHILDREN)[2], None);
        assert_eq!(ints(&df, c::TOTAL_PEOPLE)[2], None);
        assert_eq!(ints(&df, c::IS_SOLO_TRAVELER)[2], None);
        assert_eq!(ints(&df, c::IS_SOLO_TRAVELER)[3], Some(1));
    }

    #[test]
    fn cancellation_percentage() {
        let df = derived();
        let pct: Vec<f64> = df
            .column(c::PREVIOUS_CANCELLATION_PERCENTAGE)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_relative_eq!(pct[0], 0.0);
        assert_relative_eq!(pct[1], 50.0);
        assert_relative_eq!(pct[4], 100.0);
    }

    #[test]
    fn rows_derive_independently() {
        let all = derived();
        let tail = FeatureDeriver::default().derive(raw_bookings().slice(3, 3)).unwrap();
        assert!(all.slice(3, 3).equals_missing(&tail));
    }

    #[test]
    fn batch_local_adds_agent_flag() {
        let (counts, df) = FeatureDeriver::default()
            .derive_batch_local(raw_bookings(), &AgentActivity::new(3))
            .unwrap();
        // "9" occurs three times, "240" twice, "unknown" once
        assert_eq!(counts.count("9"), 3);
        assert_eq!(
            ints(&df, c::IS_LOW_ACTIVITY_AGENT),
            vec![Some(1), Some(0), Some(1), Some(0), Some(0), Some(1)]
        );
    }

    #[test]
    fn missing_raw_column_is_fatal() {
        let df = raw_bookings().drop(c::COMPANY).unwrap();
        let err = FeatureDeriver::default().derive(df).unwrap_err();
        assert!(matches!(err, FeatureError::MissingColumn(col) if col == c::COMPANY));
    }

    #[test]
    fn malformed_month_is_fatal() {
        let mut df = raw_bookings();
        df.with_column(Column::new(
            c::ARRIVAL_DATE_MONTH.into(),
            ["July", "December", "Mai", "February", "October", "August"],
        ))
        .unwrap();
        let err = FeatureDeriver::default().derive(df).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidDate { row: 2, .. }));
    }
}
