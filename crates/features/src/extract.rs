//! Reading typed booking records out of a frame.

use hotelprep_primitives::{BookingRecord, columns as c};
use hotelprep_utils::{float_values, int_values, require_columns, string_values};
use polars::prelude::*;

use crate::FeatureError;

fn present<T>(column: &'static str, values: Vec<Option<T>>) -> Result<Vec<T>, FeatureError> {
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| FeatureError::MissingValue { column, row }))
        .collect()
}

fn counts(df: &DataFrame, column: &'static str) -> Result<Vec<i64>, FeatureError> {
    present(column, int_values(df, column)?)
}

fn codes(df: &DataFrame, column: &'static str) -> Result<Vec<String>, FeatureError> {
    present(column, string_values(df, column)?)
}

/// Read every row of `df` as a [`BookingRecord`].
///
/// `children`, `country`, `agent` and the arrival date components may be
/// null; every other record column must be present on every row. A missing
/// `adr` reads as NaN.
///
/// # Errors
/// Returns `FeatureError::MissingColumn` if a record column is absent,
/// `FeatureError::MissingValue` for a null in a non-nullable column, or
/// `FeatureError::Utils` if a column has the wrong type.
pub fn read_records(df: &DataFrame) -> Result<Vec<BookingRecord>, FeatureError> {
    require_columns(df, c::RECORD_COLUMNS)?;

    let lead_time = counts(df, c::LEAD_TIME)?;
    let year = int_values(df, c::ARRIVAL_DATE_YEAR)?;
    let month = string_values(df, c::ARRIVAL_DATE_MONTH)?;
    let day = int_values(df, c::ARRIVAL_DATE_DAY_OF_MONTH)?;
    let weekend = counts(df, c::STAYS_IN_WEEKEND_NIGHTS)?;
    let week = counts(df, c::STAYS_IN_WEEK_NIGHTS)?;
    let adults = counts(df, c::ADULTS)?;
    let children = int_values(df, c::CHILDREN)?;
    let babies = counts(df, c::BABIES)?;
    let meal = codes(df, c::MEAL)?;
    let country = string_values(df, c::COUNTRY)?;
    let repeated = counts(df, c::IS_REPEATED_GUEST)?;
    let prev_cancel = counts(df, c::PREVIOUS_CANCELLATIONS)?;
    let prev_kept = counts(df, c::PREVIOUS_BOOKINGS_NOT_CANCELED)?;
    let reserved = codes(df, c::RESERVED_ROOM_TYPE)?;
    let assigned = codes(df, c::ASSIGNED_ROOM_TYPE)?;
    let changes = counts(df, c::BOOKING_CHANGES)?;
    let deposit = codes(df, c::DEPOSIT_TYPE)?;
    let agent = string_values(df, c::AGENT)?;
    let waiting = counts(df, c::DAYS_IN_WAITING_LIST)?;
    let adr = float_values(df, c::ADR)?;
    let requests = counts(df, c::TOTAL_OF_SPECIAL_REQUESTS)?;

    let records = (0..df.height())
        .map(|i| BookingRecord {
            lead_time: lead_time[i],
            arrival_date_year: year[i],
            arrival_date_month: month[i].clone(),
            arrival_date_day_of_month: day[i],
            stays_in_weekend_nights: weekend[i],
            stays_in_week_nights: week[i],
            adults: adults[i],
            children: children[i],
            babies: babies[i],
            meal: meal[i].clone(),
            country: country[i].clone(),
            is_repeated_guest: repeated[i],
            previous_cancellations: prev_cancel[i],
            previous_bookings_not_canceled: prev_kept[i],
            reserved_room_type: reserved[i].clone(),
            assigned_room_type: assigned[i].clone(),
            booking_changes: changes[i],
            deposit_type: deposit[i].clone(),
            agent: agent[i].clone(),
            days_in_waiting_list: waiting[i],
            adr: adr[i].unwrap_or(f64::NAN),
            total_of_special_requests: requests[i],
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::raw_bookings;

    #[test]
    fn reads_fixture_rows() {
        let records = read_records(&raw_bookings()).unwrap();
        assert_eq!(records.len(), 6);

        let r1 = &records[1];
        assert_eq!(r1.agent.as_deref(), Some("9"));
        assert_eq!(r1.country, None);
        assert_eq!(r1.arrival_date_month.as_deref(), Some("December"));
        assert_eq!(records[2].children, None);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let df = raw_bookings().drop(c::ADULTS).unwrap();
        let err = read_records(&df).unwrap_err();
        assert!(matches!(err, FeatureError::MissingColumn(col) if col == "adults"));
    }

    #[test]
    fn null_count_is_missing_value() {
        let mut df = raw_bookings();
        df.with_column(Column::new(
            c::ADULTS.into(),
            &[Some(2i64), None, Some(2), Some(1), Some(2), Some(3)],
        ))
        .unwrap();
        let err = read_records(&df).unwrap_err();
        assert!(matches!(err, FeatureError::MissingValue { column: "adults", row: 1 }));
    }
}
