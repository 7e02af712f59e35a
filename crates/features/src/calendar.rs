//! Arrival and booking date features.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use hotelprep_primitives::{
    BookingRecord, FeatureTables, Season, is_weekend, month_name, parse_month, weekday_name,
};

use crate::FeatureError;

/// Build the arrival date from year, month name and day of month.
///
/// # Errors
/// Returns `FeatureError::InvalidDate` if any component is missing or the
/// three do not form a calendar date.
pub fn arrival_date(row: usize, record: &BookingRecord) -> Result<NaiveDate, FeatureError> {
    let invalid = || FeatureError::InvalidDate {
        row,
        year: record.arrival_date_year,
        month: record.arrival_date_month.clone(),
        day: record.arrival_date_day_of_month,
    };

    let year = record.arrival_date_year.and_then(|y| i32::try_from(y).ok()).ok_or_else(invalid)?;
    let month = record.arrival_date_month.as_deref().and_then(parse_month).ok_or_else(invalid)?;
    let day =
        record.arrival_date_day_of_month.and_then(|d| u32::try_from(d).ok()).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Arrival date minus `lead_time` days.
///
/// # Errors
/// Returns `FeatureError::BookingDateOutOfRange` if the result is not a
/// representable date.
pub fn booking_date(row: usize, arrival: NaiveDate, lead_time: i64) -> Result<NaiveDate, FeatureError> {
    let days = Days::new(lead_time.unsigned_abs());
    let date =
        if lead_time >= 0 { arrival.checked_sub_days(days) } else { arrival.checked_add_days(days) };
    date.ok_or(FeatureError::BookingDateOutOfRange { row, lead_time })
}

/// Features of the arrival and booking dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    /// Weekday name of the arrival date.
    pub arrival_weekday: &'static str,
    /// Adult-only booking arriving Monday to Friday.
    pub is_only_adults_on_weekday: bool,
    /// Month name of the booking date.
    pub booking_date_month: &'static str,
    /// ISO week number of the booking date.
    pub booking_date_week_number: u32,
    /// Weekday name of the booking date.
    pub booking_weekday: &'static str,
    /// Season of the booking date.
    pub booking_season: Season,
    /// Season of the arrival date.
    pub arrival_season: Season,
    /// Booking date is a special day.
    pub is_booking_on_special_day: bool,
    /// Arrival date is a special day.
    pub is_arrival_on_special_day: bool,
    /// Arrival on Saturday or Sunday.
    pub is_arrival_on_weekend: bool,
    /// Booking made on Saturday or Sunday.
    pub is_booking_on_weekend: bool,
}

impl CalendarFeatures {
    /// Derive calendar features for the booking at `row`.
    ///
    /// # Errors
    /// Returns `FeatureError` if the arrival date cannot be parsed or the
    /// booking date is out of range.
    pub fn from_record(
        row: usize,
        record: &BookingRecord,
        tables: &FeatureTables,
    ) -> Result<Self, FeatureError> {
        let arrival = arrival_date(row, record)?;
        let booking = booking_date(row, arrival, record.lead_time)?;

        let adults_only =
            record.adults > 0 && record.children == Some(0) && record.babies == 0;
        let arrival_on_weekday = is_workday(arrival.weekday());

        Ok(Self {
            arrival_weekday: weekday_name(arrival.weekday()),
            is_only_adults_on_weekday: adults_only && arrival_on_weekday,
            booking_date_month: month_name(booking.month()).unwrap_or_default(),
            booking_date_week_number: booking.iso_week().week(),
            booking_weekday: weekday_name(booking.weekday()),
            booking_season: tables.season(booking.month()),
            arrival_season: tables.season(arrival.month()),
            is_booking_on_special_day: tables.is_special_day(booking.month(), booking.day()),
            is_arrival_on_special_day: tables.is_special_day(arrival.month(), arrival.day()),
            is_arrival_on_weekend: is_weekend(arrival.weekday()),
            is_booking_on_weekend: is_weekend(booking.weekday()),
        })
    }
}

const fn is_workday(day: Weekday) -> bool {
    !is_weekend(day)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fixtures::record;

    fn arriving(year: i64, month: &str, day: i64, lead_time: i64) -> BookingRecord {
        BookingRecord {
            arrival_date_year: Some(year),
            arrival_date_month: Some(month.to_string()),
            arrival_date_day_of_month: Some(day),
            lead_time,
            ..record()
        }
    }

    #[test]
    fn booking_date_crosses_year() {
        let r = arriving(2015, "July", 1, 342);
        let f = CalendarFeatures::from_record(0, &r, &FeatureTables::default()).unwrap();
        // 2015-07-01 minus 342 days is Thursday 2014-07-24
        assert_eq!(f.arrival_weekday, "Wednesday");
        assert_eq!(f.booking_weekday, "Thursday");
        assert_eq!(f.booking_date_month, "July");
        assert_eq!(f.booking_date_week_number, 30);
        assert_eq!(f.booking_season, Season::Summer);
        assert!(!f.is_arrival_on_weekend);
    }

    #[test]
    fn iso_week_of_new_year_sunday() {
        // 2017-01-01 is a Sunday in ISO week 52 of 2016
        let r = arriving(2017, "May", 1, 120);
        let f = CalendarFeatures::from_record(0, &r, &FeatureTables::default()).unwrap();
        assert_eq!(f.booking_date_week_number, 52);
        assert_eq!(f.booking_date_month, "January");
        assert!(f.is_booking_on_special_day);
        assert!(f.is_arrival_on_special_day);
        assert!(f.is_booking_on_weekend);
        assert_eq!(f.booking_season, Season::Winter);
        assert_eq!(f.arrival_season, Season::Spring);
    }

    #[rstest]
    #[case(2016, "February", 14, true)]
    #[case(2016, "December", 24, true)]
    #[case(2016, "April", 1, false)]
    #[case(2015, "October", 31, true)]
    fn special_arrival_days(
        #[case] year: i64,
        #[case] month: &str,
        #[case] day: i64,
        #[case] special: bool,
    ) {
        let r = arriving(year, month, day, 3);
        let f = CalendarFeatures::from_record(0, &r, &FeatureTables::default()).unwrap();
        assert_eq!(f.is_arrival_on_special_day, special);
    }

    #[test]
    fn adults_on_weekday_requires_workday() {
        // 2016-12-25 is a Sunday, 2016-12-26 a Monday
        let sunday =
            BookingRecord { adults: 2, children: Some(0), babies: 0, ..arriving(2016, "December", 25, 0) };
        let monday = BookingRecord { arrival_date_day_of_month: Some(26), ..sunday.clone() };
        let tables = FeatureTables::default();

        assert!(!CalendarFeatures::from_record(0, &sunday, &tables).unwrap().is_only_adults_on_weekday);
        assert!(CalendarFeatures::from_record(0, &monday, &tables).unwrap().is_only_adults_on_weekday);

        let with_child = BookingRecord { children: Some(1), ..monday };
        assert!(!CalendarFeatures::from_record(0, &with_child, &tables).unwrap().is_only_adults_on_weekday);
    }

    #[rstest]
    #[case(None, Some("July"), Some(1))]
    #[case(Some(2016), None, Some(1))]
    #[case(Some(2016), Some("July"), None)]
    #[case(Some(2016), Some("Juli"), Some(1))]
    #[case(Some(2016), Some("February"), Some(30))]
    #[case(Some(2016), Some("July"), Some(-1))]
    fn malformed_dates_fail(
        #[case] year: Option<i64>,
        #[case] month: Option<&str>,
        #[case] day: Option<i64>,
    ) {
        let r = BookingRecord {
            arrival_date_year: year,
            arrival_date_month: month.map(str::to_string),
            arrival_date_day_of_month: day,
            ..record()
        };
        let err = CalendarFeatures::from_record(7, &r, &FeatureTables::default()).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidDate { row: 7, .. }));
    }

    #[test]
    fn negative_lead_time_moves_forward() {
        let arrival = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        let booked = booking_date(0, arrival, -2).unwrap();
        assert_eq!(booked, NaiveDate::from_ymd_opt(2016, 1, 3).unwrap());
    }

    #[test]
    fn workdays() {
        assert!(is_workday(Weekday::Fri));
        assert!(!is_workday(Weekday::Sat));
    }
}
