//! Typed booking row.

use serde::{Deserialize, Serialize};

/// One raw booking, restricted to the fields feature derivation reads.
///
/// Date components stay optional so a malformed arrival date is reported by
/// the deriver instead of being silently defaulted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Days between booking and arrival.
    pub lead_time: i64,
    /// Arrival year.
    pub arrival_date_year: Option<i64>,
    /// Arrival month name.
    pub arrival_date_month: Option<String>,
    /// Arrival day of month.
    pub arrival_date_day_of_month: Option<i64>,
    /// Weekend nights.
    pub stays_in_weekend_nights: i64,
    /// Week nights.
    pub stays_in_week_nights: i64,
    /// Adults.
    pub adults: i64,
    /// Children, missing in a handful of raw rows.
    pub children: Option<i64>,
    /// Babies.
    pub babies: i64,
    /// Meal plan code.
    pub meal: String,
    /// Country code.
    pub country: Option<String>,
    /// Repeated guest flag (0/1).
    pub is_repeated_guest: i64,
    /// Previous cancellations.
    pub previous_cancellations: i64,
    /// Previous honoured bookings.
    pub previous_bookings_not_canceled: i64,
    /// Reserved room type code.
    pub reserved_room_type: String,
    /// Assigned room type code.
    pub assigned_room_type: String,
    /// Booking changes.
    pub booking_changes: i64,
    /// Deposit type.
    pub deposit_type: String,
    /// Agent identifier.
    pub agent: Option<String>,
    /// Days on the waiting list.
    pub days_in_waiting_list: i64,
    /// Average daily rate.
    pub adr: f64,
    /// Special requests.
    pub total_of_special_requests: i64,
}

impl BookingRecord {
    /// Weekend plus week nights.
    #[must_use]
    pub const fn total_stay_length(&self) -> i64 {
        self.stays_in_weekend_nights + self.stays_in_week_nights
    }

    /// Previous cancellations plus previous honoured bookings.
    #[must_use]
    pub const fn total_previous_bookings(&self) -> i64 {
        self.previous_cancellations + self.previous_bookings_not_canceled
    }

    /// Adults plus children plus babies; missing when `children` is.
    #[must_use]
    pub fn total_people(&self) -> Option<i64> {
        self.children.map(|children| self.adults + children + self.babies)
    }

    /// Whether the reserved and assigned room codes match.
    #[must_use]
    pub fn kept_reserved_room(&self) -> bool {
        self.reserved_room_type == self.assigned_room_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BookingRecord {
        BookingRecord {
            lead_time: 10,
            arrival_date_year: Some(2016),
            arrival_date_month: Some("July".to_string()),
            arrival_date_day_of_month: Some(1),
            stays_in_weekend_nights: 2,
            stays_in_week_nights: 3,
            adults: 2,
            children: Some(1),
            babies: 0,
            meal: "BB".to_string(),
            country: Some("PRT".to_string()),
            is_repeated_guest: 0,
            previous_cancellations: 1,
            previous_bookings_not_canceled: 3,
            reserved_room_type: "A".to_string(),
            assigned_room_type: "C".to_string(),
            booking_changes: 0,
            deposit_type: "No Deposit".to_string(),
            agent: None,
            days_in_waiting_list: 0,
            adr: 95.0,
            total_of_special_requests: 1,
        }
    }

    #[test]
    fn totals() {
        let r = record();
        assert_eq!(r.total_stay_length(), 5);
        assert_eq!(r.total_previous_bookings(), 4);
        assert_eq!(r.total_people(), Some(3));
        assert!(!r.kept_reserved_room());
    }

    #[test]
    fn total_people_missing_children() {
        let r = BookingRecord { children: None, ..record() };
        assert_eq!(r.total_people(), None);
    }
}
