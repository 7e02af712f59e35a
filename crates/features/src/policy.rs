//! Deposit policy and booking window features.

use hotelprep_primitives::BookingRecord;

const REFUNDABLE: &str = "Refundable";
const NON_REFUNDABLE: &str = "Non Refund";

/// Refundable bookings made more than this many days ahead count as early.
pub(crate) const EARLY_BOOKING_DAYS: i64 = 90;
/// Non-refundable bookings made fewer than this many days ahead count as late.
pub(crate) const LATE_NON_REFUNDABLE_DAYS: i64 = 30;
/// Bookings made fewer than this many days ahead.
pub(crate) const LATE_BOOKING_DAYS: i64 = 7;

/// Deposit policy features of one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyFeatures {
    /// Refundable deposit booked more than 90 days ahead.
    pub is_early_booking_with_refundable_policy: bool,
    /// Non-refundable deposit booked less than 30 days ahead.
    pub is_late_booking_with_non_refundable_policy: bool,
    /// Booked less than 7 days ahead.
    pub is_late_booking: bool,
}

impl PolicyFeatures {
    /// Derive policy features for one booking.
    #[must_use]
    pub fn from_record(record: &BookingRecord) -> Self {
        let lead = record.lead_time;
        let deposit = record.deposit_type.as_str();

        Self {
            is_early_booking_with_refundable_policy: lead > EARLY_BOOKING_DAYS
                && deposit == REFUNDABLE,
            is_late_booking_with_non_refundable_policy: lead < LATE_NON_REFUNDABLE_DAYS
                && deposit == NON_REFUNDABLE,
            is_late_booking: lead < LATE_BOOKING_DAYS,
        }
    }
}
