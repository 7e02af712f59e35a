//! Epsilon-guarded ratio features.

use hotelprep_primitives::BookingRecord;

/// Added to every ratio denominator so zero denominators stay finite.
pub const EPSILON: f64 = 1e-10;

/// `numerator / (denominator + EPSILON)`.
///
/// A missing operand (NaN) propagates.
#[must_use]
pub fn epsilon_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / (denominator + EPSILON)
}

/// Ratio features of one booking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct RatioFeatures {
    pub waiting_list_to_adr_ratio: f64,
    pub special_requests_to_adr_ratio: f64,
    pub lead_time_to_adr_ratio: f64,
    pub weekend_to_weekday_ratio: f64,
    pub booking_changes_to_lead_time_ratio: f64,
    pub booking_changes_to_adr_ratio: f64,
    pub special_requests_to_lead_time_ratio: f64,
    pub previous_bookings_to_special_requests_ratio: f64,
    pub lead_time_to_stay_length_ratio: f64,
}

impl RatioFeatures {
    /// Derive ratio features for one booking.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_record(record: &BookingRecord) -> Self {
        let adr = record.adr;
        let lead = record.lead_time as f64;
        let requests = record.total_of_special_requests as f64;
        let changes = record.booking_changes as f64;

        Self {
            waiting_list_to_adr_ratio: epsilon_ratio(record.days_in_waiting_list as f64, adr),
            special_requests_to_adr_ratio: epsilon_ratio(requests, adr),
            lead_time_to_adr_ratio: epsilon_ratio(lead, adr),
            weekend_to_weekday_ratio: epsilon_ratio(
                record.stays_in_weekend_nights as f64,
                record.stays_in_week_nights as f64,
            ),
            booking_changes_to_lead_time_ratio: epsilon_ratio(changes, lead),
            booking_changes_to_adr_ratio: epsilon_ratio(changes, adr),
            special_requests_to_lead_time_ratio: epsilon_ratio(requests, lead),
            previous_bookings_to_special_requests_ratio: epsilon_ratio(
                record.total_previous_bookings() as f64,
                requests,
            ),
            lead_time_to_stay_length_ratio: epsilon_ratio(lead, record.total_stay_length() as f64),
        }
    }
}
