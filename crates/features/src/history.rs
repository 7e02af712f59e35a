//! Guest booking history features.

use hotelprep_primitives::BookingRecord;

/// Previous booking counts of a guest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryFeatures {
    /// Cancelled plus not-cancelled previous bookings.
    pub total_previous_bookings: i64,
    /// Share of previous bookings that were cancelled, in percent.
    ///
    /// Exactly zero when the guest has no previous bookings.
    pub previous_cancellation_percentage: f64,
}

impl HistoryFeatures {
    /// Derive history features for one booking.
    #[must_use]
    pub fn from_record(record: &BookingRecord) -> Self {
        let total = record.total_previous_bookings();
        let percentage = if total == 0 {
            0.0
        } else {
            record.previous_cancellations as f64 / total as f64 * 100.0
        };

        Self { total_previous_bookings: total, previous_cancellation_percentage: percentage }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;
    use crate::fixtures::record;

    #[rstest]
    #[case(0, 0, 0, 0.0)]
    #[case(1, 1, 2, 50.0)]
    #[case(2, 0, 2, 100.0)]
    #[case(0, 2, 2, 0.0)]
    #[case(1, 3, 4, 25.0)]
    fn cancellation_percentage(
        #[case] cancelled: i64,
        #[case] kept: i64,
        #[case] total: i64,
        #[case] percentage: f64,
    ) {
        let r = BookingRecord {
            previous_cancellations: cancelled,
            previous_bookings_not_canceled: kept,
            ..record()
        };
        let f = HistoryFeatures::from_record(&r);
        assert_eq!(f.total_previous_bookings, total);
        assert_relative_eq!(f.previous_cancellation_percentage, percentage);
    }

    #[test]
    fn no_history_is_exactly_zero() {
        let f = HistoryFeatures::from_record(&record());
        assert!(f.previous_cancellation_percentage.to_bits() == 0.0_f64.to_bits());
    }
}
