//! Room assignment features.

use hotelprep_primitives::{BookingRecord, FeatureTables};

/// Features comparing the reserved and the assigned room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFeatures {
    /// Reserved room type equals assigned room type.
    pub is_reserved_room_same_with_assigned_room: bool,
    /// Premium room reserved, non-premium room assigned.
    pub is_premium_room_downgraded: bool,
    /// Non-premium room reserved, premium room assigned.
    pub is_room_upgraded_to_premium: bool,
    /// Repeated guest whose room was changed.
    pub is_repeated_guest_but_changed_room: bool,
}

impl RoomFeatures {
    /// Derive room features for one booking.
    #[must_use]
    pub fn from_record(record: &BookingRecord, tables: &FeatureTables) -> Self {
        let same = record.kept_reserved_room();
        let reserved_premium = tables.is_premium_room(&record.reserved_room_type);
        let assigned_premium = tables.is_premium_room(&record.assigned_room_type);

        Self {
            is_reserved_room_same_with_assigned_room: same,
            is_premium_room_downgraded: reserved_premium && !assigned_premium,
            is_room_upgraded_to_premium: !reserved_premium && assigned_premium,
            is_repeated_guest_but_changed_room: record.is_repeated_guest == 1 && !same,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::fixtures::record;

    #[rstest]
    #[case("A", "A", true, false, false)]
    #[case("H", "A", false, true, false)]
    #[case("A", "G", false, false, true)]
    #[case("C", "F", false, false, false)]
    #[case("D", "E", false, false, false)]
    fn room_rules(
        #[case] reserved: &str,
        #[case] assigned: &str,
        #[case] same: bool,
        #[case] downgraded: bool,
        #[case] upgraded: bool,
    ) {
        let r = BookingRecord {
            reserved_room_type: reserved.to_string(),
            assigned_room_type: assigned.to_string(),
            ..record()
        };
        let f = RoomFeatures::from_record(&r, &FeatureTables::default());
        assert_eq!(f.is_reserved_room_same_with_assigned_room, same);
        assert_eq!(f.is_premium_room_downgraded, downgraded);
        assert_eq!(f.is_room_upgraded_to_premium, upgraded);
    }

    #[test]
    fn repeated_guest_changed_room() {
        let r = BookingRecord {
            is_repeated_guest: 1,
            reserved_room_type: "A".to_string(),
            assigned_room_type: "D".to_string(),
            ..record()
        };
        assert!(RoomFeatures::from_record(&r, &FeatureTables::default()).is_repeated_guest_but_changed_room);

        let r = BookingRecord { is_repeated_guest: 0, ..r };
        assert!(!RoomFeatures::from_record(&r, &FeatureTables::default()).is_repeated_guest_but_changed_room);
    }
}
