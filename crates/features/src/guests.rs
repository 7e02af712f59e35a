//! Party composition features.

use hotelprep_primitives::{BookingRecord, FeatureTables};

/// Minimum total nights for a stay to count as long.
const LONG_STAY_NIGHTS: i64 = 3;

/// Features describing who travels and what they eat.
///
/// A missing `children` count makes every comparison against it false and
/// leaves `total_people` / `is_solo_traveler` missing, so the cleaner can
/// fill them later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestFeatures {
    /// Children without adults.
    pub is_only_children_booking: bool,
    /// Adults without children or babies.
    pub is_only_adult_booking: bool,
    /// Adults plus children plus babies.
    pub total_people: Option<i64>,
    /// Exactly one guest.
    pub is_solo_traveler: Option<bool>,
    /// Children or babies on a plan without meals.
    pub has_kids_but_no_meal: bool,
    /// More than three nights on a plan without meals.
    pub is_long_stay_no_meal: bool,
}

impl GuestFeatures {
    /// Derive guest features for one booking.
    #[must_use]
    pub fn from_record(record: &BookingRecord, tables: &FeatureTables) -> Self {
        let no_meal = tables.is_no_meal(&record.meal);
        let total_people = record.total_people();
        let has_kids = record.children.is_some_and(|c| c + record.babies > 0);

        Self {
            is_only_children_booking: record.adults == 0 && record.children.is_some_and(|c| c > 0),
            is_only_adult_booking: record.adults > 0
                && record.children == Some(0)
                && record.babies == 0,
            total_people,
            is_solo_traveler: total_people.map(|t| t == 1),
            has_kids_but_no_meal: has_kids && no_meal,
            is_long_stay_no_meal: no_meal && record.total_stay_length() > LONG_STAY_NIGHTS,
        }
    }
}
