//! Literal lookup tables used by feature derivation.

use serde::{Deserialize, Serialize};

use crate::Season;

/// A calendar date without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl MonthDay {
    /// Create a new month/day pair.
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Static configuration consumed by the deriver.
///
/// Every table can be overridden from configuration; omitted fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureTables {
    /// Holidays flagged by `is_*_on_special_day`.
    pub special_days: Vec<MonthDay>,
    /// Room type codes considered premium.
    pub premium_rooms: Vec<String>,
    /// Meal plan codes meaning "no meal included".
    pub no_meal_plans: Vec<String>,
    /// Season of each month, January first.
    pub seasons: [Season; 12],
}

impl FeatureTables {
    /// Whether a month/day pair is a special day.
    #[must_use]
    pub fn is_special_day(&self, month: u32, day: u32) -> bool {
        self.special_days.contains(&MonthDay::new(month, day))
    }

    /// Whether a room code is premium.
    #[must_use]
    pub fn is_premium_room(&self, room: &str) -> bool {
        self.premium_rooms.iter().any(|r| r == room)
    }

    /// Whether a meal plan code includes no meal.
    #[must_use]
    pub fn is_no_meal(&self, meal: &str) -> bool {
        self.no_meal_plans.iter().any(|m| m == meal)
    }

    /// Season of a month (1-12); out-of-range months wrap around.
    #[must_use]
    pub const fn season(&self, month: u32) -> Season {
        self.seasons[(month as usize + 11) % 12]
    }
}

impl Default for FeatureTables {
    fn default() -> Self {
        let seasons = std::array::from_fn(|i| {
            // `i + 1` is always a valid month here
            Season::of_month(i as u32 + 1).unwrap_or(Season::Winter)
        });
        Self {
            special_days: vec![
                MonthDay::new(1, 1),   // New Year's Day
                MonthDay::new(12, 31), // New Year's Eve
                MonthDay::new(12, 25), // Christmas Day
                MonthDay::new(12, 24), // Christmas Eve
                MonthDay::new(2, 14),  // Valentine's Day
                MonthDay::new(10, 31), // Halloween
                MonthDay::new(5, 1),   // Labor Day
            ],
            premium_rooms: ["H", "G", "F", "C"].map(String::from).to_vec(),
            no_meal_plans: ["Undefined", "SC"].map(String::from).to_vec(),
            seasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables() {
        let tables = FeatureTables::default();
        assert!(tables.is_special_day(12, 24));
        assert!(tables.is_special_day(5, 1));
        assert!(!tables.is_special_day(4, 1));
        assert!(tables.is_premium_room("G"));
        assert!(!tables.is_premium_room("A"));
        assert!(tables.is_no_meal("SC"));
        assert!(!tables.is_no_meal("BB"));
        assert_eq!(tables.season(1), Season::Winter);
        assert_eq!(tables.season(6), Season::Summer);
        assert_eq!(tables.season(9), Season::Fall);
    }

    #[test]
    fn partial_override_from_toml() {
        let tables: FeatureTables =
            toml::from_str("premium_rooms = [\"L\"]\nspecial_days = [{ month = 7, day = 4 }]")
                .unwrap();
        assert!(tables.is_premium_room("L"));
        assert!(!tables.is_premium_room("H"));
        assert!(tables.is_special_day(7, 4));
        assert!(tables.is_no_meal("Undefined"));
    }
}
