//! Most frequent times of travel

use chrono::Weekday;

use super::frequency::mode;
use crate::models::TripSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number, January = 1
    pub most_common_month: u32,
    pub most_common_day: Weekday,
    /// Hour of day, 0-23
    pub most_common_hour: u32,
}

impl TimeStats {
    /// `None` for an empty trip set
    #[must_use]
    pub fn compute(trips: &TripSet) -> Option<Self> {
        let most_common_month = mode(trips.iter().map(|trip| trip.month))?;
        // Weekday has no ordering; count by Monday-based index
        let day_index = mode(trips.iter().map(|trip| trip.day_of_week.num_days_from_monday()))?;
        let most_common_day = u8::try_from(day_index)
            .ok()
            .and_then(|index| Weekday::try_from(index).ok())?;
        let most_common_hour = mode(trips.iter().map(|trip| trip.start_hour()))?;

        Some(Self {
            most_common_month,
            most_common_day,
            most_common_hour,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, TripRecord, TripSchema};
    use chrono::NaiveDate;

    fn trip(month: u32, day: u32, hour: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        TripRecord::new(start, 60.0, "A".to_string(), "B".to_string())
    }

    #[test]
    fn test_most_common_times() {
        let set = TripSet::new(
            City::Chicago,
            TripSchema::default(),
            vec![
                trip(5, 1, 17),  // Monday
                trip(5, 2, 17),  // Tuesday
                trip(5, 8, 8),   // Monday
                trip(6, 12, 17), // Monday
            ],
        );

        let stats = TimeStats::compute(&set).unwrap();
        assert_eq!(stats.most_common_month, 5);
        assert_eq!(stats.most_common_day, Weekday::Mon);
        assert_eq!(stats.most_common_hour, 17);
    }

    #[test]
    fn test_ties_pick_earliest() {
        let set = TripSet::new(
            City::Chicago,
            TripSchema::default(),
            vec![trip(6, 4, 23), trip(2, 5, 1)], // Sunday, Sunday
        );
        let stats = TimeStats::compute(&set).unwrap();
        assert_eq!(stats.most_common_month, 2);
        assert_eq!(stats.most_common_day, Weekday::Sun);
        assert_eq!(stats.most_common_hour, 1);
    }

    #[test]
    fn test_empty_set() {
        let set = TripSet::new(City::Chicago, TripSchema::default(), Vec::new());
        assert_eq!(TimeStats::compute(&set), None);
    }
}
