//! Filter vocabularies: cities, months and weekdays
//!
//! The canonical values are fixed tables; user input is normalized onto them
//! by [`crate::filter_resolver`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A city with a bike-share dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities, in menu order (`1`, `2`, `3`)
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Canonical lowercase name, as accepted from user input
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name for display
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Look up a city by its canonical name
    #[must_use]
    pub fn from_name(name: &str) -> Option<City> {
        Self::ALL.into_iter().find(|city| city.name() == name)
    }

    /// Look up a city by its 1-based menu number
    #[must_use]
    pub fn from_menu_number(number: &str) -> Option<City> {
        match number {
            "1" => Some(City::Chicago),
            "2" => Some(City::NewYorkCity),
            "3" => Some(City::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selectable month. The datasets only cover January through June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar number, January = 1
    #[must_use]
    pub fn number(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    /// Month for a 1-based index into [`Month::ALL`]
    #[must_use]
    pub fn from_number(number: usize) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Month> {
        Self::ALL.into_iter().find(|month| month.name() == name)
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        calendar_month_title(self.number()).unwrap_or("")
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for any calendar month number (1-12)
#[must_use]
pub fn calendar_month_title(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| chrono::Month::try_from(n).ok())
        .map(|month| month.name())
}

const WEEKDAY_NAMES: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "monday", "Monday"),
    (Weekday::Tue, "tuesday", "Tuesday"),
    (Weekday::Wed, "wednesday", "Wednesday"),
    (Weekday::Thu, "thursday", "Thursday"),
    (Weekday::Fri, "friday", "Friday"),
    (Weekday::Sat, "saturday", "Saturday"),
    (Weekday::Sun, "sunday", "Sunday"),
];

/// Canonical lowercase weekday name
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize].1
}

/// Weekday name for display
#[must_use]
pub fn weekday_title(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize].2
}

/// Weekday whose three-letter abbreviation is `abbrev` (`mon`, `tue`, ...)
#[must_use]
pub fn weekday_from_abbreviation(abbrev: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(_, name, _)| name.get(..3) == Some(abbrev))
        .map(|(day, _, _)| *day)
}

/// Month restriction, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => month.fmt(f),
        }
    }
}

/// Weekday restriction, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// A resolved `(city, month, day)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    #[must_use]
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// No month or weekday restriction
    #[must_use]
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_lookup() {
        assert_eq!(City::from_name("new york city"), Some(City::NewYorkCity));
        assert_eq!(City::from_name("New York City"), None);
        assert_eq!(City::from_menu_number("3"), Some(City::Washington));
        assert_eq!(City::from_menu_number("4"), None);
    }

    #[test]
    fn test_month_numbers_round_trip_through_index() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number() as usize), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(7), None);
    }

    #[test]
    fn test_calendar_month_title_covers_whole_year() {
        assert_eq!(calendar_month_title(3), Some("March"));
        assert_eq!(calendar_month_title(12), Some("December"));
        assert_eq!(calendar_month_title(13), None);
        assert_eq!(Month::June.title(), "June");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Tue), "tuesday");
        assert_eq!(weekday_title(Weekday::Sun), "Sunday");
        assert_eq!(weekday_from_abbreviation("thu"), Some(Weekday::Thu));
        assert_eq!(weekday_from_abbreviation("fun"), None);
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(MonthFilter::All.to_string(), "all");
        assert_eq!(MonthFilter::Only(Month::April).to_string(), "april");
        assert_eq!(DayFilter::Only(Weekday::Fri).to_string(), "friday");
    }
}
