//! Trip records and filtered trip sets

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use super::{City, DayFilter, Filters, MonthFilter};

/// One bike trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Trip length in seconds
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time`, January = 1
    pub month: u32,
    /// Day of week of `start_time`
    pub day_of_week: Weekday,
}

impl TripRecord {
    /// Build a record, deriving the month and weekday columns from `start_time`
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        duration_seconds: f64,
        start_station: String,
        end_station: String,
    ) -> Self {
        Self {
            start_time,
            duration_seconds,
            start_station,
            end_station,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
        }
    }

    /// Start hour, 0-23
    #[must_use]
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    #[must_use]
    pub fn matches(&self, month: MonthFilter, day: DayFilter) -> bool {
        let month_ok = match month {
            MonthFilter::All => true,
            MonthFilter::Only(m) => self.month == m.number(),
        };
        let day_ok = match day {
            DayFilter::All => true,
            DayFilter::Only(d) => self.day_of_week == d,
        };
        month_ok && day_ok
    }
}

/// Optional columns carried by a city's dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TripSchema {
    pub has_user_type: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripSchema {
    /// Schema detected from a CSV header row
    #[must_use]
    pub fn from_headers<'a, I: IntoIterator<Item = &'a str>>(headers: I) -> Self {
        let mut schema = Self::default();
        for header in headers {
            match header.trim() {
                "User Type" => schema.has_user_type = true,
                "Gender" => schema.has_gender = true,
                "Birth Year" => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// Trips for one city, possibly restricted by month and weekday
#[derive(Debug, Clone, PartialEq)]
pub struct TripSet {
    pub city: City,
    pub schema: TripSchema,
    pub trips: Vec<TripRecord>,
}

impl TripSet {
    #[must_use]
    pub fn new(city: City, schema: TripSchema, trips: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            trips,
        }
    }

    /// Keep only trips matching both the month and weekday filter
    #[must_use]
    pub fn filtered(self, filters: &Filters) -> Self {
        if filters.month == MonthFilter::All && filters.day == DayFilter::All {
            return self;
        }
        let trips = self
            .trips
            .into_iter()
            .filter(|trip| trip.matches(filters.month, filters.day))
            .collect();
        Self { trips, ..self }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.trips.iter()
    }
}
