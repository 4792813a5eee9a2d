//! Data models for the bikeshare explorer
//!
//! - Filters: cities, months, weekdays and the resolved filter triple
//! - Trip: trip records and filtered trip sets

pub mod filters;
pub mod trip;

pub use filters::{
    City, DayFilter, Filters, Month, MonthFilter, calendar_month_title, weekday_from_abbreviation,
    weekday_name, weekday_title,
};
pub use trip::{TripRecord, TripSchema, TripSet};
