//! Aggregation passes over a filtered trip set
//!
//! Each pass is an independent, read-only function of a [`TripSet`]
//! returning `None` when there are no trips to describe:
//! - Time: most common month, weekday and start hour
//! - Station: most used start/end stations and station pair
//! - Duration: total and mean trip length
//! - User: user types, genders and birth years, where the dataset has them
//!
//! [`TripSet`]: crate::models::TripSet

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, format_duration};
pub use frequency::{Count, FrequencyTable, mode};
pub use station::StationStats;
pub use time::TimeStats;
pub use user::{BirthYearStats, Column, UserStats};
