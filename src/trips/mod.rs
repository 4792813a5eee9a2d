//! Trip data loading and filtering

pub mod loader;

pub use loader::{REQUIRED_COLUMNS, TripLoader, parse_timestamp};
