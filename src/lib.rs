//! bikeshare - explore US bike-share trip data
//!
//! This library resolves interactive city/month/weekday filters, loads the
//! matching trip records and computes descriptive statistics: busiest times,
//! busiest stations, trip durations and rider demographics.

pub mod config;
pub mod error;
pub mod filter_resolver;
pub mod logging;
pub mod models;
pub mod report;
pub mod session;
pub mod stats;
pub mod trips;

// Re-export core types for public API
pub use config::BikeshareConfig;
pub use error::BikeshareError;
pub use filter_resolver::{FilterResolver, PromptError, PromptOptions, ValidationError};
pub use models::{City, DayFilter, Filters, Month, MonthFilter, TripRecord, TripSet};
pub use session::{Session, SessionOutcome};
pub use trips::TripLoader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BikeshareError>;
