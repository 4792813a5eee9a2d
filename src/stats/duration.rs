//! Trip duration totals and formatting

use crate::models::TripSet;

const SECONDS_PER_DAY: u64 = 24 * 3600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

impl DurationStats {
    /// `None` for an empty trip set
    #[must_use]
    pub fn compute(trips: &TripSet) -> Option<Self> {
        if trips.is_empty() {
            return None;
        }
        let total_seconds: f64 = trips.iter().map(|trip| trip.duration_seconds).sum();
        let mean_seconds = total_seconds / trips.len() as f64;

        Some(Self {
            trip_count: trips.len(),
            total_seconds,
            mean_seconds,
        })
    }
}

/// Render seconds as `[<d>days ]HHh MMmin SSsec`.
///
/// Fractions of a second are truncated. The day part only appears when
/// non-zero.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };

    let days = total / SECONDS_PER_DAY;
    let remainder = total % SECONDS_PER_DAY;
    let hours = remainder / 3600;
    let minutes = remainder % 3600 / 60;
    let secs = remainder % 60;

    let clock = format!("{hours:02}h {minutes:02}min {secs:02}sec");
    if days > 0 {
        format!("{days}days {clock}")
    } else {
        clock
    }
}
