//! Most popular stations and trip

use super::frequency::{Count, FrequencyTable};
use crate::models::TripSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Count<String>,
    pub end_station: Count<String>,
    /// Most common (start, end) combination
    pub trip: Count<(String, String)>,
}

impl StationStats {
    /// `None` for an empty trip set
    #[must_use]
    pub fn compute(trips: &TripSet) -> Option<Self> {
        let start_station = most_used(trips.iter().map(|trip| trip.start_station.as_str()))?;
        let end_station = most_used(trips.iter().map(|trip| trip.end_station.as_str()))?;
        let trip = FrequencyTable::from_values(
            trips
                .iter()
                .map(|trip| (trip.start_station.as_str(), trip.end_station.as_str())),
        )
        .into_most_common()?
        .map(|(start, end)| (start.to_string(), end.to_string()));

        Some(Self {
            start_station,
            end_station,
            trip,
        })
    }
}

fn most_used<'a, I: IntoIterator<Item = &'a str>>(stations: I) -> Option<Count<String>> {
    FrequencyTable::from_values(stations)
        .into_most_common()
        .map(|count| count.map(str::to_string))
}
