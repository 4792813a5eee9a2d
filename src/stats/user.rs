//! Rider demographics

use super::frequency::{FrequencyTable, mode};
use crate::models::TripSet;

/// A statistic over an optional column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column<T> {
    /// The dataset has no such column
    Missing,
    Present(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Column<FrequencyTable<String>>,
    pub genders: Column<FrequencyTable<String>>,
    /// `Present(None)` when the column exists but every value is blank
    pub birth_years: Column<Option<BirthYearStats>>,
}

impl UserStats {
    /// `None` for an empty trip set
    #[must_use]
    pub fn compute(trips: &TripSet) -> Option<Self> {
        if trips.is_empty() {
            return None;
        }
        let schema = trips.schema;

        let user_types = if schema.has_user_type {
            Column::Present(category_counts(
                trips.iter().filter_map(|trip| trip.user_type.as_deref()),
            ))
        } else {
            Column::Missing
        };

        let genders = if schema.has_gender {
            Column::Present(category_counts(
                trips.iter().filter_map(|trip| trip.gender.as_deref()),
            ))
        } else {
            Column::Missing
        };

        let birth_years = if schema.has_birth_year {
            Column::Present(birth_year_stats(trips))
        } else {
            Column::Missing
        };

        Some(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

fn category_counts<'a, I: IntoIterator<Item = &'a str>>(values: I) -> FrequencyTable<String> {
    FrequencyTable::from_values(values).map_values(str::to_string)
}

fn birth_year_stats(trips: &TripSet) -> Option<BirthYearStats> {
    let years = || trips.iter().filter_map(|trip| trip.birth_year);
    Some(BirthYearStats {
        earliest: years().min()?,
        most_recent: years().max()?,
        most_common: mode(years())?,
    })
}
