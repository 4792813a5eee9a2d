//! Trip Loading Module
//!
//! Reads a city's CSV source into a [`TripSet`] and applies the month and
//! weekday filters.

use std::fs::File;
use std::io::Read;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::DataConfig;
use crate::models::{City, Filters, TripRecord, TripSchema, TripSet};
use crate::{BikeshareError, Result};

/// Columns every source must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["Start Time", "Trip Duration", "Start Station", "End Station"];

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// One CSV row as found on disk
#[derive(Debug, Deserialize)]
struct CsvTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Stored as a float in some exports ("1984.0")
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl CsvTrip {
    /// Convert a CSV row to a `TripRecord`
    fn to_trip_record(&self) -> std::result::Result<TripRecord, String> {
        let start_time = parse_timestamp(&self.start_time)
            .ok_or_else(|| format!("invalid Start Time '{}'", self.start_time))?;

        if !self.trip_duration.is_finite() || self.trip_duration < 0.0 {
            return Err(format!("invalid Trip Duration {}", self.trip_duration));
        }

        let birth_year = match self.birth_year {
            Some(year) if year.is_finite() => Some(year.trunc() as i32),
            Some(year) => return Err(format!("invalid Birth Year {year}")),
            None => None,
        };

        let mut record = TripRecord::new(
            start_time,
            self.trip_duration,
            self.start_station.clone(),
            self.end_station.clone(),
        );
        record.user_type = non_blank(self.user_type.as_deref());
        record.gender = non_blank(self.gender.as_deref());
        record.birth_year = birth_year;
        Ok(record)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a trip start timestamp
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Loads trip data for the configured cities
#[derive(Debug, Clone)]
pub struct TripLoader {
    sources: DataConfig,
}

impl TripLoader {
    pub fn new(sources: DataConfig) -> Self {
        Self { sources }
    }

    /// Load a city's trips and keep those matching the filters
    pub fn load_filtered(&self, filters: &Filters) -> Result<TripSet> {
        let trips = self.load(filters.city)?;
        let total = trips.len();
        let filtered = trips.filtered(filters);

        info!(
            city = filters.city.name(),
            month = %filters.month,
            day = %filters.day,
            "Kept {} of {} trips",
            filtered.len(),
            total
        );
        Ok(filtered)
    }

    /// Load every trip for a city
    pub fn load(&self, city: City) -> Result<TripSet> {
        let path = self.sources.path_for(city);
        info!("Loading {} trips from: {:?}", city.title(), path);

        if !path.exists() {
            return Err(BikeshareError::SourceNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let file = File::open(&path)?;
        Self::read_trips(city, &path.to_string_lossy(), file)
    }

    /// Parse CSV trip data from any reader
    pub fn read_trips<R: Read>(city: City, source_name: &str, reader: R) -> Result<TripSet> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|header| header == **column))
        {
            return Err(BikeshareError::data(
                source_name,
                format!("missing required column '{missing}'"),
            ));
        }
        let schema = TripSchema::from_headers(headers.iter());
        debug!(?schema, "Detected optional columns in {}", source_name);

        let mut trips = Vec::new();
        for (index, row) in csv_reader.deserialize::<CsvTrip>().enumerate() {
            // header is line 1
            let line = index + 2;
            let row = row.map_err(|e| BikeshareError::data(source_name, format!("line {line}: {e}")))?;
            let record = row
                .to_trip_record()
                .map_err(|message| BikeshareError::data(source_name, format!("line {line}: {message}")))?;
            trips.push(record);
        }

        debug!("Loaded {} trips from {}", trips.len(), source_name);
        Ok(TripSet::new(city, schema, trips))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayFilter, Month, MonthFilter};
    use chrono::{Datelike, Timelike, Weekday};
    use std::io::Write;
    use tempfile::TempDir;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-03-07 08:15:00,2017-03-07 08:25:00,600,Canal St,Clark St,Subscriber,Male,1984.0
2,2017-03-08 09:00:00,2017-03-08 09:05:00,300,Clark St,Canal St,Customer,,
3,2017-04-04 17:30:00,2017-04-04 17:40:00,600,Canal St,Clark St,Subscriber,Female,1990.0
";

    const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn test_read_trips_with_all_columns() {
        let set = TripLoader::read_trips(City::Chicago, "chicago.csv", CHICAGO_CSV.as_bytes()).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.schema,
            TripSchema {
                has_user_type: true,
                has_gender: true,
                has_birth_year: true
            }
        );

        let first = &set.trips[0];
        assert_eq!(first.month, 3);
        assert_eq!(first.day_of_week, Weekday::Tue);
        assert_eq!(first.start_hour(), 8);
        assert_eq!(first.birth_year, Some(1984));
        assert_eq!(first.gender.as_deref(), Some("Male"));

        let second = &set.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn test_read_trips_without_demographics() {
        let set =
            TripLoader::read_trips(City::Washington, "washington.csv", WASHINGTON_CSV.as_bytes()).unwrap();

        assert!(set.schema.has_user_type);
        assert!(!set.schema.has_gender);
        assert!(!set.schema.has_birth_year);
        assert_eq!(set.trips[0].duration_seconds, 489.066);
        assert_eq!(set.trips[0].gender, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,Trip Duration,Start Station\n2017-01-01 00:00:00,10,A\n";
        let err = TripLoader::read_trips(City::Chicago, "broken.csv", csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column 'End Station'"));
    }

    #[test]
    fn test_bad_timestamp_names_the_line() {
        let csv = "Start Time,Trip Duration,Start Station,End Station\n\
                   2017-01-01 00:00:00,10,A,B\n\
                   yesterday,10,A,B\n";
        let err = TripLoader::read_trips(City::Chicago, "broken.csv", csv.as_bytes()).unwrap_err();
        assert!(matches!(err, BikeshareError::Data { .. }));
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let csv = "Start Time,Trip Duration,Start Station,End Station\n2017-01-01 00:00:00,-5,A,B\n";
        let err = TripLoader::read_trips(City::Chicago, "broken.csv", csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid Trip Duration"));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let plain = parse_timestamp("2017-01-01 00:07:57").unwrap();
        assert_eq!((plain.month(), plain.hour(), plain.second()), (1, 0, 57));

        assert!(parse_timestamp("2017-06-21T08:36:34").is_some());
        assert!(parse_timestamp("2017-06-21 08:36:34.250").is_some());
        assert!(parse_timestamp("21/06/2017").is_none());
    }

    fn loader_with(files: &[(&str, &str)]) -> (TempDir, TripLoader) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let mut file = File::create(dir.path().join(name)).unwrap();
            file.write_all(content.as_bytes()).unwrap();
        }
        let sources = DataConfig {
            directory: dir.path().to_string_lossy().to_string(),
            ..DataConfig::default()
        };
        (dir, TripLoader::new(sources))
    }

    #[test]
    fn test_load_filtered_by_month() {
        let (_dir, loader) = loader_with(&[("chicago.csv", CHICAGO_CSV)]);
        let filters = Filters::new(City::Chicago, MonthFilter::Only(Month::March), DayFilter::All);

        let set = loader.load_filtered(&filters).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|trip| trip.month == 3));
    }

    #[test]
    fn test_load_is_repeatable() {
        let (_dir, loader) = loader_with(&[("chicago.csv", CHICAGO_CSV)]);
        let filters = Filters::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Tue));

        let first = loader.load_filtered(&filters).unwrap();
        let second = loader.load_filtered(&filters).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_missing_source() {
        let (_dir, loader) = loader_with(&[]);
        let err = loader.load(City::Washington).unwrap_err();
        assert!(matches!(err, BikeshareError::SourceNotFound { .. }));
    }
}
