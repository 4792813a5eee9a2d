//! Human-readable rendering of filter status and statistics
//!
//! Every function writes to any [`Write`] so a session can be captured in
//! tests.

use std::io::{self, Write};
use std::time::Duration;

use crate::filter_resolver::SEPARATOR;
use crate::models::{DayFilter, Filters, MonthFilter, calendar_month_title, weekday_title};
use crate::stats::{
    Column, DurationStats, FrequencyTable, StationStats, TimeStats, UserStats, format_duration,
};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Which data is loaded and which filters are active
pub fn filter_status<W: Write>(out: &mut W, filters: &Filters) -> io::Result<()> {
    writeln!(out, "Importing sharing data for: {}", filters.city.title())?;
    match filters.month {
        MonthFilter::Only(month) => {
            writeln!(out, "Month filtering active and set to {}", month.title())?
        }
        MonthFilter::All => writeln!(out, "Month filtering inactive.")?,
    }
    match filters.day {
        DayFilter::Only(day) => {
            writeln!(out, "Week-day filtering active and set to {}", weekday_title(day))?
        }
        DayFilter::All => writeln!(out, "Week-day filtering inactive.")?,
    }
    Ok(())
}

pub fn time_stats<W: Write>(out: &mut W, stats: Option<&TimeStats>, elapsed: Duration) -> io::Result<()> {
    section(out, "Calculating The Most Frequent Times of Travel...", elapsed, |out| {
        let Some(stats) = stats else {
            return writeln!(out, "{NO_TRIPS}");
        };
        let month = calendar_month_title(stats.most_common_month)
            .map_or_else(|| format!("month {}", stats.most_common_month), str::to_string);
        writeln!(out, "Most travels in month: {month}")?;
        writeln!(
            out,
            "Most travels on following week day: {}",
            weekday_title(stats.most_common_day)
        )?;
        writeln!(out, "Most travels in this hour: {}", stats.most_common_hour)
    })
}

pub fn station_stats<W: Write>(
    out: &mut W,
    stats: Option<&StationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    section(out, "Calculating The Most Popular Stations and Trip...", elapsed, |out| {
        let Some(stats) = stats else {
            return writeln!(out, "{NO_TRIPS}");
        };
        writeln!(
            out,
            "Most used Start Station: \"{}\" ({} times)",
            stats.start_station.value, stats.start_station.count
        )?;
        writeln!(
            out,
            "Most used End Station: \"{}\" ({} times)",
            stats.end_station.value, stats.end_station.count
        )?;
        let (start, end) = &stats.trip.value;
        writeln!(
            out,
            "Most common ride is \"{start}\" --> \"{end}\" ({} times)",
            stats.trip.count
        )
    })
}

pub fn duration_stats<W: Write>(
    out: &mut W,
    stats: Option<&DurationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    section(out, "Calculating Trip Duration...", elapsed, |out| {
        let Some(stats) = stats else {
            return writeln!(out, "{NO_TRIPS}");
        };
        writeln!(out, "Total travel time is: {}", format_duration(stats.total_seconds))?;
        writeln!(out, "Mean travel time is: {}", format_duration(stats.mean_seconds))
    })
}

pub fn user_stats<W: Write>(out: &mut W, stats: Option<&UserStats>, elapsed: Duration) -> io::Result<()> {
    section(out, "Calculating User Stats...", elapsed, |out| {
        let Some(stats) = stats else {
            return writeln!(out, "{NO_TRIPS}");
        };

        category_column(out, "User Type", &stats.user_types)?;
        category_column(out, "Gender", &stats.genders)?;

        match &stats.birth_years {
            Column::Present(Some(years)) => {
                writeln!(out, "Birth year, oldest: {}", years.earliest)?;
                writeln!(out, "Birth year, most recent: {}", years.most_recent)?;
                writeln!(out, "Birth year, most found: {}", years.most_common)
            }
            Column::Present(None) => {
                writeln!(out, "There are no Birth Year values in the selected trips")
            }
            Column::Missing => missing_column(out, "Birth Year"),
        }
    })
}

fn category_column<W: Write>(
    out: &mut W,
    label: &str,
    column: &Column<FrequencyTable<String>>,
) -> io::Result<()> {
    match column {
        Column::Present(table) => {
            writeln!(out, "This is how often each {label} has used the service:")?;
            for entry in table.entries() {
                writeln!(out, " - {}: {}", entry.value, entry.count)?;
            }
            Ok(())
        }
        Column::Missing => missing_column(out, label),
    }
}

fn missing_column<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "There is no {label} information in the given data set")
}

fn section<W, F>(out: &mut W, heading: &str, elapsed: Duration, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out, "\n{heading}\n")?;
    body(&mut *out)?;
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Month};
    use crate::stats::{BirthYearStats, Count};
    use chrono::Weekday;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_filter_status_active() {
        let filters = Filters::new(
            City::NewYorkCity,
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Tue),
        );
        let text = render(|out| filter_status(out, &filters));
        assert_eq!(
            text,
            "Importing sharing data for: New York City\n\
             Month filtering active and set to March\n\
             Week-day filtering active and set to Tuesday\n"
        );
    }

    #[test]
    fn test_filter_status_inactive() {
        let text = render(|out| filter_status(out, &Filters::unfiltered(City::Chicago)));
        assert!(text.contains("Month filtering inactive."));
        assert!(text.contains("Week-day filtering inactive."));
    }

    #[test]
    fn test_time_stats_rendering() {
        let stats = TimeStats {
            most_common_month: 6,
            most_common_day: Weekday::Wed,
            most_common_hour: 17,
        };
        let text = render(|out| time_stats(out, Some(&stats), Duration::from_millis(3)));
        assert!(text.starts_with("\nCalculating The Most Frequent Times of Travel...\n\n"));
        assert!(text.contains("Most travels in month: June\n"));
        assert!(text.contains("Most travels on following week day: Wednesday\n"));
        assert!(text.contains("Most travels in this hour: 17\n"));
        assert!(text.contains("This took 0.003000 seconds."));
        assert!(text.ends_with(&format!("{SEPARATOR}\n")));
    }

    #[test]
    fn test_station_stats_rendering() {
        let stats = StationStats {
            start_station: Count {
                value: "Streeter Dr & Grand Ave".to_string(),
                count: 6911,
            },
            end_station: Count {
                value: "Canal St".to_string(),
                count: 12,
            },
            trip: Count {
                value: ("Lake Shore Dr".to_string(), "Streeter Dr".to_string()),
                count: 854,
            },
        };
        let text = render(|out| station_stats(out, Some(&stats), Duration::ZERO));
        assert!(text.contains("Most used Start Station: \"Streeter Dr & Grand Ave\" (6911 times)"));
        assert!(text.contains("Most common ride is \"Lake Shore Dr\" --> \"Streeter Dr\" (854 times)"));
    }

    #[test]
    fn test_duration_stats_rendering() {
        let stats = DurationStats {
            trip_count: 2,
            total_seconds: 90000.0,
            mean_seconds: 45000.0,
        };
        let text = render(|out| duration_stats(out, Some(&stats), Duration::ZERO));
        assert!(text.contains("Total travel time is: 1days 01h 00min 00sec"));
        assert!(text.contains("Mean travel time is: 12h 30min 00sec"));
    }

    #[test]
    fn test_user_stats_without_demographics() {
        let stats = UserStats {
            user_types: Column::Present(FrequencyTable::from_values(vec![
                "Subscriber".to_string(),
                "Customer".to_string(),
                "Subscriber".to_string(),
            ])),
            genders: Column::Missing,
            birth_years: Column::Missing,
        };
        let text = render(|out| user_stats(out, Some(&stats), Duration::ZERO));
        assert!(text.contains("This is how often each User Type has used the service:\n - Subscriber: 2\n - Customer: 1\n"));
        assert!(text.contains("There is no Gender information in the given data set"));
        assert!(text.contains("There is no Birth Year information in the given data set"));
    }

    #[test]
    fn test_user_stats_with_birth_years() {
        let stats = UserStats {
            user_types: Column::Missing,
            genders: Column::Present(FrequencyTable::from_values(vec!["Male".to_string()])),
            birth_years: Column::Present(Some(BirthYearStats {
                earliest: 1899,
                most_recent: 2016,
                most_common: 1989,
            })),
        };
        let text = render(|out| user_stats(out, Some(&stats), Duration::ZERO));
        assert!(text.contains("There is no User Type information in the given data set"));
        assert!(text.contains(" - Male: 1"));
        assert!(text.contains("Birth year, oldest: 1899"));
        assert!(text.contains("Birth year, most recent: 2016"));
        assert!(text.contains("Birth year, most found: 1989"));
    }

    #[test]
    fn test_empty_set_message() {
        let text = render(|out| user_stats(out, None, Duration::ZERO));
        assert!(text.contains(NO_TRIPS));
    }
}
