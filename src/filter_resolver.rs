//! Filter Resolution Module
//!
//! Turns free-text answers into a canonical `(city, month, day)` triple.
//! Normalization is done by the pure `parse_*` functions; [`FilterResolver`]
//! only prompts, prints rejections and asks again.
//!
//! Retrying is unbounded unless [`PromptOptions::max_attempts`] is set, so a
//! non-interactive caller must either supply a valid answer for every field
//! or bound the attempts. End of input is reported as
//! [`PromptError::InputClosed`].

use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;

use thiserror::Error;
use tracing::debug;

use crate::models::{City, DayFilter, Filters, Month, MonthFilter, weekday_from_abbreviation};

pub const CITY_PROMPT: &str =
    "Which city do you want data for: 1) Chicago, 2) New York City or 3) Washington\n?  ";
pub const MONTH_PROMPT: &str = "Which month to analyse (all, January, February, ..., June)\n?  ";
pub const DAY_PROMPT: &str = "Which day of week to analyse (all, Monday, Tuesday...)\n?  ";

/// Printed after a complete set of filters and after each statistics block
pub const SEPARATOR: &str = "----------------------------------------";

/// Rejected filter input. The message is shown to the user before re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown city {0} !? Try Again...")]
    UnknownCity(String),

    #[error("Unknown month {0} . Leave empty or type \"all\" if no filtering desired")]
    UnknownMonth(String),

    #[error("Unknown week day {0} . Leave empty or type \"all\" if no filtering desired")]
    UnknownWeekday(String),
}

/// Failure of the prompting loop itself
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended before all filters were chosen")]
    InputClosed,

    #[error("No valid {field} after {attempts} attempts")]
    TooManyAttempts { field: &'static str, attempts: u32 },

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A normalized value plus an optional notice explaining how it was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub notice: Option<String>,
}

impl<T> Parsed<T> {
    pub fn plain(value: T) -> Self {
        Self {
            value,
            notice: None,
        }
    }

    pub fn with_notice<S: Into<String>>(value: T, notice: S) -> Self {
        Self {
            value,
            notice: Some(notice.into()),
        }
    }
}

/// Normalize a city answer: a canonical name in any case, or `1`/`2`/`3`
pub fn parse_city(raw: &str) -> Result<City, ValidationError> {
    let answer = raw.trim().to_lowercase();
    City::from_menu_number(&answer)
        .or_else(|| City::from_name(&answer))
        .ok_or(ValidationError::UnknownCity(answer))
}

/// Normalize a month answer.
///
/// Empty input means no filter. A number is a 1-based index into the
/// selectable months (January to June).
pub fn parse_month(raw: &str) -> Result<Parsed<MonthFilter>, ValidationError> {
    let answer = raw.trim().to_lowercase();
    if answer.is_empty() {
        return Ok(Parsed::with_notice(
            MonthFilter::All,
            "Month left empty - assuming no filtering desired.",
        ));
    }
    if answer == "all" {
        return Ok(Parsed::plain(MonthFilter::All));
    }
    if let Ok(number) = answer.parse::<usize>() {
        return match Month::from_number(number) {
            Some(month) => Ok(Parsed::with_notice(
                MonthFilter::Only(month),
                format!("Mapped num month {number} to string {month}"),
            )),
            None => Err(ValidationError::UnknownMonth(answer)),
        };
    }
    Month::from_name(&answer)
        .map(|month| Parsed::plain(MonthFilter::Only(month)))
        .ok_or(ValidationError::UnknownMonth(answer))
}

/// Normalize a weekday answer.
///
/// Empty input means no filter; otherwise the first three letters must
/// name a weekday, so `tue`, `tues` and `Tuesday` are all accepted.
pub fn parse_day(raw: &str) -> Result<Parsed<DayFilter>, ValidationError> {
    let answer = raw.trim().to_lowercase();
    if answer.is_empty() {
        return Ok(Parsed::with_notice(
            DayFilter::All,
            "Weekday left empty - assuming no filtering desired.",
        ));
    }
    if answer == "all" {
        return Ok(Parsed::plain(DayFilter::All));
    }
    answer
        .get(..3)
        .and_then(weekday_from_abbreviation)
        .map(|day| Parsed::plain(DayFilter::Only(day)))
        .ok_or(ValidationError::UnknownWeekday(answer))
}

/// Normalize all three filters at once, for runs without prompting
pub fn parse_filters(city: &str, month: &str, day: &str) -> Result<Filters, ValidationError> {
    Ok(Filters::new(
        parse_city(city)?,
        parse_month(month)?.value,
        parse_day(day)?.value,
    ))
}

/// Read one line without its line terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Retry policy for the prompting loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Attempts allowed per field; `None` asks forever
    pub max_attempts: Option<NonZeroU32>,
}

impl PromptOptions {
    /// `0` means unlimited
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts: NonZeroU32::new(max_attempts),
        }
    }
}

/// Prompts for each filter until it normalizes
pub struct FilterResolver<R, W> {
    input: R,
    output: W,
    options: PromptOptions,
}

impl<R: BufRead, W: Write> FilterResolver<R, W> {
    pub fn new(input: R, output: W, options: PromptOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Ask for city, month and day in turn
    pub fn resolve(&mut self) -> Result<Filters, PromptError> {
        let city = self.resolve_city()?;
        let month = self.resolve_month()?;
        let day = self.resolve_day()?;
        writeln!(self.output, "{SEPARATOR}")?;

        debug!(%city, %month, %day, "Resolved filters");
        Ok(Filters::new(city, month, day))
    }

    pub fn resolve_city(&mut self) -> Result<City, PromptError> {
        self.ask("city", CITY_PROMPT, |raw| parse_city(raw).map(Parsed::plain))
    }

    pub fn resolve_month(&mut self) -> Result<MonthFilter, PromptError> {
        self.ask("month", MONTH_PROMPT, parse_month)
    }

    pub fn resolve_day(&mut self) -> Result<DayFilter, PromptError> {
        self.ask("week day", DAY_PROMPT, parse_day)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask<T, F>(&mut self, field: &'static str, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<Parsed<T>, ValidationError>,
    {
        let mut attempts = 0;
        loop {
            if let Some(max) = self.options.max_attempts {
                if attempts >= max.get() {
                    return Err(PromptError::TooManyAttempts { field, attempts });
                }
            }
            attempts += 1;

            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let raw = read_line(&mut self.input)?.ok_or(PromptError::InputClosed)?;

            match parse(&raw) {
                Ok(parsed) => {
                    if let Some(notice) = parsed.notice {
                        writeln!(self.output, "{notice}")?;
                    }
                    return Ok(parsed.value);
                }
                Err(e) => {
                    debug!(field, attempts, input = raw.as_str(), "Rejected filter input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}
