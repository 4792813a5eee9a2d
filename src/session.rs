//! Analysis sessions
//!
//! A session resolves filters, loads and filters the trips, runs the four
//! statistics passes and asks whether to start over.

use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::config::BikeshareConfig;
use crate::filter_resolver::{FilterResolver, PromptError, PromptOptions, read_line};
use crate::models::Filters;
use crate::report::{self, GREETING};
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::trips::TripLoader;
use crate::Result;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user declined to restart
    Completed,
    /// Interrupted, or input ended while filters were being chosen
    Interrupted,
}

impl SessionOutcome {
    /// Closing line for this outcome
    #[must_use]
    pub fn farewell(self) -> &'static str {
        match self {
            SessionOutcome::Completed => "Hope you enjoyed the analysis and found no flaws ;-)",
            SessionOutcome::Interrupted => "\nOK, you want to stop. That's fine with me.",
        }
    }
}

pub struct Session {
    loader: TripLoader,
    prompt: PromptOptions,
}

impl Session {
    pub fn new(loader: TripLoader, prompt: PromptOptions) -> Self {
        Self { loader, prompt }
    }

    pub fn from_config(config: &BikeshareConfig) -> Self {
        Self::new(TripLoader::new(config.data.clone()), config.prompt.options())
    }

    /// Prompt for filters and analyze until the user declines to restart
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<SessionOutcome> {
        writeln!(output, "{GREETING}")?;

        loop {
            let resolved = FilterResolver::new(&mut input, &mut output, self.prompt).resolve();
            let filters = match resolved {
                Ok(filters) => filters,
                Err(PromptError::InputClosed) => {
                    info!("Input closed while choosing filters");
                    return Ok(SessionOutcome::Interrupted);
                }
                Err(e) => return Err(e.into()),
            };

            self.analyze(&filters, &mut output)?;

            write!(output, "{RESTART_PROMPT}")?;
            output.flush()?;
            let restart = read_line(&mut input)?
                .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes"));
            if !restart {
                return Ok(SessionOutcome::Completed);
            }
            debug!("Restarting session");
        }
    }

    /// Analyze one set of filters without prompting
    pub fn run_once<W: Write>(&self, filters: &Filters, mut output: W) -> Result<SessionOutcome> {
        writeln!(output, "{GREETING}")?;
        self.analyze(filters, &mut output)?;
        Ok(SessionOutcome::Completed)
    }

    /// Load the filtered trips and print every statistics pass
    pub fn analyze<W: Write>(&self, filters: &Filters, out: &mut W) -> Result<()> {
        report::filter_status(out, filters)?;
        let trips = self.loader.load_filtered(filters)?;

        let started = Instant::now();
        let time = TimeStats::compute(&trips);
        report::time_stats(out, time.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stations = StationStats::compute(&trips);
        report::station_stats(out, stations.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let durations = DurationStats::compute(&trips);
        report::duration_stats(out, durations.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let users = UserStats::compute(&trips);
        report::user_stats(out, users.as_ref(), started.elapsed())?;

        out.flush()?;
        Ok(())
    }
}
