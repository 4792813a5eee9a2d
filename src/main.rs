//! bikeshare: explore US bike-share trip data
//!
//! Prompts for a city, month and weekday, then prints statistics about the
//! matching trips. Passing `--city` runs a single analysis without prompting.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bikeshare::filter_resolver::parse_filters;
use bikeshare::logging::init_logging;
use bikeshare::{BikeshareConfig, BikeshareError, Session, SessionOutcome};
use clap::Parser;
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bike-share trip data by city, month and weekday")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// City to analyze (name or 1-3); skips the interactive prompts
    #[arg(long)]
    city: Option<String>,

    /// Month filter used with --city: a name, 1-6 or "all"
    #[arg(long, requires = "city")]
    month: Option<String>,

    /// Week day filter used with --city: a name, an abbreviation or "all"
    #[arg(long, requires = "city")]
    day: Option<String>,

    /// Invalid answers allowed per filter before giving up (0 = unlimited)
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match BikeshareConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = &cli.data_dir {
        config.data.directory = dir.to_string_lossy().to_string();
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.prompt.max_attempts = max_attempts;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    init_logging(&config.logging, cli.verbose);

    if let Err(e) = ctrlc::set_handler(|| {
        println!("{}", SessionOutcome::Interrupted.farewell());
        std::process::exit(130);
    }) {
        warn!("Could not install Ctrl-C handler: {}", e);
    }

    let session = Session::from_config(&config);

    // Stdout stays unlocked so the Ctrl-C handler can still print
    let outcome = match &cli.city {
        Some(city) => {
            let filters = match parse_filters(
                city,
                cli.month.as_deref().unwrap_or("all"),
                cli.day.as_deref().unwrap_or("all"),
            ) {
                Ok(filters) => filters,
                Err(e) => {
                    eprintln!("{}", BikeshareError::validation(e.to_string()).user_message());
                    return ExitCode::from(2);
                }
            };
            session.run_once(&filters, io::stdout())
        }
        None => session.run(io::stdin().lock(), io::stdout()),
    };

    match outcome {
        Ok(outcome) => {
            println!("{}", outcome.farewell());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
