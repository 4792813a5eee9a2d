//! Configuration management for the bikeshare explorer
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates the result.

use crate::BikeshareError;
use crate::filter_resolver::PromptOptions;
use crate::models::City;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "bikeshare.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BikeshareConfig {
    /// Trip data sources
    #[serde(default)]
    pub data: DataConfig,
    /// Interactive prompt behaviour
    #[serde(default)]
    pub prompt: PromptConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where each city's trips are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the CSV files
    #[serde(default = "default_data_directory")]
    pub directory: String,
    #[serde(default = "default_chicago_file")]
    pub chicago: String,
    #[serde(default = "default_new_york_city_file")]
    pub new_york_city: String,
    #[serde(default = "default_washington_file")]
    pub washington: String,
}

/// Prompt settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Attempts per filter before giving up, 0 for unlimited
    #[serde(default)]
    pub max_attempts: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_data_directory() -> String {
    ".".to_string()
}

fn default_chicago_file() -> String {
    "chicago.csv".to_string()
}

fn default_new_york_city_file() -> String {
    "new_york_city.csv".to_string()
}

fn default_washington_file() -> String {
    "washington.csv".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_data_directory(),
            chicago: default_chicago_file(),
            new_york_city: default_new_york_city_file(),
            washington: default_washington_file(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { max_attempts: 0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DataConfig {
    /// File name configured for a city
    #[must_use]
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }

    /// Full path of a city's data source
    #[must_use]
    pub fn path_for(&self, city: City) -> PathBuf {
        Path::new(&self.directory).join(self.file_for(city))
    }
}

impl PromptConfig {
    #[must_use]
    pub fn options(&self) -> PromptOptions {
        PromptOptions::with_max_attempts(self.max_attempts)
    }
}

impl BikeshareConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given file (if any) and environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let explicit = config_path.is_some();
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if explicit && !config_file.exists() {
            return Err(BikeshareError::config(format!(
                "Config file not found: {}",
                config_file.display()
            ))
            .into());
        }

        let settings = Config::builder()
            .add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            // BIKESHARE_PROMPT__MAX_ATTEMPTS=3, BIKESHARE_DATA__DIRECTORY=/srv/bikeshare
            .add_source(
                Environment::with_prefix("BIKESHARE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: BikeshareConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Replace blank values with defaults
    pub fn apply_defaults(&mut self) {
        if self.data.directory.is_empty() {
            self.data.directory = default_data_directory();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_data_sources()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_data_sources(&self) -> Result<()> {
        for city in City::ALL {
            if self.data.file_for(city).trim().is_empty() {
                return Err(BikeshareError::config(format!(
                    "No data file configured for {}",
                    city.title()
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.prompt.max_attempts > 100 {
            return Err(
                BikeshareError::config("Prompt max attempts cannot exceed 100").into(),
            );
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BikeshareError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(BikeshareError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
