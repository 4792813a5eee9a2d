//! Error types and handling for the bikeshare explorer

use thiserror::Error;

use crate::filter_resolver::PromptError;

/// Main error type for the bikeshare explorer
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filter values that could not be normalized (non-interactive runs)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Trip data that exists but cannot be interpreted
    #[error("Data error in {source_name}: {message}")]
    Data {
        source_name: String,
        message: String,
    },

    /// Data source missing on disk
    #[error("Data source not found: {path}")]
    SourceNotFound { path: String },

    /// CSV decoding errors
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// Interactive prompting errors
    #[error("Prompt error: {source}")]
    Prompt {
        #[from]
        source: PromptError,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl BikeshareError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new data error for the named source
    pub fn data<N: Into<String>, S: Into<String>>(source_name: N, message: S) -> Self {
        Self::Data {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            BikeshareError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            BikeshareError::Validation { message } => format!("Invalid input: {message}"),
            BikeshareError::Data {
                source_name,
                message,
            } => format!("The trip data in {source_name} could not be read: {message}"),
            BikeshareError::SourceNotFound { path } => {
                format!("No trip data found at {path}. Check the data directory setting.")
            }
            BikeshareError::Csv { source } => format!("The trip data is not valid CSV: {source}"),
            BikeshareError::Prompt { source } => source.to_string(),
            BikeshareError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = BikeshareError::config("bad level");
        assert!(matches!(config_err, BikeshareError::Config { .. }));

        let validation_err = BikeshareError::validation("unknown city");
        assert!(matches!(validation_err, BikeshareError::Validation { .. }));

        let data_err = BikeshareError::data("chicago.csv", "row 3: bad timestamp");
        assert!(matches!(data_err, BikeshareError::Data { .. }));
        assert_eq!(
            data_err.to_string(),
            "Data error in chicago.csv: row 3: bad timestamp"
        );
    }

    #[test]
    fn test_user_messages() {
        let config_err = BikeshareError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = BikeshareError::validation("Unknown city atlantis");
        assert!(validation_err.user_message().contains("atlantis"));

        let missing = BikeshareError::SourceNotFound {
            path: "data/washington.csv".to_string(),
        };
        assert!(missing.user_message().contains("data/washington.csv"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BikeshareError = io_err.into();
        assert!(matches!(err, BikeshareError::Io { .. }));
    }

    #[test]
    fn test_prompt_error_conversion() {
        let err: BikeshareError = PromptError::InputClosed.into();
        assert!(matches!(err, BikeshareError::Prompt { .. }));
    }
}
