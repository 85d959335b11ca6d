//! Error types and handling for the `TripPlanner` application

use thiserror::Error;

/// Main error type for the `TripPlanner` application
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failures of the generative-AI upstream (network, timeout, empty reply)
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Exporter input contains a character the PDF encoding cannot represent
    #[error("Unencodable character '{character}' at line {line}, column {column}")]
    Encoding {
        character: char,
        line: usize,
        column: usize,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl PlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            PlannerError::Upstream { .. } => {
                "The itinerary service is currently unavailable. Please try again in a moment."
                    .to_string()
            }
            PlannerError::Encoding {
                character,
                line,
                column,
            } => {
                format!(
                    "The itinerary contains a character ('{character}') at line {line}, column {column} that cannot be included in the PDF."
                )
            }
            PlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            PlannerError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = PlannerError::config("missing API key");
        assert!(matches!(config_err, PlannerError::Config { .. }));

        let upstream_err = PlannerError::upstream("connection failed");
        assert!(matches!(upstream_err, PlannerError::Upstream { .. }));

        let validation_err = PlannerError::validation("unknown budget");
        assert!(matches!(validation_err, PlannerError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = PlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let upstream_err = PlannerError::upstream("test");
        assert!(upstream_err.user_message().contains("unavailable"));

        let validation_err = PlannerError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_encoding_error_reports_position() {
        let err = PlannerError::Encoding {
            character: '🌴',
            line: 3,
            column: 7,
        };
        let message = err.user_message();
        assert!(message.contains('🌴'));
        assert!(message.contains("line 3"));
        assert!(message.contains("column 7"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: PlannerError = io_err.into();
        assert!(matches!(planner_err, PlannerError::Io { .. }));
    }
}
