//! Error handling with codes and recovery suggestions

use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Reading a file failed
    IoError = 2000,
    /// File given explicitly does not exist
    FileNotFound = 2001,
    /// Configuration file is not valid TOML or has wrong types
    ConfigParseError = 3002,
    /// Configuration parsed but holds an unusable value
    InvalidConfigValue = 3004,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with a code and optional recovery suggestion
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: None,
            source: None,
        }
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// A file named on the command line is missing
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    /// The configuration file could not be parsed
    pub fn config_parse(path: impl AsRef<std::path::Path>, source: toml::de::Error) -> Self {
        Self::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}", path.as_ref().display()),
        )
        .with_source(source)
        .with_suggestion("See geomatch.example.toml for the expected layout")
    }

    /// A configuration value is out of its allowed range
    pub fn invalid_config_value(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfigValue, message)
    }
}

/// Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::ConfigParseError.category(), "Configuration");
    }

    #[test]
    fn test_error_display_with_suggestion() {
        let err = Error::file_not_found("missing.toml");
        let text = err.to_string();
        assert!(text.starts_with("[E2001] File not found: missing.toml"));
        assert!(text.contains("Suggestion:"));
    }

    #[test]
    fn test_error_without_suggestion() {
        let err = Error::invalid_config_value("precision too large");
        assert_eq!(err.to_string(), "[E3004] precision too large");
    }
}
