//! Error types for the geo crate.

use std::fmt;

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Expected shape of a degrees-minutes-seconds token, shown to users on bad input.
pub const DMS_FORMAT_HINT: &str = "Use 'dd°mm'ss\"' (e.g., 42°30'10\")";

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south component
    Latitude,
    /// East/west component
    Longitude,
}

impl Axis {
    /// Inclusive bound on the absolute value of this axis, in degrees.
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors that can occur during geo operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Malformed degrees-minutes-seconds token
    #[error("Invalid degrees format '{input}'. {hint}")]
    Parse {
        /// The offending (normalized) token
        input: String,
        /// Expected format
        hint: &'static str,
    },

    /// Coordinate outside the valid range for its axis
    #[error("Invalid {axis} {value}. Must be between -{limit} and {limit} degrees.", limit = .axis.limit())]
    Range {
        /// Which coordinate was rejected
        axis: Axis,
        /// The rejected value, after hemisphere sign was applied
        value: f64,
    },

    /// Entry text that could not be split into coordinate fields
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

impl GeoError {
    pub(crate) fn parse(input: &str) -> Self {
        GeoError::Parse {
            input: input.to_string(),
            hint: DMS_FORMAT_HINT,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::Parse { .. } => GeoErrorCode::Parse,
            GeoError::Range { .. } => GeoErrorCode::Range,
            GeoError::InvalidEntry(_) => GeoErrorCode::InvalidEntry,
        }
    }
}

/// Stable numeric error codes.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Malformed DMS token
    Parse = 10001,
    /// Latitude or longitude out of range
    Range = 10002,
    /// Malformed entry text
    InvalidEntry = 10003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_hint() {
        let err = GeoError::parse("42a");
        let message = err.to_string();
        assert!(message.contains("dd°mm'ss\""), "{message}");
        assert!(message.contains("42°30'10\""), "{message}");
        assert_eq!(err.code(), GeoErrorCode::Parse);
    }

    #[test]
    fn test_range_error_names_axis_and_value() {
        let err = GeoError::Range { axis: Axis::Latitude, value: 91.0 };
        assert_eq!(
            err.to_string(),
            "Invalid latitude 91. Must be between -90 and 90 degrees."
        );

        let err = GeoError::Range { axis: Axis::Longitude, value: -181.5 };
        assert_eq!(
            err.to_string(),
            "Invalid longitude -181.5. Must be between -180 and 180 degrees."
        );
        assert_eq!(err.code() as u32, 10002);
    }
}
