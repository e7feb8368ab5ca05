//! Coordinate normalization, great-circle distances and nearest-point matching.
//!
//! This crate provides:
//! - Cleanup and parsing of degrees-minutes-seconds (DMS) coordinate tokens
//! - Latitude/longitude range validation
//! - Haversine distance calculations on a spherical Earth
//! - All-pairs nearest-point matching with optional parallelism
//!
//! # Example
//!
//! ```
//! use geomatch_geo::{haversine_distance, match_closest, GeoPoint};
//!
//! let new_york = GeoPoint::new(40.7128, -74.0060).unwrap();
//! let boston = GeoPoint::new(42.3601, -71.0589).unwrap();
//! let chicago = GeoPoint::new(41.8781, -87.6298).unwrap();
//!
//! let distance_km = haversine_distance(&new_york, &boston);
//! assert!((distance_km - 306.0).abs() < 5.0);
//!
//! let matches = match_closest(&[new_york], &[chicago, boston]);
//! assert_eq!(matches[0].matched, Some(boston));
//! ```

mod dms;
mod error;
mod haversine;
mod normalize;
pub mod entry;
pub mod matcher;

use std::fmt;

use serde::Serialize;

pub use dms::parse_dms;
pub use entry::{parse_decimal_pair, parse_dms_field, parse_dms_pair, parse_entries, InputFormat};
pub use error::{Axis, GeoError, GeoErrorCode, Result, DMS_FORMAT_HINT};
pub use haversine::{haversine_distance, EARTH_RADIUS_KM};
pub use matcher::{match_closest, MatchResult};
#[cfg(feature = "parallel")]
pub use matcher::{match_closest_parallel, match_closest_with_threshold};
pub use normalize::normalize;

/// A validated geographic point in decimal degrees.
///
/// The only way to obtain one is through [`GeoPoint::new`] (or the parsers
/// built on it), so every instance satisfies `-90 <= latitude <= 90` and
/// `-180 <= longitude <= 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point after range-checking both components.
    ///
    /// # Errors
    /// Returns [`GeoError::Range`] naming the first out-of-range component.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_coordinates(latitude, longitude)?;
        Ok(Self { latitude, longitude })
    }

    /// Latitude in degrees (-90 to 90)
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to 180)
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.latitude, self.longitude)
    }
}

/// Checks that a latitude/longitude pair lies on the globe.
///
/// Bounds are inclusive, so `(90, 180)` and `(-90, -180)` pass. Must be
/// called after any hemisphere sign has been applied.
///
/// # Errors
/// [`GeoError::Range`] for the latitude first, then the longitude. NaN is
/// rejected as out of range.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    for (axis, value) in [(Axis::Latitude, latitude), (Axis::Longitude, longitude)] {
        let limit = axis.limit();
        if !(-limit..=limit).contains(&value) {
            return Err(GeoError::Range { axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = GeoPoint::new(52.5200, 13.4050).unwrap();
        assert_eq!(point.latitude(), 52.5200);
        assert_eq!(point.longitude(), 13.4050);
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        for (lat, lon) in [(0.0, 0.0), (90.0, 180.0), (-90.0, -180.0), (45.5, -120.5)] {
            assert!(validate_coordinates(lat, lon).is_ok(), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for (lat, lon) in [(91.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (0.0, -181.0)] {
            assert!(validate_coordinates(lat, lon).is_err(), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_validate_reports_axis() {
        let err = validate_coordinates(0.0, 181.0).unwrap_err();
        assert_eq!(err, GeoError::Range { axis: Axis::Longitude, value: 181.0 });

        // Latitude is checked first when both are bad.
        let err = validate_coordinates(-95.0, 200.0).unwrap_err();
        assert_eq!(err, GeoError::Range { axis: Axis::Latitude, value: -95.0 });
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_point_from_tuple() {
        let point: GeoPoint = (52.5200, 13.4050).try_into().unwrap();
        assert_eq!(point.latitude(), 52.5200);
        assert!(GeoPoint::try_from((100.0, 0.0)).is_err());
    }

    #[test]
    fn test_point_display() {
        let point = GeoPoint::new(40.7128, -74.006).unwrap();
        assert_eq!(point.to_string(), "(40.7128, -74.006)");
        assert_eq!(GeoPoint::new(0.0, 180.0).unwrap().to_string(), "(0.0, 180.0)");
    }
}
