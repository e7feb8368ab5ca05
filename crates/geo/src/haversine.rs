//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::GeoPoint;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two points in kilometers.
///
/// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// The result is symmetric and exactly zero for identical points.
///
/// # Example
/// ```
/// use geomatch_geo::{haversine_distance, GeoPoint};
///
/// let london = GeoPoint::new(51.5074, -0.1278).unwrap();
/// let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
///
/// let distance = haversine_distance(&london, &paris);
/// assert!((distance - 343.47).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Rounding can push `a` a hair outside [0, 1] for near-antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
