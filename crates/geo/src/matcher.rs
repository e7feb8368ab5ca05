//! Nearest-point matching between two point sets.
//!
//! Every source point is compared with every target point (O(N×M)); there is
//! no spatial index. Each source point is independent, so the parallel
//! variant splits the work across source points and still returns results in
//! source order.

use crate::{haversine_distance, GeoPoint};
use serde::Serialize;

/// Closest target point found for one source point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// The point that was searched from
    pub source: GeoPoint,
    /// Closest target point, `None` if the target set was empty
    pub matched: Option<GeoPoint>,
    /// Distance to `matched` in kilometers (Infinity when unmatched, serialized as null)
    pub distance_km: f64,
}

impl MatchResult {
    /// Returns true if a target point was found.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Finds the closest target point for every source point.
///
/// Results are returned one per source point, in source order. When several
/// targets share the minimum distance the first of them wins. An empty
/// target set yields unmatched results with an infinite distance.
///
/// # Example
/// ```
/// use geomatch_geo::{match_closest, GeoPoint};
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let results = match_closest(&[origin], &[]);
/// assert!(results[0].matched.is_none());
/// assert!(results[0].distance_km.is_infinite());
/// ```
pub fn match_closest(source: &[GeoPoint], target: &[GeoPoint]) -> Vec<MatchResult> {
    tracing::debug!(sources = source.len(), targets = target.len(), "matching sequentially");
    source.iter().map(|point| closest_to(point, target)).collect()
}

/// Parallel version of [`match_closest`] with identical output.
#[cfg(feature = "parallel")]
pub fn match_closest_parallel(source: &[GeoPoint], target: &[GeoPoint]) -> Vec<MatchResult> {
    use rayon::prelude::*;

    tracing::debug!(sources = source.len(), targets = target.len(), "matching in parallel");
    source.par_iter().map(|point| closest_to(point, target)).collect()
}

/// Runs [`match_closest_parallel`] once the source set has at least
/// `parallel_threshold` points, [`match_closest`] otherwise.
#[cfg(feature = "parallel")]
pub fn match_closest_with_threshold(
    source: &[GeoPoint],
    target: &[GeoPoint],
    parallel_threshold: usize,
) -> Vec<MatchResult> {
    if source.len() >= parallel_threshold {
        match_closest_parallel(source, target)
    } else {
        match_closest(source, target)
    }
}

/// Scans `target` for the point closest to `source`.
#[inline]
fn closest_to(source: &GeoPoint, target: &[GeoPoint]) -> MatchResult {
    let mut matched = None;
    let mut distance_km = f64::INFINITY;

    for candidate in target {
        let distance = haversine_distance(source, candidate);
        // Strict `<`: the first candidate at the minimum distance is kept.
        if distance < distance_km {
            distance_km = distance;
            matched = Some(*candidate);
        }
    }

    MatchResult {
        source: *source,
        matched,
        distance_km,
    }
}
