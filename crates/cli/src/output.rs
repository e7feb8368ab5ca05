//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use geomatch_geo::MatchResult;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}

/// Format one match as a sentence, with `precision` decimals on the distance.
///
/// ```
/// use geomatch_cli::output::format_match;
/// use geomatch_geo::{match_closest, GeoPoint};
///
/// let a = GeoPoint::new(40.7128, -74.006).unwrap();
/// let b = GeoPoint::new(42.3601, -71.0589).unwrap();
/// let line = format_match(&match_closest(&[a], &[b])[0], 2);
/// assert_eq!(
///     line,
///     "Point (40.7128, -74.006) is closest to (42.3601, -71.0589) with a distance of 306.11 km."
/// );
/// ```
pub fn format_match(result: &MatchResult, precision: usize) -> String {
    match result.matched {
        Some(matched) => format!(
            "Point {} is closest to {} with a distance of {:.*} km.",
            result.source, matched, precision, result.distance_km
        ),
        None => format!("Point {} has no match (target set is empty).", result.source),
    }
}

/// Format all matches as a pretty JSON array.
pub fn format_matches_json(results: &[MatchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomatch_geo::{match_closest, GeoPoint};

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_format_match_precision() {
        let results = match_closest(&[point(51.5074, -0.1278)], &[point(48.8566, 2.3522)]);
        let line = format_match(&results[0], 0);
        assert!(line.starts_with("Point (51.5074, -0.1278) is closest to (48.8566, 2.3522)"));
        assert!(line.ends_with(" km."));
        assert!(!line.contains("343."), "{line}");
    }

    #[test]
    fn test_format_unmatched() {
        let results = match_closest(&[point(0.0, 0.0)], &[]);
        assert_eq!(
            format_match(&results[0], 2),
            "Point (0.0, 0.0) has no match (target set is empty)."
        );
    }

    #[test]
    fn test_format_matches_json() {
        let results = match_closest(&[point(0.0, 0.0)], &[point(0.0, 1.0)]);
        let json = format_matches_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["matched"]["longitude"], 1.0);
        assert!(value[0]["distance_km"].as_f64().unwrap() > 111.0);
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "point", "points"), "1 point");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "point", "points"), "5 points");
    }
}
