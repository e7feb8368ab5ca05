//! Parsing of typed coordinate entries into [`GeoPoint`]s.
//!
//! Supports two entry formats, with several pairs separated by `;`:
//! - Decimal: `42.3601,-71.0589; 40.7128,-74.0060`
//! - DMS with hemisphere suffix: `423010N,0710253W; 404231N,0740059W`
//!
//! Parsing is all-or-nothing: the first bad pair rejects the whole entry.

use std::fmt;
use std::str::FromStr;

use crate::{parse_dms, Axis, GeoError, GeoPoint, Result};

/// Separator between coordinate pairs in one entry.
pub const PAIR_SEPARATOR: char = ';';

/// Separator between latitude and longitude within a pair.
pub const FIELD_SEPARATOR: char = ',';

/// How a coordinate entry is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `lat,lon` in signed decimal degrees
    Decimal,
    /// `ddmmssH,ddmmssH` with a hemisphere letter
    Dms,
}

impl InputFormat {
    /// Example entry shown to users.
    pub fn example(self) -> &'static str {
        match self {
            InputFormat::Decimal => "42.3601,-71.0589; 40.7128,-74.0060",
            InputFormat::Dms => "423010N,0710253W; 404231N,0740059W",
        }
    }
}

impl FromStr for InputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "decimal" => Ok(InputFormat::Decimal),
            "2" | "dms" | "degrees" => Ok(InputFormat::Dms),
            other => Err(GeoError::InvalidEntry(format!(
                "unknown input format '{other}', expected '1' (decimal) or '2' (degrees)"
            ))),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Decimal => f.write_str("decimal"),
            InputFormat::Dms => f.write_str("dms"),
        }
    }
}

/// Parses every `;`-separated pair in `text`.
///
/// Empty segments (e.g. a trailing `;`) are skipped.
///
/// # Errors
/// The first error from [`parse_decimal_pair`] or [`parse_dms_pair`].
pub fn parse_entries(text: &str, format: InputFormat) -> Result<Vec<GeoPoint>> {
    let points = text
        .split(PAIR_SEPARATOR)
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match format {
            InputFormat::Decimal => parse_decimal_pair(pair),
            InputFormat::Dms => parse_dms_pair(pair),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = points.len(), %format, "parsed coordinate entry");
    Ok(points)
}

/// Parses `lat,lon` in decimal degrees.
///
/// ```
/// use geomatch_geo::parse_decimal_pair;
///
/// let point = parse_decimal_pair(" 40.7128 , -74.0060 ").unwrap();
/// assert_eq!(point.longitude(), -74.006);
/// ```
///
/// # Errors
/// [`GeoError::InvalidEntry`] for a malformed pair, [`GeoError::Range`] for
/// an out-of-range value.
pub fn parse_decimal_pair(pair: &str) -> Result<GeoPoint> {
    let (lat, lon) = split_pair(pair)?;
    let parse = |field: &str, axis: Axis| {
        field
            .parse::<f64>()
            .map_err(|_| GeoError::InvalidEntry(format!("{axis} '{field}' is not a number")))
    };
    GeoPoint::new(parse(lat, Axis::Latitude)?, parse(lon, Axis::Longitude)?)
}

/// Parses `ddmmssH,ddmmssH`, e.g. `423010N,0710253W`.
///
/// # Errors
/// See [`parse_dms_field`]; the signed values are then range-checked.
pub fn parse_dms_pair(pair: &str) -> Result<GeoPoint> {
    let (lat, lon) = split_pair(pair)?;
    let latitude = parse_dms_field(lat, Axis::Latitude)?;
    let longitude = parse_dms_field(lon, Axis::Longitude)?;
    GeoPoint::new(latitude, longitude)
}

/// Parses one DMS field whose last character is the hemisphere letter.
///
/// `S` and `W` make the value negative; the letter is case-insensitive and
/// must belong to `axis` (N/S for latitude, E/W for longitude). The returned
/// value is signed but not range-checked.
///
/// ```
/// use geomatch_geo::{parse_dms_field, Axis};
///
/// let lat = parse_dms_field("423010S", Axis::Latitude).unwrap();
/// assert!((lat + 42.502_777).abs() < 1e-5);
/// ```
///
/// # Errors
/// [`GeoError::InvalidEntry`] for a missing or foreign hemisphere letter,
/// [`GeoError::Parse`] for a bad DMS token.
pub fn parse_dms_field(field: &str, axis: Axis) -> Result<f64> {
    let field = field.trim();
    if field.chars().count() < 2 {
        return Err(GeoError::InvalidEntry(format!(
            "{axis} '{field}' needs a DMS value followed by a hemisphere letter"
        )));
    }
    let mut chars = field.chars();
    let hemisphere = chars
        .next_back()
        .ok_or_else(|| GeoError::InvalidEntry(format!("missing {axis}")))?;
    let token = chars.as_str();

    let sign = match (axis, hemisphere.to_ascii_uppercase()) {
        (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => 1.0,
        (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => -1.0,
        _ => {
            let expected = match axis {
                Axis::Latitude => "N or S",
                Axis::Longitude => "E or W",
            };
            return Err(GeoError::InvalidEntry(format!(
                "{axis} '{field}' must end with {expected}"
            )));
        }
    };

    Ok(sign * parse_dms(token)?)
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    let mut fields = pair.split(FIELD_SEPARATOR).map(str::trim);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(lat), Some(lon), None) => Ok((lat, lon)),
        _ => Err(GeoError::InvalidEntry(format!(
            "expected 'latitude{FIELD_SEPARATOR}longitude', got '{pair}'"
        ))),
    }
}
