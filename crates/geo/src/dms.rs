//! Degrees-minutes-seconds to decimal degrees.
//!
//! A token is two digits of degrees, two digits of minutes, and whatever is
//! left over as (possibly fractional) seconds: `423010` or `423010.5`.
//! Ranges are not checked here; that happens once the hemisphere sign is
//! known, in [`validate_coordinates`](crate::validate_coordinates).

use crate::normalize::normalize;
use crate::{GeoError, Result};

/// Parses a DMS token into unsigned decimal degrees.
///
/// The token is run through [`normalize`] first, so `42°30'10"` and
/// `423010` are equivalent.
///
/// # Errors
/// [`GeoError::Parse`] when the token is shorter than four characters, the
/// degree or minute field is not an integer, or the seconds field is not a
/// float.
///
/// ```
/// use geomatch_geo::parse_dms;
///
/// let degrees = parse_dms("42°30'10\"").unwrap();
/// assert!((degrees - 42.502_777_777).abs() < 1e-8);
/// ```
pub fn parse_dms(token: &str) -> Result<f64> {
    let token = normalize(token);
    let err = || GeoError::parse(&token);

    // `get` rather than indexing: a multi-byte char straddling a split is a parse error.
    let degrees: i64 = token.get(..2).ok_or_else(err)?.parse().map_err(|_| err())?;
    let minutes: i64 = token.get(2..4).ok_or_else(err)?.parse().map_err(|_| err())?;
    let seconds: f64 = token.get(4..).ok_or_else(err)?.parse().map_err(|_| err())?;

    let decimal = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
    tracing::trace!(%token, degrees, minutes, seconds, decimal, "parsed DMS token");
    Ok(decimal)
}
