//! Codec for [Placekey](https://placekey.io), a compact textual encoding of
//! cells on the H3 global hexagonal grid.
//!
//! A Placekey is `[what@]where`, where `where` is always a 12-character
//! `"@xxx-xxx-xxx"` string naming one resolution-10 H3 cell and `what`, if
//! present, is an opaque point-of-interest identifier this crate never
//! interprets. This crate implements the `where` codec end to end: geo
//! coordinates round-trip through a 64-bit H3 cell id, a ~43-bit "short"
//! integer with the constant bits stripped out, a custom base-28 alphabet,
//! and an obfuscation rewrite that keeps the output free of a fixed list of
//! offensive substrings.
//!
//! ```
//! let placekey = placekey::geo_to_placekey(0.0, 0.0)?;
//! assert_eq!(placekey, "@dvt-smp-tvz");
//!
//! let (lat, lng) = placekey::placekey_to_geo(&placekey)?;
//! assert!((lat - 0.0).abs() < 0.001 && (lng - 0.0).abs() < 0.001);
//! # Ok::<(), placekey::error::PlacekeyError>(())
//! ```

// Lints {{{
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    missing_docs,
    unsafe_code,
    unused,
    clippy::all,
    clippy::unwrap_used
)]
#![allow(clippy::module_name_repetitions)]
// }}}

mod alphabet;
mod constants;
mod distance;
pub mod error;
mod grid;
mod layout;
mod obfuscate;
mod shorten;

use error::{ParseError, PlacekeyError};

/// Indexes `(lat, lng)` at resolution 10 and encodes the result as a
/// Placekey `where` string (`"@xxx-xxx-xxx"`).
///
/// # Errors
///
/// Returns [`error::DomainError`] if `lat` is outside `[-90, 90]` or `lng`
/// is outside `[-180, 180]`.
///
/// # Example
///
/// ```
/// assert_eq!(placekey::geo_to_placekey(0.0, 0.0)?, "@dvt-smp-tvz");
/// assert_eq!(
///     placekey::geo_to_placekey(40.712772, -74.006058)?,
///     "@627-wbz-tjv"
/// );
/// # Ok::<(), placekey::error::DomainError>(())
/// ```
pub fn geo_to_placekey(
    lat: f64,
    lng: f64,
) -> Result<String, error::DomainError> {
    let cell = grid::cell_from_latlng(lat, lng)?;
    let short = shorten::shorten(cell);
    let encoded = alphabet::encode(short);
    let cleaned = obfuscate::clean(&encoded);
    Ok(layout::layout(&cleaned))
}

/// Decodes a Placekey to the 64-bit H3 cell id it names.
///
/// # Errors
///
/// Returns [`error::PlacekeyError::Parse`] if the text is malformed, or
/// [`error::PlacekeyError::Grid`] if it parses but decodes to a cell the
/// grid library does not accept as a valid resolution-10 cell.
///
/// # Example
///
/// ```
/// let cell = placekey::placekey_to_cell("@dvt-smp-tvz")?;
/// assert!(cell != 0);
/// # Ok::<(), placekey::error::PlacekeyError>(())
/// ```
pub fn placekey_to_cell(placekey: &str) -> Result<u64, PlacekeyError> {
    let parsed = layout::parse(placekey)?;
    let raw = obfuscate::dirty(&parsed.where_payload);
    let short = alphabet::decode(&raw).ok_or_else(|| {
        ParseError::new("where payload contains a non-alphabet character")
    })?;
    let cell = shorten::unshorten(short);

    if !grid::is_valid(cell) {
        return Err(error::GridInvalid::new(cell).into());
    }

    Ok(cell)
}

/// Decodes a Placekey to the `(lat, lng)` centroid of the cell it names.
///
/// # Errors
///
/// See [`placekey_to_cell`].
///
/// # Example
///
/// ```
/// let (lat, lng) = placekey::placekey_to_geo("@627-wbz-tjv")?;
/// assert!((lat - 40.713).abs() < 0.001);
/// assert!((lng - -74.006).abs() < 0.001);
/// # Ok::<(), placekey::error::PlacekeyError>(())
/// ```
pub fn placekey_to_geo(placekey: &str) -> Result<(f64, f64), PlacekeyError> {
    let cell = placekey_to_cell(placekey)?;
    Ok(grid::latlng_from_cell(cell)?)
}

/// Great-circle distance, in meters, between the centroids of two
/// Placekeys.
///
/// # Errors
///
/// See [`placekey_to_cell`], applied to both arguments.
///
/// # Example
///
/// ```
/// let d = placekey::placekey_distance("@qjk-m7r-whq", "@hvb-5d7-92k")?;
/// assert!((d - 13_597_500.0).abs() < 100.0);
/// # Ok::<(), placekey::error::PlacekeyError>(())
/// ```
pub fn placekey_distance(
    p1: &str,
    p2: &str,
) -> Result<f64, PlacekeyError> {
    let (lat1, lng1) = placekey_to_geo(p1)?;
    let (lat2, lng2) = placekey_to_geo(p2)?;
    Ok(distance::haversine_m(lat1, lng1, lat2, lng2))
}

/// Reports whether `placekey` is a well-formed, grid-valid Placekey.
///
/// Never raises: malformed or grid-invalid input simply returns `false`.
///
/// # Example
///
/// ```
/// assert!(placekey::validate_placekey("226@5vg-7gq-5mk"));
/// assert!(!placekey::validate_placekey("not a placekey"));
/// ```
#[must_use]
pub fn validate_placekey(placekey: &str) -> bool {
    placekey_to_cell(placekey).is_ok()
}
