//! Thin wrapper around the external hexagonal-grid library ([`h3o`]).
//!
//! This is the only module that talks to the grid dependency directly --
//! every other component deals exclusively in plain `u64` cell ids.

use crate::constants::RESOLUTION;
use crate::error::{Axis, DomainError, GridInvalid};
use h3o::{CellIndex, LatLng};

/// Indexes `(lat, lng)` at resolution 10, returning the 64-bit cell id.
pub(crate) fn cell_from_latlng(lat: f64, lng: f64) -> Result<u64, DomainError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(DomainError::new(lat, Axis::Latitude));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(DomainError::new(lng, Axis::Longitude));
    }

    // `LatLng::new` only rejects non-finite values, already excluded by the
    // range checks above.
    let ll = LatLng::new(lat, lng)
        .expect("finite lat/lng within range always builds a LatLng");
    Ok(u64::from(ll.to_cell(RESOLUTION)))
}

/// Returns the centroid of `cell`.
pub(crate) fn latlng_from_cell(cell: u64) -> Result<(f64, f64), GridInvalid> {
    let index = CellIndex::try_from(cell).map_err(|_| GridInvalid::new(cell))?;
    let ll = index.to_latlng();
    Ok((ll.lat(), ll.lng()))
}

/// Reports whether `cell` is a valid resolution-10 cell per the grid
/// library.
pub(crate) fn is_valid(cell: u64) -> bool {
    CellIndex::try_from(cell)
        .map(|index| index.resolution() == RESOLUTION)
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "./grid_tests.rs"]
mod tests;
