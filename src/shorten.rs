//! Bidirectional map between a 64-bit grid cell id and a ~43-bit "short"
//! integer, stripping the bits that are constant for every cell at a fixed
//! resolution.

use crate::constants::{
    self, BASE_CELL_SHIFT, HIGH_RESOLUTION_SHIFT, UNUSED_RESOLUTION_FILLER,
};

const SHIFT_BITS: u32 = 3 * (15 - constants::BASE_RESOLUTION);

/// Shortens a resolution-10 cell id to the integer that survives after
/// dropping the fixed header and the unused high-resolution filler bits.
pub(crate) fn shorten(cell: u64) -> u64 {
    // Cuts off the left-most bits that don't code location.
    let out = cell.wrapping_add(BASE_CELL_SHIFT) % (1_u64 << 52);
    // Cuts off the rightmost bits corresponding to resolutions beyond the
    // base resolution.
    out >> SHIFT_BITS
}

/// Inverse of [`shorten`]: rebuilds the original cell id from its short
/// integer.
pub(crate) fn unshorten(short: u64) -> u64 {
    let unshifted = short << SHIFT_BITS;
    constants::header().int + UNUSED_RESOLUTION_FILLER - BASE_CELL_SHIFT
        + unshifted
        + HIGH_RESOLUTION_SHIFT
}

#[cfg(test)]
#[path = "./shorten_tests.rs"]
mod tests;
