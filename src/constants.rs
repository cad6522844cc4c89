//! Process-wide constants derived from fixed literals and the grid
//! dependency, verified once on first use.

use h3o::{LatLng, Resolution};
use std::sync::OnceLock;

/// The H3 resolution this codec is fixed to.
pub(crate) const RESOLUTION: Resolution = Resolution::Ten;

/// Numeric base resolution used only for the short-integer bit-shift math
/// (see [`crate::shorten`]). Distinct from [`RESOLUTION`]: this is not a
/// resolution ever handed to the grid library, just the literal `12` baked
/// into the original bit-layout arithmetic.
pub(crate) const BASE_RESOLUTION: u32 = 12;

/// Adding this increments the encoded base cell by one, rotating base cell 0
/// off the zero point.
pub(crate) const BASE_CELL_SHIFT: u64 = 1 << 45;

/// `2^(3*(15-BASE_RESOLUTION) - 1)`.
pub(crate) const UNUSED_RESOLUTION_FILLER: u64 =
    1 << (3 * (15 - BASE_RESOLUTION) - 1);

/// Restores a bit pattern this codec's grid dependency expects when
/// reconstructing higher-resolution children from a shortened integer.
pub(crate) const HIGH_RESOLUTION_SHIFT: u64 = 255;

/// The 28-symbol alphabet: digits 2-9 and lowercase consonants excluding
/// `l`. Chosen to avoid vowels and visually ambiguous characters.
pub(crate) const ALPHABET: &[u8; 28] = b"23456789bcdfghjkmnpqrstvwxyz";

/// Left-pads the first tuple when the base-28 encoding is shorter than 9
/// characters. Never produced by the alphabet or obfuscation map.
pub(crate) const PADDING_CHAR: u8 = b'a';

/// Characters introduced only by the obfuscation rewrite ([`crate::obfuscate`]).
/// Disjoint from [`ALPHABET`] and [`PADDING_CHAR`] by construction.
pub(crate) const REPLACEMENT_CHARS: [u8; 2] = [b'e', b'u'];

const EXPECTED_HEADER_BITS: &str = "000010001010";
const EXPECTED_HEADER_INT: u64 = 621_496_748_577_128_448;

/// Self-test output: the fixed 12-bit header shared by every resolution-10
/// cell, shifted into position for [`crate::shorten::unshorten`].
pub(crate) struct Header {
    pub(crate) int: u64,
}

static HEADER: OnceLock<Header> = OnceLock::new();

/// Returns the process-wide header, computing and verifying it on first
/// call.
///
/// # Panics
///
/// Panics if the grid dependency's encoding of `(0, 0)` at resolution 10 no
/// longer matches the two hard-coded identities this codec assumes. That
/// would mean every Placekey this crate produces is silently wrong, so
/// there is no sensible recoverable path -- this is the fatal `InitError`
/// condition from the design.
pub(crate) fn header() -> &'static Header {
    HEADER.get_or_init(|| {
        let origin = LatLng::new(0.0, 0.0)
            .expect("(0, 0) is always a valid coordinate");
        let cell = u64::from(origin.to_cell(RESOLUTION));
        let bits = format!("{cell:064b}");
        let header_bits = &bits[..12];
        assert_eq!(
            header_bits, EXPECTED_HEADER_BITS,
            "h3o's encoding of the resolution-10 origin cell has drifted: \
             expected header bits {EXPECTED_HEADER_BITS}, got {header_bits}"
        );

        let int = u64::from_str_radix(header_bits, 2)
            .expect("12-bit binary string parses as u64")
            << 52;
        assert_eq!(
            int, EXPECTED_HEADER_INT,
            "h3o's encoding of the resolution-10 origin cell has drifted: \
             expected header int {EXPECTED_HEADER_INT}, got {int}"
        );

        Header { int }
    })
}

#[cfg(test)]
#[path = "./constants_tests.rs"]
mod tests;
