//! Rewrites base-28 substrings that would otherwise spell offensive English
//! sequences, and reverses the rewrite before decoding.
//!
//! Every replacement is the same length as what it replaces and differs
//! only in its last character, which is always `e` or `u` -- characters
//! absent from [`crate::constants::ALPHABET`] and from every key in
//! [`REWRITES`]. That disjointness is what makes the rewrite safely
//! reversible: `clean` never creates a substring that looks like another
//! key, and `dirty` never creates one that looks like another value, so
//! the two passes can run key-by-key in any order.
const REWRITES: &[(&str, &str)] = &[
    ("prn", "pre"),
    ("f4nny", "f4nne"),
    ("tw4t", "tw4e"),
    ("ngr", "ngu"),
    ("dck", "dce"),
    ("vjn", "vju"),
    ("fck", "fce"),
    ("pns", "pne"),
    ("sht", "she"),
    ("kkk", "kke"),
    ("fgt", "fgu"),
    ("dyk", "dye"),
    ("bch", "bce"),
];

/// Forward rewrite, applied after base-28 encoding.
pub(crate) fn clean(s: &str) -> String {
    let mut out = s.to_owned();
    for &(dirty, clean) in REWRITES {
        out = out.replace(dirty, clean);
    }
    out
}

/// Reverse rewrite, applied before base-28 decoding.
pub(crate) fn dirty(s: &str) -> String {
    let mut out = s.to_owned();
    for &(dirty, clean) in REWRITES {
        out = out.replace(clean, dirty);
    }
    out
}

#[cfg(test)]
#[path = "./obfuscate_tests.rs"]
mod tests;
