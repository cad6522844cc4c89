//! Textual layout: tuple grouping, padding, the `@` sigil, and the
//! character-class validation that backs `where`/`what` checks.

use crate::constants::{ALPHABET, PADDING_CHAR, REPLACEMENT_CHARS};
use crate::error::ParseError;

const WHERE_LEN: usize = 11; // "xxx-xxx-xxx"
const WHAT_V2_LEN: usize = 10; // one flag digit + 9 payload characters

fn is_alphabet(c: u8) -> bool {
    ALPHABET.contains(&c)
}

fn is_replacement(c: u8) -> bool {
    REPLACEMENT_CHARS.contains(&c)
}

/// A successfully split, shape-validated Placekey.
pub(crate) struct Parsed<'a> {
    pub(crate) what: Option<&'a str>,
    /// The base-28 payload: tuples concatenated, `-` and padding `a`
    /// stripped.
    pub(crate) where_payload: String,
}

/// Splits on `@`, checks both halves' character-class shape, and strips the
/// `where` tuple layout down to its base-28 payload.
///
/// Does not check grid validity -- callers combine this with
/// [`crate::grid::is_valid`] for the full `validate_where` semantics.
pub(crate) fn parse(placekey: &str) -> Result<Parsed<'_>, ParseError> {
    let (what, where_part) = split(placekey)?;

    if !where_shape_ok(where_part) {
        return Err(ParseError::new("where tuple has the wrong shape"));
    }
    if let Some(w) = what {
        if !what_shape_ok(w) {
            return Err(ParseError::new("what prefix has the wrong shape"));
        }
    }

    Ok(Parsed {
        what,
        where_payload: strip_where(where_part),
    })
}

fn split(s: &str) -> Result<(Option<&str>, &str), ParseError> {
    match s.matches('@').count() {
        0 => Ok((None, s)),
        1 => {
            let idx = s.find('@').expect("counted exactly one '@'");
            let what = &s[..idx];
            let where_part = &s[idx + 1..];
            Ok((if what.is_empty() { None } else { Some(what) }, where_part))
        }
        _ => Err(ParseError::new("more than one '@'")),
    }
}

/// `^[A-Pa]{3}-[A-P]{3}-[A-P]{3}$` where `A-P` spans `alphabet ∪ {e, u}`,
/// and the padding char `a` is admitted only in the first tuple.
fn where_shape_ok(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != WHERE_LEN || bytes[3] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let tuple1_ok = |c: u8| is_alphabet(c) || is_replacement(c) || c == PADDING_CHAR;
    let tuple_ok = |c: u8| is_alphabet(c) || is_replacement(c);

    bytes[0..3].iter().all(|&c| tuple1_ok(c))
        && bytes[4..7].iter().all(|&c| tuple_ok(c))
        && bytes[8..11].iter().all(|&c| tuple_ok(c))
}

/// Either `^[alphabet]{3,}(-[alphabet]{3,})?$` or the v2 form
/// `^[01][a-z2-7]{9}$`.
fn what_shape_ok(s: &str) -> bool {
    what_v1_ok(s) || what_v2_ok(s)
}

fn what_v1_ok(s: &str) -> bool {
    let segments: Vec<&str> = s.split('-').collect();
    let segment_ok = |seg: &str| seg.len() >= 3 && seg.bytes().all(is_alphabet);
    match segments.as_slice() {
        [a] => segment_ok(a),
        [a, b] => segment_ok(a) && segment_ok(b),
        _ => false,
    }
}

fn what_v2_ok(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != WHAT_V2_LEN {
        return false;
    }
    if bytes[0] != b'0' && bytes[0] != b'1' {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&c| matches!(c, b'a'..=b'z' | b'2'..=b'7'))
}

fn strip_where(where_part: &str) -> String {
    where_part
        .bytes()
        .filter(|&c| c != b'-' && c != PADDING_CHAR)
        .map(char::from)
        .collect()
}

/// Lays out a cleaned base-28 string as `@xxx-xxx-xxx`, left-padding with
/// `a` to 9 characters first.
pub(crate) fn layout(cleaned: &str) -> String {
    debug_assert!(
        cleaned.len() <= 9,
        "cleaned base-28 payload should never exceed 9 characters at resolution 10"
    );

    let mut padded = PADDING_CHAR.to_string().repeat(9 - cleaned.len().min(9));
    padded.push_str(cleaned);

    format!("@{}-{}-{}", &padded[0..3], &padded[3..6], &padded[6..9])
}

#[cfg(test)]
#[path = "./layout_tests.rs"]
mod tests;
