//! Error types for the Placekey codec.

use std::{error::Error, fmt};

/// Which geographic axis an out-of-range value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Axis {
    /// Latitude, expected in `[-90, 90]`.
    Latitude,
    /// Longitude, expected in `[-180, 180]`.
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        })
    }
}

/// Latitude or longitude outside its valid range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainError {
    /// The out-of-range value.
    pub value: f64,
    /// Which axis was invalid.
    pub axis: Axis,
}

impl DomainError {
    pub(crate) const fn new(value: f64, axis: Axis) -> Self {
        Self { value, axis }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} is out of range", self.axis, self.value)
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// Malformed Placekey text: wrong tuple shape, wrong characters, or more
/// than one `@` sigil.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseError {
    /// Why the text was rejected.
    pub reason: &'static str,
}

impl ParseError {
    pub(crate) const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid placekey: {}", self.reason)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// A decoded cell id the grid library does not accept as valid at
/// resolution 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridInvalid {
    /// The cell id that failed validation.
    pub cell: u64,
}

impl GridInvalid {
    pub(crate) const fn new(cell: u64) -> Self {
        Self { cell }
    }
}

impl fmt::Display for GridInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {:#x} is not a valid resolution-10 H3 cell",
            self.cell
        )
    }
}

impl Error for GridInvalid {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

/// Composed error for the fallible public operations ([`crate::placekey_to_geo`],
/// [`crate::placekey_to_cell`], [`crate::placekey_distance`]).
///
/// Each variant is a distinct, individually inspectable error kind; this
/// type only exists so a single `Result` alias can cover every public
/// entry point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PlacekeyError {
    /// See [`DomainError`].
    Domain(DomainError),
    /// See [`ParseError`].
    Parse(ParseError),
    /// See [`GridInvalid`].
    Grid(GridInvalid),
}

impl fmt::Display for PlacekeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(err) => fmt::Display::fmt(err, f),
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::Grid(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for PlacekeyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<DomainError> for PlacekeyError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ParseError> for PlacekeyError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<GridInvalid> for PlacekeyError {
    fn from(err: GridInvalid) -> Self {
        Self::Grid(err)
    }
}

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;
