//! Error types.
//!
//! The placement math itself never fails. Errors come only from parsing
//! string labels, from building a paper catalog, and from restoring a
//! stored aspect lock.

use alloc::string::String;
use core::fmt;

/// A string label did not name a known value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the nine anchors or `Custom`.
    UnknownPosition(String),
    /// Neither `portrait` nor `landscape`.
    UnknownOrientation(String),
    /// Not a recognized unit label.
    UnknownUnit(String),
    /// Neither `width` nor `height`.
    UnknownDimension(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPosition(s) => write!(f, "unknown position {s:?}"),
            Self::UnknownOrientation(s) => write!(f, "unknown orientation {s:?}"),
            Self::UnknownUnit(s) => write!(f, "unknown length unit {s:?}"),
            Self::UnknownDimension(s) => write!(f, "unknown dimension {s:?}"),
        }
    }
}

impl core::error::Error for ParseError {}

/// A paper catalog could not be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no `"A4"` entry to fall back on.
    MissingFallback,
    /// An entry's width or height is not a finite positive number.
    InvalidDimensions { key: String },
    /// An entry is named `"Custom"`, which is reserved.
    ReservedKey,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFallback => f.write_str("paper catalog has no \"A4\" entry"),
            Self::InvalidDimensions { key } => {
                write!(f, "paper size {key:?} must have positive finite dimensions")
            }
            Self::ReservedKey => f.write_str("\"Custom\" cannot be used as a catalog key"),
        }
    }
}

impl core::error::Error for CatalogError {}

/// A stored aspect ratio is not a finite positive number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvalidRatio(pub f64);

impl fmt::Display for InvalidRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aspect ratio {} must be finite and positive", self.0)
    }
}

impl core::error::Error for InvalidRatio {}
