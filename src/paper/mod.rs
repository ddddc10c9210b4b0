//! Paper sizes: catalog, orientation, and the editable paper record.
//!
//! A paper record is either backed by a named catalog entry, in which case
//! its width and height always come from the catalog under the current
//! orientation, or it is `Custom` and the user types the dimensions.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pageplace::{LayoutConfig, Orientation, PaperCatalog, PaperSizeManager};
//!
//! let mut paper = PaperSizeManager::new(Arc::new(PaperCatalog::standard()), &LayoutConfig::default());
//! assert_eq!((paper.record().width, paper.record().height), (21.0, 29.7));
//!
//! let rec = paper.update_orientation(Orientation::Landscape);
//! assert_eq!((rec.width, rec.height), (29.7, 21.0));
//! assert!(!rec.are_dimensions_editable());
//! ```

mod catalog;
mod manager;
mod record;

pub use catalog::{FALLBACK_KEY, PaperCatalog, ResolvedPaper};
pub use manager::PaperSizeManager;
pub use record::PaperSize;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::geometry::Size;

/// Label of the user-editable paper size.
pub const CUSTOM_KEY: &str = "Custom";

/// Page orientation. Catalog sizes are stored portrait.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orient a portrait-defined size: landscape swaps width and height.
    pub const fn apply(self, portrait: Size) -> Size {
        match self {
            Self::Portrait => portrait,
            Self::Landscape => portrait.swapped(),
        }
    }

    /// Landscape when strictly wider than tall.
    pub fn of(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("portrait") {
            Ok(Self::Portrait)
        } else if s.eq_ignore_ascii_case("landscape") {
            Ok(Self::Landscape)
        } else {
            Err(ParseError::UnknownOrientation(s.into()))
        }
    }
}

/// Which paper size a record follows.
///
/// `Named` keeps whatever the caller asked for, even when the catalog has
/// no such entry and the dimensions fell back to A4.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PaperKey {
    /// Dimensions are typed in by the user.
    Custom,
    /// Dimensions come from the catalog entry of this name.
    Named(String),
}

impl PaperKey {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// The name to look up in a catalog, `None` for `Custom`.
    pub fn catalog_key(&self) -> Option<&str> {
        match self {
            Self::Custom => None,
            Self::Named(name) => Some(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Custom => CUSTOM_KEY,
            Self::Named(name) => name,
        }
    }
}

impl Default for PaperKey {
    fn default() -> Self {
        Self::Named(FALLBACK_KEY.into())
    }
}

impl From<&str> for PaperKey {
    fn from(key: &str) -> Self {
        if key == CUSTOM_KEY {
            Self::Custom
        } else {
            Self::Named(key.into())
        }
    }
}

impl From<String> for PaperKey {
    fn from(key: String) -> Self {
        if key == CUSTOM_KEY {
            Self::Custom
        } else {
            Self::Named(key)
        }
    }
}

impl From<PaperKey> for String {
    fn from(key: PaperKey) -> Self {
        match key {
            PaperKey::Custom => CUSTOM_KEY.into(),
            PaperKey::Named(name) => name,
        }
    }
}

impl fmt::Display for PaperKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
