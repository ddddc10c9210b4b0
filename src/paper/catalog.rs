//! Named paper sizes, stored portrait, in centimeters.

use alloc::collections::BTreeMap;
use alloc::string::String;

use super::{CUSTOM_KEY, Orientation};
use crate::error::CatalogError;
use crate::geometry::Size;

/// Catalog entry every lookup can fall back on.
pub const FALLBACK_KEY: &str = "A4";

const A4_PORTRAIT: Size = Size::new(21.0, 29.7);

/// Built-in sizes. ISO values are exact in millimeters; US sizes are inch
/// values × 2.54.
const STANDARD: &[(&str, Size)] = &[
    ("A3", Size::new(29.7, 42.0)),
    ("A4", A4_PORTRAIT),
    ("A5", Size::new(14.8, 21.0)),
    ("A6", Size::new(10.5, 14.8)),
    ("B4", Size::new(25.0, 35.3)),
    ("B5", Size::new(17.6, 25.0)),
    ("Letter", Size::new(21.59, 27.94)),
    ("Legal", Size::new(21.59, 35.56)),
    ("Tabloid", Size::new(27.94, 43.18)),
    ("Executive", Size::new(18.415, 26.67)),
];

/// Immutable map from paper-size name to portrait dimensions.
///
/// Always contains [`FALLBACK_KEY`].
#[derive(Clone, Debug, PartialEq)]
pub struct PaperCatalog {
    entries: BTreeMap<String, Size>,
}

/// Outcome of looking a key up in a [`PaperCatalog`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedPaper<'a> {
    /// Catalog key the dimensions came from (`"A4"` after a fallback).
    pub key: &'a str,
    /// Portrait dimensions.
    pub size: Size,
    /// True when the requested key was not in the catalog.
    pub fell_back: bool,
}

impl Default for PaperCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PaperCatalog {
    /// ISO A3–A6, B4, B5 and US Letter, Legal, Tabloid, Executive.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD
                .iter()
                .map(|&(key, size)| (String::from(key), size))
                .collect(),
        }
    }

    /// Build a catalog from `(key, portrait size)` pairs.
    ///
    /// Fails when `"A4"` is missing, when a key is `"Custom"`, or when a
    /// size is not finite and positive. Later duplicates replace earlier ones.
    pub fn new<I, K>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, Size)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, size) in entries {
            let key: String = key.into();
            if key == CUSTOM_KEY {
                return Err(CatalogError::ReservedKey);
            }
            if size.aspect_ratio().is_none() {
                return Err(CatalogError::InvalidDimensions { key });
            }
            map.insert(key, size);
        }
        if !map.contains_key(FALLBACK_KEY) {
            return Err(CatalogError::MissingFallback);
        }
        Ok(Self { entries: map })
    }

    /// Portrait size of `key`, if present. Exact match only.
    pub fn get(&self, key: &str) -> Option<Size> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, falling back to A4 when it is not an exact catalog
    /// key (`"letter"` is not `"Letter"`). Never fails.
    pub fn resolve(&self, key: &str) -> ResolvedPaper<'_> {
        if let Some((k, size)) = self.entries.get_key_value(key) {
            return ResolvedPaper {
                key: k.as_str(),
                size: *size,
                fell_back: false,
            };
        }

        log::debug!("paper size {key:?} not in catalog, using {FALLBACK_KEY}");
        let (k, size) = self
            .entries
            .get_key_value(FALLBACK_KEY)
            .map(|(k, s)| (k.as_str(), *s))
            .unwrap_or((FALLBACK_KEY, A4_PORTRAIT));
        ResolvedPaper {
            key: k,
            size,
            fell_back: true,
        }
    }

    /// Find the entry whose dimensions match `size` in either orientation,
    /// each axis within `tolerance` centimeters.
    pub fn identify(&self, size: Size, tolerance: f64) -> Option<(&str, Orientation)> {
        self.entries.iter().find_map(|(key, portrait)| {
            [Orientation::Portrait, Orientation::Landscape]
                .into_iter()
                .find(|o| o.apply(*portrait).approx_eq(size, tolerance))
                .map(|o| (key.as_str(), o))
        })
    }
}
