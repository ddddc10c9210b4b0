//! Placement geometry for page elements: named anchors, aspect-ratio lock,
//! and a paper-size catalog with orientation.
//!
//! Pure arithmetic on centimeter values. No rendering, no I/O, `no_std`
//! compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`position`]: Nine named anchors plus `Custom`, coordinate resolution and clamping
//! - [`aspect`]: Aspect-ratio lock for a width/height pair
//! - [`paper`]: Paper catalog with A4 fallback, orientation, editable paper record
//! - [`page`]: Panel-side wiring: page setup with margins, element placement
//! - [`config`]: Explicit starting defaults
//! - [`geometry`]: Sizes, points, margins, unit labels

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aspect;
pub mod config;
pub mod error;
pub mod geometry;
pub mod page;
pub mod paper;
pub mod position;

pub use aspect::AspectRatioLock;
pub use config::LayoutConfig;
pub use error::{CatalogError, InvalidRatio, ParseError};
pub use geometry::{Dimension, LengthUnit, Margins, Point, Size};
pub use page::{ElementPlacement, PageSetup};
pub use paper::{
    CUSTOM_KEY, FALLBACK_KEY, Orientation, PaperCatalog, PaperKey, PaperSize, PaperSizeManager,
    ResolvedPaper,
};
pub use position::{
    HorizontalAnchor, Position, VerticalAnchor, compute_coordinates, resolve_placement,
};
