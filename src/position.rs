//! Named anchor positions and coordinate resolution.
//!
//! Places an inner rectangle inside an active area by aligning the same
//! anchor point on both: `middle-center` puts the inner rectangle's center
//! on the active area's center, `bottom-right` puts corner on corner.
//!
//! ```text
//!     top-left ──── top-center ──── top-right
//!        │                              │
//!     middle-left   middle-center   middle-right
//!        │                              │
//!     bottom-left ─ bottom-center ─ bottom-right
//! ```
//!
//! # Example
//!
//! ```
//! use pageplace::{Point, Position, Size, compute_coordinates};
//!
//! let p = compute_coordinates(
//!     Position::MiddleCenter,
//!     Size::new(10.0, 4.0),
//!     Size::new(20.0, 10.0),
//!     true,
//! );
//! assert_eq!(p, Point::new(5.0, 3.0));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::geometry::{Point, Size};

/// Horizontal anchor along a span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

impl HorizontalAnchor {
    /// Offset of this anchor on a span of length `span`.
    pub fn offset(self, span: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => span / 2.0,
            Self::Right => span,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical anchor along a span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Offset of this anchor on a span of length `span`.
    pub fn offset(self, span: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => span / 2.0,
            Self::Bottom => span,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Where an element sits in its active area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Position {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    /// Coordinates are entered by hand; nothing is computed.
    #[cfg_attr(feature = "serde", serde(rename = "Custom"))]
    Custom,
}

impl Position {
    /// The nine anchors in grid order (row by row, top to bottom).
    pub const NAMED: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Every position, `Custom` last.
    pub const ALL: [Self; 10] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::Custom,
    ];

    /// Build a named position from its two axes.
    pub const fn from_axes(h: HorizontalAnchor, v: VerticalAnchor) -> Self {
        use HorizontalAnchor::*;
        use VerticalAnchor::*;
        match (v, h) {
            (Top, Left) => Self::TopLeft,
            (Top, Center) => Self::TopCenter,
            (Top, Right) => Self::TopRight,
            (Middle, Left) => Self::MiddleLeft,
            (Middle, Center) => Self::MiddleCenter,
            (Middle, Right) => Self::MiddleRight,
            (Bottom, Left) => Self::BottomLeft,
            (Bottom, Center) => Self::BottomCenter,
            (Bottom, Right) => Self::BottomRight,
        }
    }

    /// Split into horizontal and vertical anchors. `None` for `Custom`.
    pub const fn axes(self) -> Option<(HorizontalAnchor, VerticalAnchor)> {
        use HorizontalAnchor::*;
        use VerticalAnchor::*;
        Some(match self {
            Self::TopLeft => (Left, Top),
            Self::TopCenter => (Center, Top),
            Self::TopRight => (Right, Top),
            Self::MiddleLeft => (Left, Middle),
            Self::MiddleCenter => (Center, Middle),
            Self::MiddleRight => (Right, Middle),
            Self::BottomLeft => (Left, Bottom),
            Self::BottomCenter => (Center, Bottom),
            Self::BottomRight => (Right, Bottom),
            Self::Custom => return None,
        })
    }

    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Label as shown to users: `"top-left"` … `"bottom-right"`, `"Custom"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::MiddleLeft => "middle-left",
            Self::MiddleCenter => "middle-center",
            Self::MiddleRight => "middle-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Accepts `top-left`, `top_left`, and `topleft` spellings in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: alloc::string::String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match compact.as_str() {
            "topleft" => Ok(Self::TopLeft),
            "topcenter" => Ok(Self::TopCenter),
            "topright" => Ok(Self::TopRight),
            "middleleft" => Ok(Self::MiddleLeft),
            "middlecenter" => Ok(Self::MiddleCenter),
            "middleright" => Ok(Self::MiddleRight),
            "bottomleft" => Ok(Self::BottomLeft),
            "bottomcenter" => Ok(Self::BottomCenter),
            "bottomright" => Ok(Self::BottomRight),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseError::UnknownPosition(s.trim().into())),
        }
    }
}

/// Top-left coordinates for `inner` placed at `position` inside `active`.
///
/// `Custom` returns [`Point::ORIGIN`] as a sentinel. Callers must keep the
/// user's manually entered coordinates instead; see [`resolve_placement`].
///
/// With `clamp`, each axis is held to `[0, max(0, active - inner)]`. An inner
/// rectangle larger than the active area therefore lands flush at the origin
/// on that axis regardless of anchor.
pub fn compute_coordinates(position: Position, inner: Size, active: Size, clamp: bool) -> Point {
    let Some((h, v)) = position.axes() else {
        return Point::ORIGIN;
    };

    let x = h.offset(active.width) - h.offset(inner.width);
    let y = v.offset(active.height) - v.offset(inner.height);

    if clamp {
        Point::new(
            clamp_axis(x, active.width - inner.width),
            clamp_axis(y, active.height - inner.height),
        )
    } else {
        Point::new(x, y)
    }
}

/// Like [`compute_coordinates`], but `Custom` yields `manual` (the last
/// coordinates the user typed) instead of the sentinel.
pub fn resolve_placement(
    position: Position,
    inner: Size,
    active: Size,
    manual: Point,
    clamp: bool,
) -> Point {
    if position.is_custom() {
        manual
    } else {
        compute_coordinates(position, inner, active, clamp)
    }
}

/// Hold `value` to `[0, max(0, room)]`. `f64::max`/`min` skip NaN, so a NaN
/// input ends at the origin instead of panicking like `f64::clamp` would.
fn clamp_axis(value: f64, room: f64) -> f64 {
    let upper = room.max(0.0);
    value.max(0.0).min(upper)
}
