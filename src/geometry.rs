//! Sizes, points, margins, and unit labels.
//!
//! All lengths are centimeters. [`LengthUnit`] is a display label carried
//! alongside a dimension; nothing in this crate converts between units.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::error::ParseError;

/// Width × height in centimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// `width / height`, or `None` when the pair cannot produce a positive
    /// finite ratio (non-positive height, non-finite values).
    pub fn aspect_ratio(self) -> Option<f64> {
        if !self.width.is_finite() || !self.height.is_finite() || self.height <= 0.0 {
            return None;
        }
        let ratio = self.width / self.height;
        (ratio > 0.0 && ratio.is_finite()).then_some(ratio)
    }

    /// Shrink by margins. Each axis bottoms out at zero.
    pub fn inset(self, margins: Margins) -> Self {
        Self {
            width: (self.width - margins.left - margins.right).max(0.0),
            height: (self.height - margins.top - margins.bottom).max(0.0),
        }
    }

    /// Whether both axes are within `tolerance` of `other`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        Float::abs(self.width - other.width) <= tolerance
            && Float::abs(self.height - other.height) <= tolerance
    }

    /// Whether `other` fits inside this size on both axes.
    pub fn contains(self, other: Self) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

/// Top-left coordinates relative to the active area's origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The active area's origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Page margins in centimeters (CSS order: top, right, bottom, left).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// No margins.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create margins from each edge.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on every edge.
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

/// Which side of a width/height pair the user just edited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// The other side of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("width") {
            Ok(Self::Width)
        } else if s.eq_ignore_ascii_case("height") {
            Ok(Self::Height)
        } else {
            Err(ParseError::UnknownDimension(s.into()))
        }
    }
}

/// Unit label shown next to a dimension.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// Centimeters.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    /// Millimeters.
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
    /// Inches.
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inch,
    /// Typographic points.
    #[cfg_attr(feature = "serde", serde(rename = "pt"))]
    Point,
    /// Pixels.
    #[cfg_attr(feature = "serde", serde(rename = "px"))]
    Pixel,
}

impl LengthUnit {
    /// Short label (`"cm"`, `"mm"`, `"in"`, `"pt"`, `"px"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Pixel => "px",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inch),
            "pt" | "point" | "points" => Ok(Self::Point),
            "px" | "pixel" | "pixels" => Ok(Self::Pixel),
            _ => Err(ParseError::UnknownUnit(s.trim().into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_is_involutive() {
        let s = Size::new(21.0, 29.7);
        assert_eq!(s.swapped(), Size::new(29.7, 21.0));
        assert_eq!(s.swapped().swapped(), s);
    }

    #[test]
    fn aspect_ratio_rejects_degenerate() {
        assert_eq!(Size::new(200.0, 100.0).aspect_ratio(), Some(2.0));
        assert_eq!(Size::new(10.0, 0.0).aspect_ratio(), None);
        assert_eq!(Size::new(10.0, -1.0).aspect_ratio(), None);
        assert_eq!(Size::new(0.0, 10.0).aspect_ratio(), None);
        assert_eq!(Size::new(f64::NAN, 10.0).aspect_ratio(), None);
        assert_eq!(Size::new(10.0, f64::INFINITY).aspect_ratio(), None);
    }

    #[test]
    fn inset_bottoms_out_at_zero() {
        let page = Size::new(21.0, 29.7);
        assert_eq!(
            page.inset(Margins::new(1.0, 2.0, 3.0, 4.0)),
            Size::new(15.0, 25.7)
        );
        assert_eq!(page.inset(Margins::uniform(20.0)), Size::new(0.0, 0.0));
        assert_eq!(page.inset(Margins::ZERO), page);
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = Size::new(21.59, 27.94);
        assert!(a.approx_eq(Size::new(21.5901, 27.9399), 0.001));
        assert!(!a.approx_eq(Size::new(21.6, 27.94), 0.001));
    }

    #[test]
    fn contains_both_axes() {
        let outer = Size::new(10.0, 10.0);
        assert!(outer.contains(Size::new(10.0, 5.0)));
        assert!(!outer.contains(Size::new(10.5, 5.0)));
    }

    #[test]
    fn unit_labels_parse() {
        assert_eq!("cm".parse::<LengthUnit>(), Ok(LengthUnit::Centimeter));
        assert_eq!(" Inches ".parse::<LengthUnit>(), Ok(LengthUnit::Inch));
        assert_eq!(LengthUnit::Pixel.to_string(), "px");
        assert_eq!(
            "furlong".parse::<LengthUnit>(),
            Err(ParseError::UnknownUnit("furlong".into()))
        );
    }

    #[test]
    fn dimension_parse_and_other() {
        assert_eq!("Width".parse::<Dimension>(), Ok(Dimension::Width));
        assert_eq!(Dimension::Width.other(), Dimension::Height);
        assert!("depth".parse::<Dimension>().is_err());
    }
}
