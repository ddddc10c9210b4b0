//! Defaults a panel starts from.
//!
//! Nothing in this crate reads ambient constants for units, paper size, or
//! position; the owner builds a [`LayoutConfig`] and passes it in.
//!
//! ```
//! use pageplace::{LayoutConfig, LengthUnit, Margins, Orientation, Position};
//!
//! let config = LayoutConfig::default()
//!     .paper_size("Letter")
//!     .orientation(Orientation::Landscape)
//!     .unit(LengthUnit::Inch)
//!     .position(Position::MiddleCenter)
//!     .margins(Margins::uniform(1.27));
//! assert!(config.clamp);
//! ```

use crate::geometry::{LengthUnit, Margins};
use crate::paper::{Orientation, PaperKey};
use crate::position::Position;

/// Starting values for a page setup and its elements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Unit label for new paper records. Default: `cm`.
    pub unit: LengthUnit,
    /// Initial paper size. Default: `"A4"`.
    pub paper_size: PaperKey,
    /// Initial orientation. Default: portrait.
    pub orientation: Orientation,
    /// Initial anchor for new elements. Default: `top-left`.
    pub position: Position,
    /// Keep anchored elements inside the active area. Default: `true`.
    pub clamp: bool,
    /// Printable-area margins. Default: none.
    pub margins: Margins,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Centimeter,
            paper_size: PaperKey::default(),
            orientation: Orientation::Portrait,
            position: Position::TopLeft,
            clamp: true,
            margins: Margins::ZERO,
        }
    }
}

impl LayoutConfig {
    pub fn unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn paper_size(mut self, key: impl Into<PaperKey>) -> Self {
        self.paper_size = key.into();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Whether anchored coordinates are clamped into the active area.
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn json_spellings() {
        let config = LayoutConfig::default()
            .paper_size("Custom")
            .orientation(Orientation::Landscape)
            .position(Position::BottomRight);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["paper_size"], "Custom");
        assert_eq!(json["orientation"], "landscape");
        assert_eq!(json["position"], "bottom-right");
        assert_eq!(json["unit"], "cm");
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"paper_size":"Letter","position":"Custom"}"#).unwrap();
        assert_eq!(config.paper_size, PaperKey::Named("Letter".into()));
        assert_eq!(config.position, Position::Custom);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert!(config.clamp);
        assert_eq!(config.margins, Margins::ZERO);
    }
}
