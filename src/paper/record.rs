//! The paper size record and its transitions.

use super::{FALLBACK_KEY, Orientation, PaperCatalog, PaperKey};
use crate::geometry::{LengthUnit, Size};

/// Everything a page-setup panel stores about the paper.
///
/// Transitions return a new record so a caller mirroring it never sees a
/// key paired with stale dimensions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperSize {
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
    pub width_unit: LengthUnit,
    pub height_unit: LengthUnit,
    pub orientation: Orientation,
    /// Requested paper size, kept verbatim even when unknown to the catalog.
    #[cfg_attr(feature = "serde", serde(rename = "paper_size_key"))]
    pub key: PaperKey,
}

impl PaperSize {
    /// A record for `key` under `orientation`, both units set to `unit`.
    ///
    /// `Custom` starts from the A4 dimensions, which the user can then edit.
    pub fn new(
        catalog: &PaperCatalog,
        key: impl Into<PaperKey>,
        orientation: Orientation,
        unit: LengthUnit,
    ) -> Self {
        let key = key.into();
        let portrait = catalog.resolve(key.catalog_key().unwrap_or(FALLBACK_KEY)).size;
        let size = orientation.apply(portrait);
        Self {
            width: size.width,
            height: size.height,
            width_unit: unit,
            height_unit: unit,
            orientation,
            key,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Width and height may be typed in only for `Custom`.
    pub fn are_dimensions_editable(&self) -> bool {
        self.key.is_custom()
    }

    /// Switch to another paper size.
    ///
    /// `Custom` keeps the current dimensions. Any other key takes its
    /// catalog dimensions (A4 when unknown) under the current orientation.
    pub fn with_paper_size(&self, catalog: &PaperCatalog, key: impl Into<PaperKey>) -> Self {
        let mut next = self.clone();
        next.key = key.into();
        next.apply_catalog(catalog);
        next
    }

    /// Store dimensions and units verbatim.
    ///
    /// Editability is the caller's concern; a catalog-backed record accepts
    /// the values here and drops them on its next catalog transition.
    pub fn with_dimensions(
        &self,
        width: f64,
        height: f64,
        width_unit: LengthUnit,
        height_unit: LengthUnit,
    ) -> Self {
        Self {
            width,
            height,
            width_unit,
            height_unit,
            orientation: self.orientation,
            key: self.key.clone(),
        }
    }

    /// Record a new orientation.
    ///
    /// Catalog-backed records are re-resolved from the catalog, so flipping
    /// twice lands on the original pairing. `Custom` dimensions stay as typed.
    pub fn with_orientation(&self, catalog: &PaperCatalog, orientation: Orientation) -> Self {
        let mut next = self.clone();
        next.orientation = orientation;
        next.apply_catalog(catalog);
        next
    }

    /// Overwrite catalog-backed dimensions with `catalog`'s values under the
    /// current orientation. `Custom` records are left alone.
    pub(crate) fn apply_catalog(&mut self, catalog: &PaperCatalog) {
        let Some(name) = self.key.catalog_key() else {
            return;
        };
        let size = self.orientation.apply(catalog.resolve(name).size);
        self.width = size.width;
        self.height = size.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4_portrait(catalog: &PaperCatalog) -> PaperSize {
        PaperSize::new(catalog, "A4", Orientation::Portrait, LengthUnit::Centimeter)
    }

    #[test]
    fn new_resolves_catalog() {
        let catalog = PaperCatalog::standard();
        let rec = PaperSize::new(&catalog, "Letter", Orientation::Landscape, LengthUnit::Inch);
        assert_eq!(rec.size(), Size::new(27.94, 21.59));
        assert_eq!(rec.width_unit, LengthUnit::Inch);
        assert!(!rec.are_dimensions_editable());
    }

    #[test]
    fn new_custom_starts_from_a4() {
        let catalog = PaperCatalog::standard();
        let rec = PaperSize::new(&catalog, "Custom", Orientation::Portrait, LengthUnit::Centimeter);
        assert_eq!(rec.key, PaperKey::Custom);
        assert_eq!(rec.size(), Size::new(21.0, 29.7));
        assert!(rec.are_dimensions_editable());
    }

    #[test]
    fn custom_keeps_dimensions() {
        let catalog = PaperCatalog::standard();
        let rec = a4_portrait(&catalog)
            .with_paper_size(&catalog, "Custom")
            .with_dimensions(15.0, 20.0, LengthUnit::Centimeter, LengthUnit::Centimeter)
            .with_paper_size(&catalog, "Custom");
        assert_eq!(rec.size(), Size::new(15.0, 20.0));
    }

    #[test]
    fn unknown_key_recorded_with_a4_dimensions() {
        let catalog = PaperCatalog::standard();
        let rec = a4_portrait(&catalog)
            .with_orientation(&catalog, Orientation::Landscape)
            .with_paper_size(&catalog, "NotARealSize");
        assert_eq!(rec.key, PaperKey::Named("NotARealSize".into()));
        assert_eq!(rec.size(), Size::new(29.7, 21.0));
    }

    #[test]
    fn orientation_never_compounds() {
        let catalog = PaperCatalog::standard();
        let rec = a4_portrait(&catalog)
            .with_orientation(&catalog, Orientation::Landscape)
            .with_orientation(&catalog, Orientation::Landscape);
        assert_eq!(rec.size(), Size::new(29.7, 21.0));
    }

    #[test]
    fn custom_orientation_is_recorded_only() {
        let catalog = PaperCatalog::standard();
        let rec = a4_portrait(&catalog)
            .with_paper_size(&catalog, "Custom")
            .with_dimensions(15.0, 20.0, LengthUnit::Centimeter, LengthUnit::Centimeter)
            .with_orientation(&catalog, Orientation::Landscape);
        assert_eq!(rec.orientation, Orientation::Landscape);
        assert_eq!(rec.size(), Size::new(15.0, 20.0));
    }

    #[test]
    fn dimensions_are_stored_even_when_not_editable() {
        let catalog = PaperCatalog::standard();
        let rec = a4_portrait(&catalog).with_dimensions(
            1.0,
            2.0,
            LengthUnit::Millimeter,
            LengthUnit::Inch,
        );
        assert_eq!(rec.size(), Size::new(1.0, 2.0));
        assert_eq!(rec.height_unit, LengthUnit::Inch);
        // The next catalog transition restores the catalog dimensions.
        let rec = rec.with_orientation(&catalog, Orientation::Portrait);
        assert_eq!(rec.size(), Size::new(21.0, 29.7));
    }
}
