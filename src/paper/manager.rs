//! Owner of one panel's paper record.

use alloc::sync::Arc;

use super::{Orientation, PaperCatalog, PaperKey, PaperSize};
use crate::config::LayoutConfig;
use crate::geometry::LengthUnit;

/// Holds a [`PaperSize`] and the catalog it resolves against.
///
/// Every operation installs a complete new record and returns it.
#[derive(Clone, Debug)]
pub struct PaperSizeManager {
    catalog: Arc<PaperCatalog>,
    record: PaperSize,
}

impl PaperSizeManager {
    /// Start from the configured paper size, orientation, and unit.
    pub fn new(catalog: Arc<PaperCatalog>, config: &LayoutConfig) -> Self {
        let record = PaperSize::new(
            &catalog,
            config.paper_size.clone(),
            config.orientation,
            config.unit,
        );
        Self { catalog, record }
    }

    /// Resume from a previously stored record.
    ///
    /// Catalog-backed dimensions are re-read from `catalog`, so a record
    /// saved against different values never pairs its key with stale
    /// dimensions. `Custom` dimensions and both units are kept as stored.
    pub fn from_record(catalog: Arc<PaperCatalog>, mut record: PaperSize) -> Self {
        record.apply_catalog(&catalog);
        Self { catalog, record }
    }

    pub fn record(&self) -> &PaperSize {
        &self.record
    }

    pub fn catalog(&self) -> &PaperCatalog {
        &self.catalog
    }

    pub fn are_dimensions_editable(&self) -> bool {
        self.record.are_dimensions_editable()
    }

    /// Catalog key the dimensions actually come from: the requested key,
    /// or `"A4"` after a fallback. `None` for `Custom`.
    pub fn effective_key(&self) -> Option<&str> {
        self.record
            .key
            .catalog_key()
            .map(|name| self.catalog.resolve(name).key)
    }

    /// Select a paper size by key (`"Custom"` for user-entered dimensions).
    pub fn update_paper_size(&mut self, key: impl Into<PaperKey>) -> &PaperSize {
        let next = self.record.with_paper_size(&self.catalog, key);
        self.install(next, "paper size")
    }

    /// Store dimensions and units verbatim. Callers only offer this while
    /// [`are_dimensions_editable`](Self::are_dimensions_editable) holds.
    pub fn update_dimensions(
        &mut self,
        width: f64,
        height: f64,
        width_unit: LengthUnit,
        height_unit: LengthUnit,
    ) -> &PaperSize {
        let next = self
            .record
            .with_dimensions(width, height, width_unit, height_unit);
        self.install(next, "dimensions")
    }

    /// Record a new orientation, re-resolving catalog dimensions.
    pub fn update_orientation(&mut self, orientation: Orientation) -> &PaperSize {
        let next = self.record.with_orientation(&self.catalog, orientation);
        self.install(next, "orientation")
    }

    fn install(&mut self, next: PaperSize, what: &str) -> &PaperSize {
        log::trace!(
            "{what}: {} {}x{} {} -> {} {}x{} {}",
            self.record.key,
            self.record.width,
            self.record.height,
            self.record.orientation,
            next.key,
            next.width,
            next.height,
            next.orientation,
        );
        self.record = next;
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::geometry::Size;
    use alloc::vec;

    fn manager() -> PaperSizeManager {
        PaperSizeManager::new(Arc::new(PaperCatalog::standard()), &LayoutConfig::default())
    }

    #[test]
    fn starts_from_config() {
        let config = LayoutConfig::default()
            .paper_size("Letter")
            .orientation(Orientation::Landscape)
            .unit(LengthUnit::Inch);
        let m = PaperSizeManager::new(Arc::new(PaperCatalog::standard()), &config);
        assert_eq!(m.record().size(), Size::new(27.94, 21.59));
        assert_eq!(m.record().width_unit, LengthUnit::Inch);
        assert_eq!(m.effective_key(), Some("Letter"));
    }

    #[test]
    fn a4_flip_round_trip() {
        let mut m = manager();
        assert_eq!(m.record().size(), Size::new(21.0, 29.7));
        assert_eq!(
            m.update_orientation(Orientation::Landscape).size(),
            Size::new(29.7, 21.0)
        );
        assert_eq!(
            m.update_orientation(Orientation::Portrait).size(),
            Size::new(21.0, 29.7)
        );
    }

    #[test]
    fn unknown_key_falls_back() {
        let mut m = manager();
        let rec = m.update_paper_size("NotARealSize").clone();
        assert_eq!(rec.key.as_str(), "NotARealSize");
        assert_eq!(rec.size(), Size::new(21.0, 29.7));
        assert_eq!(m.effective_key(), Some("A4"));
        assert!(!m.are_dimensions_editable());
    }

    #[test]
    fn custom_then_letter() {
        let mut m = manager();
        m.update_paper_size("Custom");
        let rec = m.update_dimensions(15.0, 20.0, LengthUnit::Centimeter, LengthUnit::Centimeter);
        assert_eq!(rec.size(), Size::new(15.0, 20.0));
        assert!(m.are_dimensions_editable());
        assert_eq!(m.effective_key(), None);

        let rec = m.update_paper_size("Letter");
        assert_eq!(rec.size(), Size::new(21.59, 27.94));
        assert!(!m.are_dimensions_editable());
    }

    #[test]
    fn injected_catalog() -> Result<(), CatalogError> {
        let catalog = PaperCatalog::new(vec![
            ("A4", Size::new(21.0, 29.7)),
            ("Postcard", Size::new(10.0, 14.8)),
        ])?;
        let mut m = PaperSizeManager::new(Arc::new(catalog), &LayoutConfig::default());
        m.update_orientation(Orientation::Landscape);
        assert_eq!(m.update_paper_size("Postcard").size(), Size::new(14.8, 10.0));
        // Not in this catalog.
        assert_eq!(m.update_paper_size("Letter").size(), Size::new(29.7, 21.0));
        Ok(())
    }

    #[test]
    fn from_record_resumes() {
        let catalog = Arc::new(PaperCatalog::standard());
        let stored = PaperSize::new(&catalog, "A5", Orientation::Landscape, LengthUnit::Millimeter);
        let mut m = PaperSizeManager::from_record(catalog, stored.clone());
        assert_eq!(m.record(), &stored);
        assert_eq!(
            m.update_orientation(Orientation::Portrait).size(),
            Size::new(14.8, 21.0)
        );
    }

    #[test]
    fn from_record_refreshes_stale_dimensions() {
        let catalog = Arc::new(PaperCatalog::standard());
        let stale = PaperSize::new(&catalog, "A5", Orientation::Landscape, LengthUnit::Inch)
            .with_dimensions(1.0, 2.0, LengthUnit::Inch, LengthUnit::Inch);
        let m = PaperSizeManager::from_record(catalog.clone(), stale);
        assert_eq!(m.record().size(), Size::new(21.0, 14.8));
        assert_eq!(m.record().width_unit, LengthUnit::Inch);

        let custom = PaperSize::new(&catalog, "Custom", Orientation::Landscape, LengthUnit::Centimeter)
            .with_dimensions(1.0, 2.0, LengthUnit::Centimeter, LengthUnit::Centimeter);
        let m = PaperSizeManager::from_record(catalog, custom);
        assert_eq!(m.record().size(), Size::new(1.0, 2.0));
    }
}
