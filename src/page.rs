//! Panel-side wiring between the paper record, the aspect lock, and the
//! position resolver.
//!
//! [`PageSetup`] owns the paper and a lock over its dimensions, and resyncs
//! the lock whenever the catalog changes the paper underneath it.
//! [`ElementPlacement`] owns one element's size, anchor, and manual
//! coordinates, and resolves its origin against an active area.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pageplace::{ElementPlacement, LayoutConfig, Margins, PageSetup, PaperCatalog, Point, Position, Size};
//!
//! let config = LayoutConfig::default().margins(Margins::uniform(2.0));
//! let page = PageSetup::new(Arc::new(PaperCatalog::standard()), &config);
//! assert_eq!(page.active_area(), Size::new(17.0, 25.7));
//!
//! let mut notes = ElementPlacement::new(Size::new(7.0, 4.0), &config);
//! notes.set_position(Position::BottomRight, page.active_area());
//! assert_eq!(notes.origin(page.active_area()), Point::new(10.0, 21.7));
//! ```

use alloc::sync::Arc;

use crate::aspect::AspectRatioLock;
use crate::config::LayoutConfig;
use crate::geometry::{Dimension, LengthUnit, Margins, Point, Size};
use crate::paper::{Orientation, PaperCatalog, PaperKey, PaperSize, PaperSizeManager};
use crate::position::{Position, resolve_placement};

/// Paper record, margins, and an aspect lock over the paper dimensions.
#[derive(Clone, Debug)]
pub struct PageSetup {
    paper: PaperSizeManager,
    lock: AspectRatioLock,
    margins: Margins,
}

impl PageSetup {
    pub fn new(catalog: Arc<PaperCatalog>, config: &LayoutConfig) -> Self {
        let paper = PaperSizeManager::new(catalog, config);
        let lock = AspectRatioLock::new(paper.record().width, paper.record().height);
        Self {
            paper,
            lock,
            margins: config.margins,
        }
    }

    pub fn paper(&self) -> &PaperSizeManager {
        &self.paper
    }

    pub fn record(&self) -> &PaperSize {
        self.paper.record()
    }

    pub fn lock(&self) -> &AspectRatioLock {
        &self.lock
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    /// The printable region: paper minus margins.
    pub fn active_area(&self) -> Size {
        self.record().size().inset(self.margins)
    }

    /// Select a paper size and resync the lock ratio if it is off.
    pub fn select_paper_size(&mut self, key: impl Into<PaperKey>) -> &PaperSize {
        self.paper.update_paper_size(key);
        self.resync();
        self.paper.record()
    }

    /// Change orientation and resync the lock ratio if it is off.
    pub fn set_orientation(&mut self, orientation: Orientation) -> &PaperSize {
        self.paper.update_orientation(orientation);
        self.resync();
        self.paper.record()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.lock.set_is_locked(locked);
    }

    /// Apply a typed width or height to a `Custom` paper.
    ///
    /// With the lock on, the other side follows the remembered ratio.
    /// Catalog-backed paper is not editable and is returned unchanged.
    pub fn edit_dimension(&mut self, changed: Dimension, value: f64) -> &PaperSize {
        if !self.paper.are_dimensions_editable() {
            log::debug!(
                "ignoring {changed} edit on catalog paper {}",
                self.paper.record().key
            );
            return self.paper.record();
        }
        let rec = self.paper.record();
        let (width, height) = match changed {
            Dimension::Width => (value, rec.height),
            Dimension::Height => (rec.width, value),
        };
        let (width_unit, height_unit) = (rec.width_unit, rec.height_unit);
        let size = self.lock.update_dimensions(width, height, changed);
        self.paper
            .update_dimensions(size.width, size.height, width_unit, height_unit)
    }

    /// Change the unit labels, keeping the numbers.
    pub fn set_units(&mut self, width_unit: LengthUnit, height_unit: LengthUnit) -> &PaperSize {
        let size = self.record().size();
        self.paper
            .update_dimensions(size.width, size.height, width_unit, height_unit)
    }

    fn resync(&mut self) {
        let size = self.paper.record().size();
        self.lock.sync_ratio_if_unlocked(size.width, size.height);
    }
}

/// One element (placeholder, notes block, slide) inside an active area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementPlacement {
    position: Position,
    size: Size,
    /// Last coordinates entered by hand, used while `position` is `Custom`.
    manual: Point,
    lock: AspectRatioLock,
    clamp: bool,
}

impl ElementPlacement {
    /// An element of `size` at the configured default position.
    pub fn new(size: Size, config: &LayoutConfig) -> Self {
        Self {
            position: config.position,
            size,
            manual: Point::ORIGIN,
            lock: AspectRatioLock::new(size.width, size.height),
            clamp: config.clamp,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn lock(&self) -> &AspectRatioLock {
        &self.lock
    }

    /// Top-left coordinates in `active`.
    pub fn origin(&self, active: Size) -> Point {
        resolve_placement(self.position, self.size, active, self.manual, self.clamp)
    }

    /// Switch anchors. Moving to `Custom` freezes the current origin as the
    /// manual coordinates so the element does not jump.
    pub fn set_position(&mut self, position: Position, active: Size) {
        if position.is_custom() && !self.position.is_custom() {
            self.manual = self.origin(active);
        }
        self.position = position;
    }

    /// Place at typed coordinates. Switches the position to `Custom`.
    pub fn move_to(&mut self, origin: Point) {
        self.position = Position::Custom;
        self.manual = origin;
    }

    /// Apply a typed width or height, honoring the lock.
    pub fn resize(&mut self, changed: Dimension, value: f64) -> Size {
        let (width, height) = match changed {
            Dimension::Width => (value, self.size.height),
            Dimension::Height => (self.size.width, value),
        };
        self.size = self.lock.update_dimensions(width, height, changed);
        self.size
    }

    /// Replace the size from outside (a template change, say), resyncing
    /// the lock ratio if it is off.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.lock.sync_ratio_if_unlocked(size.width, size.height);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.lock.set_is_locked(locked);
    }
}
