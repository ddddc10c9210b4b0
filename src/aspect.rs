//! Aspect-ratio lock for a width/height pair.
//!
//! While unlocked, every edit refreshes the remembered ratio. While locked,
//! the side the user did not touch is recomputed from that ratio.
//!
//! # Example
//!
//! ```
//! use pageplace::{AspectRatioLock, Dimension, Size};
//!
//! let mut lock = AspectRatioLock::new(200.0, 100.0);
//! lock.set_is_locked(true);
//! assert_eq!(
//!     lock.update_dimensions(300.0, 100.0, Dimension::Width),
//!     Size::new(300.0, 150.0)
//! );
//! ```

use crate::error::InvalidRatio;
use crate::geometry::{Dimension, Size};

/// Ratio used when the initial pair cannot produce one.
const DEFAULT_RATIO: f64 = 1.0;

/// Lock flag plus the last `width / height` seen while unlocked.
///
/// The ratio is always finite and positive. Deserializing a stored lock
/// with any other ratio fails with [`InvalidRatio`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StoredLock")
)]
pub struct AspectRatioLock {
    is_locked: bool,
    ratio: f64,
}

/// Unchecked wire form of [`AspectRatioLock`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredLock {
    is_locked: bool,
    ratio: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredLock> for AspectRatioLock {
    type Error = InvalidRatio;

    fn try_from(stored: StoredLock) -> Result<Self, Self::Error> {
        Self::with_ratio(stored.is_locked, stored.ratio)
    }
}

impl Default for AspectRatioLock {
    fn default() -> Self {
        Self {
            is_locked: false,
            ratio: DEFAULT_RATIO,
        }
    }
}

impl AspectRatioLock {
    /// Unlocked, with the ratio taken from the initial pair.
    ///
    /// A pair without a usable ratio (non-positive height, non-finite
    /// values) starts at 1:1.
    pub fn new(width: f64, height: f64) -> Self {
        let ratio = Size::new(width, height).aspect_ratio().unwrap_or_else(|| {
            log::debug!("no usable aspect ratio in {width}x{height}, starting at 1:1");
            DEFAULT_RATIO
        });
        Self {
            is_locked: false,
            ratio,
        }
    }

    /// A lock holding `ratio` directly, for restoring a saved panel.
    pub fn with_ratio(is_locked: bool, ratio: f64) -> Result<Self, InvalidRatio> {
        if !is_usable(ratio) {
            return Err(InvalidRatio(ratio));
        }
        Ok(Self { is_locked, ratio })
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// The remembered `width / height`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Turn the lock on or off. The ratio is left alone; the next unlocked
    /// edit or [`sync_ratio_if_unlocked`](Self::sync_ratio_if_unlocked)
    /// refreshes it.
    pub fn set_is_locked(&mut self, locked: bool) {
        self.is_locked = locked;
    }

    /// Apply a user edit to `changed`.
    ///
    /// Unlocked: the pair is returned as given and the ratio becomes
    /// `width / height`. Locked: the other side is derived from the ratio.
    /// A locked edit to a non-positive or non-finite value has no effect on
    /// the other side.
    pub fn update_dimensions(&mut self, width: f64, height: f64, changed: Dimension) -> Size {
        if !self.is_locked {
            self.remember(width, height);
            return Size::new(width, height);
        }

        match changed {
            Dimension::Width if is_usable(width) => Size::new(width, width / self.ratio),
            Dimension::Height if is_usable(height) => Size::new(height * self.ratio, height),
            _ => {
                log::debug!("locked edit to {changed} ignored for {width}x{height}");
                Size::new(width, height)
            }
        }
    }

    /// Refresh the ratio from a pair that changed outside this lock (a
    /// paper-size swap, for instance). No effect while locked.
    pub fn sync_ratio_if_unlocked(&mut self, width: f64, height: f64) {
        if !self.is_locked {
            self.remember(width, height);
        }
    }

    fn remember(&mut self, width: f64, height: f64) {
        match Size::new(width, height).aspect_ratio() {
            Some(ratio) => self.ratio = ratio,
            None => log::debug!("keeping ratio {}; {width}x{height} has none", self.ratio),
        }
    }
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
