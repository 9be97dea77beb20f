//! Item sources feeding a [`GridHost`](super::GridHost).

use crate::layout::{ItemSizing, MeasureSpec};
use crate::model::{ItemPosition, Size};

/// Data side of the host: how many items exist and how big each one is.
pub trait ItemSource {
    /// Total number of items.
    fn item_count(&self) -> usize;

    /// Declared sizing of an item. Defaults to content-sized on both axes.
    fn sizing(&self, _position: ItemPosition) -> ItemSizing {
        ItemSizing::wrap_content()
    }

    /// Measure an item under the given constraints.
    fn measure(&self, position: ItemPosition, width: MeasureSpec, height: MeasureSpec) -> Size;
}

/// Items with a fixed preferred extent each, stored in a `Vec`.
///
/// The preferred extent answers whichever axis is left unconstrained, so the
/// same source serves vertical and horizontal grids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecItemSource {
    extents: Vec<i32>,
}

impl VecItemSource {
    /// One item per entry, each preferring the given main-axis extent.
    pub fn new(extents: Vec<i32>) -> Self {
        Self { extents }
    }

    /// Deterministic pseudo-varied extents in `[min, min + spread)`.
    ///
    /// Uses a fixed multiplicative step so runs are reproducible without a
    /// random number generator.
    pub fn generated(count: usize, min: i32, spread: i32) -> Self {
        let spread = spread.max(1) as usize;
        let extents = (0..count)
            .map(|i| min + ((i * 37 + 11) % spread) as i32)
            .collect();
        Self { extents }
    }

    /// Preferred extents in position order.
    pub fn extents(&self) -> &[i32] {
        &self.extents
    }
}

impl ItemSource for VecItemSource {
    fn item_count(&self) -> usize {
        self.extents.len()
    }

    fn measure(&self, position: ItemPosition, width: MeasureSpec, height: MeasureSpec) -> Size {
        let preferred = self
            .extents
            .get(position.get())
            .copied()
            .unwrap_or_default();
        Size::new(width.resolve(preferred), height.resolve(preferred))
    }
}
