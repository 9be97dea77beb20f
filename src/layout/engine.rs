//! GridLayoutEngine - attach/detach orchestration
//!
//! The engine exclusively owns a [`LaneTable`] and a [`LayoutState`]. The host
//! container drives it during its layout pass:
//!
//! 1. `reset_layout(offset)` on layout invalidation (resize, orientation change)
//! 2. `attach(position, flow, size)` for every item scrolled into view
//! 3. `detach(position, flow, size)` for every item scrolled out of view
//! 4. `offset_layout(delta)` when the whole window moves without relayout
//!
//! and consults the four boundary edges to decide when the viewport is full.
//!
//! # Item lifecycle
//!
//! ```text
//! UNSEEN --attach--> ATTACHED --detach--> DETACHED --attach--> ATTACHED (same lane)
//! ```
//!
//! Lane assignment happens on the first attach and is never undone.

use super::lane_table::LaneTable;
use super::layout_state::LayoutState;
use super::measure::{measure_specs, ItemSizing, MeasureSpec};
use crate::model::{
    Flow, Insets, ItemPosition, LaneCount, LaneIndex, LayoutError, Orientation, Rect, Size,
};
use tracing::{debug, trace};

/// Incremental staggered-grid layout engine.
///
/// Single-threaded: the host serializes every call on its layout pass. There
/// is no internal locking.
#[derive(Debug, Clone)]
pub struct GridLayoutEngine {
    orientation: Orientation,
    lane_count: LaneCount,
    container: Size,
    padding: Insets,
    lane_size: i32,
    lane_table: LaneTable,
    state: LayoutState,
    laid_out: bool,
}

impl GridLayoutEngine {
    /// Creates an engine with `lane_count` lanes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidLaneCount`] if `lane_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lanegrid::layout::GridLayoutEngine;
    /// # use lanegrid::model::{Orientation, LayoutError};
    /// assert!(GridLayoutEngine::new(3, Orientation::Vertical).is_ok());
    /// assert!(matches!(
    ///     GridLayoutEngine::new(0, Orientation::Vertical),
    ///     Err(LayoutError::InvalidLaneCount(_))
    /// ));
    /// ```
    pub fn new(lane_count: usize, orientation: Orientation) -> Result<Self, LayoutError> {
        Ok(Self::with_lane_count(LaneCount::new(lane_count)?, orientation))
    }

    /// Creates an engine from an already validated lane count.
    pub fn with_lane_count(lane_count: LaneCount, orientation: Orientation) -> Self {
        Self {
            orientation,
            lane_count,
            container: Size::default(),
            padding: Insets::default(),
            lane_size: 0,
            lane_table: LaneTable::new(),
            state: LayoutState::new(orientation, lane_count),
            laid_out: false,
        }
    }

    // ===== Configuration =====

    /// Current scroll axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of lanes.
    pub fn lane_count(&self) -> LaneCount {
        self.lane_count
    }

    /// Cross-axis size of each lane as of the last reset.
    pub fn lane_size(&self) -> i32 {
        self.lane_size
    }

    /// Container size used by the next `reset_layout`.
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Container padding used by the next `reset_layout`.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// True once `reset_layout` has established lane bounds for the current orientation.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Sets the container size. Takes effect on the next `reset_layout`.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    /// Sets the container padding. Takes effect on the next `reset_layout`.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Changes the scroll axis.
    ///
    /// Lane rectangles are rebuilt for the new axis and the engine must be
    /// reset before items can be attached again. Lane assignments are kept.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            return;
        }
        debug!(from = %self.orientation, to = %orientation, "Orientation changed");
        self.orientation = orientation;
        self.state = LayoutState::new(orientation, self.lane_count);
        self.lane_size = 0;
        self.laid_out = false;
    }

    /// Main-axis window `[start, end)` inside the container padding.
    pub fn content_main_bounds(&self) -> (i32, i32) {
        let o = self.orientation;
        let start = self.padding.main_start(o);
        let end = self.container.main(o) - self.padding.main_end(o);
        (start, end.max(start))
    }

    /// Recomputes lane bounds from the container size.
    ///
    /// Every lane gets an empty span at `main_padding_start + offset`.
    pub fn reset_layout(&mut self, offset: i32) {
        let o = self.orientation;
        let cross_origin = self.padding.cross_start(o);
        let cross_available =
            self.container.cross(o) - self.padding.cross_start(o) - self.padding.cross_end(o);
        let main_offset = self.padding.main_start(o).saturating_add(offset);

        self.lane_size = self
            .state
            .initialize_at(cross_origin, cross_available, main_offset);
        self.laid_out = true;

        debug!(
            lanes = self.lane_count.get(),
            lane_size = self.lane_size,
            offset,
            orientation = %o,
            "Layout reset"
        );
    }

    /// Translates every lane along the main axis (pure scroll).
    pub fn offset_layout(&mut self, delta: i32) {
        self.state.translate_all(delta);
    }

    /// Measure constraints for an item with the given declared sizing.
    pub fn measure_specs(&self, sizing: ItemSizing) -> (MeasureSpec, MeasureSpec) {
        measure_specs(self.orientation, self.lane_size, sizing)
    }

    // ===== Attach / detach =====

    /// Places `position` adjoining its lane's leading edge in `flow` direction.
    ///
    /// The lane is assigned on first sight and reused afterwards. Returns the
    /// item's rectangle: cross bounds equal the lane's, main bounds start at
    /// the lane's end (forward) or end at the lane's start (backward).
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NotLaidOut`] before the first `reset_layout`
    /// - [`LayoutError::NegativeMeasurement`] if either dimension is negative
    /// - [`LayoutError::ExtentOverflow`] if the item would not fit in `i32` coordinates
    pub fn attach(
        &mut self,
        position: ItemPosition,
        flow: Flow,
        measured: Size,
    ) -> Result<Rect, LayoutError> {
        self.place(position, flow, measured).map(|(_, rect)| rect)
    }

    /// Like [`GridLayoutEngine::attach`], also returning the lane used.
    ///
    /// # Errors
    ///
    /// Same as [`GridLayoutEngine::attach`].
    pub fn place(
        &mut self,
        position: ItemPosition,
        flow: Flow,
        measured: Size,
    ) -> Result<(LaneIndex, Rect), LayoutError> {
        self.validate(position, measured)?;

        let o = self.orientation;
        let main_size = measured.main(o);
        let lane = self.lane_table.lane_for(position, flow, &self.state);
        let lane_rect = *self.state.lane(lane);
        let overflow = || LayoutError::ExtentOverflow {
            position,
            main_size,
        };

        let (main_start, main_end) = match flow {
            Flow::Forward => {
                let start = lane_rect.main_end(o);
                (start, start.checked_add(main_size).ok_or_else(overflow)?)
            }
            Flow::Backward => {
                let end = lane_rect.main_start(o);
                (end.checked_sub(main_size).ok_or_else(overflow)?, end)
            }
        };
        self.lane_table.assign_or_get(position, flow, &self.state);
        let rect = Rect::from_axes(
            o,
            lane_rect.cross_start(o),
            main_start,
            lane_rect.cross_end(o),
            main_end,
        );

        match flow {
            Flow::Forward => self.state.grow_lane(lane, main_size),
            Flow::Backward => self.state.move_lane_start(lane, -main_size),
        }

        trace!(%position, %lane, ?flow, ?rect, "Attached item");
        Ok((lane, rect))
    }

    /// Releases the span `position` occupied in its lane.
    ///
    /// Forward scrolling recycles from the leading side, so a forward detach
    /// advances the lane's start edge past the item. Backward scrolling
    /// recycles from the trailing side, so a backward detach pulls the lane's
    /// end edge in. The lane assignment is kept.
    ///
    /// Detaching a position that was never attached is a silent no-op.
    ///
    /// # Errors
    ///
    /// Same as [`GridLayoutEngine::attach`].
    pub fn detach(
        &mut self,
        position: ItemPosition,
        flow: Flow,
        measured: Size,
    ) -> Result<(), LayoutError> {
        self.validate(position, measured)?;

        let Some(lane) = self.lane_table.get(position) else {
            trace!(%position, "Detach of unassigned item ignored");
            return Ok(());
        };

        let o = self.orientation;
        let main_size = measured.main(o);
        let lane_rect = *self.state.lane(lane);
        let in_range = match flow {
            Flow::Forward => lane_rect.main_start(o).checked_add(main_size).is_some(),
            Flow::Backward => lane_rect.main_end(o).checked_sub(main_size).is_some(),
        };
        if !in_range {
            return Err(LayoutError::ExtentOverflow {
                position,
                main_size,
            });
        }

        match flow {
            Flow::Forward => self.state.move_lane_start(lane, main_size),
            Flow::Backward => self.state.shrink_lane(lane, main_size),
        }

        trace!(%position, %lane, ?flow, "Detached item");
        Ok(())
    }

    fn validate(&self, position: ItemPosition, measured: Size) -> Result<(), LayoutError> {
        if !self.laid_out {
            return Err(LayoutError::NotLaidOut);
        }
        if measured.is_negative() {
            return Err(LayoutError::NegativeMeasurement {
                position,
                width: measured.width,
                height: measured.height,
            });
        }
        Ok(())
    }

    // ===== Queries =====

    /// Lane recorded for `position`, if it has ever been attached.
    pub fn lane_for(&self, position: ItemPosition) -> Option<LaneIndex> {
        self.lane_table.get(position)
    }

    /// Current occupied rectangle of `lane`.
    pub fn lane_bounds(&self, lane: LaneIndex) -> Option<Rect> {
        self.state.get(lane)
    }

    /// Read-only view of the per-lane state.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Earliest lane start. See [`LayoutState::outer_start_edge`].
    pub fn outer_start_edge(&self) -> i32 {
        self.state.outer_start_edge()
    }

    /// Latest lane start. See [`LayoutState::inner_start_edge`].
    pub fn inner_start_edge(&self) -> i32 {
        self.state.inner_start_edge()
    }

    /// Earliest lane end. See [`LayoutState::inner_end_edge`].
    pub fn inner_end_edge(&self) -> i32 {
        self.state.inner_end_edge()
    }

    /// Latest lane end. See [`LayoutState::outer_end_edge`].
    pub fn outer_end_edge(&self) -> i32 {
        self.state.outer_end_edge()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
