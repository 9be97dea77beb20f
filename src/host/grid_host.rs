//! Reference host container driving a [`GridLayoutEngine`].
//!
//! The host owns the scroll loop the engine deliberately leaves out: it keeps
//! a contiguous run of attached items `[first, last]`, fills the viewport using
//! the engine's boundary edges, and recycles items that scroll out of view.

use super::source::ItemSource;
use crate::layout::GridLayoutEngine;
use crate::model::{Flow, ItemPosition, LaneIndex, LayoutError, Orientation, Rect, Size};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// An item currently attached to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedItem {
    /// Adapter position.
    pub position: ItemPosition,
    /// Lane the item was placed in.
    pub lane: LaneIndex,
    /// Current rectangle, kept in step with scrolling.
    pub rect: Rect,
    /// Size reported by the measure pass; detach must hand back the same size.
    pub size: Size,
}

/// Aggregate lane edges along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edges {
    /// Earliest lane start.
    pub outer_start: i32,
    /// Latest lane start.
    pub inner_start: i32,
    /// Earliest lane end.
    pub inner_end: i32,
    /// Latest lane end.
    pub outer_end: i32,
}

/// Serializable placement of one attached item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Adapter position.
    pub position: usize,
    /// Lane index.
    pub lane: usize,
    /// Item rectangle.
    pub rect: Rect,
}

/// Point-in-time view of a host, for output and assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostSnapshot {
    /// Scroll axis.
    pub orientation: Orientation,
    /// Number of lanes.
    pub lane_count: usize,
    /// Cross-axis size of each lane.
    pub lane_size: i32,
    /// Main-axis window `[start, end)`.
    pub viewport: (i32, i32),
    /// Lane boundary edges.
    pub edges: Edges,
    /// Attached items in position order.
    pub items: Vec<Placement>,
}

/// Host container: engine + item source + attached item window.
#[derive(Debug)]
pub struct GridHost<S> {
    engine: GridLayoutEngine,
    source: S,
    items: VecDeque<AttachedItem>,
    /// Position laid out first when the window is empty.
    anchor: ItemPosition,
}

impl<S: ItemSource> GridHost<S> {
    /// Wraps an engine whose container size has already been configured.
    pub fn new(engine: GridLayoutEngine, source: S) -> Self {
        Self {
            engine,
            source,
            items: VecDeque::new(),
            anchor: ItemPosition::default(),
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GridLayoutEngine {
        &self.engine
    }

    /// The item source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Attached items in position order.
    pub fn attached(&self) -> impl Iterator<Item = &AttachedItem> {
        self.items.iter()
    }

    /// Lowest attached position, if any item is attached.
    pub fn first_position(&self) -> Option<ItemPosition> {
        self.items.front().map(|item| item.position)
    }

    /// Highest attached position, if any item is attached.
    pub fn last_position(&self) -> Option<ItemPosition> {
        self.items.back().map(|item| item.position)
    }

    /// Main-axis window `[start, end)` the host keeps filled.
    pub fn viewport(&self) -> (i32, i32) {
        self.engine.content_main_bounds()
    }

    /// Current lane boundary edges.
    pub fn edges(&self) -> Edges {
        Edges {
            outer_start: self.engine.outer_start_edge(),
            inner_start: self.engine.inner_start_edge(),
            inner_end: self.engine.inner_end_edge(),
            outer_end: self.engine.outer_end_edge(),
        }
    }

    /// Full layout pass.
    ///
    /// The first attached item (or position 0 on the first pass) keeps its
    /// main-axis offset; everything else is laid out around it.
    pub fn layout(&mut self) -> Result<(), LayoutError> {
        let o = self.engine.orientation();
        let (start, _) = self.viewport();
        let offset = match self.items.front() {
            Some(front) => {
                self.anchor = front.position;
                front.rect.main_start(o).saturating_sub(start)
            }
            None => 0,
        };

        self.items.clear();
        self.engine.reset_layout(offset);
        self.fill_forward()?;
        self.fill_backward()?;
        self.recycle()?;

        debug!(
            anchor = %self.anchor,
            attached = self.items.len(),
            "Layout pass complete"
        );
        Ok(())
    }

    /// Resizes the container and relays out.
    pub fn resize(&mut self, size: Size) -> Result<(), LayoutError> {
        self.engine.set_container_size(size);
        self.layout()
    }

    /// Switches the scroll axis and relays out from the current anchor.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), LayoutError> {
        self.anchor = self.first_position().unwrap_or(self.anchor);
        self.items.clear();
        self.engine.set_orientation(orientation);
        self.layout()
    }

    /// Scrolls by `delta` layout units; positive reveals forward content.
    ///
    /// Returns the distance actually scrolled, which is smaller than `delta`
    /// when the first or last item is reached, or when moving the lanes by
    /// `delta` would leave the `i32` coordinate range.
    pub fn scroll_by(&mut self, delta: i32) -> Result<i32, LayoutError> {
        let delta = self.clamp_delta(delta);
        if delta == 0 || self.source.item_count() == 0 {
            return Ok(0);
        }

        self.translate(-delta);

        let applied = if delta > 0 {
            self.fill_forward()?;
            let correction = self.forward_gap().min(delta);
            if correction > 0 {
                self.translate(correction);
            }
            delta - correction
        } else {
            self.fill_backward()?;
            let correction = self.backward_gap().min(-delta);
            if correction > 0 {
                self.translate(-correction);
            }
            delta + correction
        };

        self.recycle()?;
        self.fill_forward()?;
        self.fill_backward()?;

        debug!(
            requested = delta,
            applied,
            first = ?self.first_position(),
            last = ?self.last_position(),
            "Scrolled"
        );
        Ok(applied)
    }

    /// Serializable state of the host.
    pub fn snapshot(&self) -> HostSnapshot {
        let items = self
            .items
            .iter()
            .map(|item| Placement {
                position: item.position.get(),
                lane: item.lane.get(),
                rect: item.rect,
            })
            .collect();

        HostSnapshot {
            orientation: self.engine.orientation(),
            lane_count: self.engine.lane_count().get(),
            lane_size: self.engine.lane_size(),
            viewport: self.viewport(),
            edges: self.edges(),
            items,
        }
    }

    // ===== Fill & recycle =====

    fn fill_forward(&mut self) -> Result<(), LayoutError> {
        let (_, end) = self.viewport();
        let count = self.source.item_count();

        while self.engine.inner_end_edge() < end {
            let next = match self.items.back() {
                Some(item) => item.position.next(),
                None => self.anchor,
            };
            if next.get() >= count {
                break;
            }
            self.attach(next, Flow::Forward)?;
        }
        Ok(())
    }

    fn fill_backward(&mut self) -> Result<(), LayoutError> {
        let (start, _) = self.viewport();

        while self.engine.inner_start_edge() > start {
            let prev = match self.items.front() {
                Some(item) => item.position.prev(),
                None => self.anchor.prev(),
            };
            let Some(prev) = prev else {
                break;
            };
            self.attach(prev, Flow::Backward)?;
        }
        Ok(())
    }

    /// Detaches items entirely outside the viewport, front then back.
    ///
    /// Stops at the first item still in view on each side so the attached
    /// window stays contiguous: the lowest attached position is always the
    /// first item of its lane, the highest always the last.
    fn recycle(&mut self) -> Result<(), LayoutError> {
        let o = self.engine.orientation();
        let (start, end) = self.viewport();
        let mut recycled = 0usize;

        while let Some(front) = self.items.front().copied() {
            if front.rect.main_end(o) > start {
                break;
            }
            self.engine.detach(front.position, Flow::Forward, front.size)?;
            self.items.pop_front();
            self.anchor = front.position.next();
            recycled += 1;
        }

        while let Some(back) = self.items.back().copied() {
            if back.rect.main_start(o) < end {
                break;
            }
            self.engine.detach(back.position, Flow::Backward, back.size)?;
            self.items.pop_back();
            recycled += 1;
        }

        if recycled > 0 {
            debug!(recycled, attached = self.items.len(), "Recycled items");
        }
        Ok(())
    }

    fn attach(&mut self, position: ItemPosition, flow: Flow) -> Result<(), LayoutError> {
        let sizing = self.source.sizing(position);
        let (width_spec, height_spec) = self.engine.measure_specs(sizing);
        let size = self.source.measure(position, width_spec, height_spec);
        let (lane, rect) = self.engine.place(position, flow, size)?;

        let item = AttachedItem {
            position,
            lane,
            rect,
            size,
        };
        match flow {
            Flow::Forward => self.items.push_back(item),
            Flow::Backward => self.items.push_front(item),
        }
        Ok(())
    }

    fn translate(&mut self, delta: i32) {
        let o = self.engine.orientation();
        self.engine.offset_layout(delta);
        for item in &mut self.items {
            item.rect.offset_main(o, delta);
        }
    }

    /// Empty space after the last item once there is nothing left to attach.
    fn forward_gap(&self) -> i32 {
        let next = match self.last_position() {
            Some(last) => last.next(),
            None => self.anchor,
        };
        if next.get() < self.source.item_count() {
            return 0;
        }
        let (_, end) = self.viewport();
        end.saturating_sub(self.engine.outer_end_edge()).max(0)
    }

    /// Empty space before the first item once position 0 is attached.
    fn backward_gap(&self) -> i32 {
        let first = self.first_position().unwrap_or(self.anchor);
        if first.prev().is_some() {
            return 0;
        }
        let (start, _) = self.viewport();
        self.engine
            .outer_start_edge()
            .saturating_sub(start)
            .max(0)
    }

    /// Limits `delta` so translating every lane by `-delta` stays in range.
    ///
    /// The result is within `-i32::MAX..=i32::MAX`, so it can be negated.
    fn clamp_delta(&self, delta: i32) -> i32 {
        let max_forward = i64::from(self.engine.outer_start_edge()) - i64::from(i32::MIN);
        let max_backward = i64::from(i32::MAX) - i64::from(self.engine.outer_end_edge());
        let limit = i64::from(i32::MAX);

        let clamped = i64::from(delta).clamp(-max_backward.min(limit), max_forward.min(limit));
        i32::try_from(clamped).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "grid_host_tests.rs"]
mod tests;
