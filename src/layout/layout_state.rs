//! LayoutState - per-lane occupied-span tracker
//!
//! Each lane owns a rectangle whose cross-axis bounds are fixed at
//! initialization and whose main-axis bounds track the span currently occupied
//! by attached items. The four aggregate edges answer the host's "do I need
//! more content?" questions:
//!
//! ```text
//!            outer_start  inner_start            inner_end  outer_end
//!                 |            |                      |          |
//! lane 0          [==========================]        |          |
//! lane 1               [==============================]          |
//! lane 2          |            [=========================================]
//! ```
//!
//! The shortest lane is the limiting factor for visual completeness: a host
//! keeps fetching forward items until `inner_end_edge` passes the viewport's
//! far edge, and backward items until `inner_start_edge` is before its near
//! edge.
//!
//! # Complexity
//!
//! Every mutation touching a single lane is O(1); `initialize`, `translate_all`
//! and the boundary queries are O(lane_count).

use crate::model::{LaneCount, LaneIndex, Orientation, Rect};

/// Ordered collection of exactly `lane_count` lane rectangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    orientation: Orientation,
    lane_count: LaneCount,
    lanes: Vec<Rect>,
}

impl LayoutState {
    /// Creates a state with `lane_count` empty lanes at the origin.
    pub fn new(orientation: Orientation, lane_count: LaneCount) -> Self {
        Self {
            orientation,
            lane_count,
            lanes: vec![Rect::default(); lane_count.get()],
        }
    }

    /// Axis the lanes are laid out along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of lanes.
    pub fn lane_count(&self) -> LaneCount {
        self.lane_count
    }

    /// Returns the rectangle of `lane`.
    ///
    /// # Panics
    ///
    /// Panics if `lane >= lane_count`.
    pub fn lane(&self, lane: LaneIndex) -> &Rect {
        &self.lanes[lane.get()]
    }

    /// Returns a copy of the rectangle of `lane`, or `None` if out of range.
    pub fn get(&self, lane: LaneIndex) -> Option<Rect> {
        self.lanes.get(lane.get()).copied()
    }

    /// Iterate over lane rectangles in lane order.
    pub fn lanes(&self) -> impl Iterator<Item = &Rect> {
        self.lanes.iter()
    }

    /// Splits `cross_available` evenly across lanes starting at cross origin 0.
    ///
    /// Returns the per-lane size. See [`LayoutState::initialize_at`].
    pub fn initialize(&mut self, cross_available: i32, main_offset: i32) -> i32 {
        self.initialize_at(0, cross_available, main_offset)
    }

    /// Splits `cross_available` evenly across lanes starting at `cross_origin`.
    ///
    /// Lane `i` gets cross bounds
    /// `[cross_origin + i*lane_size, cross_origin + (i+1)*lane_size]` where
    /// `lane_size = cross_available / lane_count` (integer division, negative
    /// space clamped to zero). Both main-axis bounds are set to `main_offset`,
    /// leaving every lane with an empty span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lanegrid::layout::LayoutState;
    /// # use lanegrid::model::{LaneCount, LaneIndex, Orientation, Rect};
    /// let mut state = LayoutState::new(Orientation::Vertical, LaneCount::new(3).unwrap());
    /// assert_eq!(state.initialize(300, 20), 100);
    /// assert_eq!(*state.lane(LaneIndex::new(1)), Rect::new(100, 20, 200, 20));
    /// ```
    pub fn initialize_at(
        &mut self,
        cross_origin: i32,
        cross_available: i32,
        main_offset: i32,
    ) -> i32 {
        let lane_size = cross_available.max(0) / self.lane_count.get() as i32;
        let orientation = self.orientation;

        for (i, lane) in self.lanes.iter_mut().enumerate() {
            let cross_start = cross_origin + i as i32 * lane_size;
            *lane = Rect::from_axes(
                orientation,
                cross_start,
                main_offset,
                cross_start + lane_size,
                main_offset,
            );
        }

        lane_size
    }

    /// Adds `delta` to both main-axis bounds of every lane (pure scroll).
    pub fn translate_all(&mut self, delta: i32) {
        let orientation = self.orientation;
        for lane in &mut self.lanes {
            lane.offset_main(orientation, delta);
        }
    }

    /// Adds `delta` to both main-axis bounds of one lane.
    pub fn translate_lane(&mut self, lane: LaneIndex, delta: i32) {
        let orientation = self.orientation;
        self.lanes[lane.get()].offset_main(orientation, delta);
    }

    /// Moves only the lane's leading main-axis edge by `delta`.
    ///
    /// Same end state as `translate_lane(lane, delta)` followed by
    /// `shrink_lane(lane, delta)`, without moving the trailing edge in between.
    pub fn move_lane_start(&mut self, lane: LaneIndex, delta: i32) {
        let orientation = self.orientation;
        self.lanes[lane.get()].extend_main_start(orientation, delta);
    }

    /// Extends the lane's trailing main-axis edge by `amount`.
    pub fn grow_lane(&mut self, lane: LaneIndex, amount: i32) {
        let orientation = self.orientation;
        self.lanes[lane.get()].extend_main_end(orientation, amount);
    }

    /// Contracts the lane's trailing main-axis edge by `amount`.
    pub fn shrink_lane(&mut self, lane: LaneIndex, amount: i32) {
        let orientation = self.orientation;
        self.lanes[lane.get()].extend_main_end(orientation, -amount);
    }

    /// Minimum of all lanes' start edges: how far back content exists.
    pub fn outer_start_edge(&self) -> i32 {
        self.start_edges().min().unwrap_or_default()
    }

    /// Maximum of all lanes' start edges: every lane has content from here on.
    pub fn inner_start_edge(&self) -> i32 {
        self.start_edges().max().unwrap_or_default()
    }

    /// Minimum of all lanes' end edges: the shortest lane's extent.
    pub fn inner_end_edge(&self) -> i32 {
        self.end_edges().min().unwrap_or_default()
    }

    /// Maximum of all lanes' end edges: the furthest content edge.
    pub fn outer_end_edge(&self) -> i32 {
        self.end_edges().max().unwrap_or_default()
    }

    fn start_edges(&self) -> impl Iterator<Item = i32> + '_ {
        self.lanes
            .iter()
            .map(move |lane| lane.main_start(self.orientation))
    }

    fn end_edges(&self) -> impl Iterator<Item = i32> + '_ {
        self.lanes
            .iter()
            .map(move |lane| lane.main_end(self.orientation))
    }
}

#[cfg(test)]
#[path = "layout_state_tests.rs"]
mod tests;
