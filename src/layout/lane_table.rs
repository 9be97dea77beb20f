//! LaneTable - permanent item position → lane mapping
//!
//! The first time a position is laid out it is assigned to a lane with a
//! greedy shortest-lane-first scan over the current lane edges. The assignment
//! is never overwritten or removed, so scrolling back over previously seen
//! content reproduces exactly the same placement.
//!
//! # Complexity
//!
//! - `get`: O(1)
//! - `assign_or_get`: O(1) when cached, O(lane_count) on first sight

use super::layout_state::LayoutState;
use crate::model::{Flow, ItemPosition, LaneIndex, Rect};

/// Arena-backed memo table keyed by item position.
///
/// Backing storage is a dense `Vec` indexed by position, grown on demand.
/// There is no eviction: positions are assumed stable for the content's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct LaneTable {
    lanes: Vec<Option<LaneIndex>>,
    assigned: usize,
}

impl LaneTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lane for `position`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lanegrid::layout::LaneTable;
    /// # use lanegrid::model::ItemPosition;
    /// let table = LaneTable::new();
    /// assert_eq!(table.get(ItemPosition::new(3)), None);
    /// ```
    pub fn get(&self, position: ItemPosition) -> Option<LaneIndex> {
        self.lanes.get(position.get()).copied().flatten()
    }

    /// Returns the lane `assign_or_get` would hand out, without recording it.
    pub fn lane_for(&self, position: ItemPosition, flow: Flow, state: &LayoutState) -> LaneIndex {
        self.get(position)
            .unwrap_or_else(|| Self::pick_lane(flow, state))
    }

    /// Returns the lane for `position`, assigning one on first sight.
    ///
    /// For [`Flow::Forward`] the lane with the smallest trailing edge wins (the
    /// shortest column); for [`Flow::Backward`] the lane with the largest
    /// leading edge wins. Ties go to the lowest lane index.
    ///
    /// Subsequent calls return the recorded lane regardless of `flow`.
    pub fn assign_or_get(
        &mut self,
        position: ItemPosition,
        flow: Flow,
        state: &LayoutState,
    ) -> LaneIndex {
        if let Some(lane) = self.get(position) {
            return lane;
        }

        let lane = Self::pick_lane(flow, state);

        let index = position.get();
        if index >= self.lanes.len() {
            self.lanes.resize(index + 1, None);
        }
        self.lanes[index] = Some(lane);
        self.assigned += 1;

        lane
    }

    /// Number of positions that have a recorded lane.
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Returns true if no position has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    fn pick_lane(flow: Flow, state: &LayoutState) -> LaneIndex {
        let orientation = state.orientation();
        let edge = |lane: &Rect| match flow {
            Flow::Forward => lane.main_end(orientation),
            Flow::Backward => lane.main_start(orientation),
        };

        let mut best = LaneIndex::default();
        let mut best_edge = edge(state.lane(best));

        for lane in state.lane_count().lanes().skip(1) {
            let candidate = edge(state.lane(lane));
            let better = match flow {
                Flow::Forward => candidate < best_edge,
                Flow::Backward => candidate > best_edge,
            };
            if better {
                best = lane;
                best_edge = candidate;
            }
        }

        best
    }
}
