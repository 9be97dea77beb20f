//! Tests for LayoutState lane tracking and boundary queries.

use super::*;

fn vertical(lanes: usize) -> LayoutState {
    LayoutState::new(Orientation::Vertical, LaneCount::new(lanes).unwrap())
}

fn horizontal(lanes: usize) -> LayoutState {
    LayoutState::new(Orientation::Horizontal, LaneCount::new(lanes).unwrap())
}

fn lane(i: usize) -> LaneIndex {
    LaneIndex::new(i)
}

// ===== initialize =====

#[test]
fn initialize_splits_cross_axis_evenly_vertical() {
    let mut state = vertical(3);
    let lane_size = state.initialize(300, 0);

    assert_eq!(lane_size, 100);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 0, 100, 0));
    assert_eq!(*state.lane(lane(1)), Rect::new(100, 0, 200, 0));
    assert_eq!(*state.lane(lane(2)), Rect::new(200, 0, 300, 0));
}

#[test]
fn initialize_splits_cross_axis_evenly_horizontal() {
    let mut state = horizontal(2);
    let lane_size = state.initialize(80, 15);

    assert_eq!(lane_size, 40);
    assert_eq!(*state.lane(lane(0)), Rect::new(15, 0, 15, 40));
    assert_eq!(*state.lane(lane(1)), Rect::new(15, 40, 15, 80));
}

#[test]
fn initialize_truncates_remainder() {
    let mut state = vertical(3);
    assert_eq!(state.initialize(100, 0), 33);
    assert_eq!(state.lane(lane(2)).right, 99);
}

#[test]
fn initialize_at_applies_cross_origin() {
    let mut state = vertical(2);
    state.initialize_at(8, 200, 4);
    assert_eq!(*state.lane(lane(0)), Rect::new(8, 4, 108, 4));
    assert_eq!(*state.lane(lane(1)), Rect::new(108, 4, 208, 4));
}

#[test]
fn initialize_clamps_negative_space_to_zero() {
    let mut state = vertical(2);
    assert_eq!(state.initialize(-50, 0), 0);
    assert_eq!(*state.lane(lane(1)), Rect::new(0, 0, 0, 0));
}

#[test]
fn initialize_discards_previous_spans() {
    let mut state = vertical(2);
    state.initialize(200, 0);
    state.grow_lane(lane(0), 70);
    state.initialize(200, 10);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 10, 100, 10));
}

// ===== mutations =====

#[test]
fn grow_and_shrink_move_trailing_edge() {
    let mut state = vertical(1);
    state.initialize(100, 0);
    state.grow_lane(lane(0), 40);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 0, 100, 40));
    state.shrink_lane(lane(0), 15);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 0, 100, 25));
}

#[test]
fn grow_horizontal_moves_right_edge() {
    let mut state = horizontal(1);
    state.initialize(100, 0);
    state.grow_lane(lane(0), 40);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 0, 40, 100));
}

#[test]
fn translate_lane_moves_only_that_lane() {
    let mut state = vertical(2);
    state.initialize(200, 0);
    state.grow_lane(lane(1), 30);
    state.translate_lane(lane(1), 5);
    assert_eq!(*state.lane(lane(0)), Rect::new(0, 0, 100, 0));
    assert_eq!(*state.lane(lane(1)), Rect::new(100, 5, 200, 35));
}

#[test]
fn translate_all_preserves_extents() {
    let mut state = vertical(3);
    state.initialize(300, 0);
    state.grow_lane(lane(0), 10);
    state.grow_lane(lane(1), 20);
    state.grow_lane(lane(2), 30);

    state.translate_all(-25);

    let extents: Vec<i32> = state
        .lanes()
        .map(|r| r.main_extent(Orientation::Vertical))
        .collect();
    assert_eq!(extents, vec![10, 20, 30]);
    assert_eq!(state.outer_start_edge(), -25);
    assert_eq!(state.outer_end_edge(), 5);
}

#[test]
fn get_returns_none_out_of_range() {
    let state = vertical(2);
    assert!(state.get(lane(1)).is_some());
    assert!(state.get(lane(2)).is_none());
}

// ===== boundary queries =====

#[test]
fn boundary_queries_aggregate_over_lanes() {
    let mut state = vertical(3);
    state.initialize(300, 0);
    state.translate_lane(lane(0), -20);
    state.grow_lane(lane(0), 80); // [-20, 60]
    state.grow_lane(lane(1), 50); // [0, 50]
    state.translate_lane(lane(2), 10);
    state.grow_lane(lane(2), 90); // [10, 100]

    assert_eq!(state.outer_start_edge(), -20);
    assert_eq!(state.inner_start_edge(), 10);
    assert_eq!(state.inner_end_edge(), 50);
    assert_eq!(state.outer_end_edge(), 100);
}

#[test]
fn boundary_queries_on_fresh_state_collapse_to_offset() {
    let mut state = horizontal(4);
    state.initialize(400, 12);
    assert_eq!(state.outer_start_edge(), 12);
    assert_eq!(state.inner_start_edge(), 12);
    assert_eq!(state.inner_end_edge(), 12);
    assert_eq!(state.outer_end_edge(), 12);
}
