//! Lane-packing layout core.
//!
//! - [`LaneTable`]: permanent item → lane assignment
//! - [`LayoutState`]: per-lane occupied spans and boundary queries
//! - [`GridLayoutEngine`]: attach/detach orchestration over both
//! - [`measure`]: cross/main measurement constraints for items

pub mod engine;
pub mod lane_table;
pub mod layout_state;
pub mod measure;

pub use engine::GridLayoutEngine;
pub use lane_table::LaneTable;
pub use layout_state::LayoutState;
pub use measure::{measure_specs, ItemSizing, MeasureSpec, SizePolicy};
