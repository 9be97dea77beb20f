//! lanegrid
//!
//! Incremental, bidirectional lane packing for staggered grids.
//!
//! Items of equal cross-axis size and varying main-axis size are packed into
//! a fixed number of lanes. Attaching forward places an item at the end of
//! the shortest lane; attaching backward places it before the start of the
//! lane reaching furthest back. An item's lane is remembered across detach
//! and reattach so that scrolling back reproduces the same arrangement.
//!
//! - [`layout`] holds the engine: [`layout::LaneTable`], [`layout::LayoutState`]
//!   and [`layout::GridLayoutEngine`].
//! - [`host`] is a reference scroll container driving the engine.
//! - [`view`] renders a host's viewport with ratatui.

pub mod config;
pub mod host;
pub mod layout;
pub mod logging;
pub mod model;
pub mod view;
