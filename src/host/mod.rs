//! Reference host container.
//!
//! Drives a [`GridLayoutEngine`](crate::layout::GridLayoutEngine) through the
//! scroll/measure loop: fill the viewport from boundary edges, recycle what
//! scrolls out.

pub mod grid_host;
pub mod source;

pub use grid_host::{AttachedItem, Edges, GridHost, HostSnapshot, Placement};
pub use source::{ItemSource, VecItemSource};
