//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod geometry;
pub mod identifiers;

// Re-export for convenience
pub use error::{AppError, LayoutError};
pub use geometry::{Flow, Insets, InvalidOrientation, Orientation, Rect, Size};
pub use identifiers::{InvalidLaneCount, ItemPosition, LaneCount, LaneIndex};
