//! Terminal rendering of a laid-out grid.

pub mod preview;

pub use preview::GridPreview;
