//! Axis-aware geometry primitives.
//!
//! Every coordinate is an `i32` in layout units. A grid's [`Orientation`]
//! decides which axis is the main (scroll) axis and which is the cross (lane)
//! axis; the accessors here let layout code speak in main/cross terms without
//! branching on orientation at every call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scroll axis of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Scrolls along y; lanes are columns.
    #[default]
    Vertical,
    /// Scrolls along x; lanes are rows.
    Horizontal,
}

impl Orientation {
    /// Returns true for [`Orientation::Vertical`].
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Error returned when parsing an unknown orientation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown orientation '{0}' (expected 'vertical' or 'horizontal')")]
pub struct InvalidOrientation(pub String);

impl FromStr for Orientation {
    type Err = InvalidOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Self::Vertical),
            "horizontal" | "h" => Ok(Self::Horizontal),
            _ => Err(InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Direction in which content is being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Growing toward higher main-axis coordinates.
    Forward,
    /// Growing toward lower main-axis coordinates.
    Backward,
}

/// Axis-aligned rectangle, edges inclusive-exclusive like a pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from main/cross bounds for the given orientation.
    pub fn from_axes(
        orientation: Orientation,
        cross_start: i32,
        main_start: i32,
        cross_end: i32,
        main_end: i32,
    ) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(cross_start, main_start, cross_end, main_end),
            Orientation::Horizontal => Self::new(main_start, cross_start, main_end, cross_end),
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Leading edge along the main axis (top or left).
    pub fn main_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    /// Trailing edge along the main axis (bottom or right).
    pub fn main_end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    /// Leading edge along the cross axis (left or top).
    pub fn cross_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.left,
            Orientation::Horizontal => self.top,
        }
    }

    /// Trailing edge along the cross axis (right or bottom).
    pub fn cross_end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.right,
            Orientation::Horizontal => self.bottom,
        }
    }

    /// Extent along the main axis.
    pub fn main_extent(&self, orientation: Orientation) -> i32 {
        self.main_end(orientation) - self.main_start(orientation)
    }

    /// Translate both main-axis edges by `delta`.
    pub fn offset_main(&mut self, orientation: Orientation, delta: i32) {
        match orientation {
            Orientation::Vertical => {
                self.top += delta;
                self.bottom += delta;
            }
            Orientation::Horizontal => {
                self.left += delta;
                self.right += delta;
            }
        }
    }

    /// Move only the leading main-axis edge by `delta`.
    pub fn extend_main_start(&mut self, orientation: Orientation, delta: i32) {
        match orientation {
            Orientation::Vertical => self.top += delta,
            Orientation::Horizontal => self.left += delta,
        }
    }

    /// Move only the trailing main-axis edge by `delta`.
    pub fn extend_main_end(&mut self, orientation: Orientation, delta: i32) {
        match orientation {
            Orientation::Vertical => self.bottom += delta,
            Orientation::Horizontal => self.right += delta,
        }
    }

    /// True if the main-axis span overlaps the half-open window `[start, end)`.
    pub fn intersects_main(&self, orientation: Orientation, start: i32, end: i32) -> bool {
        self.main_end(orientation) > start && self.main_start(orientation) < end
    }
}

/// Measured size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Size {
    /// Width in layout units.
    pub width: i32,
    /// Height in layout units.
    pub height: i32,
}

impl Size {
    /// Create a size from width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build a size from main/cross extents for the given orientation.
    pub fn from_axes(orientation: Orientation, cross: i32, main: i32) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(cross, main),
            Orientation::Horizontal => Self::new(main, cross),
        }
    }

    /// Extent along the main (scroll) axis.
    pub fn main(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// Extent along the cross (lane) axis.
    pub fn cross(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// True if either dimension is negative.
    pub fn is_negative(&self) -> bool {
        self.width < 0 || self.height < 0
    }
}

/// Container padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Insets {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl Insets {
    /// Create insets from the four sides.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on all four sides.
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Inset before the main-axis start.
    pub fn main_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.top,
            Orientation::Horizontal => self.left,
        }
    }

    /// Inset after the main-axis end.
    pub fn main_end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.bottom,
            Orientation::Horizontal => self.right,
        }
    }

    /// Inset before the first lane.
    pub fn cross_start(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.left,
            Orientation::Horizontal => self.top,
        }
    }

    /// Inset after the last lane.
    pub fn cross_end(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.right,
            Orientation::Horizontal => self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod orientation {
        use super::*;

        #[test]
        fn parses_names_case_insensitively() {
            assert_eq!("Vertical".parse(), Ok(Orientation::Vertical));
            assert_eq!("HORIZONTAL".parse(), Ok(Orientation::Horizontal));
            assert_eq!("h".parse(), Ok(Orientation::Horizontal));
        }

        #[test]
        fn rejects_unknown_name() {
            let err = "diagonal".parse::<Orientation>().unwrap_err();
            assert!(err.to_string().contains("'diagonal'"));
        }

        #[test]
        fn display_round_trips_through_from_str() {
            for o in [Orientation::Vertical, Orientation::Horizontal] {
                assert_eq!(o.to_string().parse(), Ok(o));
            }
        }
    }

    mod rect {
        use super::*;

        #[test]
        fn from_axes_vertical_maps_main_to_y() {
            let r = Rect::from_axes(Orientation::Vertical, 0, 10, 100, 60);
            assert_eq!(r, Rect::new(0, 10, 100, 60));
            assert_eq!(r.main_extent(Orientation::Vertical), 50);
        }

        #[test]
        fn from_axes_horizontal_maps_main_to_x() {
            let r = Rect::from_axes(Orientation::Horizontal, 0, 10, 100, 60);
            assert_eq!(r, Rect::new(10, 0, 60, 100));
            assert_eq!(r.cross_end(Orientation::Horizontal), 100);
        }

        #[test]
        fn offset_main_moves_both_edges() {
            let mut r = Rect::new(0, 10, 100, 60);
            r.offset_main(Orientation::Vertical, -10);
            assert_eq!(r, Rect::new(0, 0, 100, 50));
            r.offset_main(Orientation::Horizontal, 5);
            assert_eq!(r, Rect::new(5, 0, 105, 50));
        }

        #[test]
        fn extend_main_end_moves_trailing_edge_only() {
            let mut r = Rect::new(0, 10, 100, 60);
            r.extend_main_end(Orientation::Vertical, 15);
            assert_eq!(r, Rect::new(0, 10, 100, 75));
        }

        #[test]
        fn intersects_main_is_half_open() {
            let r = Rect::new(0, 10, 100, 60);
            assert!(r.intersects_main(Orientation::Vertical, 0, 11));
            assert!(!r.intersects_main(Orientation::Vertical, 0, 10));
            assert!(!r.intersects_main(Orientation::Vertical, 60, 100));
        }
    }

    #[test]
    fn size_axes_follow_orientation() {
        let s = Size::new(30, 70);
        assert_eq!(s.main(Orientation::Vertical), 70);
        assert_eq!(s.cross(Orientation::Vertical), 30);
        assert_eq!(s.main(Orientation::Horizontal), 30);
        assert_eq!(Size::from_axes(Orientation::Horizontal, 5, 9), Size::new(9, 5));
        assert!(Size::new(-1, 0).is_negative());
    }

    #[test]
    fn insets_axes_follow_orientation() {
        let p = Insets::new(1, 2, 3, 4);
        assert_eq!(p.main_start(Orientation::Vertical), 2);
        assert_eq!(p.main_end(Orientation::Vertical), 4);
        assert_eq!(p.cross_start(Orientation::Horizontal), 2);
        assert_eq!(p.cross_end(Orientation::Horizontal), 4);
    }
}
