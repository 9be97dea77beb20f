//! Measurement policy for items placed in lanes.
//!
//! The cross axis of every item is pinned to the lane size; the main axis is
//! either the item's declared size or left unconstrained so the item can size
//! to its content.

use crate::model::Orientation;

/// Declared size of an item along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Exactly this many layout units.
    Fixed(i32),
    /// Size to content.
    #[default]
    WrapContent,
}

/// Declared sizing of an item on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemSizing {
    /// Declared width.
    pub width: SizePolicy,
    /// Declared height.
    pub height: SizePolicy,
}

impl ItemSizing {
    /// Sizing from explicit per-axis policies.
    pub const fn new(width: SizePolicy, height: SizePolicy) -> Self {
        Self { width, height }
    }

    /// Content-sized on both axes.
    pub const fn wrap_content() -> Self {
        Self::new(SizePolicy::WrapContent, SizePolicy::WrapContent)
    }
}

/// Constraint handed to an item's measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The item must be exactly this size.
    Exactly(i32),
    /// No constraint; the item reports its preferred size.
    Unspecified,
}

impl MeasureSpec {
    /// Resolve against an item's preferred size.
    pub fn resolve(&self, preferred: i32) -> i32 {
        match self {
            Self::Exactly(size) => *size,
            Self::Unspecified => preferred,
        }
    }
}

/// Computes `(width_spec, height_spec)` for an item in a grid.
///
/// - cross axis: always `Exactly(lane_size)`
/// - main axis, `WrapContent`: `Unspecified`
/// - main axis, `Fixed(n)`: `Exactly(n)`
pub fn measure_specs(
    orientation: Orientation,
    lane_size: i32,
    sizing: ItemSizing,
) -> (MeasureSpec, MeasureSpec) {
    let width = axis_spec(!orientation.is_vertical(), lane_size, sizing.width);
    let height = axis_spec(orientation.is_vertical(), lane_size, sizing.height);
    (width, height)
}

fn axis_spec(is_main_axis: bool, lane_size: i32, policy: SizePolicy) -> MeasureSpec {
    if !is_main_axis {
        return MeasureSpec::Exactly(lane_size);
    }
    match policy {
        SizePolicy::WrapContent => MeasureSpec::Unspecified,
        SizePolicy::Fixed(size) => MeasureSpec::Exactly(size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_pins_width_to_lane() {
        let (w, h) = measure_specs(
            Orientation::Vertical,
            120,
            ItemSizing::new(SizePolicy::Fixed(400), SizePolicy::WrapContent),
        );
        assert_eq!(w, MeasureSpec::Exactly(120));
        assert_eq!(h, MeasureSpec::Unspecified);
    }

    #[test]
    fn vertical_fixed_height_is_exact() {
        let (_, h) = measure_specs(
            Orientation::Vertical,
            120,
            ItemSizing::new(SizePolicy::WrapContent, SizePolicy::Fixed(64)),
        );
        assert_eq!(h, MeasureSpec::Exactly(64));
    }

    #[test]
    fn horizontal_pins_height_to_lane() {
        let (w, h) = measure_specs(Orientation::Horizontal, 90, ItemSizing::wrap_content());
        assert_eq!(w, MeasureSpec::Unspecified);
        assert_eq!(h, MeasureSpec::Exactly(90));
    }

    #[test]
    fn horizontal_fixed_width_is_exact() {
        let (w, _) = measure_specs(
            Orientation::Horizontal,
            90,
            ItemSizing::new(SizePolicy::Fixed(33), SizePolicy::Fixed(500)),
        );
        assert_eq!(w, MeasureSpec::Exactly(33));
    }

    #[test]
    fn resolve_prefers_exact_size() {
        assert_eq!(MeasureSpec::Exactly(10).resolve(99), 10);
        assert_eq!(MeasureSpec::Unspecified.resolve(99), 99);
    }
}
