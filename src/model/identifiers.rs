//! Core index newtypes with smart constructors.
//!
//! Lane and item indices are plain integers at the host boundary, but the
//! engine keeps them apart at the type level so a position can never be used
//! where a lane is expected.

use std::fmt;

/// Number of lanes a grid is split into.
///
/// # Invariants
/// - Always >= 1
/// - Fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneCount(usize);

/// Error returned when attempting to create a LaneCount of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Lane count must be >= 1 (got {0})")]
pub struct InvalidLaneCount(pub usize);

impl LaneCount {
    /// Lane count used when nothing else is configured.
    pub const DEFAULT: Self = Self(3);

    /// Smart constructor that validates the count is >= 1.
    ///
    /// # Examples
    /// ```
    /// # use lanegrid::model::LaneCount;
    /// assert_eq!(LaneCount::new(4).unwrap().get(), 4);
    /// assert!(LaneCount::new(0).is_err());
    /// ```
    pub fn new(count: usize) -> Result<Self, InvalidLaneCount> {
        if count == 0 {
            Err(InvalidLaneCount(count))
        } else {
            Ok(Self(count))
        }
    }

    /// Get the raw count.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Iterate over every lane index in ascending order.
    pub fn lanes(&self) -> impl Iterator<Item = LaneIndex> {
        (0..self.0).map(LaneIndex)
    }
}

impl Default for LaneCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LaneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a lane in `[0, lane_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LaneIndex(usize);

impl LaneIndex {
    /// Create a new LaneIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adapter position of an item. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemPosition(usize);

impl ItemPosition {
    /// Create a new ItemPosition from a raw 0-based value.
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the raw 0-based position.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next position.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the previous position, or `None` at position 0.
    pub fn prev(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl From<usize> for ItemPosition {
    fn from(position: usize) -> Self {
        Self(position)
    }
}

impl fmt::Display for ItemPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
