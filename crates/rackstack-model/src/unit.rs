//! Unit-grid coordinate math.
//!
//! A rack of height `H` exposes addressable unit slots `1..=H`, counted
//! from the bottom. A placed component covers the inclusive run
//! `[position, position + height - 1]`. This module owns that range type
//! and the overlap predicate; it is pure and holds no state.

use serde::{Deserialize, Serialize};

/// Inclusive range of rack units occupied by a component.
///
/// Both endpoints are 1-based unit slots. `start <= end` always holds for
/// ranges built through [`UnitRange::of`] (height >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRange {
    /// Lowest occupied unit.
    pub start: u32,
    /// Highest occupied unit.
    pub end: u32,
}

impl UnitRange {
    /// Range covered by an item starting at `position` with the given
    /// `height` in units. `height` is clamped to at least 1.
    #[inline]
    #[must_use]
    pub fn of(position: u32, height: u32) -> Self {
        Self {
            start: position,
            end: position + height.max(1) - 1,
        }
    }

    /// Number of units covered.
    #[inline]
    #[must_use]
    pub fn len(self) -> u32 {
        self.end - self.start + 1
    }

    /// A range always covers at least one unit.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Overlap predicate: `a.start <= b.end && b.start <= a.end`.
    ///
    /// Two components in the same rack must never satisfy this.
    #[inline]
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `unit` falls inside this range.
    #[inline]
    #[must_use]
    pub fn contains(self, unit: u32) -> bool {
        self.start <= unit && unit <= self.end
    }
}
