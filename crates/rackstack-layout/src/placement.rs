//! Placement validation and auto-placement.
//!
//! Positions are 1-based unit slots counted from the bottom of the rack.
//! Auto-placement prefers the highest free run, matching how equipment
//! is racked top-down on the floor.

use rackstack_model::{Rack, UnitRange};

/// Whether a component of `height` units may start at `start`.
///
/// Fails when the candidate range leaves the rack bounds or overlaps any
/// placed component other than `exclude`. Pass the id of a component
/// being repositioned as `exclude` so it does not collide with itself.
#[must_use]
pub fn is_valid_placement(
    rack: &Rack,
    start: u32,
    height: u32,
    exclude: Option<&str>,
) -> bool {
    if start < 1 {
        return false;
    }
    let candidate = UnitRange::of(start, height);
    if candidate.end > rack.height {
        return false;
    }
    !rack
        .components
        .iter()
        .filter(|c| exclude != Some(c.id.as_str()))
        .any(|c| c.occupied_range().overlaps(candidate))
}

/// Highest start position where a component of `height` units fits, or
/// `None` when no free run of that size exists.
///
/// An empty rack places top-aligned at `rack.height - height + 1`.
#[must_use]
pub fn find_available_position(rack: &Rack, height: u32) -> Option<u32> {
    if height == 0 || height > rack.height {
        return None;
    }
    let top_start = rack.height - height + 1;
    if rack.components.is_empty() {
        return Some(top_start);
    }
    (1..=top_start)
        .rev()
        .find(|&start| is_valid_placement(rack, start, height, None))
}

/// [`find_available_position`] with the original degrade-to-1 contract.
///
/// When no free run exists this returns `1`, which the validator will
/// separately reject; callers that want the "no space" case made
/// explicit should use [`find_available_position`] instead.
#[must_use]
pub fn next_available_position(rack: &Rack, height: u32) -> u32 {
    find_available_position(rack, height).unwrap_or(1)
}

/// Map a pointer's vertical offset (in units, measured from the top of
/// the rack) to a candidate start slot for a dragged component.
///
/// The raw slot is `rack_height - floor(offset)`, clamped to
/// `[1, rack_height - item_height + 1]`. An item taller than the rack
/// clamps to 1.
#[must_use]
pub fn slot_from_offset(rack_height: u32, item_height: u32, y_offset_units: f64) -> u32 {
    let raw = i64::from(rack_height) - y_offset_units.max(0.0).floor() as i64;
    let top_start = i64::from(rack_height) - i64::from(item_height.max(1)) + 1;
    raw.min(top_start).max(1) as u32
}
