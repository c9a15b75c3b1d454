#![forbid(unsafe_code)]

//! Layout solving for the Rackstack planner.
//!
//! Everything here is a pure function over a rack snapshot passed in by
//! the caller: placement legality, auto-placement, pointer-to-slot
//! mapping, and distance between placed components. Nothing in this
//! crate mutates a rack or holds state, which is what makes the same
//! checks usable for committed mutations and live drag previews alike.
//!
//! Rejection is signaled through `bool`/`Option` returns, never errors:
//! a well-typed, in-range query cannot fail, only answer "no".

pub mod distance;
pub mod placement;

pub use distance::{Distance, Unit, distance};
pub use placement::{
    find_available_position, is_valid_placement, next_available_position, slot_from_offset,
};
