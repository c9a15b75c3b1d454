#![forbid(unsafe_code)]

//! Application state and mutation engine for the Rackstack planner.
//!
//! A [`Workspace`] is the single owner of all racks plus the current
//! selection; every mutation is a synchronous `&mut self` method that
//! runs to completion, so each placement check observes a consistent
//! occupancy snapshot and no locking is needed. The stateless layout
//! math lives in `rackstack-layout`; this crate decides when to call it
//! and applies the results.
//!
//! Drag-and-drop repositioning is an explicit finite-state machine
//! ([`DragSession`]) that can be driven and tested without any UI.

pub mod drag;
pub mod error;
pub mod workspace;

pub use drag::{DragMode, DragSession, DropOutcome};
pub use error::WorkspaceError;
pub use workspace::Workspace;
