#![forbid(unsafe_code)]

//! Rackstack: plan equipment layout inside server racks.
//!
//! This umbrella crate re-exports the member crates:
//!
//! - [`model`]: racks, components, metadata, patches ([`rackstack_model`]).
//! - [`layout`]: placement validation, auto-placement, distance
//!   ([`rackstack_layout`]).
//! - [`engine`]: workspace state, CRUD, and the drag/transfer state
//!   machine ([`rackstack_engine`]).
//! - [`io`]: JSON import/export, CSV inventory, text elevations
//!   ([`rackstack_io`]).
//!
//! # Example
//!
//! ```
//! use rackstack::engine::Workspace;
//! use rackstack::model::{ComponentType, NewComponent};
//!
//! let mut ws = Workspace::new();
//! let rack_id = ws.add_rack("Main", 42).unwrap().id.clone();
//! let web = ws
//!     .add_component(&rack_id, NewComponent::new("web-1", 2, ComponentType::Compute))
//!     .unwrap();
//! // An empty 42U rack places a 2U component top-aligned.
//! assert_eq!(web.position, 41);
//! ```

pub use rackstack_engine as engine;
pub use rackstack_io as io;
pub use rackstack_layout as layout;
pub use rackstack_model as model;

pub use rackstack_engine::{DragMode, DragSession, DropOutcome, Workspace, WorkspaceError};
pub use rackstack_layout::{Distance, Unit, distance, is_valid_placement, next_available_position};
pub use rackstack_model::{Component, Configuration, Rack};
