#![forbid(unsafe_code)]

//! Import/export adapters for the Rackstack planner.
//!
//! Everything here consumes or produces the plain data structures from
//! `rackstack-model`; nothing in this crate mutates a workspace. Import
//! is the one place hard failures are allowed (malformed input), and it
//! is also where older saved files are upgraded to the current shape.
//! Export failures surface as errors at this boundary and never touch
//! the in-memory configuration.

pub mod elevation;
pub mod error;
pub mod export;
pub mod import;
pub mod inventory;

pub use elevation::render_elevation;
pub use error::{ExportError, ImportError};
pub use export::{to_json, write_json};
pub use import::{import_json, read_json};
pub use inventory::{COLUMNS, InventoryRow, inventory_rows, write_inventory};
