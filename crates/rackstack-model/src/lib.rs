#![forbid(unsafe_code)]

//! Data model for the Rackstack layout planner.
//!
//! Everything in this crate is plain data: racks, the components placed
//! inside them, and the metadata hanging off each component. No pixel or
//! geometry state lives here; a component's vertical extent is described
//! entirely by its 1-based starting unit and its height in units, and all
//! display geometry is derived downstream.
//!
//! The serialized form of these types (camelCase field names) is the wire
//! format of saved configurations. Legacy encodings of `PduConfig` and
//! `EthernetConfig` decode transparently; whole-configuration upgrades
//! (bare-rack normalization, interface synthesis) live in `rackstack-io`.

pub mod component;
pub mod id;
pub mod metadata;
pub mod network;
pub mod patch;
pub mod rack;
pub mod unit;

pub use component::{
    Component, ComponentType, EthernetConfig, NewComponent, PduConfig, PduFace, PduSide,
    SubComponent,
};
pub use id::IdAllocator;
pub use metadata::Metadata;
pub use network::{AddressKind, NetworkAddress, NetworkInterface};
pub use patch::{ComponentPatch, RackPatch, SubComponentPatch};
pub use rack::{Configuration, Rack, MAX_RACK_HEIGHT, MIN_RACK_HEIGHT};
pub use unit::UnitRange;
