//! Loading saved configurations, with legacy upgrades.
//!
//! Accepted shapes, tried in order: an array of racks (current format)
//! or a single bare rack object (the original single-rack save format),
//! which normalizes to a one-element configuration. Anything else is
//! rejected whole; no partial load occurs.
//!
//! Upgrades applied on load:
//! - missing `networkInterfaces` / `tags` / `subComponents` become
//!   empty collections (serde defaults in the model),
//! - single-axis `pduConfig.placement` and `ethernetConfig.placement`
//!   decode into their two-axis forms (model `Deserialize` impls),
//! - a top-level `metadata.ipAddress` on a component with no interfaces
//!   synthesizes an `eth0` interface carrying one primary address
//!   (here, because it spans two fields). The metadata keys stay.

use crate::error::ImportError;
use rackstack_model::{Component, Configuration, NetworkAddress, NetworkInterface, Rack};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Parse a configuration from JSON text.
pub fn import_json(json: &str) -> Result<Configuration, ImportError> {
    let value: Value = serde_json::from_str(json)?;

    let mut racks: Configuration = if value.is_array() {
        serde_json::from_value(value).map_err(|_| ImportError::UnrecognizedShape)?
    } else if value.is_object() {
        let rack: Rack =
            serde_json::from_value(value).map_err(|_| ImportError::UnrecognizedShape)?;
        debug!(rack = %rack.id, "single-rack legacy format normalized");
        vec![rack]
    } else {
        return Err(ImportError::UnrecognizedShape);
    };

    for rack in &mut racks {
        for component in &mut rack.components {
            synthesize_legacy_interface(component);
        }
    }
    info!(racks = racks.len(), "configuration imported");
    Ok(racks)
}

/// Read and parse a configuration file.
pub fn read_json(path: &Path) -> Result<Configuration, ImportError> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| ImportError::Parse(serde_json::Error::io(err)))?;
    import_json(&text)
}

/// Upgrade a component that predates interface lists: a bare
/// `metadata.ipAddress` (plus optional `subnet`) becomes an `eth0`
/// interface with one primary address. Fires only when the component
/// has no interfaces of its own.
fn synthesize_legacy_interface(component: &mut Component) {
    if !component.network_interfaces.is_empty() {
        return;
    }
    let Some(address) = component.metadata.ip_address.clone() else {
        return;
    };

    let mut primary = NetworkAddress::primary(format!("{}-eth0-0", component.id), address);
    primary.subnet = component.metadata.subnet.clone();

    let mut eth0 = NetworkInterface::new(format!("{}-eth0", component.id), "eth0");
    eth0.addresses.push(primary);
    debug!(component = %component.id, "synthesized eth0 from legacy metadata");
    component.network_interfaces.push(eth0);
}
