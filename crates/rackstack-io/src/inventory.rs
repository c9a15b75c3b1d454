//! Tabular inventory export.
//!
//! One CSV file per rack (the sheet-per-rack layout of the original
//! spreadsheet export), with one row per component, one row per
//! (interface x address) pair (or per address-less interface) and one
//! row per sub-component followed by its own interface rows. Row
//! building is pure; only [`write_inventory`] touches the filesystem.

use crate::error::ExportError;
use rackstack_model::{Component, NetworkAddress, NetworkInterface, Rack, SubComponent};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Longest file stem derived from a rack name, matching the original
/// export's 31-character sheet-name limit.
const MAX_STEM_LEN: usize = 31;

/// Column headers, written explicitly so even an empty rack gets a
/// header row. Order matches the fields of [`InventoryRow`].
pub const COLUMNS: [&str; 22] = [
    "Component Name",
    "Type",
    "Height (U)",
    "Position",
    "Device Name",
    "Serial Number",
    "Model",
    "Manufacturer",
    "Power",
    "Tags",
    "Parent Component",
    "Sub-Position",
    "NIC Name",
    "MAC Address",
    "Link Speed",
    "Port Number",
    "VLAN",
    "IP Address",
    "Subnet",
    "Hostname",
    "Address Type",
    "Notes",
];

/// One spreadsheet row. Field order is column order ([`COLUMNS`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryRow {
    pub name: String,
    pub kind: String,
    pub height: String,
    pub position: String,
    pub device_name: String,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
    pub power: String,
    pub tags: String,
    pub parent: String,
    pub sub_position: String,
    pub nic_name: String,
    pub mac_address: String,
    pub link_speed: String,
    pub port_number: String,
    pub vlan: String,
    pub ip_address: String,
    pub subnet: String,
    pub hostname: String,
    pub address_kind: String,
    pub notes: String,
}

fn component_row(component: &Component) -> InventoryRow {
    InventoryRow {
        name: component.name.clone(),
        kind: component.kind.as_str().to_string(),
        height: component.height.to_string(),
        position: component.position.to_string(),
        device_name: component.metadata.device_name.clone().unwrap_or_default(),
        power: component
            .metadata
            .power_consumption
            .clone()
            .unwrap_or_default(),
        tags: component.tags.join(", "),
        notes: component.metadata.notes.clone().unwrap_or_default(),
        ..InventoryRow::default()
    }
}

fn sub_component_row(parent: &str, sub: &SubComponent) -> InventoryRow {
    InventoryRow {
        name: sub.name.clone(),
        kind: sub.kind.as_str().to_string(),
        device_name: sub.metadata.device_name.clone().unwrap_or_default(),
        serial_number: sub.metadata.serial_number.clone().unwrap_or_default(),
        model: sub.metadata.model.clone().unwrap_or_default(),
        manufacturer: sub.metadata.manufacturer.clone().unwrap_or_default(),
        power: sub.metadata.power_consumption.clone().unwrap_or_default(),
        tags: sub.tags.join(", "),
        parent: parent.to_string(),
        sub_position: sub.position.clone().unwrap_or_default(),
        notes: sub.metadata.notes.clone().unwrap_or_default(),
        ..InventoryRow::default()
    }
}

fn nic_row(
    owner: &str,
    parent: Option<&str>,
    nic: &NetworkInterface,
    address: Option<&NetworkAddress>,
) -> InventoryRow {
    InventoryRow {
        name: format!("  -> {owner}"),
        kind: "network".to_string(),
        parent: parent.unwrap_or_default().to_string(),
        nic_name: nic.name.clone(),
        mac_address: nic.mac_address.clone().unwrap_or_default(),
        link_speed: nic.link_speed.clone().unwrap_or_default(),
        port_number: nic.port_number.clone().unwrap_or_default(),
        vlan: nic.vlan.map(|v| v.to_string()).unwrap_or_default(),
        ip_address: address.map(|a| a.address.clone()).unwrap_or_default(),
        subnet: address
            .and_then(|a| a.subnet.clone())
            .unwrap_or_default(),
        hostname: address
            .and_then(|a| a.hostname.clone())
            .unwrap_or_default(),
        address_kind: address
            .map(|a| a.kind.as_str().to_string())
            .unwrap_or_default(),
        notes: address
            .and_then(|a| a.notes.clone())
            .or_else(|| nic.notes.clone())
            .unwrap_or_default(),
        ..InventoryRow::default()
    }
}

fn nic_rows(
    owner: &str,
    parent: Option<&str>,
    interfaces: &[NetworkInterface],
    rows: &mut Vec<InventoryRow>,
) {
    for nic in interfaces {
        if nic.addresses.is_empty() {
            rows.push(nic_row(owner, parent, nic, None));
        } else {
            for address in &nic.addresses {
                rows.push(nic_row(owner, parent, nic, Some(address)));
            }
        }
    }
}

/// All inventory rows for one rack, in export order: each component,
/// then its interface rows, then its sub-components with theirs.
#[must_use]
pub fn inventory_rows(rack: &Rack) -> Vec<InventoryRow> {
    let mut rows = Vec::new();
    for component in &rack.components {
        rows.push(component_row(component));
        nic_rows(&component.name, None, &component.network_interfaces, &mut rows);
        for sub in &component.sub_components {
            rows.push(sub_component_row(&component.name, sub));
            nic_rows(&sub.name, Some(&component.name), &sub.network_interfaces, &mut rows);
        }
    }
    rows
}

/// Rack name reduced to a filesystem-safe stem: path-hostile characters
/// replaced, truncated to 31 characters, never empty.
#[must_use]
pub fn sanitize_stem(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .take(MAX_STEM_LEN)
        .map(|c| match c {
            '\\' | '/' | '[' | ']' | '*' | '?' | ':' => '_',
            c => c,
        })
        .collect();
    if cleaned.trim().is_empty() {
        "rack".to_string()
    } else {
        cleaned
    }
}

/// Write one CSV per rack into `dir`, returning the created paths.
/// Racks whose names collide after sanitization get a numeric suffix.
pub fn write_inventory(racks: &[Rack], dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut used: HashMap<String, usize> = HashMap::new();
    let mut paths = Vec::with_capacity(racks.len());

    for rack in racks {
        let stem = sanitize_stem(&rack.name);
        let count = used.entry(stem.clone()).or_insert(0);
        *count += 1;
        let file_name = if *count == 1 {
            format!("{stem}.csv")
        } else {
            format!("{stem}-{count}.csv")
        };

        let path = dir.join(file_name);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(COLUMNS)?;
        for row in inventory_rows(rack) {
            writer.serialize(row)?;
        }
        writer.flush()?;
        paths.push(path);
    }
    info!(racks = racks.len(), dir = %dir.display(), "inventory exported");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rackstack_model::{
        AddressKind, Component, ComponentType, Metadata, NetworkAddress, NetworkInterface,
        SubComponent,
    };

    fn rich_rack() -> Rack {
        let mut nic = NetworkInterface::new("iface-1", "eth0");
        nic.mac_address = Some("aa:bb:cc:dd:ee:ff".into());
        nic.vlan = Some(120);
        nic.addresses.push(NetworkAddress {
            id: "addr-1".into(),
            address: "10.0.0.5".into(),
            subnet: Some("10.0.0.0/24".into()),
            hostname: Some("web-1.example".into()),
            notes: None,
            kind: AddressKind::Primary,
        });
        nic.addresses.push(NetworkAddress {
            id: "addr-2".into(),
            address: "10.0.1.5".into(),
            subnet: None,
            hostname: None,
            notes: None,
            kind: AddressKind::Management,
        });

        let mut sub = SubComponent::new("sub-1", "blade-1", ComponentType::Compute);
        sub.position = Some("slot-1".into());
        sub.metadata.serial_number = Some("SN-1".into());
        sub.network_interfaces
            .push(NetworkInterface::new("iface-2", "eno1"));

        let component = Component {
            id: "component-1".into(),
            name: "chassis".into(),
            height: 8,
            position: 30,
            kind: ComponentType::Compute,
            color: None,
            weight: None,
            metadata: Metadata {
                device_name: Some("chassis-01".into()),
                power_consumption: Some("1200W".into()),
                ..Metadata::default()
            },
            network_interfaces: vec![nic],
            tags: vec!["prod".into(), "ha".into()],
            sub_components: vec![sub],
            pdu_config: None,
            ethernet_config: None,
        };

        let mut rack = Rack::new("rack-1", "Main", 42);
        rack.components.push(component);
        rack
    }

    #[test]
    fn rows_fan_out_over_addresses_and_subs() {
        let rows = inventory_rows(&rich_rack());
        // component + 2 address rows + sub + 1 address-less NIC row.
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "chassis");
        assert_eq!(rows[0].tags, "prod, ha");
        assert_eq!(rows[1].ip_address, "10.0.0.5");
        assert_eq!(rows[1].hostname, "web-1.example");
        assert_eq!(rows[2].address_kind, "management");
        assert_eq!(rows[3].name, "blade-1");
        assert_eq!(rows[3].parent, "chassis");
        assert_eq!(rows[3].sub_position, "slot-1");
        assert_eq!(rows[4].nic_name, "eno1");
        assert_eq!(rows[4].parent, "chassis");
        assert_eq!(rows[4].ip_address, "");
    }

    #[test]
    fn nic_rows_are_marked_as_indented_children() {
        let rows = inventory_rows(&rich_rack());
        assert!(rows[1].name.starts_with("  -> "));
        assert_eq!(rows[1].kind, "network");
    }

    #[test]
    fn columns_match_row_width() {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(InventoryRow::default()).unwrap();
        let line = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(line.trim_end().split(',').count(), COLUMNS.len());
    }

    #[test]
    fn stem_sanitization() {
        assert_eq!(sanitize_stem("Main"), "Main");
        assert_eq!(sanitize_stem("a/b\\c:d*e?f[g]"), "a_b_c_d_e_f_g_");
        assert_eq!(
            sanitize_stem("a very long rack name that keeps going"),
            "a very long rack name that keep"
        );
        assert_eq!(sanitize_stem("   "), "rack");
    }
}
