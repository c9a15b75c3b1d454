//! Network interfaces and addresses attached to components.
//!
//! These are opaque attributes as far as placement is concerned: the
//! layout engine never inspects them, and no address/subnet semantics are
//! validated. They exist to be edited, exported, and round-tripped.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AddressKind
// ---------------------------------------------------------------------------

/// Role of a network address on an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    #[default]
    Primary,
    Secondary,
    Virtual,
    Management,
}

impl AddressKind {
    /// Stable string form, as written to exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Virtual => "virtual",
            Self::Management => "management",
        }
    }
}

// ---------------------------------------------------------------------------
// NetworkAddress
// ---------------------------------------------------------------------------

/// One address bound to a network interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAddress {
    pub id: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: AddressKind,
}

impl NetworkAddress {
    /// Primary address with only the address string set.
    #[must_use]
    pub fn primary(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            subnet: None,
            hostname: None,
            notes: None,
            kind: AddressKind::Primary,
        }
    }
}

// ---------------------------------------------------------------------------
// NetworkInterface
// ---------------------------------------------------------------------------

/// A NIC on a component or sub-component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub id: String,
    /// Interface name, e.g. `eth0`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Link speed label, e.g. `10G`. Free-form; preserved as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub addresses: Vec<NetworkAddress>,
}

impl NetworkInterface {
    /// Bare interface with no addresses.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mac_address: None,
            link_speed: None,
            port_number: None,
            vlan: None,
            notes: None,
            addresses: Vec::new(),
        }
    }
}
