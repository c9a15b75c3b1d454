//! Free-form component metadata.
//!
//! The original saved files carry an open string-to-string bag per
//! component. A handful of keys are well known to the UI and exporters;
//! everything else must survive a load/save round-trip untouched, so the
//! unknown keys are kept in a flattened ordered map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata bag attached to components and sub-components.
///
/// All fields are optional; absent keys are omitted from the serialized
/// form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_consumption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Keys this build does not know about. Preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Metadata {
    /// True when no key (known or unknown) is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device_name.is_none()
            && self.ip_address.is_none()
            && self.subnet.is_none()
            && self.notes.is_none()
            && self.power_consumption.is_none()
            && self.serial_number.is_none()
            && self.model.is_none()
            && self.manufacturer.is_none()
            && self.extra.is_empty()
    }
}
