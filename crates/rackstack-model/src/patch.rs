//! Typed partial updates.
//!
//! Updates are whole-object field merges: a patch names exactly the
//! fields it changes and `apply` leaves every other field untouched. No
//! reflection, no dynamic maps. Optional fields use a double `Option` so
//! a patch can distinguish "leave alone" (`None`) from "set to nothing"
//! (`Some(None)`).

use crate::component::{
    Component, ComponentType, EthernetConfig, PduConfig, SubComponent,
};
use crate::metadata::Metadata;
use crate::network::NetworkInterface;

// ---------------------------------------------------------------------------
// RackPatch
// ---------------------------------------------------------------------------

/// Partial update for a rack. Height is fixed at creation and has no
/// patch field.
#[derive(Debug, Clone, Default)]
pub struct RackPatch {
    pub name: Option<String>,
}

impl RackPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn apply(&self, rack: &mut crate::rack::Rack) {
        if let Some(name) = &self.name {
            rack.name = name.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// ComponentPatch
// ---------------------------------------------------------------------------

/// Partial update for a placed component.
///
/// Collection fields (interfaces, tags, sub-components) replace the whole
/// vector when named, matching how the original editors submitted a
/// rebuilt list on every change.
#[derive(Debug, Clone, Default)]
pub struct ComponentPatch {
    pub name: Option<String>,
    pub height: Option<u32>,
    pub position: Option<u32>,
    pub kind: Option<ComponentType>,
    pub color: Option<Option<String>>,
    pub weight: Option<Option<f64>>,
    pub metadata: Option<Metadata>,
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    pub tags: Option<Vec<String>>,
    pub sub_components: Option<Vec<SubComponent>>,
    pub pdu_config: Option<Option<PduConfig>>,
    pub ethernet_config: Option<Option<EthernetConfig>>,
}

impl ComponentPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ComponentType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: Option<f64>) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn network_interfaces(mut self, interfaces: Vec<NetworkInterface>) -> Self {
        self.network_interfaces = Some(interfaces);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn sub_components(mut self, subs: Vec<SubComponent>) -> Self {
        self.sub_components = Some(subs);
        self
    }

    #[must_use]
    pub fn pdu_config(mut self, config: Option<PduConfig>) -> Self {
        self.pdu_config = Some(config);
        self
    }

    #[must_use]
    pub fn ethernet_config(mut self, config: Option<EthernetConfig>) -> Self {
        self.ethernet_config = Some(config);
        self
    }

    /// Whether this patch changes the component's occupied range.
    #[must_use]
    pub fn changes_geometry(&self) -> bool {
        self.height.is_some() || self.position.is_some()
    }

    /// The range the component would occupy after this patch.
    #[must_use]
    pub fn target_range(&self, current: &Component) -> crate::unit::UnitRange {
        crate::unit::UnitRange::of(
            self.position.unwrap_or(current.position),
            self.height.unwrap_or(current.height),
        )
    }

    /// Merge into `component`, leaving unnamed fields untouched.
    pub fn apply(&self, component: &mut Component) {
        if let Some(name) = &self.name {
            component.name = name.clone();
        }
        if let Some(height) = self.height {
            component.height = height;
        }
        if let Some(position) = self.position {
            component.position = position;
        }
        if let Some(kind) = self.kind {
            component.kind = kind;
        }
        if let Some(color) = &self.color {
            component.color = color.clone();
        }
        if let Some(weight) = self.weight {
            component.weight = weight;
        }
        if let Some(metadata) = &self.metadata {
            component.metadata = metadata.clone();
        }
        if let Some(interfaces) = &self.network_interfaces {
            component.network_interfaces = interfaces.clone();
        }
        if let Some(tags) = &self.tags {
            component.tags = tags.clone();
        }
        if let Some(subs) = &self.sub_components {
            component.sub_components = subs.clone();
        }
        if let Some(pdu) = self.pdu_config {
            component.pdu_config = pdu;
        }
        if let Some(ethernet) = self.ethernet_config {
            component.ethernet_config = ethernet;
        }
    }
}

// ---------------------------------------------------------------------------
// SubComponentPatch
// ---------------------------------------------------------------------------

/// Partial update for a sub-component.
#[derive(Debug, Clone, Default)]
pub struct SubComponentPatch {
    pub name: Option<String>,
    pub kind: Option<ComponentType>,
    pub position: Option<Option<String>>,
    pub metadata: Option<Metadata>,
    pub tags: Option<Vec<String>>,
    pub network_interfaces: Option<Vec<NetworkInterface>>,
}

impl SubComponentPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ComponentType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Option<String>) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn network_interfaces(mut self, interfaces: Vec<NetworkInterface>) -> Self {
        self.network_interfaces = Some(interfaces);
        self
    }

    /// Merge into `sub`, leaving unnamed fields untouched.
    pub fn apply(&self, sub: &mut SubComponent) {
        if let Some(name) = &self.name {
            sub.name = name.clone();
        }
        if let Some(kind) = self.kind {
            sub.kind = kind;
        }
        if let Some(position) = &self.position {
            sub.position = position.clone();
        }
        if let Some(metadata) = &self.metadata {
            sub.metadata = metadata.clone();
        }
        if let Some(tags) = &self.tags {
            sub.tags = tags.clone();
        }
        if let Some(interfaces) = &self.network_interfaces {
            sub.network_interfaces = interfaces.clone();
        }
    }
}
