//! Placed components and their nested parts.
//!
//! A [`Component`] is a piece of equipment occupying a contiguous run of
//! units in a rack. Its category ([`ComponentType`]) drives default
//! coloring only and is never validated. Sub-components carry their own
//! metadata but no unit occupancy of their own.

use crate::metadata::Metadata;
use crate::network::NetworkInterface;
use crate::unit::UnitRange;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// Equipment category. Display-only: drives the default color and the
/// type column in exports, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    #[default]
    Compute,
    Network,
    Storage,
    Power,
    Cooling,
    Other,
}

impl ComponentType {
    /// All categories, in the order the original UI listed them.
    pub const ALL: [Self; 6] = [
        Self::Compute,
        Self::Network,
        Self::Storage,
        Self::Power,
        Self::Cooling,
        Self::Other,
    ];

    /// Stable string form, as written to exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Network => "network",
            Self::Storage => "storage",
            Self::Power => "power",
            Self::Cooling => "cooling",
            Self::Other => "other",
        }
    }

    /// Default display color (hex) for components without an explicit one.
    #[must_use]
    pub const fn default_color(self) -> &'static str {
        match self {
            Self::Compute => "#3B82F6",
            Self::Network => "#10B981",
            Self::Storage => "#F59E0B",
            Self::Power => "#EF4444",
            Self::Cooling => "#06B6D4",
            Self::Other => "#6B7280",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PduConfig
// ---------------------------------------------------------------------------

/// Which face of the rack a PDU mounts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PduFace {
    Front,
    Back,
}

/// Which side of the rack a PDU mounts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PduSide {
    Left,
    Right,
    Center,
}

/// PDU mounting configuration, two-axis form.
///
/// Older files carried a single `placement` enum; see the `Deserialize`
/// impl for the upgrade mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PduConfig {
    pub count: u32,
    pub front_back: PduFace,
    pub side: PduSide,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LegacyPduPlacement {
    Front,
    Back,
    Left,
    Right,
    Center,
}

impl LegacyPduPlacement {
    // Single-axis values were either a face or a side; sides imply the
    // rear face, where PDU rails mount.
    fn split(self) -> (PduFace, PduSide) {
        match self {
            Self::Front => (PduFace::Front, PduSide::Center),
            Self::Back | Self::Center => (PduFace::Back, PduSide::Center),
            Self::Left => (PduFace::Back, PduSide::Left),
            Self::Right => (PduFace::Back, PduSide::Right),
        }
    }
}

impl<'de> Deserialize<'de> for PduConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Modern {
                count: u32,
                #[serde(rename = "frontBack")]
                front_back: PduFace,
                side: PduSide,
            },
            Legacy {
                count: u32,
                placement: LegacyPduPlacement,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Modern {
                count,
                front_back,
                side,
            } => Self {
                count,
                front_back,
                side,
            },
            Wire::Legacy { count, placement } => {
                let (front_back, side) = placement.split();
                Self {
                    count,
                    front_back,
                    side,
                }
            }
        })
    }
}

// ---------------------------------------------------------------------------
// EthernetConfig
// ---------------------------------------------------------------------------

/// Ethernet port layout, split by rack face.
///
/// Older files carried `{placement, count}`; the count lands on the face
/// the placement named, the other face gets zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EthernetConfig {
    pub front_count: u32,
    pub back_count: u32,
}

impl<'de> Deserialize<'de> for EthernetConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum LegacyFace {
            Front,
            Back,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Modern {
                #[serde(rename = "frontCount")]
                front_count: u32,
                #[serde(rename = "backCount")]
                back_count: u32,
            },
            Legacy {
                placement: LegacyFace,
                count: u32,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Modern {
                front_count,
                back_count,
            } => Self {
                front_count,
                back_count,
            },
            Wire::Legacy { placement, count } => match placement {
                LegacyFace::Front => Self {
                    front_count: count,
                    back_count: 0,
                },
                LegacyFace::Back => Self {
                    front_count: 0,
                    back_count: count,
                },
            },
        })
    }
}

// ---------------------------------------------------------------------------
// SubComponent
// ---------------------------------------------------------------------------

/// A logical subdivision of a component (e.g. a blade slot).
///
/// Carries its own metadata and interfaces but no unit occupancy; its
/// `position` is a display label like `slot-3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubComponent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

impl SubComponent {
    /// Minimal sub-component with empty metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            position: None,
            metadata: Metadata::default(),
            tags: Vec::new(),
            network_interfaces: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A piece of equipment placed in a rack.
///
/// `position` is the 1-based starting unit counted from the bottom;
/// `height` is the vertical extent in units. The occupied range is
/// `[position, position + height - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    pub height: u32,
    pub position: u32,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sub_components: Vec<SubComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdu_config: Option<PduConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethernet_config: Option<EthernetConfig>,
}

impl Component {
    /// Inclusive unit range this component occupies.
    #[inline]
    #[must_use]
    pub fn occupied_range(&self) -> UnitRange {
        UnitRange::of(self.position, self.height)
    }

    /// Explicit color if set, else the category default.
    #[must_use]
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(self.kind.default_color())
    }
}

// ---------------------------------------------------------------------------
// NewComponent
// ---------------------------------------------------------------------------

/// Creation request for a component; the id is allocated by the engine.
///
/// `position: None` asks for auto-placement in the highest free run.
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub name: String,
    pub height: u32,
    pub position: Option<u32>,
    pub kind: ComponentType,
    pub color: Option<String>,
    pub metadata: Metadata,
}

impl NewComponent {
    /// Request with auto-placement and the category's default color.
    #[must_use]
    pub fn new(name: impl Into<String>, height: u32, kind: ComponentType) -> Self {
        Self {
            name: name.into(),
            height,
            position: None,
            kind,
            color: None,
            metadata: Metadata::default(),
        }
    }

    /// Pin an explicit starting unit instead of auto-placement.
    #[must_use]
    pub fn at(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the display color.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach metadata at creation time.
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(position: u32, height: u32) -> Component {
        Component {
            id: "component-1".into(),
            name: "unit".into(),
            height,
            position,
            kind: ComponentType::Compute,
            color: None,
            weight: None,
            metadata: Metadata::default(),
            network_interfaces: Vec::new(),
            tags: Vec::new(),
            sub_components: Vec::new(),
            pdu_config: None,
            ethernet_config: None,
        }
    }

    #[test]
    fn occupied_range_matches_position_and_height() {
        assert_eq!(component(41, 2).occupied_range(), UnitRange { start: 41, end: 42 });
        assert_eq!(component(7, 1).occupied_range(), UnitRange { start: 7, end: 7 });
    }

    #[test]
    fn display_color_falls_back_to_category() {
        let mut c = component(1, 1);
        assert_eq!(c.display_color(), "#3B82F6");
        c.color = Some("#123456".into());
        assert_eq!(c.display_color(), "#123456");
    }

    #[test]
    fn component_type_wire_form() {
        assert_eq!(
            serde_json::to_string(&ComponentType::Cooling).unwrap(),
            r#""cooling""#
        );
    }

    #[test]
    fn kind_serializes_as_type() {
        let json = serde_json::to_value(component(1, 1)).unwrap();
        assert_eq!(json["type"], "compute");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let c: Component = serde_json::from_str(
            r#"{"id":"component-9","name":"sw","height":1,"position":4,"type":"network"}"#,
        )
        .unwrap();
        assert!(c.network_interfaces.is_empty());
        assert!(c.tags.is_empty());
        assert!(c.sub_components.is_empty());
        assert!(c.metadata.is_empty());
    }

    #[test]
    fn pdu_config_modern_form() {
        let pdu: PduConfig =
            serde_json::from_str(r#"{"count":2,"frontBack":"back","side":"left"}"#).unwrap();
        assert_eq!(
            pdu,
            PduConfig {
                count: 2,
                front_back: PduFace::Back,
                side: PduSide::Left
            }
        );
    }

    #[test]
    fn pdu_config_legacy_placement_splits() {
        let cases = [
            ("front", PduFace::Front, PduSide::Center),
            ("back", PduFace::Back, PduSide::Center),
            ("left", PduFace::Back, PduSide::Left),
            ("right", PduFace::Back, PduSide::Right),
            ("center", PduFace::Back, PduSide::Center),
        ];
        for (placement, face, side) in cases {
            let json = format!(r#"{{"count":1,"placement":"{placement}"}}"#);
            let pdu: PduConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(pdu.front_back, face, "placement {placement}");
            assert_eq!(pdu.side, side, "placement {placement}");
        }
    }

    #[test]
    fn pdu_config_round_trips_in_modern_form() {
        let pdu: PduConfig =
            serde_json::from_str(r#"{"count":2,"placement":"left"}"#).unwrap();
        let json = serde_json::to_value(pdu).unwrap();
        assert_eq!(json["frontBack"], "back");
        assert_eq!(json["side"], "left");
        assert!(json.get("placement").is_none());
    }

    #[test]
    fn ethernet_config_legacy_split() {
        let front: EthernetConfig =
            serde_json::from_str(r#"{"placement":"front","count":24}"#).unwrap();
        assert_eq!(front, EthernetConfig { front_count: 24, back_count: 0 });

        let back: EthernetConfig =
            serde_json::from_str(r#"{"placement":"back","count":8}"#).unwrap();
        assert_eq!(back, EthernetConfig { front_count: 0, back_count: 8 });
    }

    #[test]
    fn ethernet_config_modern_form() {
        let cfg: EthernetConfig =
            serde_json::from_str(r#"{"frontCount":12,"backCount":4}"#).unwrap();
        assert_eq!(cfg, EthernetConfig { front_count: 12, back_count: 4 });
    }
}
