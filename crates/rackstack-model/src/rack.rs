//! Racks and whole configurations.

use crate::component::Component;
use serde::{Deserialize, Serialize};

/// Smallest rack the planner accepts, in units.
pub const MIN_RACK_HEIGHT: u32 = 1;
/// Tallest rack the planner accepts, in units.
pub const MAX_RACK_HEIGHT: u32 = 100;

/// A rack: a fixed-height column of unit slots holding components.
///
/// Component order in `components` carries no meaning; occupancy is
/// derived from each component's position and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    pub id: String,
    pub name: String,
    /// Total unit slots, `1..=MAX_RACK_HEIGHT`. Enforced at creation by
    /// the engine; the model itself stores whatever it is given so that
    /// imports cannot lose data.
    pub height: u32,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Rack {
    /// Empty rack.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, height: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            height,
            components: Vec::new(),
        }
    }

    /// Look up a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Mutable lookup by id.
    #[must_use]
    pub fn component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Total units occupied by placed components.
    #[must_use]
    pub fn occupied_units(&self) -> u32 {
        self.components.iter().map(|c| c.height.max(1)).sum()
    }

    /// Units not covered by any component.
    #[must_use]
    pub fn free_units(&self) -> u32 {
        self.height.saturating_sub(self.occupied_units())
    }
}

/// The unit of import/export: every rack in the workspace.
pub type Configuration = Vec<Rack>;
