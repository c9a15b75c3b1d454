//! The workspace: racks, selection, and every committed mutation.

use crate::error::WorkspaceError;
use rackstack_layout::{find_available_position, is_valid_placement, next_available_position};
use rackstack_model::{
    Component, ComponentPatch, ComponentType, IdAllocator, NewComponent, Rack, RackPatch,
    SubComponent, SubComponentPatch, MAX_RACK_HEIGHT, MIN_RACK_HEIGHT,
};
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Owner of the full planner state.
///
/// All mutation goes through `&mut self` methods that either apply
/// completely or reject with a [`WorkspaceError`] leaving the state
/// untouched. The racks themselves are plain data; snapshots handed to
/// the layout crate or to exporters are just `&[Rack]`.
#[derive(Debug, Default)]
pub struct Workspace {
    racks: Vec<Rack>,
    selected_rack: Option<String>,
    selected_component: Option<String>,
    ids: IdAllocator,
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- snapshots and lookups ------------------------------------------

    /// Read-only view of every rack, the snapshot exporters consume.
    #[must_use]
    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    #[must_use]
    pub fn rack(&self, id: &str) -> Option<&Rack> {
        self.racks.iter().find(|r| r.id == id)
    }

    fn rack_mut(&mut self, id: &str) -> Result<&mut Rack, WorkspaceError> {
        self.racks
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| WorkspaceError::UnknownRack(id.to_string()))
    }

    /// Find a component anywhere in the workspace, with its rack.
    #[must_use]
    pub fn find_component(&self, component_id: &str) -> Option<(&Rack, &Component)> {
        self.racks.iter().find_map(|rack| {
            rack.component(component_id).map(|c| (rack, c))
        })
    }

    /// Currently selected rack id, if any.
    #[must_use]
    pub fn selected_rack(&self) -> Option<&str> {
        self.selected_rack.as_deref()
    }

    /// Currently selected component id, if any.
    #[must_use]
    pub fn selected_component(&self) -> Option<&str> {
        self.selected_component.as_deref()
    }

    pub fn select_rack(&mut self, rack_id: &str) -> Result<(), WorkspaceError> {
        if self.rack(rack_id).is_none() {
            return Err(WorkspaceError::UnknownRack(rack_id.to_string()));
        }
        self.selected_rack = Some(rack_id.to_string());
        Ok(())
    }

    /// Select a component (and implicitly its rack).
    pub fn select_component(&mut self, component_id: &str) -> Result<(), WorkspaceError> {
        let rack_id = self
            .find_component(component_id)
            .map(|(rack, _)| rack.id.clone())
            .ok_or_else(|| WorkspaceError::UnknownComponent(component_id.to_string()))?;
        self.selected_rack = Some(rack_id);
        self.selected_component = Some(component_id.to_string());
        Ok(())
    }

    pub fn clear_component_selection(&mut self) {
        self.selected_component = None;
    }

    // -- rack CRUD ------------------------------------------------------

    /// Create a rack. A blank name defaults to `Rack N`; the new rack
    /// becomes the selected one.
    pub fn add_rack(&mut self, name: &str, height: u32) -> Result<&Rack, WorkspaceError> {
        if !(MIN_RACK_HEIGHT..=MAX_RACK_HEIGHT).contains(&height) {
            return Err(WorkspaceError::RackHeightOutOfRange(height));
        }
        let name = name.trim();
        let name = if name.is_empty() {
            format!("Rack {}", self.racks.len() + 1)
        } else {
            name.to_string()
        };
        let id = self.ids.rack_id();
        info!(rack = %id, %name, height, "rack created");
        self.racks.push(Rack::new(id.clone(), name, height));
        self.selected_rack = Some(id);
        self.selected_component = None;
        Ok(self.racks.last().expect("just pushed"))
    }

    pub fn update_rack(&mut self, rack_id: &str, patch: &RackPatch) -> Result<(), WorkspaceError> {
        let rack = self.rack_mut(rack_id)?;
        patch.apply(rack);
        Ok(())
    }

    /// Delete a rack and everything in it.
    pub fn remove_rack(&mut self, rack_id: &str) -> Result<Rack, WorkspaceError> {
        let index = self
            .racks
            .iter()
            .position(|r| r.id == rack_id)
            .ok_or_else(|| WorkspaceError::UnknownRack(rack_id.to_string()))?;
        let rack = self.racks.remove(index);
        if self.selected_rack.as_deref() == Some(rack_id) {
            self.selected_rack = self.racks.first().map(|r| r.id.clone());
            self.selected_component = None;
        }
        info!(rack = %rack.id, "rack removed");
        Ok(rack)
    }

    /// Start over: drop all racks and the selection.
    pub fn clear(&mut self) {
        info!(racks = self.racks.len(), "workspace cleared");
        self.racks.clear();
        self.selected_rack = None;
        self.selected_component = None;
    }

    /// Replace the whole configuration, e.g. after an import.
    ///
    /// Loaded ids are fed to the allocator so fresh ids cannot collide
    /// with them. The first rack becomes selected.
    pub fn load(&mut self, racks: Vec<Rack>) {
        let mut seen = FxHashSet::default();
        for rack in &racks {
            self.ids.observe(&rack.id);
            if !seen.insert(rack.id.as_str()) {
                warn!(id = %rack.id, "duplicate rack id in loaded configuration");
            }
            for component in &rack.components {
                self.ids.observe(&component.id);
                if !seen.insert(component.id.as_str()) {
                    warn!(id = %component.id, "duplicate component id in loaded configuration");
                }
            }
        }
        self.selected_rack = racks.first().map(|r| r.id.clone());
        self.selected_component = None;
        info!(racks = racks.len(), "configuration loaded");
        self.racks = racks;
    }

    // -- component CRUD -------------------------------------------------

    /// Live auto-placement proposal for the add form: the slot the next
    /// component of `height` units would land in, re-evaluated against
    /// current occupancy. Degrades to 1 like the resolver; `None` only
    /// for an unknown rack.
    #[must_use]
    pub fn placement_hint(&self, rack_id: &str, height: u32) -> Option<u32> {
        self.rack(rack_id)
            .map(|rack| next_available_position(rack, height))
    }

    /// Add a component. `request.position: None` auto-places into the
    /// highest free run and reports [`WorkspaceError::NoSpace`] when the
    /// rack cannot take the height at all.
    pub fn add_component(
        &mut self,
        rack_id: &str,
        request: NewComponent,
    ) -> Result<&Component, WorkspaceError> {
        if request.name.trim().is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        // The original form coerced a blank height to 1U; keep that.
        let height = request.height.max(1);
        let id = self.ids.component_id();
        let rack = self.rack_mut(rack_id)?;

        let position = match request.position {
            Some(start) => {
                if !is_valid_placement(rack, start, height, None) {
                    return Err(WorkspaceError::InvalidPlacement { start, height });
                }
                start
            }
            None => find_available_position(rack, height)
                .ok_or(WorkspaceError::NoSpace { height })?,
        };

        debug!(rack = %rack_id, component = %id, position, height, "component added");
        rack.components.push(Component {
            id,
            name: request.name,
            height,
            position,
            kind: request.kind,
            color: request.color,
            weight: None,
            metadata: request.metadata,
            network_interfaces: Vec::new(),
            tags: Vec::new(),
            sub_components: Vec::new(),
            pdu_config: None,
            ethernet_config: None,
        });
        Ok(rack.components.last().expect("just pushed"))
    }

    /// Merge-update a component. A patch that changes position or height
    /// is validated against the rack (excluding the component itself)
    /// and rejected without mutating on collision.
    pub fn update_component(
        &mut self,
        rack_id: &str,
        component_id: &str,
        patch: &ComponentPatch,
    ) -> Result<(), WorkspaceError> {
        let rack = self.rack_mut(rack_id)?;
        let component = rack
            .component(component_id)
            .ok_or_else(|| WorkspaceError::UnknownComponent(component_id.to_string()))?;

        if patch.changes_geometry() {
            let target = patch.target_range(component);
            let height = target.len();
            if !is_valid_placement(rack, target.start, height, Some(component_id)) {
                return Err(WorkspaceError::InvalidPlacement {
                    start: target.start,
                    height,
                });
            }
        }

        let component = rack
            .component_mut(component_id)
            .expect("looked up above");
        patch.apply(component);
        component.height = component.height.max(1);
        debug!(rack = %rack_id, component = %component_id, "component updated");
        Ok(())
    }

    /// Delete a component; clears the selection if it pointed here.
    pub fn remove_component(
        &mut self,
        rack_id: &str,
        component_id: &str,
    ) -> Result<Component, WorkspaceError> {
        let rack = self.rack_mut(rack_id)?;
        let index = rack
            .components
            .iter()
            .position(|c| c.id == component_id)
            .ok_or_else(|| WorkspaceError::UnknownComponent(component_id.to_string()))?;
        let component = rack.components.remove(index);
        if self.selected_component.as_deref() == Some(component_id) {
            self.selected_component = None;
        }
        debug!(rack = %rack_id, component = %component_id, "component removed");
        Ok(component)
    }

    /// Reposition a component, possibly across racks, as one atomic
    /// mutation: no intermediate state has the component in zero or two
    /// racks. Identity and every attribute except position are
    /// preserved.
    pub fn transfer_component(
        &mut self,
        source_rack_id: &str,
        component_id: &str,
        dest_rack_id: &str,
        position: u32,
    ) -> Result<(), WorkspaceError> {
        if source_rack_id == dest_rack_id {
            return self.update_component(
                source_rack_id,
                component_id,
                &ComponentPatch::new().position(position),
            );
        }

        // Validate against the destination before touching the source.
        let height = {
            let source = self.rack(source_rack_id).ok_or_else(|| {
                WorkspaceError::UnknownRack(source_rack_id.to_string())
            })?;
            source
                .component(component_id)
                .ok_or_else(|| WorkspaceError::UnknownComponent(component_id.to_string()))?
                .height
        };
        let dest = self
            .rack(dest_rack_id)
            .ok_or_else(|| WorkspaceError::UnknownRack(dest_rack_id.to_string()))?;
        if !is_valid_placement(dest, position, height, None) {
            return Err(WorkspaceError::InvalidPlacement {
                start: position,
                height,
            });
        }

        let source = self.rack_mut(source_rack_id)?;
        let index = source
            .components
            .iter()
            .position(|c| c.id == component_id)
            .expect("presence checked above");
        let mut component = source.components.remove(index);
        component.position = position;
        debug!(
            component = %component_id,
            from = %source_rack_id,
            to = %dest_rack_id,
            position,
            "component transferred"
        );
        self.rack_mut(dest_rack_id)
            .expect("presence checked above")
            .components
            .push(component);
        Ok(())
    }

    // -- sub-component CRUD ---------------------------------------------

    fn component_entry(
        &mut self,
        rack_id: &str,
        component_id: &str,
    ) -> Result<&mut Component, WorkspaceError> {
        self.rack_mut(rack_id)?
            .component_mut(component_id)
            .ok_or_else(|| WorkspaceError::UnknownComponent(component_id.to_string()))
    }

    /// Add a sub-component with the next free `slot-N` label.
    pub fn add_sub_component(
        &mut self,
        rack_id: &str,
        component_id: &str,
        name: &str,
        kind: ComponentType,
    ) -> Result<&SubComponent, WorkspaceError> {
        if name.trim().is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        let id = self.ids.sub_component_id();
        let component = self.component_entry(rack_id, component_id)?;
        let mut sub = SubComponent::new(id, name.trim(), kind);
        sub.position = Some(format!("slot-{}", component.sub_components.len() + 1));
        component.sub_components.push(sub);
        debug!(component = %component_id, "sub-component added");
        Ok(component.sub_components.last().expect("just pushed"))
    }

    pub fn update_sub_component(
        &mut self,
        rack_id: &str,
        component_id: &str,
        sub_id: &str,
        patch: &SubComponentPatch,
    ) -> Result<(), WorkspaceError> {
        let component = self.component_entry(rack_id, component_id)?;
        let sub = component
            .sub_components
            .iter_mut()
            .find(|s| s.id == sub_id)
            .ok_or_else(|| WorkspaceError::UnknownSubComponent(sub_id.to_string()))?;
        patch.apply(sub);
        Ok(())
    }

    pub fn remove_sub_component(
        &mut self,
        rack_id: &str,
        component_id: &str,
        sub_id: &str,
    ) -> Result<SubComponent, WorkspaceError> {
        let component = self.component_entry(rack_id, component_id)?;
        let index = component
            .sub_components
            .iter()
            .position(|s| s.id == sub_id)
            .ok_or_else(|| WorkspaceError::UnknownSubComponent(sub_id.to_string()))?;
        Ok(component.sub_components.remove(index))
    }

    /// Fresh interface id for editors building interface lists.
    pub fn allocate_interface_id(&mut self) -> String {
        self.ids.interface_id()
    }

    /// Fresh address id for editors building address lists.
    pub fn allocate_address_id(&mut self) -> String {
        self.ids.address_id()
    }
}
