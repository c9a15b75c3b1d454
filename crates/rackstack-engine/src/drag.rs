//! Drag-and-drop repositioning as an explicit finite-state machine.
//!
//! A [`DragSession`] is either idle or tracking one dragged component.
//! Hover updates recompute a live candidate slot from the pointer's
//! vertical offset and validate it against the hovered rack; drop
//! applies the candidate (or a best-effort recomputation) through the
//! workspace, and cancel never mutates anything.
//!
//! # Invariants
//!
//! 1. `begin` only succeeds from `Idle`; a second `begin` is refused.
//! 2. An invalid hover offers no candidate slot (no preview).
//! 3. `drop` and `cancel` always return the session to `Idle`.
//! 4. A drop without a valid target is a no-op, not an error: the
//!    component stays in its original rack and position.
//! 5. Cross-rack application goes through
//!    [`Workspace::transfer_component`], so observers never see the
//!    component in zero or two racks.

use crate::workspace::Workspace;
use rackstack_layout::{is_valid_placement, slot_from_offset};
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// DragMode
// ---------------------------------------------------------------------------

/// Externally visible state of a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// No drag in progress.
    #[default]
    Idle,
    /// A component is being dragged.
    Dragging,
}

impl DragMode {
    /// Stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
        }
    }
}

// ---------------------------------------------------------------------------
// DropOutcome
// ---------------------------------------------------------------------------

/// What a drop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Position updated within the source rack.
    Repositioned { rack_id: String, position: u32 },
    /// Component moved to another rack.
    Transferred {
        from_rack_id: String,
        to_rack_id: String,
        position: u32,
    },
    /// No valid target; nothing changed.
    Rejected,
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct ActiveDrag {
    component_id: String,
    source_rack_id: String,
    height: u32,
    /// Validated candidate, refreshed on every hover.
    candidate: Option<(String, u32)>,
    /// Last raw hover input, for best-effort recomputation at drop time
    /// when no validated candidate exists.
    last_hover: Option<(String, f64)>,
}

/// The drag gesture state machine.
///
/// Holds ids, not references, so a session can live across frames; it
/// borrows the workspace only for the duration of each transition.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> DragMode {
        if self.active.is_some() {
            DragMode::Dragging
        } else {
            DragMode::Idle
        }
    }

    /// Id of the component being dragged, if any.
    #[must_use]
    pub fn dragged_component(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.component_id.as_str())
    }

    /// Validated candidate drop slot, if the last hover found one.
    #[must_use]
    pub fn candidate(&self) -> Option<(&str, u32)> {
        self.active
            .as_ref()
            .and_then(|a| a.candidate.as_ref())
            .map(|(rack, slot)| (rack.as_str(), *slot))
    }

    /// Start dragging `component_id` out of `rack_id`.
    ///
    /// Returns `false` (and stays put) if a drag is already in progress
    /// or the component is not in that rack.
    pub fn begin(&mut self, workspace: &Workspace, rack_id: &str, component_id: &str) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(component) = workspace
            .rack(rack_id)
            .and_then(|rack| rack.component(component_id))
        else {
            return false;
        };
        debug!(component = %component_id, rack = %rack_id, "drag started");
        self.active = Some(ActiveDrag {
            component_id: component_id.to_string(),
            source_rack_id: rack_id.to_string(),
            height: component.height,
            candidate: None,
            last_hover: None,
        });
        true
    }

    /// Update the hover position: `y_offset_units` is the pointer's
    /// vertical offset in units from the top of the hovered rack.
    ///
    /// Returns the candidate slot when the hovered position is valid;
    /// `None` means no preview should be shown. The dragged component is
    /// excluded from collision only when hovering its own source rack.
    pub fn hover(
        &mut self,
        workspace: &Workspace,
        rack_id: &str,
        y_offset_units: f64,
    ) -> Option<u32> {
        let active = self.active.as_mut()?;
        active.last_hover = Some((rack_id.to_string(), y_offset_units));

        let candidate = Self::resolve_slot(
            workspace,
            rack_id,
            &active.source_rack_id,
            &active.component_id,
            active.height,
            y_offset_units,
        );
        trace!(rack = %rack_id, ?candidate, "drag hover");
        active.candidate = candidate.map(|slot| (rack_id.to_string(), slot));
        candidate
    }

    /// Drop the dragged component, applying the candidate slot if one is
    /// valid. With no validated candidate the slot is recomputed once
    /// from the drop point and applied only if it validates; otherwise
    /// the drop is a no-op. Always returns to `Idle`.
    pub fn drop(&mut self, workspace: &mut Workspace) -> DropOutcome {
        let Some(active) = self.active.take() else {
            return DropOutcome::Rejected;
        };

        let target = active.candidate.clone().or_else(|| {
            // Geometry may not have resolved into a candidate (e.g. the
            // pointer never produced a valid hover over a cross-rack
            // target); re-derive from the last drop point.
            let (rack_id, offset) = active.last_hover.as_ref()?;
            Self::resolve_slot(
                workspace,
                rack_id,
                &active.source_rack_id,
                &active.component_id,
                active.height,
                *offset,
            )
            .map(|slot| (rack_id.clone(), slot))
        });

        let Some((rack_id, position)) = target else {
            debug!(component = %active.component_id, "drop without valid target; no-op");
            return DropOutcome::Rejected;
        };

        match workspace.transfer_component(
            &active.source_rack_id,
            &active.component_id,
            &rack_id,
            position,
        ) {
            Ok(()) if rack_id == active.source_rack_id => DropOutcome::Repositioned {
                rack_id,
                position,
            },
            Ok(()) => DropOutcome::Transferred {
                from_rack_id: active.source_rack_id,
                to_rack_id: rack_id,
                position,
            },
            Err(err) => {
                // Occupancy changed since the hover validated; a failed
                // drop is a silent no-op, never an error.
                debug!(component = %active.component_id, %err, "drop rejected at apply");
                DropOutcome::Rejected
            }
        }
    }

    /// Abort the gesture. Guaranteed not to mutate anything.
    ///
    /// Returns `true` if a drag was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.active.take().is_some();
        if was_active {
            debug!("drag cancelled");
        }
        was_active
    }

    fn resolve_slot(
        workspace: &Workspace,
        hovered_rack_id: &str,
        source_rack_id: &str,
        component_id: &str,
        height: u32,
        y_offset_units: f64,
    ) -> Option<u32> {
        let rack = workspace.rack(hovered_rack_id)?;
        let slot = slot_from_offset(rack.height, height, y_offset_units);
        let exclude = (hovered_rack_id == source_rack_id).then_some(component_id);
        is_valid_placement(rack, slot, height, exclude).then_some(slot)
    }
}
