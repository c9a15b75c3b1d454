//! Whole-stack scenario tests: the planner journeys a user actually
//! takes, driven through the public API only.

use rackstack::engine::{DragSession, DropOutcome, Workspace};
use rackstack::io::{import_json, to_json};
use rackstack::layout::{Distance, Unit, distance};
use rackstack::model::{ComponentPatch, ComponentType, NewComponent};

#[test]
fn plan_a_rack_from_scratch() {
    let mut ws = Workspace::new();
    let rack_id = ws.add_rack("Main", 42).unwrap().id.clone();

    // First 2U component lands top-aligned at 41.
    let web = ws
        .add_component(&rack_id, NewComponent::new("web-1", 2, ComponentType::Compute))
        .unwrap()
        .id
        .clone();
    assert_eq!(ws.find_component(&web).unwrap().1.position, 41);

    // Next 1U component slots in directly below.
    let sw = ws
        .add_component(&rack_id, NewComponent::new("sw-1", 1, ComponentType::Network))
        .unwrap()
        .id
        .clone();
    assert_eq!(ws.find_component(&sw).unwrap().1.position, 40);

    // The live hint tracks current occupancy.
    assert_eq!(ws.placement_hint(&rack_id, 4), Some(36));
}

#[test]
fn measure_spacing_between_components() {
    let mut ws = Workspace::new();
    let rack_id = ws.add_rack("Main", 42).unwrap().id.clone();
    let a = ws
        .add_component(
            &rack_id,
            NewComponent::new("a", 1, ComponentType::Compute).at(10),
        )
        .unwrap()
        .id
        .clone();
    let b = ws
        .add_component(
            &rack_id,
            NewComponent::new("b", 1, ComponentType::Compute).at(20),
        )
        .unwrap()
        .id
        .clone();

    let a = ws.find_component(&a).unwrap().1.clone();
    let b = ws.find_component(&b).unwrap().1.clone();
    assert_eq!(distance(&a, &b, Unit::U), Distance::Exact(10.0));
    assert_eq!(distance(&a, &b, Unit::Inches), Distance::Exact(17.5));
    assert_eq!(distance(&a, &b, Unit::Inches).to_string(), "17.5");
}

#[test]
fn drag_between_racks_and_save() {
    let mut ws = Workspace::new();
    let rack_a = ws.add_rack("A", 42).unwrap().id.clone();
    let rack_b = ws.add_rack("B", 42).unwrap().id.clone();
    let x = ws
        .add_component(
            &rack_a,
            NewComponent::new("x", 2, ComponentType::Storage).at(3),
        )
        .unwrap()
        .id
        .clone();
    ws.update_component(
        &rack_a,
        &x,
        &ComponentPatch::new().tags(vec!["archive".into()]),
    )
    .unwrap();

    // Drag x over rack B, one unit below the top.
    let mut drag = DragSession::new();
    assert!(drag.begin(&ws, &rack_a, &x));
    let slot = drag.hover(&ws, &rack_b, 2.5).unwrap();
    let outcome = drag.drop(&mut ws);
    assert_eq!(
        outcome,
        DropOutcome::Transferred {
            from_rack_id: rack_a.clone(),
            to_rack_id: rack_b.clone(),
            position: slot,
        }
    );

    // Save, reload, and the moved component is still in rack B with its
    // tags intact.
    let restored = import_json(&to_json(ws.racks())).unwrap();
    assert_eq!(restored, ws.racks().to_vec());
    let rack_b_restored = restored.iter().find(|r| r.id == rack_b).unwrap();
    let moved = rack_b_restored.component(&x).unwrap();
    assert_eq!(moved.position, slot);
    assert_eq!(moved.tags, vec!["archive".to_string()]);
    assert!(restored.iter().find(|r| r.id == rack_a).unwrap().component(&x).is_none());
}

#[test]
fn exported_json_uses_the_wire_format() {
    let mut ws = Workspace::new();
    let rack_id = ws.add_rack("Main", 42).unwrap().id.clone();
    ws.add_component(&rack_id, NewComponent::new("web-1", 2, ComponentType::Compute))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&to_json(ws.racks())).unwrap();
    let component = &value[0]["components"][0];
    assert_eq!(component["type"], "compute");
    assert_eq!(component["position"], 41);
    assert!(component["networkInterfaces"].is_array());
}
