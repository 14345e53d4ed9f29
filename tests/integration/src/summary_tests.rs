//! Reporting and ordering scenarios

use rocketfleet_registry::{MissionStatus, RocketStatus};

use crate::test_utils::{fresh_registry, init_tracing};

#[test]
fn test_summary_orders_by_count_then_name_descending() {
    init_tracing();
    let registry = fresh_registry();

    // Three rockets on "Transit", two on "Luna1", four empty missions.
    let transit = registry.create_mission("Transit").unwrap();
    let luna1 = registry.create_mission("Luna1").unwrap();
    for name in ["Mars", "Luna2", "Double Landing", "Vertical Landing"] {
        registry.create_mission(name).unwrap();
    }

    for i in 0..3 {
        let rocket = registry.create_rocket(&format!("Transit Hauler {i}")).unwrap();
        registry.assign_rocket_to_mission(&rocket, &transit).unwrap();
    }
    for i in 0..2 {
        let rocket = registry.create_rocket(&format!("Luna Hopper {i}")).unwrap();
        registry.assign_rocket_to_mission(&rocket, &luna1).unwrap();
    }

    let summary = registry.missions_summary();
    let names: Vec<&str> = summary.iter().map(|s| s.mission_name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Transit",
            "Luna1",
            "Vertical Landing",
            "Mars",
            "Luna2",
            "Double Landing",
        ]
    );
    assert_eq!(summary[0].rockets.len(), 3);
    assert_eq!(summary[1].rockets.len(), 2);
}

#[test]
fn test_summary_collapses_identical_rocket_pairs() {
    init_tracing();
    let registry = fresh_registry();

    let mission_id = registry.create_mission("Transit").unwrap();

    // Two distinct rockets sharing a display name; both end up InSpace.
    let first = registry.create_rocket("Booster").unwrap();
    let second = registry.create_rocket("Booster").unwrap();
    assert_ne!(first, second);

    registry.assign_rocket_to_mission(&first, &mission_id).unwrap();
    registry.assign_rocket_to_mission(&second, &mission_id).unwrap();

    let summary = registry.missions_summary();
    assert_eq!(summary[0].rockets.len(), 1);

    let pair = summary[0].rockets.iter().next().unwrap();
    assert_eq!(pair.name, "Booster");
    assert_eq!(pair.status, RocketStatus::InSpace);

    // The mission itself still tracks both rockets.
    assert_eq!(registry.mission(&mission_id).unwrap().rocket_count(), 2);
}

#[test]
fn test_summary_splits_pairs_with_differing_status() {
    init_tracing();
    let registry = fresh_registry();

    let mission_id = registry.create_mission("Transit").unwrap();
    let first = registry.create_rocket("Booster").unwrap();
    let second = registry.create_rocket("Booster").unwrap();
    registry.assign_rocket_to_mission(&first, &mission_id).unwrap();
    registry.assign_rocket_to_mission(&second, &mission_id).unwrap();

    registry
        .set_rocket_status(&second, RocketStatus::InRepair)
        .unwrap();

    let summary = registry.missions_summary();
    assert_eq!(summary[0].rockets.len(), 2);
    assert_eq!(summary[0].mission_status, MissionStatus::Pending);
}

#[test]
fn test_summary_serializes_for_reporting() {
    init_tracing();
    let registry = fresh_registry();

    let rocket_id = registry.create_rocket("Dragon XL").unwrap();
    let mission_id = registry.create_mission("Transit").unwrap();
    registry
        .assign_rocket_to_mission(&rocket_id, &mission_id)
        .unwrap();

    let summary = registry.missions_summary();
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value[0]["mission_name"], "Transit");
    assert_eq!(value[0]["mission_status"], "Scheduled");
    assert_eq!(value[0]["rockets"][0]["name"], "Dragon XL");
    assert_eq!(value[0]["rockets"][0]["status"], "InSpace");
}

#[test]
fn test_summary_is_empty_for_an_empty_registry() {
    init_tracing();
    let registry = fresh_registry();

    assert!(registry.missions_summary().is_empty());
}
