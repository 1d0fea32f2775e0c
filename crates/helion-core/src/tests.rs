use glam::DVec3;

use crate::catalog::{CatalogEntry, SystemCatalog};
use crate::commands::PlayerCommand;
use crate::constants::{FALLBACK_BODY_RADIUS, MAX_DT, PLAYER_MAX_ARMOR, PLAYER_MAX_HULL};
use crate::enums::*;
use crate::events::SimEvent;
use crate::state::SimSnapshot;
use crate::types::{NavigationIntent, ShipState, SimTime, WarpPhase};

/// Verify PlayerCommand round-trips through serde (tagged union).
#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::SetHeading {
            direction: DVec3::new(0.0, 1.0, 0.0),
        },
        PlayerCommand::Approach { target: 7 },
        PlayerCommand::WarpTo { target: 3 },
        PlayerCommand::Lock { target: 11 },
        PlayerCommand::Unlock { target: 11 },
        PlayerCommand::SetActiveLock { target: 11 },
        PlayerCommand::ToggleFiring,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_sim_event_serde() {
    let events = vec![
        SimEvent::WarpArrived {
            position: DVec3::new(1.0, 2.0, 3.0),
        },
        SimEvent::FiringStateChanged { enabled: false },
        SimEvent::HostileDestroyed { contact: 9, wave: 2 },
        SimEvent::PlayerRespawned,
        SimEvent::WaveSpawned { wave: 1, count: 3 },
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let _back: SimEvent = serde_json::from_str(&json).unwrap();
    }
}

#[test]
fn test_navigation_intent_serde() {
    let intents = vec![
        NavigationIntent::Idle,
        NavigationIntent::ManualHeading {
            direction: DVec3::X,
        },
        NavigationIntent::Approach { target: 4 },
        NavigationIntent::Warp {
            phase: WarpPhase::Align,
            destination: DVec3::new(1e6, 0.0, 0.0),
            center: DVec3::new(1e6, 0.0, 5e4),
            align_elapsed_secs: 0.5,
        },
    ];
    for intent in &intents {
        let json = serde_json::to_string(intent).unwrap();
        let back: NavigationIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(*intent, back);
    }
}

/// Verify SimSnapshot can be serialized to JSON and stays small empty.
#[test]
fn test_snapshot_serde() {
    let snapshot = SimSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

#[test]
fn test_sim_time_clamps_dt() {
    let mut time = SimTime::default();
    let applied = time.advance(1.0);
    assert_eq!(time.tick, 1);
    assert!((applied - MAX_DT).abs() < 1e-12, "dt should clamp to MAX_DT");
    assert!((time.elapsed_secs - MAX_DT).abs() < 1e-12);
}

#[test]
fn test_ship_state_defaults_full_pools() {
    let ship = ShipState::default();
    assert_eq!(ship.armor, PLAYER_MAX_ARMOR);
    assert_eq!(ship.hull, PLAYER_MAX_HULL);
    assert!((ship.heading.length() - 1.0).abs() < 1e-12);
    assert_eq!(ship.velocity, DVec3::ZERO);
}

#[test]
fn test_contact_kind_policies() {
    assert!(ContactKind::CelestialBody.surface_adjusted());
    assert!(!ContactKind::Star.surface_adjusted());
    assert!(!ContactKind::CombatSite.surface_adjusted());
    assert!(!ContactKind::Hostile.surface_adjusted());

    assert!(ContactKind::Star.warpable());
    assert!(ContactKind::CombatSite.warpable());
    assert!(!ContactKind::Hostile.warpable());

    assert!(ContactKind::Hostile.has_health());
    assert!(!ContactKind::CelestialBody.has_health());
}

#[test]
fn test_catalog_fallback_radius() {
    let moon = CatalogEntry {
        name: "moon".into(),
        kind: ContactKind::CelestialBody,
        position: DVec3::ZERO,
        radius: None,
    };
    assert_eq!(moon.effective_radius(), FALLBACK_BODY_RADIUS);

    let site = CatalogEntry {
        name: "site".into(),
        kind: ContactKind::CombatSite,
        position: DVec3::ZERO,
        radius: None,
    };
    assert_eq!(site.effective_radius(), 0.0);
}

#[test]
fn test_demo_system_has_site_and_star() {
    let catalog = SystemCatalog::demo_system();
    assert!(catalog
        .entries
        .iter()
        .any(|e| e.kind == ContactKind::Star));
    assert_eq!(
        catalog
            .entries
            .iter()
            .filter(|e| e.kind == ContactKind::CombatSite)
            .count(),
        1
    );
}
