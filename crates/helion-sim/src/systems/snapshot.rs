//! Snapshot system — assembles the per-tick state for the presentation
//! layer.

use hecs::World;

use helion_core::components::{Contact, HostileCraft, Position};
use helion_core::enums::NavStatus;
use helion_core::events::SimEvent;
use helion_core::state::{ContactView, HostileView, ShipView, SimSnapshot};
use helion_core::types::{NavigationIntent, ShipState, SimTime, WarpPhase};

use crate::locks::LockState;
use crate::world_setup::effective_distance;

/// Build the snapshot for this tick. `events` is the drained event buffer.
pub fn build(
    world: &World,
    time: &SimTime,
    ship: &ShipState,
    nav: &NavigationIntent,
    locks: &LockState,
    firing_enabled: bool,
    wave: u8,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let mut contacts: Vec<ContactView> = world
        .query::<(&Contact, &Position)>()
        .iter()
        .map(|(_, (contact, pos))| ContactView {
            id: contact.id,
            name: contact.name.clone(),
            kind: contact.kind,
            position: pos.0,
            effective_distance: effective_distance(ship.position, contact, pos.0),
        })
        .collect();
    contacts.sort_by_key(|c| c.id);

    let mut hostiles: Vec<HostileView> = world
        .query::<(&Contact, &Position, &HostileCraft)>()
        .iter()
        .map(|(_, (contact, pos, craft))| HostileView {
            id: contact.id,
            archetype: craft.archetype,
            wave: craft.wave,
            position: pos.0,
            hp: craft.hp,
            max_hp: craft.max_hp,
        })
        .collect();
    hostiles.sort_by_key(|h| h.id);

    SimSnapshot {
        time: *time,
        ship: ShipView {
            position: ship.position,
            velocity: ship.velocity,
            heading: ship.heading,
            armor: ship.armor,
            hull: ship.hull,
            max_armor: ship.max_armor,
            max_hull: ship.max_hull,
            nav_status: nav_status(nav),
        },
        contacts,
        hostiles,
        locks: locks.views(),
        firing_enabled,
        wave,
        events,
    }
}

/// HUD label for the active navigation mode.
fn nav_status(nav: &NavigationIntent) -> NavStatus {
    match nav {
        NavigationIntent::Idle => NavStatus::Idle,
        NavigationIntent::ManualHeading { .. } => NavStatus::Speed,
        NavigationIntent::Approach { .. } => NavStatus::Approach,
        NavigationIntent::Warp {
            phase: WarpPhase::Align,
            ..
        } => NavStatus::Align,
        NavigationIntent::Warp {
            phase: WarpPhase::Cruise,
            ..
        } => NavStatus::Warp,
    }
}
