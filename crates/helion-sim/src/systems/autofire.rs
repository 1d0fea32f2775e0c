//! Weapon/autofire system — fires at the active lock on a cooldown.

use hecs::World;

use helion_core::constants::{
    NONCOMBAT_SHOT_PERCENT, PLAYER_FIRE_COOLDOWN, PLAYER_SHOT_DAMAGE, PLAYER_WEAPON_RANGE,
};
use helion_core::events::SimEvent;
use helion_core::types::{NavigationIntent, ShipState};

use crate::locks::LockState;
use crate::systems::damage;
use crate::world_setup::{effective_distance, find_contact};

/// Autofire state: a player-controlled toggle plus the weapon cooldown.
#[derive(Debug, Clone, Default)]
pub struct AutofireState {
    pub enabled: bool,
    /// Sim time (seconds) at which the weapon may fire again.
    pub next_fire_secs: f64,
}

/// Run the autofire controller for one tick.
pub fn run(
    world: &mut World,
    ship: &mut ShipState,
    locks: &mut LockState,
    autofire: &mut AutofireState,
    nav: &mut NavigationIntent,
    events: &mut Vec<SimEvent>,
    now: f64,
) {
    if !autofire.enabled {
        return;
    }

    // Losing the active lock (or the whole lock set) turns firing off.
    let Some(active) = locks.active() else {
        autofire.enabled = false;
        events.push(SimEvent::FiringStateChanged { enabled: false });
        return;
    };
    if !locks.is_locked(active) {
        autofire.enabled = false;
        events.push(SimEvent::FiringStateChanged { enabled: false });
        return;
    }

    if now < autofire.next_fire_secs {
        return;
    }

    let Some((entity, contact, target_pos)) = find_contact(world, active) else {
        autofire.enabled = false;
        events.push(SimEvent::FiringStateChanged { enabled: false });
        return;
    };

    let distance = effective_distance(ship.position, &contact, target_pos);
    if distance <= PLAYER_WEAPON_RANGE {
        if contact.kind.has_health() {
            damage::apply_to_hostile(world, entity, PLAYER_SHOT_DAMAGE, locks, nav, events);
        } else {
            locks.decrement_display(active, NONCOMBAT_SHOT_PERCENT);
        }
    }

    // Cooldown is consumed even on an out-of-range attempt.
    autofire.next_fire_secs = now + PLAYER_FIRE_COOLDOWN;
}
