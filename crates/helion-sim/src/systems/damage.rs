//! Damage model — armor/hull pools for the player, hp pools for hostiles.
//!
//! Invoked synchronously wherever a hit lands (hostile fire, autofire).
//! Player death always recovers via respawn; hostile death removes the
//! craft and atomically cleans up every reference to it.

use hecs::{Entity, World};
use tracing::{debug, info};

use helion_core::components::{Contact, HostileCraft};
use helion_core::events::SimEvent;
use helion_core::types::{NavigationIntent, ShipState};

use crate::locks::LockState;
use crate::systems::autofire::AutofireState;

/// Apply one hit to the player. Armor absorbs up to its current value; the
/// overflow plus any direct hull damage comes off the hull. Hull zero
/// triggers the respawn in the same call: full pools, zero velocity,
/// navigation cleared, firing disabled. No positional teleport.
pub fn apply_to_player(
    ship: &mut ShipState,
    nav: &mut NavigationIntent,
    autofire: &mut AutofireState,
    events: &mut Vec<SimEvent>,
    armor_dmg: f64,
    hull_dmg: f64,
) {
    let absorbed = armor_dmg.min(ship.armor);
    ship.armor -= absorbed;
    let overflow = armor_dmg - absorbed;
    ship.hull = (ship.hull - overflow - hull_dmg).max(0.0);

    if ship.hull <= 0.0 {
        ship.armor = ship.max_armor;
        ship.hull = ship.max_hull;
        ship.velocity = glam::DVec3::ZERO;
        *nav = NavigationIntent::Idle;
        if autofire.enabled {
            autofire.enabled = false;
            events.push(SimEvent::FiringStateChanged { enabled: false });
        }
        info!("hull breached, ship reset");
        events.push(SimEvent::PlayerRespawned);
    }
}

/// Apply damage to a hostile. At zero hp the craft despawns immediately,
/// its lock is forcibly released, and any approach order toward it is
/// cleared — all within the same tick.
pub fn apply_to_hostile(
    world: &mut World,
    entity: Entity,
    dmg: f64,
    locks: &mut LockState,
    nav: &mut NavigationIntent,
    events: &mut Vec<SimEvent>,
) {
    let Ok((id, wave, dead, percent)) =
        world
            .query_one_mut::<(&Contact, &mut HostileCraft)>(entity)
            .map(|(contact, craft)| {
                craft.hp = (craft.hp - dmg).max(0.0);
                (contact.id, craft.wave, craft.hp <= 0.0, craft.health_percent())
            })
    else {
        return;
    };

    locks.set_display(id, percent);

    if dead {
        let _ = world.despawn(entity);
        locks.unlock(id);
        if *nav == (NavigationIntent::Approach { target: id }) {
            *nav = NavigationIntent::Idle;
        }
        debug!(contact = id, wave, "hostile destroyed");
        events.push(SimEvent::HostileDestroyed { contact: id, wave });
    }
}
