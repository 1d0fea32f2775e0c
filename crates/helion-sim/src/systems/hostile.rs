//! Hostile AI system — per-hostile range-keeping movement and autonomous
//! fire at the player.

use hecs::World;

use helion_core::components::{HostileCraft, Position};
use helion_core::events::SimEvent;
use helion_core::types::{NavigationIntent, ShipState};
use helion_hostile_ai::profiles::get_spec;
use helion_hostile_ai::steering::{steer, SteeringContext};

use crate::systems::autofire::AutofireState;
use crate::systems::damage;

/// Run hostile movement and fire for one tick.
pub fn run(
    world: &mut World,
    ship: &mut ShipState,
    nav: &mut NavigationIntent,
    autofire: &mut AutofireState,
    events: &mut Vec<SimEvent>,
    now: f64,
    dt: f64,
) {
    // Collect shots in a buffer: player damage application can reset the
    // ship mid-iteration and must not run inside the query borrow.
    let mut shots: Vec<(f64, f64)> = Vec::new();

    for (_entity, (pos, craft)) in world.query_mut::<(&mut Position, &mut HostileCraft)>() {
        let spec = get_spec(craft.archetype);

        let to_ship = ship.position - pos.0;
        let distance = to_ship.length();

        let dir = steer(&SteeringContext {
            to_ship,
            distance,
            desired_range: spec.desired_range,
            strafe_direction: craft.strafe_direction,
        });
        pos.0 += dir * spec.speed * dt;

        if distance <= spec.weapon_range && now >= craft.next_fire_secs {
            shots.push((spec.damage_armor, spec.damage_hull));
            craft.next_fire_secs = now + spec.fire_cooldown_secs;
        }
    }

    for (armor_dmg, hull_dmg) in shots {
        damage::apply_to_player(ship, nav, autofire, events, armor_dmg, hull_dmg);
    }
}
