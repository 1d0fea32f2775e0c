//! Encounter orchestrator — spawns hostile waves at the combat site.
//!
//! Waves advance only once the previous wave is cleared and the spawn timer
//! has elapsed. Placement is fully deterministic: each hostile gets its own
//! RNG seeded from the encounter seed, the wave, and the index.

use glam::DVec3;
use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use helion_core::components::{Contact, HostileCraft, Position};
use helion_core::constants::{
    MAX_WAVE, SPAWN_RING_RADIUS, SPAWN_RING_STAGGER, WAVE_DELAY_SECS, WAVE_SIZE,
};
use helion_core::enums::{ContactKind, HostileArchetype};
use helion_core::events::SimEvent;
use helion_core::types::ContactId;
use helion_hostile_ai::profiles::get_spec;
use helion_hostile_ai::steering::strafe_direction;

/// Wave state machine for one combat site.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub site: ContactId,
    pub site_position: DVec3,
    /// Current wave, 0 (not started) through 3 (boss wave, terminal).
    pub wave: u8,
    /// Sim time before which the next wave may not spawn.
    pub next_wave_spawn_secs: f64,
    pub seed: u64,
}

impl Encounter {
    pub fn new(site: ContactId, site_position: DVec3, seed: u64) -> Self {
        Self {
            site,
            site_position,
            wave: 0,
            next_wave_spawn_secs: WAVE_DELAY_SECS,
            seed,
        }
    }
}

/// Advance the wave state machine for one tick.
pub fn run(
    world: &mut World,
    encounter: &mut Encounter,
    ship_pos: DVec3,
    next_contact_id: &mut ContactId,
    events: &mut Vec<SimEvent>,
    now: f64,
) {
    let alive = world.query_mut::<&HostileCraft>().into_iter().count();
    if alive > 0 || now < encounter.next_wave_spawn_secs || encounter.wave >= MAX_WAVE {
        return;
    }

    encounter.wave += 1;
    let count = spawn_wave(world, encounter, ship_pos, next_contact_id, now);
    encounter.next_wave_spawn_secs = now + WAVE_DELAY_SECS;

    info!(wave = encounter.wave, count, "spawned hostile wave");
    events.push(SimEvent::WaveSpawned {
        wave: encounter.wave,
        count,
    });
}

/// Spawn the current wave's hostiles on a ring around the site.
/// Waves 1-2: three Raiders at staggered angles and radii. Wave 3: one
/// Dreadwing at a single seeded offset.
fn spawn_wave(
    world: &mut World,
    encounter: &Encounter,
    ship_pos: DVec3,
    next_contact_id: &mut ContactId,
    now: f64,
) -> u32 {
    let wave = encounter.wave;
    let boss_wave = wave == MAX_WAVE;
    let count = if boss_wave { 1 } else { WAVE_SIZE };

    for index in 0..count {
        let mut rng = ChaCha8Rng::seed_from_u64(wave_seed(encounter.seed, wave, index));

        let archetype = if boss_wave {
            HostileArchetype::Dreadwing
        } else {
            HostileArchetype::Raider
        };
        let spec = get_spec(archetype);

        // Staggered ring placement: fixed per-index angle slice plus a
        // seeded jitter inside it.
        let slice = std::f64::consts::TAU / count as f64;
        let angle = index as f64 * slice + rng.gen_range(0.0..slice * 0.5);
        let radius = SPAWN_RING_RADIUS + index as f64 * SPAWN_RING_STAGGER;
        let vertical = rng.gen_range(-SPAWN_RING_STAGGER..SPAWN_RING_STAGGER);

        let position = encounter.site_position
            + DVec3::new(radius * angle.cos(), vertical, radius * angle.sin());

        let id = *next_contact_id;
        *next_contact_id += 1;

        let name = if boss_wave {
            "Dreadwing".to_string()
        } else {
            format!("Raider {wave}-{}", index + 1)
        };

        world.spawn((
            Contact {
                id,
                name,
                kind: ContactKind::Hostile,
                radius: 0.0,
            },
            Position(position),
            HostileCraft {
                archetype,
                wave,
                hp: spec.max_hp,
                max_hp: spec.max_hp,
                strafe_direction: strafe_direction(ship_pos - position, &mut rng),
                next_fire_secs: now,
            },
        ));
    }

    count as u32
}

/// Small integer seed function of wave and index, mixed with the encounter
/// seed so distinct encounters lay out differently.
fn wave_seed(encounter_seed: u64, wave: u8, index: usize) -> u64 {
    encounter_seed
        .wrapping_mul(1_000_003)
        .wrapping_add(wave as u64 * 31 + index as u64)
}
