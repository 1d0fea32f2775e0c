//! Hostile archetype profiles: the per-class combat and movement numbers.

use helion_core::enums::HostileArchetype;

/// Static combat profile for one hostile archetype.
#[derive(Debug, Clone, Copy)]
pub struct HostileSpec {
    pub archetype: HostileArchetype,
    /// Movement speed (m/s).
    pub speed: f64,
    /// Range the hostile tries to hold from the player (meters).
    pub desired_range: f64,
    /// Maximum firing range (meters).
    pub weapon_range: f64,
    /// Seconds between shots.
    pub fire_cooldown_secs: f64,
    /// Starting hit points.
    pub max_hp: f64,
    /// Damage dealt to the player's armor pool per shot.
    pub damage_armor: f64,
    /// Damage dealt directly to the player's hull pool per shot.
    pub damage_hull: f64,
}

/// Get the profile for an archetype.
pub fn get_spec(archetype: HostileArchetype) -> HostileSpec {
    match archetype {
        HostileArchetype::Raider => HostileSpec {
            archetype,
            speed: 180.0,
            desired_range: 9_000.0,
            weapon_range: 15_000.0,
            fire_cooldown_secs: 2.0,
            max_hp: 60.0,
            damage_armor: 6.0,
            damage_hull: 2.0,
        },
        HostileArchetype::Dreadwing => HostileSpec {
            archetype,
            speed: 120.0,
            desired_range: 14_000.0,
            weapon_range: 25_000.0,
            fire_cooldown_secs: 3.0,
            max_hp: 300.0,
            damage_armor: 14.0,
            damage_hull: 6.0,
        },
    }
}
