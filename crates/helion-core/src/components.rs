//! Component data attached to world entities.
//!
//! Components are plain data structs with no game logic; systems in the
//! simulation crate own the behavior.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ContactKind, HostileArchetype};
use crate::types::ContactId;

/// Identity of a targetable entity: id, display name, class, body radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub kind: ContactKind,
    /// Body radius in meters (0 for point entities like sites and craft).
    pub radius: f64,
}

/// World-space position component (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Mutable state of one hostile craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileCraft {
    pub archetype: HostileArchetype,
    /// Wave this hostile spawned in (1..=3).
    pub wave: u8,
    pub hp: f64,
    pub max_hp: f64,
    /// Orbit direction fixed at spawn. Unit vector.
    pub strafe_direction: DVec3,
    /// Sim time (seconds) at which this hostile may fire again.
    pub next_fire_secs: f64,
}

impl HostileCraft {
    /// Live health as a display percentage (0-100).
    pub fn health_percent(&self) -> u8 {
        if self.max_hp <= 0.0 {
            return 0;
        }
        ((self.hp / self.max_hp) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
