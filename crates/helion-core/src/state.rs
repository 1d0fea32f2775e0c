//! Simulation snapshot — the complete visible state exposed to the
//! presentation layer once per tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ContactKind, HostileArchetype, NavStatus};
use crate::events::SimEvent;
use crate::types::{ContactId, SimTime};

/// Complete per-tick state for the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub ship: ShipView,
    pub contacts: Vec<ContactView>,
    pub hostiles: Vec<HostileView>,
    pub locks: Vec<LockView>,
    pub firing_enabled: bool,
    /// Current encounter wave (0 = not started, 3 = boss wave).
    pub wave: u8,
    /// Events raised during this tick, in order.
    pub events: Vec<SimEvent>,
}

/// Player ship state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec3,
    pub velocity: DVec3,
    pub heading: DVec3,
    pub armor: f64,
    pub hull: f64,
    pub max_armor: f64,
    pub max_hull: f64,
    /// HUD label for the active navigation mode.
    pub nav_status: NavStatus,
}

impl Default for ShipView {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            heading: DVec3::X,
            armor: 0.0,
            hull: 0.0,
            max_armor: 0.0,
            max_hull: 0.0,
            nav_status: NavStatus::Idle,
        }
    }
}

/// An overview row: any targetable entity in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub id: ContactId,
    pub name: String,
    pub kind: ContactKind,
    pub position: DVec3,
    /// Surface-adjusted distance for celestial bodies, raw center distance
    /// for everything else (meters).
    pub effective_distance: f64,
}

/// A live hostile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub id: ContactId,
    pub archetype: HostileArchetype,
    pub wave: u8,
    pub position: DVec3,
    pub hp: f64,
    pub max_hp: f64,
}

/// One locked target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockView {
    pub id: ContactId,
    pub active: bool,
    /// 0-100, mirroring live health for hostiles or the decrementing test
    /// value for non-health contacts.
    pub display_health_percent: u8,
}
