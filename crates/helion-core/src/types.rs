//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_DT;

/// Stable identifier assigned to every targetable contact at spawn.
/// Commands and snapshots refer to contacts by id; the engine resolves
/// ids to entities internally.
pub type ContactId = u32;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds, clamped to `MAX_DT` to bound
    /// integration error during frame hitches.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = dt.clamp(0.0, MAX_DT);
        self.tick += 1;
        self.elapsed_secs += dt;
        dt
    }
}

/// Player ship state. Exclusively owned by the engine and mutated only
/// inside the simulation tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipState {
    /// World-space position (meters).
    pub position: DVec3,
    /// World-space velocity (m/s).
    pub velocity: DVec3,
    /// Facing direction. Always a unit vector.
    pub heading: DVec3,
    /// Armor pool. `0 <= armor <= max_armor`.
    pub armor: f64,
    /// Hull pool. `0 <= hull <= max_hull`. Zero triggers respawn.
    pub hull: f64,
    pub max_armor: f64,
    pub max_hull: f64,
}

impl ShipState {
    pub fn new(position: DVec3, max_armor: f64, max_hull: f64) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            heading: DVec3::X,
            armor: max_armor,
            hull: max_hull,
            max_armor,
            max_hull,
        }
    }

    /// Current speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::new(
            DVec3::ZERO,
            crate::constants::PLAYER_MAX_ARMOR,
            crate::constants::PLAYER_MAX_HULL,
        )
    }
}

/// Warp transit phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarpPhase {
    /// Turning toward the destination and building align speed.
    Align,
    /// Heading locked, high-speed transit to the destination.
    Cruise,
}

/// Active navigation order. Exactly one variant at a time; entering
/// `Warp` or `Approach` replaces whatever was active before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationIntent {
    /// Decelerate to zero along the current velocity direction.
    Idle,
    /// Cruise toward a fixed direction at sublight speed, indefinitely.
    ManualHeading { direction: DVec3 },
    /// Close to a stand-off distance from a (possibly moving) contact.
    Approach { target: ContactId },
    /// Two-phase rapid transit toward a fixed point.
    Warp {
        phase: WarpPhase,
        /// The warp-in point (stand-off from the body center).
        destination: DVec3,
        /// Center of the warped-to body, kept for presentation.
        center: DVec3,
        /// Seconds spent in the Align phase so far.
        align_elapsed_secs: f64,
    },
}

impl NavigationIntent {
    pub fn is_warping(&self) -> bool {
        matches!(self, NavigationIntent::Warp { .. })
    }
}

impl Default for NavigationIntent {
    fn default() -> Self {
        NavigationIntent::Idle
    }
}
