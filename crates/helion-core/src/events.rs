//! Events emitted by the simulation for presentation feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// Discrete events surfaced in the per-tick snapshot. The presentation
/// layer consumes these for flashes, sounds, and log lines; the simulation
/// never reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Warp completed; position snapped to the destination.
    /// Drives the arrival flash.
    WarpArrived { position: DVec3 },
    /// Autofire was enabled or disabled (player toggle or forced off).
    FiringStateChanged { enabled: bool },
    /// A hostile's hp reached zero and it was removed.
    HostileDestroyed { contact: ContactId, wave: u8 },
    /// The player's hull reached zero and the ship was reset.
    PlayerRespawned,
    /// A new wave spawned at the combat site.
    WaveSpawned { wave: u8, count: u32 },
}
