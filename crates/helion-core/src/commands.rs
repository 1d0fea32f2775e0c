//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Invalid or
//! out-of-policy commands are silently ignored — the requested state change
//! simply does not take effect.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Navigation ---
    /// Cruise toward a fixed direction at sublight speed.
    SetHeading { direction: DVec3 },
    /// Close to a stand-off distance from a contact.
    Approach { target: ContactId },
    /// Two-phase warp to a contact's stand-off point.
    /// Ignored while a warp is already active or for hostile targets.
    WarpTo { target: ContactId },

    // --- Targeting ---
    /// Lock a contact. Ignored beyond lock range, beyond capacity, or if
    /// already locked.
    Lock { target: ContactId },
    /// Release a lock. Promotes the next remaining lock if it was active.
    Unlock { target: ContactId },
    /// Make an already-locked contact the active target.
    SetActiveLock { target: ContactId },

    // --- Weapons ---
    /// Toggle autofire. Enabling without an active lock is a no-op.
    ToggleFiring,
}
