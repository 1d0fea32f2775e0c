//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of thing a contact is. Determines warp permission and how
/// overview/lock distances are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactKind {
    /// The system's star. Raw center distance; warpable.
    Star,
    /// Planet or moon. Surface-adjusted distance; warpable.
    #[default]
    CelestialBody,
    /// Combat site anchor. Raw center distance; warpable.
    CombatSite,
    /// Hostile craft. Raw center distance; never warpable.
    Hostile,
}

impl ContactKind {
    /// Whether lock/overview distance subtracts the body surface.
    pub fn surface_adjusted(self) -> bool {
        matches!(self, ContactKind::CelestialBody)
    }

    /// Whether the ship may warp to this contact class.
    pub fn warpable(self) -> bool {
        !matches!(self, ContactKind::Hostile)
    }

    /// Whether the contact carries a live health pool.
    pub fn has_health(self) -> bool {
        matches!(self, ContactKind::Hostile)
    }
}

/// Hostile archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileArchetype {
    /// Standard wave filler: fast, short-ranged, fragile.
    Raider,
    /// Wave-3 boss: slow, long-ranged, heavily pooled.
    Dreadwing,
}

/// Navigation status label exposed to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavStatus {
    #[default]
    Idle,
    /// Cruising on a fixed manual heading.
    Speed,
    /// Closing to stand-off distance from a target.
    Approach,
    /// Turning and accelerating toward a warp destination.
    Align,
    /// High-speed warp transit.
    Warp,
}
