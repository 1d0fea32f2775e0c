//! System catalog — the static world data the simulation consumes.
//!
//! Produced by the (excluded) world-data collaborator: one entry per
//! celestial entity plus the encounter's combat site. The simulation derives
//! stand-off points and fallback radii from it; it never mutates it.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_BODY_RADIUS;
use crate::enums::ContactKind;

/// One static entity in the star system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: ContactKind,
    pub position: DVec3,
    /// Body radius in meters, when the source data has one.
    pub radius: Option<f64>,
}

impl CatalogEntry {
    /// Radius used for stand-off math: the real value when available,
    /// otherwise a per-kind fallback.
    pub fn effective_radius(&self) -> f64 {
        match self.radius {
            Some(r) => r,
            None if self.kind == ContactKind::CelestialBody => FALLBACK_BODY_RADIUS,
            None => 0.0,
        }
    }
}

/// Snapshot of the star system handed to the engine at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemCatalog {
    pub entries: Vec<CatalogEntry>,
}

impl SystemCatalog {
    /// A small demo system for the headless runner and tests: a star, two
    /// planets, a moon, and one combat site.
    pub fn demo_system() -> Self {
        let entry = |name: &str, kind, position, radius| CatalogEntry {
            name: name.to_string(),
            kind,
            position,
            radius,
        };
        Self {
            entries: vec![
                entry(
                    "Helion",
                    ContactKind::Star,
                    DVec3::ZERO,
                    Some(1_400_000.0),
                ),
                entry(
                    "Helion I",
                    ContactKind::CelestialBody,
                    DVec3::new(25_000_000.0, 0.0, 2_000_000.0),
                    Some(60_000.0),
                ),
                entry(
                    "Helion II",
                    ContactKind::CelestialBody,
                    DVec3::new(-48_000_000.0, 1_500_000.0, -9_000_000.0),
                    Some(85_000.0),
                ),
                entry(
                    "Helion II - Moon 1",
                    ContactKind::CelestialBody,
                    DVec3::new(-48_600_000.0, 1_480_000.0, -8_700_000.0),
                    None,
                ),
                entry(
                    "Derelict Relay",
                    ContactKind::CombatSite,
                    DVec3::new(12_000_000.0, -400_000.0, 5_000_000.0),
                    None,
                ),
            ],
        }
    }
}
