//! Entity spawn and lookup helpers for the system world.
//!
//! Seeds the hecs world from a `SystemCatalog` and provides the contact
//! resolution and effective-distance queries the systems share.

use glam::DVec3;
use hecs::{Entity, World};

use helion_core::catalog::SystemCatalog;
use helion_core::components::{Contact, Position};
use helion_core::constants::STANDOFF_BUFFER;
use helion_core::enums::ContactKind;
use helion_core::types::ContactId;

/// Spawn one entity per catalog entry, assigning contact ids in catalog
/// order. Returns the contact id of the encounter's combat site, if any.
pub fn setup_system(
    world: &mut World,
    catalog: &SystemCatalog,
    next_contact_id: &mut ContactId,
) -> Option<(ContactId, DVec3)> {
    let mut site = None;

    for entry in &catalog.entries {
        let id = *next_contact_id;
        *next_contact_id += 1;

        world.spawn((
            Contact {
                id,
                name: entry.name.clone(),
                kind: entry.kind,
                radius: entry.effective_radius(),
            },
            Position(entry.position),
        ));

        if entry.kind == ContactKind::CombatSite && site.is_none() {
            site = Some((id, entry.position));
        }
    }

    site
}

/// Resolve a contact id to its entity and current state.
pub fn find_contact(world: &World, id: ContactId) -> Option<(Entity, Contact, DVec3)> {
    world
        .query::<(&Contact, &Position)>()
        .iter()
        .find(|(_, (contact, _))| contact.id == id)
        .map(|(entity, (contact, pos))| (entity, contact.clone(), pos.0))
}

/// Distance used for lock and overview purposes: celestial bodies read as
/// distance-to-surface (center distance minus radius and stand-off buffer,
/// floored at zero); stars, sites, and hostiles use raw center distance.
pub fn effective_distance(ship_pos: DVec3, contact: &Contact, contact_pos: DVec3) -> f64 {
    let center_distance = ship_pos.distance(contact_pos);
    if contact.kind.surface_adjusted() {
        (center_distance - (contact.radius + STANDOFF_BUFFER)).max(0.0)
    } else {
        center_distance
    }
}
