//! Target-lock manager.
//!
//! Tracks which contacts are locked (insertion-ordered, capacity-bounded),
//! which one is active, and each lock's display health percentage. Mutated
//! by player commands and by the damage model (forced unlock on hostile
//! death); read by the navigation and autofire systems.

use std::collections::HashMap;

use hecs::World;

use helion_core::components::{Contact, HostileCraft};
use helion_core::constants::MAX_LOCKED_TARGETS;
use helion_core::state::LockView;
use helion_core::types::ContactId;

/// The lock set. Invariant: `active ∈ locked ∪ {None}`, `locked.len() <= 5`,
/// and every locked key has a display-health entry.
#[derive(Debug, Clone, Default)]
pub struct LockState {
    locked: Vec<ContactId>,
    active: Option<ContactId>,
    display_health: HashMap<ContactId, u8>,
}

impl LockState {
    pub fn locked(&self) -> &[ContactId] {
        &self.locked
    }

    pub fn active(&self) -> Option<ContactId> {
        self.active
    }

    pub fn is_locked(&self, id: ContactId) -> bool {
        self.locked.contains(&id)
    }

    pub fn display_health(&self, id: ContactId) -> Option<u8> {
        self.display_health.get(&id).copied()
    }

    /// Add a lock. Capacity and duplicate checks live here; the engine
    /// performs the range check (it needs world access). The first lock
    /// becomes active. Returns whether the lock was added.
    pub fn lock(&mut self, id: ContactId, initial_percent: u8) -> bool {
        if self.locked.len() >= MAX_LOCKED_TARGETS || self.is_locked(id) {
            return false;
        }
        self.locked.push(id);
        self.display_health.insert(id, initial_percent.min(100));
        if self.active.is_none() {
            self.active = Some(id);
        }
        true
    }

    /// Remove a lock. If it was active, promote the next remaining key in
    /// insertion order (or clear active).
    pub fn unlock(&mut self, id: ContactId) {
        let Some(idx) = self.locked.iter().position(|&k| k == id) else {
            return;
        };
        self.locked.remove(idx);
        self.display_health.remove(&id);
        if self.active == Some(id) {
            self.active = self.locked.first().copied();
        }
    }

    /// Make an already-locked contact the active target. No-op otherwise.
    pub fn set_active(&mut self, id: ContactId) {
        if self.is_locked(id) {
            self.active = Some(id);
        }
    }

    /// Reduce a non-health target's display value by a per-shot percentage.
    pub fn decrement_display(&mut self, id: ContactId, percent: u8) {
        if let Some(v) = self.display_health.get_mut(&id) {
            *v = v.saturating_sub(percent);
        }
    }

    pub fn set_display(&mut self, id: ContactId, percent: u8) {
        if let Some(v) = self.display_health.get_mut(&id) {
            *v = percent.min(100);
        }
    }

    /// Lock rows for the snapshot, in insertion order.
    pub fn views(&self) -> Vec<LockView> {
        self.locked
            .iter()
            .map(|&id| LockView {
                id,
                active: self.active == Some(id),
                display_health_percent: self.display_health.get(&id).copied().unwrap_or(0),
            })
            .collect()
    }
}

/// Mirror live hostile health into the lock display values. Non-hostile
/// locks keep their decrementing test value untouched.
pub fn sync_display(world: &World, locks: &mut LockState) {
    for (_entity, (contact, craft)) in world.query::<(&Contact, &HostileCraft)>().iter() {
        if locks.is_locked(contact.id) {
            locks.set_display(contact.id, craft.health_percent());
        }
    }
}
