//! Simulation engine — the core of the encounter.
//!
//! `SimulationEngine` owns the hecs world, the player ship, the lock set,
//! and the encounter state machine; it processes queued player commands at
//! tick boundaries, runs all systems in order, and produces `SimSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::World;
use tracing::debug;

use helion_core::catalog::SystemCatalog;
use helion_core::commands::PlayerCommand;
use helion_core::constants::{LOCK_RANGE, STANDOFF_BUFFER};
use helion_core::events::SimEvent;
use helion_core::state::SimSnapshot;
use helion_core::types::{ContactId, NavigationIntent, ShipState, SimTime, WarpPhase};

use crate::locks::{self, LockState};
use crate::systems;
use crate::systems::autofire::AutofireState;
use crate::systems::encounter::Encounter;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// Seed for deterministic spawn placement. Same seed = same encounter.
    pub seed: u64,
    /// Static world data consumed at construction.
    pub catalog: SystemCatalog,
    /// Where the player ship starts.
    pub start_position: DVec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            catalog: SystemCatalog::demo_system(),
            start_position: DVec3::new(5_000_000.0, 0.0, 0.0),
        }
    }
}

/// The simulation engine. Owns the world and all encounter state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    ship: ShipState,
    nav: NavigationIntent,
    locks: LockState,
    autofire: AutofireState,
    encounter: Option<Encounter>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    next_contact_id: ContactId,
}

impl SimulationEngine {
    /// Create a new engine: seeds the world from the catalog and anchors
    /// the encounter at the catalog's combat site (if it has one).
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut next_contact_id = 0;
        let site = world_setup::setup_system(&mut world, &config.catalog, &mut next_contact_id);

        Self {
            world,
            time: SimTime::default(),
            ship: ShipState {
                position: config.start_position,
                ..ShipState::default()
            },
            nav: NavigationIntent::Idle,
            locks: LockState::default(),
            autofire: AutofireState::default(),
            encounter: site.map(|(id, pos)| Encounter::new(id, pos, config.seed)),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            next_contact_id,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick of (at most) `dt` seconds and
    /// return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> SimSnapshot {
        self.process_commands();
        let dt = self.time.advance(dt);
        let now = self.time.elapsed_secs;

        if let Some(encounter) = &mut self.encounter {
            systems::encounter::run(
                &mut self.world,
                encounter,
                self.ship.position,
                &mut self.next_contact_id,
                &mut self.events,
                now,
            );
        }
        systems::hostile::run(
            &mut self.world,
            &mut self.ship,
            &mut self.nav,
            &mut self.autofire,
            &mut self.events,
            now,
            dt,
        );
        systems::navigation::run(
            &self.world,
            &mut self.ship,
            &mut self.nav,
            &mut self.events,
            dt,
        );
        systems::autofire::run(
            &mut self.world,
            &mut self.ship,
            &mut self.locks,
            &mut self.autofire,
            &mut self.nav,
            &mut self.events,
            now,
        );
        locks::sync_display(&self.world, &mut self.locks);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.ship,
            &self.nav,
            &self.locks,
            self.autofire.enabled,
            self.encounter.as_ref().map(|e| e.wave).unwrap_or(0),
            events,
        )
    }

    // --- Read access for collaborators and tests ---

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn ship(&self) -> &ShipState {
        &self.ship
    }

    pub fn nav(&self) -> &NavigationIntent {
        &self.nav
    }

    pub fn locks(&self) -> &LockState {
        &self.locks
    }

    pub fn firing_enabled(&self) -> bool {
        self.autofire.enabled
    }

    pub fn wave(&self) -> u8 {
        self.encounter.as_ref().map(|e| e.wave).unwrap_or(0)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Look up a contact id by display name (test and tooling convenience).
    pub fn contact_id_by_name(&self, name: &str) -> Option<ContactId> {
        self.world
            .query::<&helion_core::components::Contact>()
            .iter()
            .find(|(_, c)| c.name == name)
            .map(|(_, c)| c.id)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Out-of-policy commands are silently
    /// dropped: the requested state change simply does not happen.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetHeading { direction } => {
                let Some(direction) = sanitize_direction(direction) else {
                    debug!("rejected SetHeading: degenerate direction");
                    return;
                };
                self.nav = NavigationIntent::ManualHeading { direction };
            }
            PlayerCommand::Approach { target } => {
                if world_setup::find_contact(&self.world, target).is_none() {
                    debug!(target, "rejected Approach: unknown contact");
                    return;
                }
                self.nav = NavigationIntent::Approach { target };
            }
            PlayerCommand::WarpTo { target } => {
                if self.nav.is_warping() {
                    debug!(target, "rejected WarpTo: warp already active");
                    return;
                }
                let Some((_, contact, center)) = world_setup::find_contact(&self.world, target)
                else {
                    debug!(target, "rejected WarpTo: unknown contact");
                    return;
                };
                if !contact.kind.warpable() {
                    debug!(target, "rejected WarpTo: target class forbids warp");
                    return;
                }

                // Warp-in point: stand-off from the body surface, on the
                // near side of the center.
                let toward_ship = (self.ship.position - center)
                    .try_normalize()
                    .unwrap_or(DVec3::X);
                let destination = center + toward_ship * (contact.radius + STANDOFF_BUFFER);

                self.nav = NavigationIntent::Warp {
                    phase: WarpPhase::Align,
                    destination,
                    center,
                    align_elapsed_secs: 0.0,
                };
            }
            PlayerCommand::Lock { target } => {
                let Some((entity, contact, pos)) = world_setup::find_contact(&self.world, target)
                else {
                    return;
                };
                if world_setup::effective_distance(self.ship.position, &contact, pos) > LOCK_RANGE
                {
                    debug!(target, "rejected Lock: out of range");
                    return;
                }

                let initial = if contact.kind.has_health() {
                    self.world
                        .get::<&helion_core::components::HostileCraft>(entity)
                        .map(|craft| craft.health_percent())
                        .unwrap_or(100)
                } else {
                    100
                };
                // Capacity and duplicate checks live in the lock manager.
                if !self.locks.lock(target, initial) {
                    debug!(target, "rejected Lock: at capacity or already locked");
                }
            }
            PlayerCommand::Unlock { target } => {
                self.locks.unlock(target);
            }
            PlayerCommand::SetActiveLock { target } => {
                self.locks.set_active(target);
            }
            PlayerCommand::ToggleFiring => {
                if self.autofire.enabled {
                    self.autofire.enabled = false;
                    self.events
                        .push(SimEvent::FiringStateChanged { enabled: false });
                } else if self.locks.active().is_some() {
                    self.autofire.enabled = true;
                    self.events
                        .push(SimEvent::FiringStateChanged { enabled: true });
                }
                // Enabling without an active lock: no-op, stays disabled.
            }
        }
    }
}

/// Normalize a commanded direction, rejecting zero and non-finite input.
fn sanitize_direction(direction: DVec3) -> Option<DVec3> {
    if !direction.is_finite() {
        return None;
    }
    direction.try_normalize()
}
