//! Simulation engine for the HELION encounter loop.
//!
//! `SimulationEngine` owns the hecs world, the player ship, the target-lock
//! manager, and the encounter state; it processes queued player commands and
//! produces a `SimSnapshot` each tick. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod kinematics;
pub mod locks;
pub mod systems;
pub mod world_setup;
