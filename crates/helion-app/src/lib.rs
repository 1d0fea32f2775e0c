//! Headless runner for the HELION simulation.
//!
//! Reads newline-delimited JSON player commands on stdin, runs the engine
//! at a fixed tick rate on its own thread, and shares the latest snapshot
//! for polling.

pub mod game_loop;
pub mod state;
