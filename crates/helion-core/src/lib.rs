//! Core types and definitions for the HELION encounter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! commands, events, enums, constants, state snapshots, and the system
//! catalog format. It has no dependency on the engine or any runtime.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
