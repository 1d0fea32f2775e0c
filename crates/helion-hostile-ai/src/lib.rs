//! Hostile behavior: steering math and archetype profiles.
//!
//! Pure functions over plain data — no ECS dependency. The simulation crate
//! feeds per-hostile context in and applies the returned movement.

pub mod profiles;
pub mod steering;

#[cfg(test)]
mod tests;
