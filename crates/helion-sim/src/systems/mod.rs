//! Per-tick simulation systems, run in a fixed order by the engine:
//! encounter → hostile → navigation → autofire.

pub mod autofire;
pub mod damage;
pub mod encounter;
pub mod hostile;
pub mod navigation;
pub mod snapshot;
