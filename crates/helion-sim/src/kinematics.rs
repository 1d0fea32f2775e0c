//! Arrive-at-distance speed solver shared by every mover.
//!
//! Sublight travel and warp cruise both use it, with different constants:
//! hold acceleration until braking distance is reached, then decelerate so
//! the mover arrives at the stop point without overshoot.

use helion_core::constants::{ARRIVE_DECEL_MARGIN, ARRIVE_EPS};

/// Compute the next-tick speed for a mover `remaining` meters from its stop
/// point. With `remaining = f64::INFINITY` this degenerates to plain
/// accelerate-and-cruise (no stop point).
pub fn arrive_speed(
    speed: f64,
    max_speed: f64,
    accel: f64,
    decel: f64,
    remaining: f64,
    dt: f64,
) -> f64 {
    let r = remaining.max(ARRIVE_EPS);
    let required_decel = speed * speed / (2.0 * r);

    if required_decel > decel * ARRIVE_DECEL_MARGIN {
        (speed - decel * dt).max(0.0)
    } else {
        (speed + accel * dt).min(max_speed)
    }
}
