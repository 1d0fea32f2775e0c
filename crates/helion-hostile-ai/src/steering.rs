//! Range-keeping steering for hostile craft.
//!
//! Each hostile holds a desired range from the player with a hysteresis band:
//! too close blends retreat with its fixed strafe direction, too far blends
//! closing with it, and inside the band it orbits along the strafe direction
//! alone.

use glam::DVec3;
use rand::Rng;

use helion_core::constants::{CLOSE_BLEND, RANGE_HYSTERESIS_BAND, RETREAT_BLEND};

/// Per-tick steering input for one hostile.
#[derive(Debug, Clone, Copy)]
pub struct SteeringContext {
    /// Vector from the hostile to the player ship.
    pub to_ship: DVec3,
    /// Distance to the player ship (meters).
    pub distance: f64,
    /// Range this hostile tries to hold (meters).
    pub desired_range: f64,
    /// Fixed strafe direction assigned at spawn. Unit vector.
    pub strafe_direction: DVec3,
}

/// Compute the unit movement direction for one hostile this tick.
pub fn steer(ctx: &SteeringContext) -> DVec3 {
    let toward = if ctx.distance > f64::EPSILON {
        ctx.to_ship / ctx.distance
    } else {
        DVec3::ZERO
    };

    let dir = if ctx.distance < ctx.desired_range - RANGE_HYSTERESIS_BAND {
        -toward * RETREAT_BLEND + ctx.strafe_direction * (1.0 - RETREAT_BLEND)
    } else if ctx.distance > ctx.desired_range + RANGE_HYSTERESIS_BAND {
        toward * CLOSE_BLEND + ctx.strafe_direction * (1.0 - CLOSE_BLEND)
    } else {
        ctx.strafe_direction
    };

    dir.try_normalize().unwrap_or(DVec3::X)
}

/// Pick a strafe direction in the plane orthogonal to the initial to-ship
/// direction, at a seeded pseudo-random angle. Fixed for the hostile's
/// lifetime so a given seed reproduces the same orbit layout.
pub fn strafe_direction<R: Rng>(to_ship_dir: DVec3, rng: &mut R) -> DVec3 {
    let dir = to_ship_dir.try_normalize().unwrap_or(DVec3::X);

    // Orthonormal basis for the plane perpendicular to `dir`.
    let helper = if dir.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    let u = dir.cross(helper).normalize();
    let v = dir.cross(u);

    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    (u * angle.cos() + v * angle.sin()).normalize()
}
