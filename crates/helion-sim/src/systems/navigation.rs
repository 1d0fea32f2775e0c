//! Navigation system — runs the ship's active navigation mode each tick.
//!
//! Exactly one mode is active at a time: Idle, ManualHeading, Approach, or
//! the two-phase Warp. Each branch produces a velocity; position integrates
//! once at the end of the tick.

use glam::{DQuat, DVec3};
use hecs::World;
use tracing::info;

use helion_core::constants::*;
use helion_core::events::SimEvent;
use helion_core::types::{NavigationIntent, ShipState, WarpPhase};

use crate::kinematics::arrive_speed;
use crate::world_setup::find_contact;

/// Run the navigation controller for one tick.
pub fn run(
    world: &World,
    ship: &mut ShipState,
    nav: &mut NavigationIntent,
    events: &mut Vec<SimEvent>,
    dt: f64,
) {
    match nav.clone() {
        NavigationIntent::Idle => {
            let speed = (ship.speed() - SUBLIGHT_DECEL * dt).max(0.0);
            ship.velocity = ship.velocity.try_normalize().unwrap_or(DVec3::ZERO) * speed;
        }
        NavigationIntent::ManualHeading { direction } => {
            ship.heading = rotate_towards(ship.heading, direction, HEADING_TURN_RATE * dt);
            let speed = arrive_speed(
                ship.speed(),
                SUBLIGHT_MAX_SPEED,
                SUBLIGHT_ACCEL,
                SUBLIGHT_DECEL,
                f64::INFINITY,
                dt,
            );
            ship.velocity = ship.heading * speed;
        }
        NavigationIntent::Approach { target } => {
            // Re-resolved every tick: approach targets may move. A destroyed
            // target is cleared by the damage model before this runs; a
            // missing contact here just drops the order.
            let Some((_, contact, target_pos)) = find_contact(world, target) else {
                *nav = NavigationIntent::Idle;
                return;
            };

            let stop_distance = (contact.radius + STANDOFF_BUFFER).max(MIN_APPROACH_MARGIN);
            let to_target = target_pos - ship.position;
            let distance = to_target.length();

            if distance <= stop_distance {
                *nav = NavigationIntent::Idle;
                ship.velocity = DVec3::ZERO;
                return;
            }

            ship.heading = rotate_towards(ship.heading, to_target, HEADING_TURN_RATE * dt);
            let speed = arrive_speed(
                ship.speed(),
                SUBLIGHT_MAX_SPEED,
                SUBLIGHT_ACCEL,
                SUBLIGHT_DECEL,
                distance - stop_distance,
                dt,
            );
            ship.velocity = ship.heading * speed;
        }
        NavigationIntent::Warp {
            phase: WarpPhase::Align,
            destination,
            center,
            align_elapsed_secs,
        } => {
            let to_dest = destination - ship.position;
            let dest_dir = to_dest.try_normalize().unwrap_or(ship.heading);

            ship.heading = rotate_towards(ship.heading, dest_dir, HEADING_TURN_RATE * dt);

            let align_speed = ALIGN_SPEED_FRACTION * SUBLIGHT_MAX_SPEED;
            let speed = arrive_speed(
                ship.speed(),
                align_speed,
                SUBLIGHT_ACCEL,
                SUBLIGHT_DECEL,
                f64::INFINITY,
                dt,
            );
            ship.velocity = ship.heading * speed;

            let elapsed = align_elapsed_secs + dt;
            let heading_error = ship.heading.dot(dest_dir).clamp(-1.0, 1.0).acos();
            let aligned = heading_error <= ALIGN_ANGLE_EPS
                && speed >= ALIGN_SPEED_RATIO * align_speed
                && elapsed >= WARP_ALIGN_MIN_SECS;

            if aligned {
                // Snap to the exact transit line and seed cruise speed.
                ship.heading = dest_dir;
                ship.velocity = dest_dir * speed.max(MIN_WARP_SPEED);
                *nav = NavigationIntent::Warp {
                    phase: WarpPhase::Cruise,
                    destination,
                    center,
                    align_elapsed_secs: elapsed,
                };
            } else {
                *nav = NavigationIntent::Warp {
                    phase: WarpPhase::Align,
                    destination,
                    center,
                    align_elapsed_secs: elapsed,
                };
            }
        }
        NavigationIntent::Warp {
            phase: WarpPhase::Cruise,
            destination,
            ..
        } => {
            let remaining = destination - ship.position;
            let distance = remaining.length();

            // Overshoot guard: the remaining vector flipping against the
            // locked heading means we passed the destination this tick.
            if remaining.dot(ship.heading) <= 0.0 || distance <= WARP_STOP_DISTANCE {
                ship.position = destination;
                ship.velocity = DVec3::ZERO;
                *nav = NavigationIntent::Idle;
                info!(?destination, "warp complete");
                events.push(SimEvent::WarpArrived {
                    position: destination,
                });
                return;
            }

            let speed = arrive_speed(
                ship.speed(),
                WARP_MAX_SPEED,
                WARP_ACCEL,
                WARP_DECEL,
                distance,
                dt,
            )
            .max(MIN_WARP_SPEED);
            ship.velocity = ship.heading * speed;
        }
    }

    ship.position += ship.velocity * dt;
}

/// Rotate a unit vector toward a target direction, turning at most
/// `max_angle` radians. Snaps when already within the step.
pub fn rotate_towards(from: DVec3, to: DVec3, max_angle: f64) -> DVec3 {
    let Some(to) = to.try_normalize() else {
        return from;
    };

    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    if angle <= max_angle {
        return to;
    }

    let axis = from.cross(to).try_normalize().unwrap_or_else(|| {
        // Antiparallel: any perpendicular axis will do.
        let helper = if from.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        from.cross(helper).normalize()
    });

    (DQuat::from_axis_angle(axis, max_angle) * from).normalize()
}
