use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use helion_core::constants::RANGE_HYSTERESIS_BAND;
use helion_core::enums::HostileArchetype;

use crate::profiles::get_spec;
use crate::steering::{steer, strafe_direction, SteeringContext};

fn make_context(distance: f64, desired_range: f64) -> SteeringContext {
    // Ship along +X, strafe along +Y.
    SteeringContext {
        to_ship: DVec3::new(distance, 0.0, 0.0),
        distance,
        desired_range,
        strafe_direction: DVec3::Y,
    }
}

#[test]
fn test_steer_retreats_when_too_close() {
    let ctx = make_context(5_000.0, 9_000.0);
    let dir = steer(&ctx);
    assert!((dir.length() - 1.0).abs() < 1e-12, "steer must be unit");
    assert!(dir.x < 0.0, "too close: should move away from ship");
    assert!(dir.y > 0.0, "retreat keeps a strafe component");
}

#[test]
fn test_steer_closes_when_too_far() {
    let ctx = make_context(20_000.0, 9_000.0);
    let dir = steer(&ctx);
    assert!(dir.x > 0.0, "too far: should move toward ship");
    assert!(dir.y > 0.0, "closing keeps a strafe component");
    // Toward-ship component dominates the strafe component.
    assert!(dir.x > dir.y);
}

#[test]
fn test_steer_orbits_inside_band() {
    let desired = 9_000.0;
    for offset in [-RANGE_HYSTERESIS_BAND + 1.0, 0.0, RANGE_HYSTERESIS_BAND - 1.0] {
        let ctx = make_context(desired + offset, desired);
        let dir = steer(&ctx);
        assert_eq!(
            dir,
            DVec3::Y,
            "inside the band the hostile moves purely along strafe"
        );
    }
}

#[test]
fn test_steer_degenerate_falls_back() {
    // Zero strafe still yields a valid unit direction.
    let ctx = SteeringContext {
        to_ship: DVec3::new(20_000.0, 0.0, 0.0),
        distance: 20_000.0,
        desired_range: 9_000.0,
        strafe_direction: DVec3::ZERO,
    };
    let dir = steer(&ctx);
    assert!((dir.length() - 1.0).abs() < 1e-12);

    let cancel = SteeringContext {
        to_ship: DVec3::ZERO,
        distance: 0.0,
        desired_range: 9_000.0,
        strafe_direction: DVec3::ZERO,
    };
    assert_eq!(steer(&cancel), DVec3::X, "degenerate vector falls back");
}

#[test]
fn test_strafe_direction_orthogonal_and_deterministic() {
    let to_ship = DVec3::new(3.0, -1.0, 2.0);

    let mut rng_a = ChaCha8Rng::seed_from_u64(17);
    let mut rng_b = ChaCha8Rng::seed_from_u64(17);
    let a = strafe_direction(to_ship, &mut rng_a);
    let b = strafe_direction(to_ship, &mut rng_b);
    assert_eq!(a, b, "same seed must reproduce the same strafe direction");

    assert!((a.length() - 1.0).abs() < 1e-9);
    assert!(
        a.dot(to_ship.normalize()).abs() < 1e-9,
        "strafe lies in the plane orthogonal to the to-ship direction"
    );

    let mut rng_c = ChaCha8Rng::seed_from_u64(18);
    let c = strafe_direction(to_ship, &mut rng_c);
    assert_ne!(a, c, "different seeds should pick different angles");
}

#[test]
fn test_specs_sane() {
    for archetype in [HostileArchetype::Raider, HostileArchetype::Dreadwing] {
        let spec = get_spec(archetype);
        assert!(spec.speed > 0.0);
        assert!(spec.weapon_range > spec.desired_range);
        assert!(spec.fire_cooldown_secs > 0.0);
        assert!(spec.max_hp > 0.0);
        assert!(spec.damage_armor > 0.0);
    }

    let raider = get_spec(HostileArchetype::Raider);
    let boss = get_spec(HostileArchetype::Dreadwing);
    assert!(boss.max_hp > raider.max_hp, "boss outlasts wave filler");
    assert!(boss.weapon_range > raider.weapon_range);
}
