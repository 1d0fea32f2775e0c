//! Simulation constants and tuning parameters.

/// Nominal simulation tick rate (Hz) for the headless runner.
pub const TICK_RATE: u32 = 60;

/// Maximum `dt` accepted by one tick (seconds). Frame hitches are clamped
/// to this to bound integration error.
pub const MAX_DT: f64 = 0.05;

// --- Sublight propulsion ---

/// Maximum sublight speed (m/s).
pub const SUBLIGHT_MAX_SPEED: f64 = 250.0;

/// Sublight acceleration (m/s²).
pub const SUBLIGHT_ACCEL: f64 = 60.0;

/// Sublight deceleration (m/s²).
pub const SUBLIGHT_DECEL: f64 = 90.0;

/// Maximum heading slew rate (radians per second).
pub const HEADING_TURN_RATE: f64 = 1.6;

// --- Warp ---

/// Maximum warp speed (m/s).
pub const WARP_MAX_SPEED: f64 = 300_000.0;

/// Warp acceleration (m/s²).
pub const WARP_ACCEL: f64 = 60_000.0;

/// Warp deceleration (m/s²).
pub const WARP_DECEL: f64 = 120_000.0;

/// Floor speed while in warp cruise (m/s). The ship never crawls mid-warp.
pub const MIN_WARP_SPEED: f64 = 4_000.0;

/// Fraction of sublight max speed that must be reached while aligning.
pub const ALIGN_SPEED_FRACTION: f64 = 0.5;

/// Ratio of align speed that must be held before cruise may begin.
pub const ALIGN_SPEED_RATIO: f64 = 0.98;

/// Maximum heading error to the destination before cruise may begin (rad).
pub const ALIGN_ANGLE_EPS: f64 = 0.05;

/// Minimum time spent aligning before cruise may begin (seconds).
/// Prevents instantaneous warp from a standstill.
pub const WARP_ALIGN_MIN_SECS: f64 = 2.0;

/// Distance at which warp cruise snaps to the destination (meters).
pub const WARP_STOP_DISTANCE: f64 = 100.0;

// --- Arrive solver ---

/// Safety margin applied to the deceleration test in the arrive solver.
pub const ARRIVE_DECEL_MARGIN: f64 = 0.92;

/// Distance epsilon guarding the arrive solver against division by zero.
pub const ARRIVE_EPS: f64 = 1e-3;

// --- Approach / stand-off ---

/// Minimum approach stop distance regardless of target radius (meters).
pub const MIN_APPROACH_MARGIN: f64 = 500.0;

/// Stand-off buffer added to a body's radius for warp-in points, approach
/// stops, and surface-adjusted overview distances (meters).
pub const STANDOFF_BUFFER: f64 = 2_500.0;

// --- Targeting ---

/// Maximum effective distance at which a contact may be locked (meters).
pub const LOCK_RANGE: f64 = 150_000.0;

/// Maximum simultaneously locked contacts.
pub const MAX_LOCKED_TARGETS: usize = 5;

// --- Player weapon ---

/// Player weapon range (meters).
pub const PLAYER_WEAPON_RANGE: f64 = 45_000.0;

/// Player weapon cooldown (seconds).
pub const PLAYER_FIRE_COOLDOWN: f64 = 1.5;

/// Damage per player shot against hostile hp.
pub const PLAYER_SHOT_DAMAGE: f64 = 12.0;

/// Display-health percentage removed per shot at a non-health-bearing
/// contact (celestial bodies and the like).
pub const NONCOMBAT_SHOT_PERCENT: u8 = 5;

// --- Player defenses ---

pub const PLAYER_MAX_ARMOR: f64 = 120.0;
pub const PLAYER_MAX_HULL: f64 = 90.0;

// --- Hostile AI ---

/// Hysteresis half-band around a hostile's desired range (meters).
/// Inside the band the hostile orbits along its strafe direction.
pub const RANGE_HYSTERESIS_BAND: f64 = 600.0;

/// Blend weight toward retreat when inside the band's inner edge.
pub const RETREAT_BLEND: f64 = 0.75;

/// Blend weight toward closing when outside the band's outer edge.
pub const CLOSE_BLEND: f64 = 0.82;

// --- Encounter waves ---

/// Highest wave number. Wave 3 is the boss wave.
pub const MAX_WAVE: u8 = 3;

/// Delay between clearing a wave and spawning the next (seconds).
pub const WAVE_DELAY_SECS: f64 = 8.0;

/// Hostiles per normal wave (waves 1 and 2).
pub const WAVE_SIZE: usize = 3;

/// Base radius of the spawn ring around a combat site (meters).
pub const SPAWN_RING_RADIUS: f64 = 12_000.0;

/// Per-index radius stagger within one wave (meters).
pub const SPAWN_RING_STAGGER: f64 = 1_500.0;

// --- Catalog fallbacks ---

/// Radius assumed for a celestial body when the catalog omits one (meters).
pub const FALLBACK_BODY_RADIUS: f64 = 6_000.0;
