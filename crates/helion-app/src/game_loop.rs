//! Game loop thread — runs the simulation engine at a fixed tick rate.
//!
//! The engine is created inside the thread so it is exclusively owned there.
//! Commands arrive via an `mpsc` channel; the latest snapshot is stored in
//! shared state for synchronous polling, and simulation events are logged
//! as they occur.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::info;

use helion_core::constants::TICK_RATE;
use helion_core::events::SimEvent;
use helion_core::state::SimSnapshot;
use helion_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

const TICK_SECS: f64 = 1.0 / TICK_RATE as f64;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("helion-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(TICK_SECS);

        // 3. Surface events
        for event in &snapshot.events {
            log_event(event);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_event(event: &SimEvent) {
    match event {
        SimEvent::WarpArrived { position } => info!(?position, "warp arrived"),
        SimEvent::FiringStateChanged { enabled } => info!(enabled, "firing state changed"),
        SimEvent::HostileDestroyed { contact, wave } => {
            info!(contact, wave, "hostile destroyed")
        }
        SimEvent::PlayerRespawned => info!("ship lost, respawned at site of destruction"),
        SimEvent::WaveSpawned { wave, count } => info!(wave, count, "hostile wave on grid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helion_core::commands::PlayerCommand;

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / TICK_RATE as u64;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::SetHeading {
            direction: glam::DVec3::X,
        });

        for _ in 0..50 {
            engine.tick(TICK_SECS);
        }

        let snapshot = engine.tick(TICK_SECS);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {elapsed:?}, should be <3ms"
        );
        assert!(!json.is_empty());
    }
}
