//! Headless HELION runner.
//!
//! Player commands are read from stdin as newline-delimited JSON (the same
//! tagged format the snapshot uses), e.g.:
//!
//! ```text
//! {"type":"WarpTo","target":4}
//! {"type":"Lock","target":5}
//! {"type":"ToggleFiring"}
//! ```
//!
//! A one-line status summary is logged every second. EOF on stdin shuts the
//! loop down.

use std::io::BufRead;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{info, warn};

use helion_core::commands::PlayerCommand;
use helion_sim::engine::SimConfig;

use helion_app::game_loop::spawn_game_loop;
use helion_app::state::GameLoopCommand;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(
        SimConfig {
            seed,
            ..Default::default()
        },
        Arc::clone(&latest_snapshot),
    );

    info!(seed, "simulation running; feed JSON commands on stdin");

    // Status reporter: one line per second from the latest snapshot.
    {
        let latest_snapshot = Arc::clone(&latest_snapshot);
        std::thread::Builder::new()
            .name("helion-status".into())
            .spawn(move || loop {
                std::thread::sleep(Duration::from_secs(1));
                let Ok(guard) = latest_snapshot.lock() else {
                    return;
                };
                if let Some(snap) = guard.as_ref() {
                    info!(
                        t = format_args!("{:.1}", snap.time.elapsed_secs),
                        nav = ?snap.ship.nav_status,
                        speed = format_args!("{:.0}", snap.ship.velocity.length()),
                        armor = format_args!("{:.0}", snap.ship.armor),
                        hull = format_args!("{:.0}", snap.ship.hull),
                        wave = snap.wave,
                        hostiles = snap.hostiles.len(),
                        locks = snap.locks.len(),
                        "status"
                    );
                }
            })
            .expect("Failed to spawn status thread");
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if cmd_tx.send(GameLoopCommand::Player(command)).is_err() {
                    break;
                }
            }
            Err(err) => warn!(%err, "ignoring malformed command"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    info!("shutting down");
}
