//! Command protocol between the stdin reader and the game loop thread.

use helion_core::commands::PlayerCommand;

/// Commands sent from the input layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::ToggleFiring))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::ToggleFiring)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }
}
