//! State shared between the host's main thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use cybercat_core::commands::PlayerCommand;
use cybercat_core::state::{GameState, SimSnapshot};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the controller.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the loop thread and polled by the host.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

/// Handle to a running game loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub(crate) handle: JoinHandle<GameState>,
}

impl LoopHandle {
    /// Forward a player command. Returns false once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Clone of the most recent snapshot, if the loop produced one.
    pub fn latest(&self) -> Option<SimSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Ask the loop to stop and wait for the final state.
    pub fn shutdown(self) -> Option<GameState> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.handle.join().ok()
    }
}
