//! Game loop thread: advances the controller in real time and publishes
//! snapshots.
//!
//! The controller is moved into the thread. Commands arrive via an `mpsc`
//! channel and the latest snapshot is stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use cybercat_core::enums::GamePhase;
use cybercat_core::events::GameEvent;
use cybercat_core::state::{GameState, SimSnapshot};
use cybercat_sim::GameController;

use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

/// Spawns the game loop in a new thread.
///
/// The thread exits on `Shutdown`, when every sender is dropped, or once the
/// game is over, yielding the final progress.
pub fn spawn_game_loop(controller: GameController, latest_snapshot: SharedSnapshot) -> io::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let shared = latest_snapshot.clone();

    let handle = std::thread::Builder::new()
        .name("cybercat-game-loop".into())
        .spawn(move || run_game_loop(controller, command_rx, &shared))?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        handle,
    })
}

fn run_game_loop(
    mut controller: GameController,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> GameState {
    let frame = Duration::from_millis(controller.config().update_interval_ms.max(1));
    let mut last = Instant::now();
    let mut carry = Duration::ZERO;

    loop {
        // 1. Drain pending commands
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => controller.queue_command(command),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("game loop shutting down");
                    return controller.state();
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the wall-clock time since the last frame, keeping
        //    the sub-millisecond remainder for the next one
        let now = Instant::now();
        carry += now - last;
        last = now;
        let elapsed_ms = carry.as_millis() as u64;
        carry -= Duration::from_millis(elapsed_ms);
        let snapshot = controller.advance(elapsed_ms);

        // 3. Report what happened
        log_events(&snapshot.events);
        let over = snapshot.phase == GamePhase::GameOver;

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if over {
            return controller.state();
        }

        // 5. Sleep until the next frame
        let spent = last.elapsed();
        if spent < frame {
            std::thread::sleep(frame - spent);
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::EntityAdded { id, kind, position } => {
                log::trace!("+ {kind:?} {id} at ({:.1}, {:.1})", position.x, position.y)
            }
            GameEvent::EntityRemoved { id, kind, cause, .. } => {
                log::trace!("- {kind:?} {id} ({cause:?})")
            }
            GameEvent::ScoreChanged { score, coins, xp, level } => {
                log::debug!("score {score} coins {coins} xp {xp} level {level}")
            }
            GameEvent::LevelUp { level, threat_speed } => {
                log::info!("reached level {level}, threats now fall at {threat_speed:.2}")
            }
            GameEvent::GameOver { final_score } => log::info!("final score {final_score}"),
        }
    }
}
