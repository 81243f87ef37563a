//! Game clock: the update heartbeat and the spawn cadence.

use cybercat_core::types::Millis;

use crate::scheduler::{Scheduler, Task, TimerId};

/// Owns the two repeating triggers. Idle when neither is scheduled.
#[derive(Debug, Default)]
pub struct GameClock {
    triggers: Option<Triggers>,
}

#[derive(Debug, Clone, Copy)]
struct Triggers {
    update: TimerId,
    spawn: TimerId,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.triggers.is_some()
    }

    /// Idle -> Running. No-op when already running.
    pub fn start(&mut self, scheduler: &mut impl Scheduler, update_ms: Millis, spawn_ms: Millis) {
        if self.triggers.is_some() {
            return;
        }
        self.triggers = Some(Triggers {
            update: scheduler.schedule_repeating(update_ms, Task::Update),
            spawn: scheduler.schedule_repeating(spawn_ms, Task::Spawn),
        });
    }

    /// Running -> Idle. Both triggers are cancelled before this returns.
    /// No-op when idle.
    pub fn stop(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(triggers) = self.triggers.take() {
            scheduler.cancel(triggers.update);
            scheduler.cancel(triggers.spawn);
        }
    }
}
