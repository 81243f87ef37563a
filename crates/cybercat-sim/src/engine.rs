//! Game controller: the core of the mini-game.
//!
//! `GameController` owns the registry, ledger, clock and scheduler, applies
//! player commands, dispatches due timer tasks and produces `SimSnapshot`s.
//! Completely headless, so tests drive it in virtual time.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use cybercat_core::commands::PlayerCommand;
use cybercat_core::config::{ConfigError, GameConfig};
use cybercat_core::enums::{EntityKind, GamePhase, RemovalCause};
use cybercat_core::events::{AudioEvent, GameEvent};
use cybercat_core::state::{GameState, SimSnapshot};
use cybercat_core::types::{EntityId, Millis, Position, SimTime};

use crate::clock::GameClock;
use crate::ledger::ScoreLedger;
use crate::persistence::{BackgroundSaver, ProgressStore, StoreError};
use crate::registry::EntityRegistry;
use crate::scheduler::{Scheduler, Task, TimerQueue};
use crate::systems;

/// Configuration for starting a new game.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for spawn columns. Same seed = same game.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// Why a controller could not be built.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The running game. Generic over the scheduler so hosts can inject their
/// own; `TimerQueue` is the deterministic default.
pub struct GameController<S: Scheduler = TimerQueue> {
    config: GameConfig,
    scheduler: S,
    clock: GameClock,
    registry: EntityRegistry,
    ledger: ScoreLedger,
    phase: GamePhase,
    time: SimTime,
    player: Position,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
    audio_events: Vec<AudioEvent>,
    saver: Option<BackgroundSaver>,
}

impl GameController<TimerQueue> {
    /// Controller with no external store.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_scheduler(config, TimerQueue::new(), None)
    }

    /// Controller that resumes from `store` and saves progress back to it.
    pub fn with_store(config: SimConfig, mut store: Box<dyn ProgressStore>) -> Result<Self, SetupError> {
        config.game.validate()?;
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("could not load saved progress, starting fresh: {e}");
                None
            }
        };
        let saver = BackgroundSaver::spawn(store)?;
        let mut controller = Self::with_scheduler(config, TimerQueue::new(), Some(saver))?;
        if let Some(saved) = saved {
            controller.ledger = ScoreLedger::resume(&controller.config, &saved);
            log::info!(
                "resumed progress: score {} level {}",
                saved.score,
                saved.level
            );
        }
        Ok(controller)
    }
}

impl<S: Scheduler> GameController<S> {
    /// Controller on a caller-supplied scheduler. Fails if the game config
    /// does not validate.
    pub fn with_scheduler(
        config: SimConfig,
        scheduler: S,
        saver: Option<BackgroundSaver>,
    ) -> Result<Self, ConfigError> {
        config.game.validate()?;
        let ledger = ScoreLedger::new(&config.game);
        let player = config.game.field.player_anchor;
        Ok(Self {
            time: SimTime {
                tick: 0,
                now_ms: scheduler.now(),
            },
            config: config.game,
            scheduler,
            clock: GameClock::new(),
            registry: EntityRegistry::new(),
            ledger,
            phase: GamePhase::Idle,
            player,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            audio_events: Vec::new(),
            saver,
        })
    }

    /// Queue a player command for the next advance boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, run every task due within the next
    /// `elapsed_ms`, and return the resulting snapshot.
    pub fn advance(&mut self, elapsed_ms: Millis) -> SimSnapshot {
        self.process_commands();

        let target = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some(task) = self.scheduler.pop_due(target) {
            self.time.now_ms = self.scheduler.now();
            self.dispatch(task);
        }
        self.scheduler.advance_to(target);
        self.time.now_ms = self.scheduler.now();

        self.snapshot()
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            log::trace!("start ignored in phase {:?}", self.phase);
            return;
        }
        self.player = self.config.field.player_anchor;
        self.clock.start(
            &mut self.scheduler,
            self.config.update_interval_ms,
            self.config.spawn_interval_ms,
        );
        self.phase = GamePhase::Running;
        log::info!(
            "game started at level {} (threat speed {})",
            self.ledger.level(),
            self.ledger.threat_speed()
        );
    }

    /// Raise a shield around the player. The input coordinate only triggers
    /// the shield; it does not place it. Returns `None` unless running.
    pub fn pointer_activated(&mut self, x: f64, y: f64) -> Option<EntityId> {
        if self.phase != GamePhase::Running {
            log::trace!("pointer at ({x}, {y}) dropped in phase {:?}", self.phase);
            return None;
        }

        let position = self.config.field.shield_origin(self.player);
        let ttl = self.config.shield_ttl_ms;
        let id = self.registry.add_shield(position, self.scheduler.now(), ttl);
        self.scheduler.schedule_once(ttl, Task::ExpireShield(id));

        self.events.push(GameEvent::EntityAdded {
            id,
            kind: EntityKind::Shield,
            position,
        });
        self.audio_events.push(AudioEvent::ShieldRaised);
        log::debug!("shield {id} raised by pointer at ({x}, {y})");
        Some(id)
    }

    /// Spawn a threat at column `x` with the current threat speed.
    /// Returns `None` unless running.
    pub fn spawn_threat_at(&mut self, x: f64) -> Option<EntityId> {
        if self.phase != GamePhase::Running {
            return None;
        }
        let speed = self.ledger.threat_speed();
        let id = systems::spawner::spawn_threat(&mut self.registry, &self.config.field, x, speed);
        let position = self.registry.position(id).unwrap_or_default();
        self.events.push(GameEvent::EntityAdded {
            id,
            kind: EntityKind::Threat,
            position,
        });
        log::debug!("threat {id} spawned at x={:.1}", position.x);
        Some(id)
    }

    /// Running -> GameOver. Stops the clock, clears shields, hands the final
    /// state to the store and announces the final score. Idempotent.
    pub fn end_game(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.clock.stop(&mut self.scheduler);
        self.phase = GamePhase::GameOver;

        for id in self.registry.shield_ids() {
            self.remove_entity(id, RemovalCause::Cleared);
        }

        let final_state = self.ledger.snapshot(false);
        self.persist(final_state);
        self.events.push(GameEvent::GameOver {
            final_score: final_state.score,
        });
        self.audio_events.push(AudioEvent::GameOver);
        log::info!(
            "game over at tick {}: score {} level {}",
            self.time.tick,
            final_state.score,
            final_state.level
        );
    }

    /// Remove a threat. A blocked threat pays out and may level up.
    /// Ids that are gone or belong to a shield are ignored, as is any call
    /// outside the running phase.
    pub fn destroy_threat(&mut self, id: EntityId, was_blocked: bool) {
        if self.phase != GamePhase::Running || self.registry.kind(id) != Some(EntityKind::Threat) {
            log::trace!("destroy of {id} ignored in phase {:?}", self.phase);
            return;
        }
        let cause = if was_blocked {
            RemovalCause::Blocked
        } else {
            RemovalCause::Breached
        };
        if !self.remove_entity(id, cause) || !was_blocked {
            return;
        }

        self.ledger.apply_reward(
            self.config.points_per_block,
            self.config.coins_per_block,
            self.config.xp_per_block,
        );
        self.audio_events.push(AudioEvent::ThreatBlocked);

        let leveled = self.ledger.evaluate_level_up();
        let state = self.ledger.snapshot(self.phase == GamePhase::Running);
        self.events.push(GameEvent::ScoreChanged {
            score: state.score,
            coins: state.coins,
            xp: state.xp,
            level: state.level,
        });
        if leveled {
            self.events.push(GameEvent::LevelUp {
                level: state.level,
                threat_speed: state.threat_speed,
            });
            self.audio_events.push(AudioEvent::LevelUp);
            log::info!(
                "level up: level {} threat speed {:.2}",
                state.level,
                state.threat_speed
            );
        }
        self.persist(state);
    }

    /// Build a snapshot, draining pending events.
    pub fn snapshot(&mut self) -> SimSnapshot {
        let events = std::mem::take(&mut self.events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.time,
            self.phase,
            self.player,
            self.state(),
            events,
            audio_events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn state(&self) -> GameState {
        self.ledger.snapshot(self.phase == GamePhase::Running)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::StartGame => self.start(),
                PlayerCommand::PointerActivated { x, y } => {
                    self.pointer_activated(x, y);
                }
                PlayerCommand::EndGame => self.end_game(),
            }
        }
    }

    fn dispatch(&mut self, task: Task) {
        match task {
            Task::Update => {
                if self.phase == GamePhase::Running {
                    self.run_update_tick();
                }
            }
            Task::Spawn => {
                if self.phase == GamePhase::Running {
                    let x = systems::spawner::random_column(&mut self.rng, &self.config.field);
                    self.spawn_threat_at(x);
                }
            }
            Task::ExpireShield(id) => {
                // Game-over cleanup may have removed it already.
                self.remove_entity(id, RemovalCause::Expired);
            }
        }
    }

    /// One heartbeat: move, then collide, then check the lower bound.
    fn run_update_tick(&mut self) {
        self.time.record_tick();

        systems::movement::advance_threats(
            &mut self.registry,
            self.config.speed_policy,
            self.ledger.threat_speed(),
        );
        let shield_origin = self.config.field.shield_origin(self.player);
        systems::movement::track_player(&mut self.registry, shield_origin);

        for id in systems::collision::find_blocked(&self.registry, &self.config.field) {
            self.destroy_threat(id, true);
        }

        if let Some(id) = systems::breach::first_breach(&self.registry, self.config.field.height) {
            self.destroy_threat(id, false);
            self.end_game();
        }
    }

    /// Remove an entity and announce it. False if it was already gone.
    fn remove_entity(&mut self, id: EntityId, cause: RemovalCause) -> bool {
        let Some(removed) = self.registry.remove(id) else {
            return false;
        };
        self.events.push(GameEvent::EntityRemoved {
            id,
            kind: removed.kind,
            position: removed.position,
            cause,
        });
        true
    }

    fn persist(&self, state: GameState) {
        if let Some(saver) = &self.saver {
            saver.submit(state);
        }
    }
}
