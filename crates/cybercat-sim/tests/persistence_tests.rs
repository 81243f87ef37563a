use cybercat_core::commands::PlayerCommand;
use cybercat_core::config::GameConfig;
use cybercat_core::enums::GamePhase;
use cybercat_core::state::GameState;
use cybercat_sim::persistence::MemoryStore;
use cybercat_sim::{GameController, SetupError, SimConfig};

fn scripted_config() -> SimConfig {
    let mut game = GameConfig::default();
    game.spawn_interval_ms = 10_000_000;
    game.field.threat_spawn_y = 400.0;
    SimConfig { seed: 1, game }
}

fn saved(score: u64, level: u32) -> GameState {
    GameState {
        score,
        coins: score / 10,
        xp: 40,
        level,
        threat_speed: 7.0,
        running: true,
    }
}

#[test]
fn resumes_progress_but_not_speed() {
    let store = MemoryStore::with_progress(saved(300, 3));
    let controller = GameController::with_store(scripted_config(), Box::new(store)).unwrap();

    let state = controller.state();
    assert_eq!(state.score, 300);
    assert_eq!(state.coins, 30);
    assert_eq!(state.xp, 40);
    assert_eq!(state.level, 3);
    assert_eq!(state.threat_speed, 2.0);
}

#[test]
fn saves_after_each_block_and_at_game_over() {
    let store = MemoryStore::new();
    let mut controller = GameController::with_store(scripted_config(), Box::new(store.clone())).unwrap();

    controller.queue_command(PlayerCommand::StartGame);
    controller.advance(0);
    controller.pointer_activated(0.0, 0.0).unwrap();
    controller.spawn_threat_at(380.0).unwrap();
    controller.advance(16 * 15);
    controller.spawn_threat_at(380.0).unwrap();
    controller.advance(16 * 15);

    controller.queue_command(PlayerCommand::EndGame);
    let snap = controller.advance(0);
    assert_eq!(snap.phase, GamePhase::GameOver);

    // Dropping the controller drops the saver, which flushes the queue.
    drop(controller);

    let history = store.history();
    let scores: Vec<u64> = history.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![10, 20, 20]);
    assert!(history[0].running);
    assert!(!history[2].running);
    assert_eq!(store.latest().map(|s| s.coins), Some(2));
}

#[test]
fn failing_store_does_not_disturb_the_game() {
    let store = MemoryStore::with_progress(saved(50, 2));
    store.set_failing(true);
    let mut controller = GameController::with_store(scripted_config(), Box::new(store.clone())).unwrap();

    // Load failed, so the game starts fresh.
    assert_eq!(controller.state().score, 0);

    controller.start();
    controller.pointer_activated(0.0, 0.0).unwrap();
    controller.spawn_threat_at(380.0).unwrap();
    let snap = controller.advance(16 * 15);
    assert_eq!(snap.state.score, 10);
    assert_eq!(snap.phase, GamePhase::Running);

    drop(controller);
    assert!(store.history().is_empty());
}

#[test]
fn level_up_state_is_saved() {
    let store = MemoryStore::with_progress(GameState {
        xp: 95,
        ..GameState::default()
    });
    let mut controller = GameController::with_store(scripted_config(), Box::new(store.clone())).unwrap();

    controller.start();
    controller.pointer_activated(0.0, 0.0).unwrap();
    controller.spawn_threat_at(380.0).unwrap();
    controller.advance(16 * 15);
    drop(controller);

    let latest = store.latest().unwrap();
    assert_eq!(latest.level, 2);
    assert_eq!(latest.xp, 0);
    assert!((latest.threat_speed - 2.1).abs() < 1e-12);
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let store = MemoryStore::with_progress(saved(300, 3));
    let mut config = scripted_config();
    config.game.update_interval_ms = 0;

    let result = GameController::with_store(config, Box::new(store.clone()));
    assert!(matches!(result, Err(SetupError::Config(_))));
    assert!(store.history().is_empty());
}
