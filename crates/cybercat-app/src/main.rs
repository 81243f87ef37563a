//! Headless CYBERCAT runner: plays one game in real time and prints the
//! final progress.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use cybercat_app::autopilot;
use cybercat_app::game_loop::spawn_game_loop;
use cybercat_app::store::JsonFileStore;
use cybercat_core::commands::PlayerCommand;
use cybercat_core::config::GameConfig;
use cybercat_sim::{GameController, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "cybercat", about = "Shield the player from falling threats")]
struct Args {
    /// Seed for threat spawn columns.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file overriding game tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Progress file, resumed on start and saved as the game goes.
    #[arg(long, default_value = "cybercat-save.json")]
    save: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,

    /// Stop after this many seconds even if the game is still running.
    #[arg(long, default_value_t = 60)]
    max_secs: u64,

    /// Do not raise shields automatically.
    #[arg(long)]
    no_autopilot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, level)
            .with_context(|| format!("opening log file {}", path.display()))?,
        None => simple_logging::log_to_stderr(level),
    }

    let game = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    let config = SimConfig { seed: args.seed, game };
    let game = config.game.clone();

    let store = JsonFileStore::new(&args.save);
    let controller =
        GameController::with_store(config, Box::new(store)).context("setting up the game")?;

    let handle = spawn_game_loop(controller, Arc::new(Mutex::new(None))).context("spawning game loop")?;
    handle.send(PlayerCommand::StartGame);
    log::info!("cybercat running (seed {}, save {})", args.seed, args.save.display());

    let deadline = Instant::now() + Duration::from_secs(args.max_secs);
    let mut last_tick = None;
    while !handle.is_finished() && Instant::now() < deadline {
        if !args.no_autopilot {
            if let Some(snapshot) = handle.latest() {
                // One decision per simulated tick.
                if last_tick != Some(snapshot.time.tick) {
                    last_tick = Some(snapshot.time.tick);
                    if let Some(tap) = autopilot::next_tap(&snapshot, &game) {
                        handle.send(tap);
                    }
                }
            }
        }
        std::thread::sleep(Duration::from_millis(game.update_interval_ms.max(1)));
    }

    if !handle.is_finished() {
        log::info!("time limit reached, ending game");
        handle.send(PlayerCommand::EndGame);
        // Let the loop process the end so the final state gets saved.
        let stop = Instant::now() + Duration::from_secs(1);
        while !handle.is_finished() && Instant::now() < stop {
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    let state = handle
        .shutdown()
        .context("game loop thread panicked")?;
    println!(
        "score {} | coins {} | xp {} | level {}",
        state.score, state.coins, state.xp, state.level
    );
    Ok(())
}
