//! Score ledger: score, currency, experience, level and threat speed.

use cybercat_core::config::{GameConfig, LevelCurve};
use cybercat_core::state::GameState;

#[derive(Debug, Clone)]
pub struct ScoreLedger {
    score: u64,
    coins: u64,
    xp: u32,
    level: u32,
    threat_speed: f64,
    curve: LevelCurve,
    speed_increase: f64,
}

impl ScoreLedger {
    /// Fresh ledger at level 1 with the configured starting speed.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            coins: 0,
            xp: 0,
            level: 1,
            threat_speed: config.initial_threat_speed,
            curve: config.level_curve,
            speed_increase: config.speed_increase,
        }
    }

    /// Resume score, coins, xp and level from a saved record. Speed always
    /// restarts from the configured default.
    pub fn resume(config: &GameConfig, saved: &GameState) -> Self {
        Self {
            score: saved.score,
            coins: saved.coins,
            xp: saved.xp,
            level: saved.level.max(1),
            ..Self::new(config)
        }
    }

    pub fn apply_reward(&mut self, points: u32, coins: u32, xp: u32) {
        self.score = self.score.saturating_add(u64::from(points));
        self.coins = self.coins.saturating_add(u64::from(coins));
        self.xp = self.xp.saturating_add(xp);
    }

    /// At most one level per call, however far xp overshoots.
    pub fn evaluate_level_up(&mut self) -> bool {
        if self.xp < self.level_up_threshold() {
            return false;
        }
        self.level += 1;
        self.xp = 0;
        self.threat_speed += self.speed_increase;
        true
    }

    pub fn level_up_threshold(&self) -> u32 {
        self.curve.threshold(self.level)
    }

    pub fn snapshot(&self, running: bool) -> GameState {
        GameState {
            score: self.score,
            coins: self.coins,
            xp: self.xp,
            level: self.level,
            threat_speed: self.threat_speed,
            running,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn threat_speed(&self) -> f64 {
        self.threat_speed
    }
}
