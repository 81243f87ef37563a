//! Persistence boundary: progress stores and the background saver.
//!
//! Saves are fire-and-forget. The controller hands a `GameState` to the
//! `BackgroundSaver`, whose worker thread talks to the store; a slow or
//! failing store never delays a tick.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use cybercat_core::state::GameState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("progress record could not be encoded: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("progress store unavailable: {0}")]
    Unavailable(String),
}

/// External home for score, coins, xp and level.
pub trait ProgressStore: Send {
    /// Saved progress, if any.
    fn load(&mut self) -> Result<Option<GameState>, StoreError>;

    fn save(&mut self, state: &GameState) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    saved: Option<GameState>,
    history: Vec<GameState>,
    failing: bool,
}

/// In-process store. Clones share the same record, so a host can keep one
/// handle while the saver thread owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a previous session's progress.
    pub fn with_progress(state: GameState) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            inner.saved = Some(state);
        }
        store
    }

    /// Make every subsequent save (and load) fail.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failing = failing;
        }
    }

    /// Every successful save, oldest first.
    pub fn history(&self) -> Vec<GameState> {
        self.inner
            .lock()
            .map(|inner| inner.history.clone())
            .unwrap_or_default()
    }

    pub fn latest(&self) -> Option<GameState> {
        self.inner.lock().ok().and_then(|inner| inner.saved)
    }
}

impl ProgressStore for MemoryStore {
    fn load(&mut self) -> Result<Option<GameState>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if inner.failing {
            return Err(StoreError::Unavailable("memory store marked failing".into()));
        }
        Ok(inner.saved)
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if inner.failing {
            return Err(StoreError::Unavailable("memory store marked failing".into()));
        }
        inner.saved = Some(*state);
        inner.history.push(*state);
        Ok(())
    }
}

/// Worker thread that forwards submitted states to a store.
///
/// Dropping the saver closes the channel and waits for queued writes.
pub struct BackgroundSaver {
    tx: Option<mpsc::Sender<GameState>>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundSaver {
    pub fn spawn(mut store: Box<dyn ProgressStore>) -> Result<Self, StoreError> {
        let (tx, rx) = mpsc::channel::<GameState>();

        let handle = thread::Builder::new()
            .name("cybercat-saver".into())
            .spawn(move || {
                for state in rx {
                    match store.save(&state) {
                        Ok(()) => log::debug!(
                            "saved progress: score {} level {}",
                            state.score,
                            state.level
                        ),
                        Err(e) => log::warn!("failed to save progress: {e}"),
                    }
                }
            })?;

        Ok(Self {
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    /// Queue a state for saving. Never blocks.
    pub fn submit(&self, state: GameState) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(state).is_err() {
            log::warn!("progress saver has stopped; dropping save");
        }
    }
}

impl Drop for BackgroundSaver {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("progress saver thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(score: u64) -> GameState {
        GameState {
            score,
            ..GameState::default()
        }
    }

    #[test]
    fn test_saver_flushes_on_drop() {
        let store = MemoryStore::new();
        let saver = BackgroundSaver::spawn(Box::new(store.clone())).unwrap();
        for score in [10, 20, 30] {
            saver.submit(state(score));
        }
        drop(saver);

        let scores: Vec<u64> = store.history().iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![10, 20, 30]);
        assert_eq!(store.latest().map(|s| s.score), Some(30));
    }

    #[test]
    fn test_failing_store_is_swallowed() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let saver = BackgroundSaver::spawn(Box::new(store.clone())).unwrap();
        saver.submit(state(10));
        drop(saver);

        assert!(store.history().is_empty());
        let mut handle = store.clone();
        assert!(matches!(handle.load(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_seeded_store_loads() {
        let mut store = MemoryStore::with_progress(state(70));
        assert_eq!(store.load().unwrap().map(|s| s.score), Some(70));
    }
}
