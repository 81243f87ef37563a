//! Simulation engine for CYBERCAT.
//!
//! Owns the entity registry, score ledger and game clock, runs the update
//! and spawn tasks on an injectable scheduler, and produces `SimSnapshot`s
//! for the presentation layer.

pub mod clock;
pub mod engine;
pub mod ledger;
pub mod persistence;
pub mod registry;
pub mod scheduler;
pub mod systems;

pub use engine::{GameController, SetupError, SimConfig};
