//! Core types and definitions for the CYBERCAT defense mini-game.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, configuration, geometry, events, state snapshots
//! and constants. It has no dependency on any runtime or rendering layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
