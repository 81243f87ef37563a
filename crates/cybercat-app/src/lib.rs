//! CYBERCAT headless host.
//!
//! Wires the simulation to a real-time game loop thread, a JSON progress
//! file and a demo input source.

pub mod autopilot;
pub mod game_loop;
pub mod state;
pub mod store;

