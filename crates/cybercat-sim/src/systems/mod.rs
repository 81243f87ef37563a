//! Systems that operate on the entity registry each tick.
//!
//! Systems are plain functions over the registry. They do not own state and
//! they never remove entities themselves: they report ids and the controller
//! decides what removal means.

pub mod breach;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
