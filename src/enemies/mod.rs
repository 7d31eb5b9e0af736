//! Enemies module - the two-point patrol enemy.

mod components;
mod patrol;
mod plugin;

pub use components::*;
pub use patrol::{patrol, spawn_enemy};
pub use plugin::EnemyPlugin;
