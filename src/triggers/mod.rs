//! Triggers module - overlap detection and the defeat/victory responses.

mod plugin;
mod systems;

pub use plugin::TriggerPlugin;
pub use systems::{detect_contacts, on_enemy_hit, on_goal_reached};
