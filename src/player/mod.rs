//! Player module - spawning, arrow-key control, and the fall check.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{check_fall, player_movement, spawn_player, update_ground_contact};
pub use plugin::PlayerPlugin;
