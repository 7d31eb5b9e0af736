//! Rect Runner - a minimal arcade platformer in Bevy.
//!
//! One scene: a red player rectangle, green platforms, a blue patrolling
//! enemy, and a yellow goal. Touch the enemy and the scene restarts; reach
//! the goal and a win banner shows before the restart. All physics
//! (gravity, collision resolution, bounce) is delegated to Rapier.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: game state, global events, restart scheduling, tuning
//! - **Player**: spawning, arrow-key control, ground contact, fall check
//! - **Enemies**: the two-point patrol enemy
//! - **World**: scene layout, platforms, boundary walls, the goal, and
//!   full scene reconstruction on restart
//! - **Triggers**: overlap detection and the defeat/victory responses
//! - **UI**: the win banner

pub mod core;
pub mod enemies;
pub mod player;
pub mod triggers;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Trigger systems
            .add_plugins(triggers::TriggerPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
