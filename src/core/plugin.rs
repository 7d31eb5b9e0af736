//! Core plugin that sets up game state, events, and frame ordering.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::events::*;
use super::restart::{tick_pending_restart, PendingRestart};
use super::states::GameState;
use super::tuning::{load_tuning, GameTuning};

/// Per-frame ordering of game logic.
///
/// `Control`, `Patrol`, and `Status` only run during active gameplay.
/// `Restart` always runs: the physics pause does not pause timers, so a
/// pending restart must keep ticking while the scene is frozen.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Ground contact and player input
    Control,
    /// Enemy patrol updates
    Patrol,
    /// Overlap triggers and the fall check
    Status,
    /// Restart timer and scene reconstruction
    Restart,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game state (Playing, Defeated, Won)
/// - Global events (EnemyHitEvent, GoalReachedEvent, RestartEvent)
/// - The chained system sets all gameplay systems slot into
/// - Tuning, camera, and gravity configuration
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game state
            .init_state::<GameState>()

            // Register global events
            .add_event::<EnemyHitEvent>()
            .add_event::<GoalReachedEvent>()
            .add_event::<RestartEvent>()

            .init_resource::<PendingRestart>()

            // Fixed per-frame order; only Restart runs while frozen
            .configure_sets(
                Update,
                (
                    GameSet::Control,
                    GameSet::Patrol,
                    GameSet::Status,
                    GameSet::Restart,
                )
                    .chain(),
            )
            .configure_sets(Update, GameSet::Control.run_if(in_state(GameState::Playing)))
            .configure_sets(Update, GameSet::Patrol.run_if(in_state(GameState::Playing)))
            .configure_sets(Update, GameSet::Status.run_if(in_state(GameState::Playing)))

            // Tuning must exist before the scene is built in Startup
            .add_systems(PreStartup, load_tuning)
            .add_systems(Startup, spawn_camera)
            .add_systems(PostStartup, configure_gravity)

            .add_systems(Update, tick_pending_restart.in_set(GameSet::Restart));
    }
}

/// Camera covering the 800x600 play area, one world unit per pixel.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Write the configured gravity into the physics context.
///
/// Runs in PostStartup so the default Rapier context exists.
fn configure_gravity(tuning: Res<GameTuning>, mut configs: Query<&mut RapierConfiguration>) {
    for mut config in configs.iter_mut() {
        config.gravity = Vec2::new(0.0, -tuning.gravity);
    }
}
