//! World plugin - scene construction and full reconstruction on restart.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::{
    tick_pending_restart, GameSet, GameState, GameTuning, PendingRestart, RestartEvent,
};
use crate::enemies::spawn_enemy;
use crate::player::spawn_player;

use super::spawning::{spawn_goal, spawn_platforms, spawn_world_bounds, SceneEntity};

/// World plugin - builds the scene at startup and rebuilds it wholesale
/// whenever a restart is requested.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            restart_scene
                .in_set(GameSet::Restart)
                .after(tick_pending_restart),
        );
    }
}

/// Build the initial scene.
fn setup_scene(mut commands: Commands, tuning: Res<GameTuning>) {
    build_scene(&mut commands, &tuning);
}

/// Construct the full entity set at its canonical initial state.
fn build_scene(commands: &mut Commands, tuning: &GameTuning) {
    info!("Building scene");
    spawn_platforms(commands);
    spawn_world_bounds(commands);
    spawn_player(commands, tuning);
    spawn_enemy(commands, tuning);
    spawn_goal(commands);
}

/// Tear the whole scene down and rebuild it from scratch.
///
/// Any pending delayed restart dies with the scene, and the physics
/// pipeline is switched back on in case a trigger paused it. Multiple
/// queued requests still rebuild only once.
pub fn restart_scene(
    mut commands: Commands,
    mut restarts: EventReader<RestartEvent>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GameState>>,
    mut configs: Query<&mut RapierConfiguration>,
    scene_query: Query<Entity, With<SceneEntity>>,
    tuning: Res<GameTuning>,
) {
    if restarts.read().last().is_none() {
        return;
    }

    for entity in scene_query.iter() {
        commands.entity(entity).despawn_recursive();
    }

    pending.clear();
    for mut config in configs.iter_mut() {
        config.physics_pipeline_active = true;
    }
    next_state.set(GameState::Playing);

    build_scene(&mut commands, &tuning);
}
