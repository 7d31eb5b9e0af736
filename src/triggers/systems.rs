//! Overlap classification and the enemy-hit / goal-reached responses.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::{EnemyHitEvent, GameState, GameTuning, GoalReachedEvent, PendingRestart};
use crate::enemies::EnemyContact;
use crate::player::Player;
use crate::world::Goal;

/// Translate raw collision events into gameplay events.
///
/// Only sensor pairs involving the player matter: the enemy's contact
/// sensor resolves to its owning enemy body, the goal is its own sensor.
pub fn detect_contacts(
    mut collisions: EventReader<CollisionEvent>,
    player_query: Query<(), With<Player>>,
    contact_query: Query<&Parent, With<EnemyContact>>,
    goal_query: Query<(), With<Goal>>,
    mut enemy_hits: EventWriter<EnemyHitEvent>,
    mut goals_reached: EventWriter<GoalReachedEvent>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        for (player, other) in [(*a, *b), (*b, *a)] {
            if player_query.get(player).is_err() {
                continue;
            }
            if let Ok(parent) = contact_query.get(other) {
                enemy_hits.send(EnemyHitEvent {
                    player,
                    enemy: parent.get(),
                });
            } else if goal_query.get(other).is_ok() {
                goals_reached.send(GoalReachedEvent {
                    player,
                    goal: other,
                });
            }
        }
    }
}

/// Freeze the scene after touching the enemy.
///
/// Pauses the physics pipeline, tints the player red, and schedules the
/// restart. The pending timer keeps ticking while the scene is frozen.
pub fn on_enemy_hit(
    mut events: EventReader<EnemyHitEvent>,
    tuning: Res<GameTuning>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GameState>>,
    mut configs: Query<&mut RapierConfiguration>,
    mut player_query: Query<&mut Sprite, With<Player>>,
) {
    if events.read().last().is_none() {
        return;
    }

    for mut config in configs.iter_mut() {
        config.physics_pipeline_active = false;
    }
    if let Ok(mut sprite) = player_query.get_single_mut() {
        sprite.color = Color::srgb(1.0, 0.0, 0.0);
    }
    pending.schedule(tuning.defeat_restart_delay);
    next_state.set(GameState::Defeated);
    info!("Player hit the enemy; restarting shortly");
}

/// Freeze the scene after reaching the goal.
///
/// Pauses the physics pipeline, tints the player green, removes the goal
/// (body and visual together), and schedules the restart. The win banner
/// is spawned by the UI systems from the same event.
pub fn on_goal_reached(
    mut commands: Commands,
    mut events: EventReader<GoalReachedEvent>,
    tuning: Res<GameTuning>,
    mut pending: ResMut<PendingRestart>,
    mut next_state: ResMut<NextState<GameState>>,
    mut configs: Query<&mut RapierConfiguration>,
    mut player_query: Query<&mut Sprite, With<Player>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for mut config in configs.iter_mut() {
        config.physics_pipeline_active = false;
    }
    if let Ok(mut sprite) = player_query.get_single_mut() {
        sprite.color = Color::srgb(0.0, 1.0, 0.0);
    }
    if let Some(goal) = commands.get_entity(event.goal) {
        goal.despawn_recursive();
    }
    pending.schedule(tuning.victory_restart_delay);
    next_state.set(GameState::Won);
    info!("Goal reached; player wins");
}
