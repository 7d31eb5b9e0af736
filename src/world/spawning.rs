//! Entity spawning for the static scene: platforms, bounds, and the goal.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::layout;

/// Marker for everything that is torn down and rebuilt on restart.
#[derive(Component)]
pub struct SceneEntity;

/// Marker for a static platform.
#[derive(Component)]
pub struct Platform;

/// Marker for an invisible boundary wall.
#[derive(Component)]
pub struct Bound;

/// Marker for the goal trigger.
#[derive(Component)]
pub struct Goal;

/// Spawn the ground and the elevated platforms.
pub fn spawn_platforms(commands: &mut Commands) {
    for spec in &layout::PLATFORMS {
        commands.spawn((
            Platform,
            SceneEntity,
            Sprite::from_color(Color::srgb(0.0, 1.0, 0.0), spec.half_extents * 2.0),
            Transform::from_translation(spec.center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(spec.half_extents.x, spec.half_extents.y),
            CollisionGroups::new(
                layout::WORLD_GROUP,
                layout::PLAYER_GROUP | layout::ENEMY_GROUP,
            ),
        ));
    }
}

/// Spawn the four invisible walls that keep bodies inside the play area.
pub fn spawn_world_bounds(commands: &mut Commands) {
    let half_w = layout::WORLD_WIDTH / 2.0;
    let half_h = layout::WORLD_HEIGHT / 2.0;
    let half_t = layout::WALL_THICKNESS / 2.0;

    // Extend the horizontal walls past the corners so nothing slips
    // through where the walls meet.
    let walls = [
        // Floor and ceiling
        (
            Vec2::new(0.0, -half_h - half_t),
            Vec2::new(half_w + layout::WALL_THICKNESS, half_t),
        ),
        (
            Vec2::new(0.0, half_h + half_t),
            Vec2::new(half_w + layout::WALL_THICKNESS, half_t),
        ),
        // Left and right walls
        (
            Vec2::new(-half_w - half_t, 0.0),
            Vec2::new(half_t, half_h + layout::WALL_THICKNESS),
        ),
        (
            Vec2::new(half_w + half_t, 0.0),
            Vec2::new(half_t, half_h + layout::WALL_THICKNESS),
        ),
    ];

    for (center, half_extents) in walls {
        commands.spawn((
            Bound,
            SceneEntity,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(
                layout::WORLD_GROUP,
                layout::PLAYER_GROUP | layout::ENEMY_GROUP,
            ),
        ));
    }
}

/// Spawn the goal trigger: an immovable sensor with no physical response.
pub fn spawn_goal(commands: &mut Commands) {
    commands.spawn((
        Goal,
        SceneEntity,
        Sprite::from_color(Color::srgb(1.0, 1.0, 0.0), layout::GOAL_SIZE),
        Transform::from_translation(layout::GOAL_POSITION.extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(layout::GOAL_SIZE.x / 2.0, layout::GOAL_SIZE.y / 2.0),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        CollisionGroups::new(layout::TRIGGER_GROUP, layout::PLAYER_GROUP),
    ));
}
