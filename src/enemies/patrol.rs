//! Enemy spawning and the two-point patrol.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, EnemyContact, Patrol, PatrolDirection};
use crate::core::GameTuning;
use crate::world::layout;
use crate::world::SceneEntity;

/// Spawn the patrolling enemy at its canonical spawn point.
///
/// The body itself is fully elastic and only collides with world geometry.
/// A same-shaped child sensor reports the player overlap to the trigger
/// systems.
pub fn spawn_enemy(commands: &mut Commands, tuning: &GameTuning) -> Entity {
    let direction = PatrolDirection::Right;

    commands
        .spawn((
            Enemy,
            Patrol {
                anchor_x: layout::ENEMY_SPAWN.x,
                distance: tuning.patrol_distance,
                speed: tuning.enemy_speed,
                direction,
            },
            SceneEntity,
            Sprite::from_color(Color::srgb(0.0, 0.0, 1.0), layout::ENEMY_SIZE),
            Transform::from_translation(layout::ENEMY_SPAWN.extend(0.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(layout::ENEMY_SIZE.x / 2.0, layout::ENEMY_SIZE.y / 2.0),
            Velocity::linear(Vec2::new(tuning.enemy_speed * direction.sign(), 0.0)),
            Restitution {
                coefficient: tuning.enemy_bounce,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            LockedAxes::ROTATION_LOCKED,
            CollisionGroups::new(layout::ENEMY_GROUP, layout::WORLD_GROUP),
        ))
        .with_children(|children| {
            children.spawn((
                EnemyContact,
                Transform::default(),
                Collider::cuboid(layout::ENEMY_SIZE.x / 2.0, layout::ENEMY_SIZE.y / 2.0),
                Sensor,
                ActiveEvents::COLLISION_EVENTS,
                CollisionGroups::new(layout::TRIGGER_GROUP, layout::PLAYER_GROUP),
            ));
        })
        .id()
}

/// Flip the patrol heading at the excursion thresholds.
///
/// The checks are position based, independent of whatever velocity the
/// physics step left on the body.
pub fn patrol(mut enemy_query: Query<(&Transform, &mut Velocity, &mut Patrol), With<Enemy>>) {
    for (transform, mut velocity, mut patrol) in enemy_query.iter_mut() {
        let x = transform.translation.x;

        match patrol.direction {
            PatrolDirection::Right if x >= patrol.anchor_x + patrol.distance => {
                velocity.linvel.x = -patrol.speed;
                patrol.direction = PatrolDirection::Left;
            }
            PatrolDirection::Left if x <= patrol.anchor_x - patrol.distance => {
                velocity.linvel.x = patrol.speed;
                patrol.direction = PatrolDirection::Right;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ANCHOR: f32 = 200.0;
    const DISTANCE: f32 = 100.0;
    const SPEED: f32 = 100.0;

    fn patrol_app() -> App {
        let mut app = App::new();
        app.add_systems(Update, patrol);
        app
    }

    fn spawn_patroller(app: &mut App, x: f32, direction: PatrolDirection) -> Entity {
        let velocity = Velocity::linear(Vec2::new(SPEED * direction.sign(), 0.0));
        app.world_mut()
            .spawn((
                Enemy,
                Transform::from_xyz(x, -50.0, 0.0),
                velocity,
                Patrol {
                    anchor_x: ANCHOR,
                    distance: DISTANCE,
                    speed: SPEED,
                    direction,
                },
            ))
            .id()
    }

    #[rstest]
    // Exactly at the right threshold, and overshot past it.
    #[case(ANCHOR + DISTANCE, PatrolDirection::Right, -SPEED, PatrolDirection::Left)]
    #[case(ANCHOR + DISTANCE + 7.0, PatrolDirection::Right, -SPEED, PatrolDirection::Left)]
    // Exactly at the left threshold, and overshot past it.
    #[case(ANCHOR - DISTANCE, PatrolDirection::Left, SPEED, PatrolDirection::Right)]
    #[case(ANCHOR - DISTANCE - 7.0, PatrolDirection::Left, SPEED, PatrolDirection::Right)]
    fn heading_flips_at_the_thresholds(
        #[case] x: f32,
        #[case] start: PatrolDirection,
        #[case] expected_vx: f32,
        #[case] expected_direction: PatrolDirection,
    ) {
        let mut app = patrol_app();
        let enemy = spawn_patroller(&mut app, x, start);

        app.update();

        let velocity = app.world().get::<Velocity>(enemy).unwrap();
        let state = app.world().get::<Patrol>(enemy).unwrap();
        assert_eq!(velocity.linvel.x, expected_vx);
        assert_eq!(state.direction, expected_direction);
    }

    #[rstest]
    #[case(ANCHOR, PatrolDirection::Right)]
    #[case(ANCHOR + DISTANCE - 1.0, PatrolDirection::Right)]
    #[case(ANCHOR - DISTANCE + 1.0, PatrolDirection::Left)]
    // The right threshold does not affect a left-heading patrol.
    #[case(ANCHOR + DISTANCE, PatrolDirection::Left)]
    fn heading_is_stable_inside_the_band(#[case] x: f32, #[case] direction: PatrolDirection) {
        let mut app = patrol_app();
        let enemy = spawn_patroller(&mut app, x, direction);

        app.update();

        let velocity = app.world().get::<Velocity>(enemy).unwrap();
        let state = app.world().get::<Patrol>(enemy).unwrap();
        assert_eq!(velocity.linvel.x, SPEED * direction.sign());
        assert_eq!(state.direction, direction);
    }

    #[test]
    fn external_bounces_leave_the_heading_untouched() {
        // An elastic bounce can reverse the velocity mid-band; the stored
        // heading keeps its value until a threshold crossing.
        let mut app = patrol_app();
        let enemy = spawn_patroller(&mut app, ANCHOR + 10.0, PatrolDirection::Right);
        app.world_mut().get_mut::<Velocity>(enemy).unwrap().linvel.x = -SPEED;

        app.update();

        let velocity = app.world().get::<Velocity>(enemy).unwrap();
        let state = app.world().get::<Patrol>(enemy).unwrap();
        assert_eq!(velocity.linvel.x, -SPEED);
        assert_eq!(state.direction, PatrolDirection::Right);
    }
}
