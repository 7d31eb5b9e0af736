//! Player spawning, arrow-key control, and the fall check.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{GroundState, Player};
use crate::core::{GameTuning, RestartEvent};
use crate::world::layout;
use crate::world::SceneEntity;

/// Spawn the player body at its canonical spawn point.
///
/// The player is a velocity-driven dynamic body with a slight bounce. It
/// collides with world geometry and the trigger sensors, never physically
/// with the enemy body.
pub fn spawn_player(commands: &mut Commands, tuning: &GameTuning) -> Entity {
    commands
        .spawn((
            Player,
            GroundState::default(),
            SceneEntity,
            Sprite::from_color(Color::srgb(1.0, 0.0, 0.0), layout::PLAYER_SIZE),
            Transform::from_translation(layout::PLAYER_SPAWN.extend(0.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(layout::PLAYER_SIZE.x / 2.0, layout::PLAYER_SIZE.y / 2.0),
            Velocity::zero(),
            Restitution {
                coefficient: tuning.player_bounce,
                combine_rule: CoefficientCombineRule::Max,
            },
            // Arcade bodies slide freely
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            LockedAxes::ROTATION_LOCKED,
            CollisionGroups::new(
                layout::PLAYER_GROUP,
                layout::WORLD_GROUP | layout::TRIGGER_GROUP,
            ),
        ))
        .id()
}

/// Refresh the player's ground-contact flag.
///
/// A short downward ray cast from just inside the player's bottom edge,
/// restricted to world geometry so that overlapping a sensor or the enemy
/// never counts as standing on ground.
pub fn update_ground_contact(
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<(Entity, &Transform, &mut GroundState), With<Player>>,
) {
    let Ok((player_entity, transform, mut ground)) = player_query.get_single_mut() else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    // Start just above the bottom edge so a resting contact is still hit
    // when the solver leaves a small separation gap.
    let ray_origin =
        transform.translation.truncate() - Vec2::Y * (layout::PLAYER_SIZE.y / 2.0 - 2.0);
    let filter = QueryFilter::default()
        .exclude_collider(player_entity)
        .groups(CollisionGroups::new(
            layout::PLAYER_GROUP,
            layout::WORLD_GROUP,
        ));

    ground.grounded = context
        .cast_ray(ray_origin, Vec2::NEG_Y, 4.0, true, filter)
        .is_some();
}

/// Arrow-key control: horizontal run plus jump while grounded.
///
/// Left wins when both horizontal keys are held. The jump re-applies on
/// every frame the key is held while grounded; contact resolution reports
/// the ground once per landing, so the impulse cannot stack.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<GameTuning>,
    mut player_query: Query<(&mut Velocity, &GroundState), With<Player>>,
) {
    let Ok((mut velocity, ground)) = player_query.get_single_mut() else {
        return;
    };

    if keyboard.pressed(KeyCode::ArrowLeft) {
        velocity.linvel.x = -tuning.move_speed;
    } else if keyboard.pressed(KeyCode::ArrowRight) {
        velocity.linvel.x = tuning.move_speed;
    } else {
        velocity.linvel.x = 0.0;
    }

    if keyboard.pressed(KeyCode::ArrowUp) && ground.grounded {
        velocity.linvel.y = tuning.jump_speed;
    }
}

/// Request a full scene restart once the player has fallen out of view.
///
/// Repeated frames below the line still cause exactly one reconstruction,
/// because the restart puts the player back at its spawn point.
pub fn check_fall(
    player_query: Query<&Transform, With<Player>>,
    mut restarts: EventWriter<RestartEvent>,
) {
    let Ok(transform) = player_query.get_single() else {
        return;
    };

    if transform.translation.y < layout::FALL_LIMIT {
        info!("Player fell out of the play area; restarting");
        restarts.send(RestartEvent);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn control_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameTuning>()
            .add_systems(Update, player_movement);
        app
    }

    fn spawn_test_player(app: &mut App, grounded: bool) -> Entity {
        app.world_mut()
            .spawn((Player, GroundState { grounded }, Velocity::zero()))
            .id()
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        let mut input = ButtonInput::<KeyCode>::default();
        for &key in keys {
            input.press(key);
        }
        app.insert_resource(input);
    }

    #[rstest]
    #[case(&[KeyCode::ArrowLeft], -160.0)]
    #[case(&[KeyCode::ArrowRight], 160.0)]
    // Left wins when both are held.
    #[case(&[KeyCode::ArrowLeft, KeyCode::ArrowRight], -160.0)]
    #[case(&[], 0.0)]
    fn horizontal_control(#[case] keys: &[KeyCode], #[case] expected: f32) {
        let mut app = control_app();
        let player = spawn_test_player(&mut app, true);
        press(&mut app, keys);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel.x, expected);
    }

    #[test]
    fn jump_applies_impulse_while_grounded() {
        let mut app = control_app();
        let player = spawn_test_player(&mut app, true);
        press(&mut app, &[KeyCode::ArrowUp]);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel.y, 330.0);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let mut app = control_app();
        let player = spawn_test_player(&mut app, false);
        press(&mut app, &[KeyCode::ArrowUp]);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel.y, 0.0);
    }

    #[test]
    fn grounded_without_input_does_not_jump() {
        let mut app = control_app();
        let player = spawn_test_player(&mut app, true);
        press(&mut app, &[]);

        app.update();

        let velocity = app.world().get::<Velocity>(player).unwrap();
        assert_eq!(velocity.linvel.y, 0.0);
    }

    fn fall_app() -> App {
        let mut app = App::new();
        app.add_event::<RestartEvent>()
            .add_systems(Update, check_fall);
        app
    }

    #[test]
    fn falling_below_the_play_area_requests_a_restart() {
        let mut app = fall_app();
        app.world_mut()
            .spawn((Player, Transform::from_xyz(0.0, layout::FALL_LIMIT - 1.0, 0.0)));

        app.update();

        let restarts = app.world().resource::<Events<RestartEvent>>();
        assert_eq!(restarts.len(), 1);
    }

    #[test]
    fn players_inside_the_play_area_do_not_restart() {
        let mut app = fall_app();
        app.world_mut().spawn((Player, Transform::from_xyz(0.0, -250.0, 0.0)));

        app.update();

        let restarts = app.world().resource::<Events<RestartEvent>>();
        assert_eq!(restarts.len(), 0);
    }
}
