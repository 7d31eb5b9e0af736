//! Rect Runner - Entry Point
//!
//! A minimal arcade platformer rendered entirely with colored rectangles.
//!
//! Controls:
//! - Left/Right arrows: run
//! - Up arrow: jump (while standing on ground)

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rect Runner".to_string(),
                resolution: (800.0, 600.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))

        // Our game plugin
        .add_plugins(rect_runner::PlatformerPlugin)

        .run();
}
