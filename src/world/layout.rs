//! Fixed scene geometry and collision-group assignments.
//!
//! The play area is 800x600 world units centered on the origin, one unit
//! per pixel, y up. Everything here is a compile-time constant; runtime
//! tuning lives in [`crate::core::GameTuning`].

use bevy::prelude::*;
use bevy_rapier2d::prelude::Group;

/// Width of the visible play area.
pub const WORLD_WIDTH: f32 = 800.0;
/// Height of the visible play area.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Thickness of the invisible boundary walls.
pub const WALL_THICKNESS: f32 = 20.0;

/// Static geometry: platforms and boundary walls.
pub const WORLD_GROUP: Group = Group::GROUP_1;
/// The player body.
pub const PLAYER_GROUP: Group = Group::GROUP_2;
/// The enemy body.
pub const ENEMY_GROUP: Group = Group::GROUP_3;
/// Overlap sensors: the goal and the enemy contact sensor.
pub const TRIGGER_GROUP: Group = Group::GROUP_4;

/// A static platform: center position and half extents.
pub struct PlatformSpec {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// The ground plus the three elevated platforms.
pub const PLATFORMS: [PlatformSpec; 4] = [
    // Ground spanning the full width
    PlatformSpec {
        center: Vec2::new(0.0, -280.0),
        half_extents: Vec2::new(400.0, 10.0),
    },
    // Mid platform the enemy patrols on
    PlatformSpec {
        center: Vec2::new(200.0, -100.0),
        half_extents: Vec2::new(80.0, 8.0),
    },
    // Upper-left ledge
    PlatformSpec {
        center: Vec2::new(-350.0, 50.0),
        half_extents: Vec2::new(48.0, 8.0),
    },
    // Upper-right platform holding the goal
    PlatformSpec {
        center: Vec2::new(350.0, 80.0),
        half_extents: Vec2::new(64.0, 8.0),
    },
];

pub const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -150.0);
pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);

pub const ENEMY_SPAWN: Vec2 = Vec2::new(200.0, -50.0);
pub const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 32.0);

pub const GOAL_POSITION: Vec2 = Vec2::new(350.0, 120.0);
pub const GOAL_SIZE: Vec2 = Vec2::new(40.0, 40.0);

/// A player whose center drops below this line has fully left the play
/// area and triggers a restart.
pub const FALL_LIMIT: f32 = -(WORLD_HEIGHT / 2.0 + PLAYER_SIZE.y);
