//! World module - scene layout, static geometry, and the scene lifecycle.

pub mod layout;
mod plugin;
mod spawning;

pub use plugin::{restart_scene, WorldPlugin};
pub use spawning::{
    spawn_goal, spawn_platforms, spawn_world_bounds, Bound, Goal, Platform, SceneEntity,
};
