//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Physics-reported ground contact, refreshed every frame before the
/// movement update. Jumping is only allowed while `grounded` is true.
#[derive(Component, Default)]
pub struct GroundState {
    pub grounded: bool,
}
