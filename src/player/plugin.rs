//! Player plugin - control and fall-check systems.

use bevy::prelude::*;

use super::movement;
use crate::core::GameSet;

/// Player plugin - handles arrow-key control and the fall check.
///
/// Spawning is driven by the world plugin as part of scene construction.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (movement::update_ground_contact, movement::player_movement)
                .chain()
                .in_set(GameSet::Control),
        )
        .add_systems(Update, movement::check_fall.in_set(GameSet::Status));
    }
}
