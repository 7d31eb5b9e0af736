//! Trigger plugin - registers overlap detection and the responses.

use bevy::prelude::*;

use super::systems;
use crate::core::GameSet;

/// Trigger plugin - overlap classification plus the defeat and victory
/// responses, in a fixed order so both fire on the frame of the contact.
pub struct TriggerPlugin;

impl Plugin for TriggerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::detect_contacts,
                systems::on_enemy_hit,
                systems::on_goal_reached,
            )
                .chain()
                .in_set(GameSet::Status),
        );
    }
}
