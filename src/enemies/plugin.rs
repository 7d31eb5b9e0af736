//! Enemy plugin - registers the patrol system.

use bevy::prelude::*;

use super::patrol;
use crate::core::GameSet;

/// Enemy plugin - drives the two-point patrol.
///
/// Spawning is driven by the world plugin as part of scene construction.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, patrol::patrol.in_set(GameSet::Patrol));
    }
}
