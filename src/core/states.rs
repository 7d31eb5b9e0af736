//! Game state definitions that control the scene lifecycle.

use bevy::prelude::*;

/// Scene-level game states.
///
/// The scene loops through these states:
/// - `Playing` is active gameplay
/// - `Defeated` freezes the scene after touching the enemy
/// - `Won` freezes the scene after reaching the goal
///
/// Both terminal states leave a delayed restart pending; the restart tears
/// the scene down, rebuilds it, and returns to `Playing`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay
    #[default]
    Playing,
    /// Player touched the enemy; physics paused, restart pending
    Defeated,
    /// Player reached the goal; physics paused, restart pending
    Won,
}
