//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The trigger systems
//! translate raw physics overlaps into these gameplay events, and the
//! responses (freeze, tint, banner, restart) each listen independently.

use bevy::prelude::*;

/// Sent when the player overlaps the patrolling enemy.
#[derive(Event)]
pub struct EnemyHitEvent {
    /// The player entity
    pub player: Entity,
    /// The enemy that was touched
    pub enemy: Entity,
}

/// Sent when the player overlaps the goal trigger.
#[derive(Event)]
pub struct GoalReachedEvent {
    /// The player entity
    pub player: Entity,
    /// The goal entity
    pub goal: Entity,
}

/// Requests a full scene reconstruction.
///
/// Sent immediately when the player falls out of the play area, or by the
/// restart timer once a defeat/victory delay has elapsed.
#[derive(Event)]
pub struct RestartEvent;
