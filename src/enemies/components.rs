//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for the patrolling enemy.
#[derive(Component)]
pub struct Enemy;

/// Marker for the enemy's overlap sensor - a child collider that detects
/// the player without producing a physical collision response.
#[derive(Component)]
pub struct EnemyContact;

/// Current patrol heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolDirection {
    Left,
    Right,
}

impl PatrolDirection {
    /// Sign of the heading on the x axis.
    pub fn sign(self) -> f32 {
        match self {
            PatrolDirection::Left => -1.0,
            PatrolDirection::Right => 1.0,
        }
    }
}

/// Two-point patrol around a fixed anchor.
///
/// The heading only changes at the distance thresholds. An elastic bounce
/// off a wall or platform can reverse the actual velocity without touching
/// it; the next threshold crossing resolves the mismatch.
#[derive(Component)]
pub struct Patrol {
    /// X coordinate the excursion is measured from (the spawn point)
    pub anchor_x: f32,
    /// Maximum excursion before the heading flips
    pub distance: f32,
    /// Horizontal patrol speed
    pub speed: f32,
    /// Current heading
    pub direction: PatrolDirection,
}
