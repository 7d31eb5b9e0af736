//! Gameplay tuning loaded from an external RON file.
//!
//! Allows tweaking speeds, gravity, and restart delays without
//! recompilation. Scene geometry stays in [`crate::world::layout`].

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Default location of the tuning override file.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Gameplay tuning loaded from assets/data/tuning.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct GameTuning {
    /// Downward gravity in units per second squared
    pub gravity: f32,
    /// Horizontal run speed
    pub move_speed: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Player restitution against platforms
    pub player_bounce: f32,
    /// Horizontal patrol speed
    pub enemy_speed: f32,
    /// Enemy restitution (1.0 = fully elastic)
    pub enemy_bounce: f32,
    /// Excursion from the spawn point before the enemy turns around
    pub patrol_distance: f32,
    /// Seconds between touching the enemy and the restart
    pub defeat_restart_delay: f32,
    /// Seconds the win banner stays up before the restart
    pub victory_restart_delay: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            gravity: 300.0,
            move_speed: 160.0,
            jump_speed: 330.0,
            player_bounce: 0.2,
            enemy_speed: 100.0,
            enemy_bounce: 1.0,
            patrol_distance: 100.0,
            defeat_restart_delay: 1.0,
            victory_restart_delay: 2.0,
        }
    }
}

/// Errors that can occur when loading the tuning file.
#[derive(Debug, Error)]
pub enum TuningError {
    /// File could not be read.
    #[error("failed to read '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("failed to parse '{path}': {details}")]
    Parse { path: String, details: String },
}

impl GameTuning {
    /// Parse tuning values from a RON file.
    pub fn from_file(path: &str) -> Result<Self, TuningError> {
        let contents = fs::read_to_string(path).map_err(|e| TuningError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        ron::from_str(&contents).map_err(|e| TuningError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Load tuning from the default path, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_file(TUNING_PATH) {
            Ok(tuning) => {
                info!("Loaded tuning from {}", TUNING_PATH);
                tuning
            }
            Err(err @ TuningError::Read { .. }) => {
                warn!("{}. Using defaults.", err);
                Self::default()
            }
            Err(err @ TuningError::Parse { .. }) => {
                error!("{}. Using defaults.", err);
                Self::default()
            }
        }
    }
}

/// System to load tuning at startup.
pub fn load_tuning(mut commands: Commands) {
    commands.insert_resource(GameTuning::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_canonical_constants() {
        let tuning = GameTuning::default();
        assert_eq!(tuning.gravity, 300.0);
        assert_eq!(tuning.move_speed, 160.0);
        assert_eq!(tuning.jump_speed, 330.0);
        assert_eq!(tuning.enemy_speed, 100.0);
        assert_eq!(tuning.patrol_distance, 100.0);
        assert_eq!(tuning.defeat_restart_delay, 1.0);
        assert_eq!(tuning.victory_restart_delay, 2.0);
    }

    #[test]
    fn parses_a_full_ron_document() {
        let tuning: GameTuning = ron::from_str(
            "(gravity: 250.0, move_speed: 100.0, jump_speed: 300.0, player_bounce: 0.0, \
             enemy_speed: 80.0, enemy_bounce: 0.5, patrol_distance: 50.0, \
             defeat_restart_delay: 0.5, victory_restart_delay: 1.5)",
        )
        .unwrap();
        assert_eq!(tuning.gravity, 250.0);
        assert_eq!(tuning.enemy_speed, 80.0);
        assert_eq!(tuning.patrol_distance, 50.0);
    }

    #[test]
    fn missing_file_reports_a_read_error() {
        let err = GameTuning::from_file("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, TuningError::Read { .. }));
    }

    #[test]
    fn non_ron_content_reports_a_parse_error() {
        // Any readable file that is not a tuning document will do.
        let err = GameTuning::from_file("Cargo.toml").unwrap_err();
        assert!(matches!(err, TuningError::Parse { .. }));
    }
}
