//! Core game module - state, events, restart scheduling, and tuning.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod restart;
mod states;
mod tuning;

pub use events::*;
pub use plugin::{CorePlugin, GameSet};
pub use restart::{tick_pending_restart, PendingRestart};
pub use states::GameState;
pub use tuning::{GameTuning, TuningError};
