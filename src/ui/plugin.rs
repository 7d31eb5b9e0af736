//! Win banner display.

use bevy::prelude::*;

use crate::core::{GameSet, GoalReachedEvent};
use crate::world::SceneEntity;

/// Marker for the "You Win!" banner.
#[derive(Component)]
pub struct WinBanner;

/// UI plugin - shows the win banner when the goal is reached.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // After Status so the banner appears on the frame of the contact,
        // before Restart so a rebuild on the same frame would clear it.
        app.add_systems(
            Update,
            show_win_banner
                .after(GameSet::Status)
                .before(GameSet::Restart),
        );
    }
}

/// Spawn the centered "You Win!" banner.
pub fn show_win_banner(mut commands: Commands, mut events: EventReader<GoalReachedEvent>) {
    if events.read().last().is_none() {
        return;
    }

    commands.spawn((
        WinBanner,
        SceneEntity,
        Text2d::new("You Win!"),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        // Centered on screen, above the scene sprites
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}
