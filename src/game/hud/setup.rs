use bevy::prelude::*;
use super::components::*;

/// Setup the HUD UI elements
pub fn setup_hud(mut commands: Commands) {
    // Right: hovered tile details
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(140.0),
                right: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                TileInfoText,
            ));
        });

    // Bottom left: status line
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                StatusText,
            ));
        });
}
