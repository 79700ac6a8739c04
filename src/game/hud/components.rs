use bevy::prelude::*;

/// Root marker component for HUD elements
#[derive(Component)]
pub struct HudRoot;

/// Details of the tile under the pointer
#[derive(Component)]
pub struct TileInfoText;

/// Theme name, pause state and tick counter
#[derive(Component)]
pub struct StatusText;
