use bevy::prelude::*;

mod components;
mod info;
mod setup;

pub use components::*;
use info::*;
use setup::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, (update_tile_info, update_status_text));
    }
}
