use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod render;
pub mod session;
pub mod theme;
pub mod tiles;

use config::{current_game_config, GameConfig, GameConfigHandle, GameConfigPlugin, InitialConfig};
use hud::HudPlugin;
use input::InputPlugin;
use interaction::InteractionPlugin;
use render::TileRenderPlugin;
use session::Session;
use theme::ThemePlugin;
use tiles::{FlowPaused, TilesPlugin};

// System sets for ordering one simulation tick
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TickSet {
    Input,       // Sampling the pointer into events
    Interaction, // Applying events to the grid
    Flow,        // One flow pass
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<InitialConfig>() {
            app.init_resource::<InitialConfig>();
        }

        app.configure_sets(
            FixedUpdate,
            (TickSet::Input, TickSet::Interaction, TickSet::Flow).chain(),
        )
        .add_plugins((
            GameConfigPlugin,
            TilesPlugin,
            InputPlugin,
            InteractionPlugin,
            ThemePlugin,
            TileRenderPlugin,
            HudPlugin,
        ))
        .add_systems(Startup, setup_simulation)
        .add_systems(Update, handle_hotkeys);
    }
}

/// Build the grid from the configured file and install the simulation resources.
/// A grid that cannot be loaded ends the app.
fn setup_simulation(
    mut commands: Commands,
    mut fixed_time: ResMut<Time<Fixed>>,
    initial_config: Res<InitialConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    fixed_time.set_timestep_seconds(1.0 / initial_config.tick_rate);

    match Session::from_initial_config(&initial_config) {
        Ok(session) => {
            let (grid, input, controller) = session.into_parts();
            info!(
                "Simulation ready: {}x{} tiles at {} ticks/s",
                grid.columns(),
                grid.rows(),
                initial_config.tick_rate
            );
            commands.insert_resource(grid);
            commands.insert_resource(input);
            commands.insert_resource(controller);
        }
        Err(e) => {
            error!("Failed to load grid: {}", e);
            exit.write(AppExit::error());
        }
    }
}

fn handle_hotkeys(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    config_handle: Option<Res<GameConfigHandle>>,
    configs: Res<Assets<GameConfig>>,
    mut paused: ResMut<FlowPaused>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(keyboard) = keyboard else { return };
    let config = current_game_config(config_handle.as_deref(), &configs);

    if keyboard.just_pressed(config.key_quit) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
    if keyboard.just_pressed(config.key_pause) {
        paused.0 = !paused.0;
        info!("Flow {}", if paused.0 { "paused" } else { "resumed" });
    }
}
