use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::error::GridConfigError;
use crate::game::interaction::InteractionTuning;
use crate::game::tiles::TileLayout;

pub const INITIAL_CONFIG_PATH: &str = "assets/initial_config.ron";

/// Static configuration loaded once at startup. Changing any of these requires
/// a restart: they size the grid, its screen layout and the input timings.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InitialConfig {
    /// Simulation ticks per second (one input poll + one flow pass each).
    pub tick_rate: f64,
    pub grid_config_path: String,

    // Layout, in window pixels from the top-left corner
    pub grid_origin: (f32, f32),
    pub tile_size: f32,
    pub window_width: u32,
    pub window_height: u32,

    // Interaction
    pub hold_cooldown_ms: f32,
    pub inject_amount: u32,
    pub drain_amount: u32,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            grid_config_path: "assets/default_tiles.json".to_string(),
            grid_origin: (120.0, 40.0),
            tile_size: 10.0,
            window_width: 800,
            window_height: 480,
            hold_cooldown_ms: 200.0,
            inject_amount: 500,
            drain_amount: 100,
        }
    }
}

impl InitialConfig {
    pub fn tile_layout(&self) -> TileLayout {
        TileLayout::new(Vec2::new(self.grid_origin.0, self.grid_origin.1), self.tile_size)
    }

    pub fn interaction_tuning(&self) -> InteractionTuning {
        InteractionTuning {
            inject_amount: self.inject_amount,
            drain_amount: self.drain_amount,
        }
    }

    /// Read the initial config, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match ron::from_str::<InitialConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded initial config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse initial config: {}", e);
                    error!("Using default InitialConfig");
                    InitialConfig::default()
                }
            },
            Err(e) => {
                error!("Failed to read {}: {}", path, e);
                error!("Using default InitialConfig");
                InitialConfig::default()
            }
        }
    }
}

/// Runtime configuration that can be hot-reloaded while the app runs.
#[derive(Deserialize, Serialize, Asset, TypePath, Clone, Debug)]
pub struct GameConfig {
    pub key_toggle_theme: KeyCode,
    pub key_quit: KeyCode,
    pub key_pause: KeyCode,
    pub show_tile_info: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_toggle_theme: KeyCode::Tab,
            key_quit: KeyCode::Escape,
            key_pause: KeyCode::Space,
            show_tile_info: true,
        }
    }
}

#[derive(Resource)]
pub struct GameConfigHandle(pub Handle<GameConfig>);

/// Shape of the fluid grid: dimensions plus a row-major passable mask.
///
/// Accepts both snake_case keys and the PascalCase keys older grid files use.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GridConfig {
    #[serde(default, alias = "Version")]
    pub version: Option<String>,
    #[serde(alias = "Columns")]
    pub columns: usize,
    #[serde(alias = "Rows")]
    pub rows: usize,
    #[serde(alias = "PassableTiles")]
    pub passable_tiles: Vec<bool>,
}

impl GridConfig {
    /// Load a grid description from a `.json` or `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GridConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("ron") => Self::from_ron(&contents),
            _ => Err(GridConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
        .map_err(|e| match e {
            GridConfigError::Parse { detail, .. } => GridConfigError::Parse {
                path: path.to_path_buf(),
                detail,
            },
            other => other,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, GridConfigError> {
        serde_json::from_str(contents).map_err(|e| GridConfigError::Parse {
            path: "<json>".into(),
            detail: e.to_string(),
        })
    }

    pub fn from_ron(contents: &str) -> Result<Self, GridConfigError> {
        ron::from_str(contents).map_err(|e| GridConfigError::Parse {
            path: "<ron>".into(),
            detail: e.to_string(),
        })
    }
}

pub struct GameConfigPlugin;

impl Plugin for GameConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<GameConfig>::new(&["game_config.ron"]))
            .add_systems(Startup, setup_runtime_config);
    }
}

/// Load runtime configuration asynchronously (can be hot-reloaded).
fn setup_runtime_config(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load("game_config.ron");
    commands.insert_resource(GameConfigHandle(handle));
}

/// The current runtime config, or the defaults while the asset is still loading.
pub fn current_game_config(handle: Option<&GameConfigHandle>, configs: &Assets<GameConfig>) -> GameConfig {
    handle
        .and_then(|h| configs.get(&h.0))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_accepts_pascal_case_json() {
        let json = r#"{
            "Version": "1.0",
            "Columns": 2,
            "Rows": 1,
            "PassableTiles": [true, false]
        }"#;
        let config = GridConfig::from_json(json).unwrap();

        assert_eq!(config.version.as_deref(), Some("1.0"));
        assert_eq!(config.columns, 2);
        assert_eq!(config.rows, 1);
        assert_eq!(config.passable_tiles, vec![true, false]);
    }

    #[test]
    fn test_grid_config_from_ron() {
        let ron = "(columns: 1, rows: 2, passable_tiles: [true, true])";
        let config = GridConfig::from_ron(ron).unwrap();

        assert_eq!(config.version, None);
        assert_eq!(config.rows, 2);
    }

    #[test]
    fn test_grid_config_rejects_garbage() {
        let result = GridConfig::from_json("{ \"Columns\": 3 }");
        assert!(matches!(result, Err(GridConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_grid_file_is_an_io_error() {
        let result = GridConfig::load("does/not/exist.json");
        assert!(matches!(result, Err(GridConfigError::Io { .. })));
    }

    #[test]
    fn test_initial_config_partial_file_uses_defaults() {
        let config: InitialConfig = ron::from_str("(tile_size: 16.0)").unwrap();
        assert_eq!(config.tile_size, 16.0);
        assert_eq!(config.hold_cooldown_ms, 200.0);
        assert_eq!(config.inject_amount, 500);
    }

    #[test]
    fn test_initial_config_missing_file_falls_back() {
        let config = InitialConfig::load_or_default("does/not/exist.ron");
        assert_eq!(config, InitialConfig::default());
    }

    #[test]
    fn test_shipped_config_files_parse() {
        let initial = std::fs::read_to_string(INITIAL_CONFIG_PATH).unwrap();
        let initial: InitialConfig = ron::from_str(&initial).unwrap();
        assert_eq!(initial, InitialConfig::default());

        let runtime = std::fs::read_to_string("assets/game_config.ron").unwrap();
        let runtime: GameConfig = ron::from_str(&runtime).unwrap();
        assert_eq!(runtime.key_quit, KeyCode::Escape);
        assert!(runtime.show_tile_info);
    }
}
