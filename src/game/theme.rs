//! Color themes for the tile display.
//!
//! Themes are presentation only: the simulation never reads them. They are
//! loaded from `assets/themes.ron` and cycled with the theme key.

use bevy::color::Mix;
use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use serde::{Deserialize, Serialize};

use crate::game::config::{current_game_config, GameConfig, GameConfigHandle};
use crate::game::error::ThemeError;
use crate::game::interaction::{BorderClass, TileView};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TileStyle {
    /// Every tile uses the first palette entry.
    #[default]
    Fixed,
    /// Each tile picks a random palette entry when the theme is applied.
    FixedRandom,
}

/// A theme as written in `themes.ron`. Colors are hex strings (`"#1EFF00"`).
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ThemeDef {
    pub name: String,
    pub text_color: String,
    pub background_color: String,
    pub liquid_colors: Vec<String>,
    pub blocked_color: String,
    pub border_held: String,
    pub border_beamed: String,
    pub border_hovered: String,
    pub border_default: String,
    #[serde(default)]
    pub tile_style: TileStyle,
}

#[derive(Deserialize, Serialize, Asset, TypePath, Clone, Debug)]
pub struct ThemeSet {
    pub themes: Vec<ThemeDef>,
}

#[derive(Resource)]
pub struct ThemeSetHandle(pub Handle<ThemeSet>);

/// A theme with its colors parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub text: Color,
    pub background: Color,
    pub liquid: Vec<Color>,
    pub blocked: Color,
    pub held: Color,
    pub beamed: Color,
    pub hovered: Color,
    pub border: Color,
    pub tile_style: TileStyle,
}

fn parse_color(theme: &str, field: &'static str, value: &str) -> Result<Color, ThemeError> {
    Srgba::hex(value).map(Color::from).map_err(|_| ThemeError::InvalidColor {
        theme: theme.to_string(),
        field,
        value: value.to_string(),
    })
}

impl ThemeDef {
    pub fn resolve(&self) -> Result<Theme, ThemeError> {
        let name = self.name.as_str();
        if self.liquid_colors.is_empty() {
            return Err(ThemeError::EmptyPalette { theme: self.name.clone() });
        }
        let liquid = self
            .liquid_colors
            .iter()
            .map(|c| parse_color(name, "liquid_colors", c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Theme {
            name: self.name.clone(),
            text: parse_color(name, "text_color", &self.text_color)?,
            background: parse_color(name, "background_color", &self.background_color)?,
            liquid,
            blocked: parse_color(name, "blocked_color", &self.blocked_color)?,
            held: parse_color(name, "border_held", &self.border_held)?,
            beamed: parse_color(name, "border_beamed", &self.border_beamed)?,
            hovered: parse_color(name, "border_hovered", &self.border_hovered)?,
            border: parse_color(name, "border_default", &self.border_default)?,
            tile_style: self.tile_style,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Classic".to_string(),
            text: Color::WHITE,
            background: Color::srgb(0.39, 0.58, 0.93),
            liquid: vec![Color::WHITE],
            blocked: Color::srgb(0.5, 0.5, 0.5),
            held: Color::srgb(1.0, 0.0, 0.0),
            beamed: Color::srgb(0.0, 0.5, 0.0),
            hovered: Color::srgb(1.0, 1.0, 0.0),
            border: Color::BLACK,
            tile_style: TileStyle::Fixed,
        }
    }
}

impl Theme {
    pub fn border_color(&self, class: BorderClass) -> Color {
        match class {
            BorderClass::Held => self.held,
            BorderClass::Beamed => self.beamed,
            BorderClass::Hovered => self.hovered,
            BorderClass::Default => self.border,
        }
    }

    pub fn border_thickness(class: BorderClass) -> f32 {
        match class {
            BorderClass::Beamed => 2.0,
            _ => 1.0,
        }
    }

    /// Palette entry for a tile given its rolled shade.
    pub fn shade(&self, shade: usize) -> Color {
        self.liquid[shade % self.liquid.len()]
    }

    /// Fill color: the tile's shade blended over the background in proportion
    /// to its fluid, or the blocked color.
    pub fn fill_color(&self, view: &TileView, shade: usize) -> Color {
        if !view.passable {
            return self.blocked;
        }
        let level = view.capacity.min(255) as f32 / 255.0;
        let blended = self
            .background
            .to_srgba()
            .mix(&self.shade(shade).to_srgba(), level);
        Color::from(blended)
    }

    /// Pick a palette index for a newly themed tile.
    pub fn roll_shade(&self, rng: &mut impl rand::Rng) -> usize {
        match self.tile_style {
            TileStyle::Fixed => 0,
            TileStyle::FixedRandom => rng.random_range(0..self.liquid.len()),
        }
    }
}

/// The theme currently in use. `index` points into the loaded [`ThemeSet`].
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveTheme {
    pub theme: Theme,
    pub index: usize,
}

pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<ThemeSet>::new(&["themes.ron"]))
            .init_resource::<ActiveTheme>()
            .insert_resource(ClearColor(Theme::default().background))
            .add_systems(Startup, load_themes)
            .add_systems(Update, (apply_loaded_themes, cycle_theme, apply_background).chain());
    }
}

fn load_themes(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(ThemeSetHandle(asset_server.load("themes.ron")));
}

fn activate(active: &mut ActiveTheme, set: &ThemeSet, index: usize) {
    let Some(def) = set.themes.get(index) else {
        warn!("Theme index {} out of range ({} themes)", index, set.themes.len());
        return;
    };
    match def.resolve() {
        Ok(theme) => {
            info!("Theme set to {}", theme.name);
            active.theme = theme;
            active.index = index;
        }
        Err(e) => error!("Skipping theme: {}", e),
    }
}

/// Re-apply the current theme whenever the theme file (re)loads.
fn apply_loaded_themes(
    handle: Option<Res<ThemeSetHandle>>,
    sets: Res<Assets<ThemeSet>>,
    mut events: MessageReader<AssetEvent<ThemeSet>>,
    mut active: ResMut<ActiveTheme>,
) {
    let Some(handle) = handle else { return };
    for event in events.read() {
        if event.is_loaded_with_dependencies(handle.0.id()) || event.is_modified(handle.0.id()) {
            if let Some(set) = sets.get(&handle.0) {
                let index = active.index;
                activate(&mut active, set, index);
            }
        }
    }
}

fn cycle_theme(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    config_handle: Option<Res<GameConfigHandle>>,
    configs: Res<Assets<GameConfig>>,
    handle: Option<Res<ThemeSetHandle>>,
    sets: Res<Assets<ThemeSet>>,
    mut active: ResMut<ActiveTheme>,
) {
    let Some(keyboard) = keyboard else { return };
    let config = current_game_config(config_handle.as_deref(), &configs);
    if !keyboard.just_pressed(config.key_toggle_theme) {
        return;
    }
    let Some(set) = handle.and_then(|h| sets.get(&h.0)) else {
        warn!("Themes not loaded yet");
        return;
    };
    if set.themes.is_empty() {
        return;
    }
    let next = (active.index + 1) % set.themes.len();
    activate(&mut active, set, next);
}

fn apply_background(active: Res<ActiveTheme>, mut clear: ResMut<ClearColor>) {
    if active.is_changed() {
        clear.0 = active.theme.background;
    }
}
