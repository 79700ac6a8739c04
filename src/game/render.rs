//! Tile drawing. Reads the grid and interaction state; never writes them.
//!
//! Each tile is an absolutely positioned UI node in window coordinates, the
//! same space hover is resolved in.

use bevy::prelude::*;

use crate::game::interaction::InteractionController;
use crate::game::theme::{ActiveTheme, Theme};
use crate::game::tiles::TileGrid;

/// UI node for one tile. `shade` is the palette entry rolled for this tile
/// under the current theme.
#[derive(Component, Debug, Clone, Copy)]
pub struct TileNode {
    pub index: usize,
    pub shade: usize,
}

pub struct TileRenderPlugin;

impl Plugin for TileRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera).add_systems(
            Update,
            (spawn_tile_nodes, reroll_shades, sync_tile_nodes)
                .chain()
                .run_if(resource_exists::<TileGrid>)
                .run_if(resource_exists::<InteractionController>),
        );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_tile_nodes(
    mut commands: Commands,
    grid: Res<TileGrid>,
    controller: Res<InteractionController>,
    theme: Res<ActiveTheme>,
    existing: Query<(), With<TileNode>>,
) {
    if !existing.is_empty() {
        return;
    }
    let layout = controller.layout();
    let mut rng = rand::rng();

    for cell in grid.cells() {
        let bounds = layout.bounds(cell.row, cell.column);
        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(bounds.min.x),
                top: Val::Px(bounds.min.y),
                width: Val::Px(layout.tile_size),
                height: Val::Px(layout.tile_size),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(theme.theme.background),
            BorderColor::from(theme.theme.border),
            TileNode {
                index: cell.index,
                shade: theme.theme.roll_shade(&mut rng),
            },
        ));
    }
    info!("Spawned nodes for {} tiles", grid.len());
}

/// New theme, new per-tile shades.
fn reroll_shades(theme: Res<ActiveTheme>, mut tiles: Query<&mut TileNode>) {
    if !theme.is_changed() {
        return;
    }
    let mut rng = rand::rng();
    for mut tile in tiles.iter_mut() {
        tile.shade = theme.theme.roll_shade(&mut rng);
    }
}

fn sync_tile_nodes(
    grid: Res<TileGrid>,
    controller: Res<InteractionController>,
    theme: Res<ActiveTheme>,
    mut tiles: Query<(&TileNode, &mut Node, &mut BackgroundColor, &mut BorderColor)>,
) {
    let theme = &theme.theme;
    let views: Vec<_> = controller.tile_views(&grid).collect();

    for (tile, mut node, mut background, mut border) in tiles.iter_mut() {
        let Some(view) = views.get(tile.index) else { continue };
        let thickness = Val::Px(Theme::border_thickness(view.border));
        if node.border.left != thickness {
            node.border = UiRect::all(thickness);
        }
        *background = BackgroundColor(theme.fill_color(view, tile.shade));
        *border = BorderColor::from(theme.border_color(view.border));
    }
}
