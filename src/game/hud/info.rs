use bevy::prelude::*;
use crate::game::config::{current_game_config, GameConfig, GameConfigHandle};
use crate::game::interaction::InteractionController;
use crate::game::theme::ActiveTheme;
use crate::game::tiles::{FlowPaused, FlowTick, TileGrid};
use super::components::*;

/// Format the info panel for one tile.
pub fn describe_tile(grid: &TileGrid, index: usize) -> Option<String> {
    let cell = grid.cell(index)?;
    Some(format!(
        "Index: {}\nX: {}\nY: {}\nCapacity: {}\nPassable: {}",
        cell.index,
        cell.column,
        cell.row,
        cell.capacity(),
        cell.is_passable()
    ))
}

/// Show details of the hovered tile, if any
pub fn update_tile_info(
    grid: Option<Res<TileGrid>>,
    controller: Option<Res<InteractionController>>,
    theme: Res<ActiveTheme>,
    config_handle: Option<Res<GameConfigHandle>>,
    configs: Res<Assets<GameConfig>>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<TileInfoText>>,
) {
    let config = current_game_config(config_handle.as_deref(), &configs);
    let description = match (grid, controller) {
        (Some(grid), Some(controller)) if config.show_tile_info => {
            controller.hovered().and_then(|i| describe_tile(&grid, i))
        }
        _ => None,
    };

    for (mut text, mut color) in &mut text_query {
        **text = description.clone().unwrap_or_default();
        color.0 = theme.theme.text;
    }
}

pub fn update_status_text(
    theme: Res<ActiveTheme>,
    paused: Res<FlowPaused>,
    tick: Res<FlowTick>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<StatusText>>,
) {
    let state = if paused.0 { "PAUSED" } else { "running" };
    for (mut text, mut color) in &mut text_query {
        **text = format!("{} | {} | tick {}", theme.theme.name, state, tick.0);
        color.0 = theme.theme.text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_tile_lists_position_and_fluid() {
        let mut grid = TileGrid::build(3, 2, &[true; 6]).unwrap();
        grid.set_capacity(4, 42);

        let text = describe_tile(&grid, 4).unwrap();

        assert_eq!(text, "Index: 4\nX: 1\nY: 1\nCapacity: 42\nPassable: true");
        assert!(describe_tile(&grid, 6).is_none());
    }
}
