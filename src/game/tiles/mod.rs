/// Fluid tiles - the grid, its neighbor graph and the flow rule.
///
/// This module is organized into:
/// - **cell**: a single tile and its neighbor links
/// - **grid**: the [`TileGrid`] resource that owns every cell
/// - **flow**: the per-tick redistribution rule
/// - **layout**: where tiles sit on screen (used for hover tests and drawing)

use bevy::prelude::*;
use badwater_macros::profile;

pub mod cell;
pub mod flow;
pub mod grid;
pub mod layout;

#[cfg(test)]
mod tests;

pub use cell::{Cell, Direction, MAX_CAPACITY};
pub use grid::TileGrid;
pub use layout::TileLayout;

use crate::game::TickSet;
use crate::profile_log;

/// Number of flow passes run since startup.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FlowTick(pub u64);

/// Set by the pause key. Interaction keeps working while paused.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPaused(pub bool);

pub struct TilesPlugin;

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FlowTick>()
            .init_resource::<FlowPaused>()
            .add_systems(
                FixedUpdate,
                run_flow_pass
                    .in_set(TickSet::Flow)
                    .run_if(resource_exists::<TileGrid>)
                    .run_if(|paused: Res<FlowPaused>| !paused.0),
            );
    }
}

/// Advance the fluid by one tick.
#[profile]
pub fn run_flow_pass(mut grid: ResMut<TileGrid>, mut tick: ResMut<FlowTick>) {
    tick.0 += 1;
    grid.flow_pass();
    profile_log!(tick, "Flow tick {}: total capacity {}", tick.0, grid.total_capacity());
}
