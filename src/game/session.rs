//! Headless driver for one simulation: grid, input source and controller
//! advanced together one tick at a time, with no Bevy `App` involved.
//!
//! The Bevy plugins run the same steps as separate systems; this type is what
//! tests, tools and alternative hosts use.

use crate::game::config::{GridConfig, InitialConfig};
use crate::game::error::GridConfigError;
use crate::game::input::{InputEventSource, PointerDevice};
use crate::game::interaction::{InteractionController, InteractionTuning, TileView};
use crate::game::tiles::{TileGrid, TileLayout};

#[derive(Debug, Clone)]
pub struct Session {
    grid: TileGrid,
    input: InputEventSource,
    controller: InteractionController,
}

impl Session {
    pub fn new(
        config: &GridConfig,
        layout: TileLayout,
        tuning: InteractionTuning,
        hold_cooldown_ms: f32,
    ) -> Result<Self, GridConfigError> {
        let grid = TileGrid::from_config(config)?;
        let controller = InteractionController::new(layout, tuning, grid.len());
        Ok(Self {
            grid,
            input: InputEventSource::new(hold_cooldown_ms),
            controller,
        })
    }

    /// Load the grid file named by `initial` and build a session around it.
    pub fn from_initial_config(initial: &InitialConfig) -> Result<Self, GridConfigError> {
        let grid_config = GridConfig::load(&initial.grid_config_path)?;
        Self::new(
            &grid_config,
            initial.tile_layout(),
            initial.interaction_tuning(),
            initial.hold_cooldown_ms,
        )
    }

    /// One tick: poll the device, apply the resulting events, run one flow pass.
    pub fn update(&mut self, device: &impl PointerDevice, elapsed_ms: f32) {
        for event in self.input.poll(device.sample(), elapsed_ms) {
            self.controller.handle(&event, &mut self.grid);
        }
        self.grid.flow_pass();
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn passable_tiles(&self) -> &[bool] {
        self.grid.passable_tiles()
    }

    pub fn tile_views(&self) -> impl Iterator<Item = TileView> + '_ {
        self.controller.tile_views(&self.grid)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn input(&self) -> &InputEventSource {
        &self.input
    }

    /// Split into the three resources the Bevy plugins operate on.
    pub fn into_parts(self) -> (TileGrid, InputEventSource, InteractionController) {
        (self.grid, self.input, self.controller)
    }
}
