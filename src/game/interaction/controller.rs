use bevy::prelude::*;
use fixedbitset::FixedBitSet;

use crate::game::input::{InputEvent, InputKey, PointerState};
use crate::game::tiles::{TileGrid, TileLayout};

/// Amounts applied by the pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionTuning {
    /// Added to the clicked cell on each primary press.
    pub inject_amount: u32,
    /// Removed from every beamed cell on each secondary press.
    pub drain_amount: u32,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            inject_amount: 500,
            drain_amount: 100,
        }
    }
}

/// What a tertiary gesture does to the cells it passes over. Chosen on first
/// contact and kept until the button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    MakePassable,
    MakeBlocked,
}

impl BuildMode {
    /// The mode that flips a cell with the given passability.
    pub fn toggling(passable: bool) -> Self {
        if passable {
            BuildMode::MakeBlocked
        } else {
            BuildMode::MakePassable
        }
    }

    pub fn apply(self, grid: &mut TileGrid, index: usize) {
        match self {
            BuildMode::MakePassable => grid.set_passable(index, true),
            BuildMode::MakeBlocked => grid.set_passable(index, false),
        }
    }
}

/// Where a press came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOrigin {
    /// Reported by the input source (first contact or hold repeat).
    Device,
    /// Synthesized because the pointer moved onto a new cell with the button down.
    Drag,
}

/// Applies pointer gestures to the grid and tracks hover/held/beam state for
/// drawing.
#[derive(Resource, Debug, Clone)]
pub struct InteractionController {
    layout: TileLayout,
    tuning: InteractionTuning,
    hovered: Option<usize>,
    clicked: Option<usize>,
    beam: FixedBitSet,
    build_mode: Option<BuildMode>,
}

impl InteractionController {
    pub fn new(layout: TileLayout, tuning: InteractionTuning, cell_count: usize) -> Self {
        Self {
            layout,
            tuning,
            hovered: None,
            clicked: None,
            beam: FixedBitSet::with_capacity(cell_count),
            build_mode: None,
        }
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn clicked(&self) -> Option<usize> {
        self.clicked
    }

    pub fn build_mode(&self) -> Option<BuildMode> {
        self.build_mode
    }

    pub fn is_beamed(&self, index: usize) -> bool {
        self.beam.contains(index)
    }

    /// Indices currently under the drain beam, top to bottom.
    pub fn beamed(&self) -> impl Iterator<Item = usize> + '_ {
        self.beam.ones()
    }

    pub fn handle(&mut self, event: &InputEvent, grid: &mut TileGrid) {
        match *event {
            InputEvent::Moved { current, previous } => self.on_moved(current, previous, grid),
            InputEvent::Pressed { key, hold_duration_ms } => {
                self.on_pressed(key, hold_duration_ms, PressOrigin::Device, grid)
            }
            InputEvent::Released { key } => self.on_released(key),
        }
    }

    /// Re-resolve the hovered cell. If it changed while buttons were already
    /// down, each of them acts on the new cell as if freshly pressed. A button
    /// that went down on this same sample gets its own device press instead.
    fn on_moved(&mut self, current: PointerState, previous: PointerState, grid: &mut TileGrid) {
        let last_hovered = self.hovered;
        self.hovered = grid
            .cells()
            .iter()
            .find(|cell| self.layout.contains(cell.row, cell.column, current.position))
            .map(|cell| cell.index);

        if self.hovered == last_hovered {
            return;
        }
        for key in InputKey::ALL {
            if previous.is_pressed(key) && current.is_pressed(key) {
                self.on_pressed(key, 0.0, PressOrigin::Drag, grid);
            }
        }
    }

    pub fn on_pressed(&mut self, key: InputKey, hold_duration_ms: f32, origin: PressOrigin, grid: &mut TileGrid) {
        let Some(hovered) = self.hovered else { return };

        match key {
            InputKey::Primary => {
                self.clicked = Some(hovered);
                grid.add_capacity(hovered, self.tuning.inject_amount);
            }
            InputKey::Secondary => self.fire_beam(hovered, grid),
            InputKey::Tertiary => {
                let mode = match (origin, self.build_mode) {
                    (PressOrigin::Device, _) if hold_duration_ms > 0.0 => return,
                    // mode stays fixed for the whole gesture
                    (_, Some(mode)) => mode,
                    (_, None) => {
                        let passable = grid.passable_tiles()[hovered];
                        let mode = BuildMode::toggling(passable);
                        debug!("Build mode {:?} chosen at tile {}", mode, hovered);
                        self.build_mode = Some(mode);
                        mode
                    }
                };
                mode.apply(grid, hovered);
            }
        }
    }

    pub fn on_released(&mut self, key: InputKey) {
        match key {
            InputKey::Primary => self.clicked = None,
            InputKey::Secondary => self.beam.clear(),
            InputKey::Tertiary => self.build_mode = None,
        }
    }

    /// Drain the contiguous passable run from `start` down to the first
    /// blocked cell (exclusive) and mark it as beamed.
    fn fire_beam(&mut self, start: usize, grid: &mut TileGrid) {
        self.beam.clear();
        self.beam.grow(grid.len());

        let (first_row, column) = {
            let cell = &grid.cells()[start];
            (cell.row, cell.column)
        };
        for row in first_row..grid.rows() {
            let Some(index) = grid.index_of(row, column) else { break };
            if !grid.passable_tiles()[index] {
                break;
            }
            self.beam.insert(index);
            grid.drain_capacity(index, self.tuning.drain_amount);
        }
    }
}
