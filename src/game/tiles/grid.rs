use bevy::prelude::*;

use super::cell::{Cell, Direction};
use crate::game::config::GridConfig;
use crate::game::error::GridConfigError;

/// The fluid grid: a flat, row-major list of cells plus the authoritative
/// passable mask.
///
/// # Invariants
///
/// - `cells.len() == rows * columns` and `cells[i].index == i`
/// - `passable_mask[i] == cells[i].passable` after every public mutation
/// - Neighbor links are symmetric and are only created during construction;
///   the 4-neighbor topology never changes afterwards, only passability does.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    passable_mask: Vec<bool>,
    pub(super) cells: Vec<Cell>,
}

impl TileGrid {
    /// Build a grid from a validated configuration.
    ///
    /// Fails without constructing anything if the mask length does not match
    /// `rows * columns` or either dimension is zero.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridConfigError> {
        Self::build(config.columns, config.rows, &config.passable_tiles)
    }

    /// Allocate `rows * columns` cells in row-major order and link each one to
    /// its left and upper neighbor. O(rows * columns).
    pub fn build(columns: usize, rows: usize, passable_mask: &[bool]) -> Result<Self, GridConfigError> {
        if columns == 0 || rows == 0 {
            return Err(GridConfigError::ZeroDimension { columns, rows });
        }
        let expected = rows * columns;
        if passable_mask.len() != expected {
            return Err(GridConfigError::ShapeMismatch {
                expected,
                actual: passable_mask.len(),
            });
        }

        let mut grid = Self {
            columns,
            rows,
            passable_mask: passable_mask.to_vec(),
            cells: Vec::with_capacity(expected),
        };

        for row in 0..rows {
            for column in 0..columns {
                let index = row * columns + column;
                grid.cells.push(Cell::new(row, column, index, passable_mask[index]));

                if column > 0 {
                    grid.link(index, index - 1, Direction::Left);
                }
                if row > 0 {
                    grid.link(index, index - columns, Direction::Up);
                }
            }
        }

        info!(
            "Built {}x{} tile grid ({} passable)",
            columns,
            rows,
            grid.passable_mask.iter().filter(|p| **p).count()
        );

        Ok(grid)
    }

    /// Link `from` to `to` in `direction` and `to` back to `from` in the
    /// opposite direction.
    fn link(&mut self, from: usize, to: usize, direction: Direction) {
        self.cells[from].neighbors[direction as usize] = Some(to);
        self.cells[to].neighbors[direction.opposite() as usize] = Some(from);
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn passable_tiles(&self) -> &[bool] {
        &self.passable_mask
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Sum of all cell capacities.
    pub fn total_capacity(&self) -> u64 {
        self.cells.iter().map(|c| c.capacity as u64).sum()
    }

    /// Overwrite a cell's capacity. Impassable cells always stay at 0.
    pub fn set_capacity(&mut self, index: usize, capacity: u32) {
        let cell = &mut self.cells[index];
        if cell.passable {
            cell.capacity = capacity;
        }
    }

    /// Add fluid to a passable cell. The result is not clamped; the next flow
    /// pass redistributes anything above [`MAX_CAPACITY`](super::MAX_CAPACITY).
    pub fn add_capacity(&mut self, index: usize, amount: u32) {
        let cell = &mut self.cells[index];
        if cell.passable {
            cell.capacity = cell.capacity.saturating_add(amount);
        }
    }

    /// Remove up to `amount` fluid from a cell, flooring at 0.
    pub fn drain_capacity(&mut self, index: usize, amount: u32) {
        let cell = &mut self.cells[index];
        cell.capacity = cell.capacity.saturating_sub(amount);
    }

    /// Change passability of a cell and mirror it into the passable mask.
    ///
    /// Blocking a cell discards its fluid. Unblocking leaves capacity untouched
    /// (it is already 0).
    pub fn set_passable(&mut self, index: usize, passable: bool) {
        let cell = &mut self.cells[index];
        cell.passable = passable;
        if !passable {
            cell.capacity = 0;
        }
        self.passable_mask[index] = passable;
    }
}
