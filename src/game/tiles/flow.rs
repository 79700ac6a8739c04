//! Per-tick fluid redistribution.
//!
//! Each tick visits every cell once in row-major order and applies
//! [`TileGrid::advance_flow`]. Updates are written in place: a cell already
//! visited this tick can still be changed by a neighbor visited after it.
//! Later values depend on that ordering, so the pass must stay single-buffered
//! and sequential.

use super::cell::MAX_CAPACITY;
use super::grid::TileGrid;

impl TileGrid {
    /// Run the flow rule on every cell in index order.
    pub fn flow_pass(&mut self) {
        for index in 0..self.cells.len() {
            self.advance_flow(index);
        }
    }

    /// `neighbor`, if it exists and is passable.
    fn passable(&self, neighbor: Option<usize>) -> Option<usize> {
        neighbor.filter(|&n| self.cells[n].passable)
    }

    /// Apply the flow rule to a single cell.
    ///
    /// 1. Gravity: an empty passable cell below takes everything and the cell
    ///    is done for this tick. Otherwise the cell below is topped up to
    ///    [`MAX_CAPACITY`].
    /// 2. Lateral equalization with whichever of left/right is passable. The
    ///    integer remainder always stays in the cell being processed.
    pub fn advance_flow(&mut self, index: usize) {
        let mut capacity = self.cells[index].capacity;
        if capacity == 0 {
            return;
        }

        let (down, left, right) = {
            let cell = &self.cells[index];
            (
                self.passable(cell.down()),
                self.passable(cell.left()),
                self.passable(cell.right()),
            )
        };

        if let Some(down) = down {
            let below = self.cells[down].capacity;
            if below == 0 {
                self.cells[down].capacity = capacity;
                self.cells[index].capacity = 0;
                return;
            }
            if below < MAX_CAPACITY {
                let moved = capacity.min(MAX_CAPACITY - below);
                self.cells[down].capacity += moved;
                capacity -= moved;
            }
        }

        match (left, right) {
            (Some(left), Some(right)) => {
                let sum = u64::from(self.cells[left].capacity)
                    + u64::from(capacity)
                    + u64::from(self.cells[right].capacity);
                let (split, remainder) = (sum / 3, sum % 3);
                self.cells[left].capacity = narrow(split);
                self.cells[right].capacity = narrow(split);
                capacity = narrow(split + remainder);
            }
            (Some(side), None) | (None, Some(side)) => {
                let sum = u64::from(self.cells[side].capacity) + u64::from(capacity);
                let (split, remainder) = (sum / 2, sum % 2);
                self.cells[side].capacity = narrow(split);
                capacity = narrow(split + remainder);
            }
            (None, None) => {}
        }

        self.cells[index].capacity = capacity;
    }
}

/// Lateral sums are taken in `u64`; a share that no longer fits saturates.
fn narrow(amount: u64) -> u32 {
    u32::try_from(amount).unwrap_or(u32::MAX)
}
