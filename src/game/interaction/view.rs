use super::controller::InteractionController;
use crate::game::tiles::TileGrid;

/// Which border a tile is drawn with. Derived from interaction state each
/// frame; nothing is stored on the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderClass {
    Held,
    Beamed,
    Hovered,
    Default,
}

/// Read-only snapshot of one tile for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub capacity: u32,
    pub passable: bool,
    pub border: BorderClass,
}

impl InteractionController {
    /// Held wins over beamed, which wins over hovered.
    pub fn border_class(&self, index: usize) -> BorderClass {
        if self.clicked() == Some(index) {
            BorderClass::Held
        } else if self.is_beamed(index) {
            BorderClass::Beamed
        } else if self.hovered() == Some(index) {
            BorderClass::Hovered
        } else {
            BorderClass::Default
        }
    }

    pub fn tile_views<'a>(&'a self, grid: &'a TileGrid) -> impl Iterator<Item = TileView> + 'a {
        grid.cells().iter().map(move |cell| TileView {
            index: cell.index,
            row: cell.row,
            column: cell.column,
            capacity: cell.capacity(),
            passable: cell.is_passable(),
            border: self.border_class(cell.index),
        })
    }
}
