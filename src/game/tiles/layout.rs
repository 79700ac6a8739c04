use bevy::prelude::*;

/// Screen placement of the grid, in logical window pixels with the origin at
/// the top-left corner and Y growing downwards (the same space as
/// `Window::cursor_position`).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    pub origin: Vec2,
    pub tile_size: f32,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::new(120.0, 40.0),
            tile_size: 10.0,
        }
    }
}

impl TileLayout {
    pub fn new(origin: Vec2, tile_size: f32) -> Self {
        Self { origin, tile_size }
    }

    /// Screen rectangle covered by the tile at (`row`, `column`).
    pub fn bounds(&self, row: usize, column: usize) -> Rect {
        let min = self.origin + Vec2::new(column as f32, row as f32) * self.tile_size;
        Rect::from_corners(min, min + Vec2::splat(self.tile_size))
    }

    /// Half-open containment: the right and bottom edges belong to the next
    /// tile, so adjacent tiles never both contain a point.
    pub fn contains(&self, row: usize, column: usize, point: Vec2) -> bool {
        let rect = self.bounds(row, column);
        point.x >= rect.min.x && point.x < rect.max.x && point.y >= rect.min.y && point.y < rect.max.y
    }
}
