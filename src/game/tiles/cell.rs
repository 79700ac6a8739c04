/// Maximum amount of fluid a cell settles at. Injection may push a cell past
/// this until the next flow pass moves the excess on.
pub const MAX_CAPACITY: u32 = 255;

/// One of the four grid directions a cell can be linked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn opposite(self) -> Direction {
        Self::ALL[(self as usize + 2) % Self::ALL.len()]
    }
}

/// A single tile of the fluid grid.
///
/// Neighbors are stored as indices into the owning [`TileGrid`](super::TileGrid)'s
/// cell list, never as references. Links are only written by
/// [`TileGrid::link`](super::TileGrid::link), which keeps them symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub index: usize,
    pub(super) capacity: u32,
    pub(super) passable: bool,
    pub(super) neighbors: [Option<usize>; 4],
}

impl Cell {
    pub(super) fn new(row: usize, column: usize, index: usize, passable: bool) -> Self {
        Self {
            row,
            column,
            index,
            capacity: 0,
            passable,
            neighbors: [None; 4],
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors[direction as usize]
    }

    pub fn up(&self) -> Option<usize> {
        self.neighbor(Direction::Up)
    }

    pub fn down(&self) -> Option<usize> {
        self.neighbor(Direction::Down)
    }

    pub fn left(&self) -> Option<usize> {
        self.neighbor(Direction::Left)
    }

    pub fn right(&self) -> Option<usize> {
        self.neighbor(Direction::Right)
    }
}
