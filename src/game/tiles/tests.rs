use super::*;
use crate::game::config::GridConfig;
use crate::game::error::GridConfigError;

fn open_grid(columns: usize, rows: usize) -> TileGrid {
    TileGrid::build(columns, rows, &vec![true; columns * rows]).unwrap()
}

fn capacities(grid: &TileGrid) -> Vec<u32> {
    grid.cells().iter().map(|c| c.capacity()).collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_cells_are_indexed_row_major() {
    let grid = open_grid(4, 3);

    assert_eq!(grid.len(), 12);
    for (i, cell) in grid.cells().iter().enumerate() {
        assert_eq!(cell.index, i);
        assert_eq!(cell.row, i / 4);
        assert_eq!(cell.column, i % 4);
    }
}

#[test]
fn test_neighbor_links_are_symmetric() {
    let grid = open_grid(5, 4);

    for cell in grid.cells() {
        for direction in Direction::ALL {
            if let Some(n) = cell.neighbor(direction) {
                let back = grid.cells()[n].neighbor(direction.opposite());
                assert_eq!(back, Some(cell.index), "link {} -> {} ({:?}) is one-way", cell.index, n, direction);
            }
        }
    }
}

#[test]
fn test_boundary_cells_have_no_outward_links() {
    let grid = open_grid(3, 3);

    let corner = &grid.cells()[0];
    assert_eq!(corner.up(), None);
    assert_eq!(corner.left(), None);
    assert_eq!(corner.right(), Some(1));
    assert_eq!(corner.down(), Some(3));

    let center = &grid.cells()[4];
    assert_eq!(center.up(), Some(1));
    assert_eq!(center.down(), Some(7));
    assert_eq!(center.left(), Some(3));
    assert_eq!(center.right(), Some(5));

    let last = &grid.cells()[8];
    assert_eq!(last.down(), None);
    assert_eq!(last.right(), None);
}

#[test]
fn test_mask_length_mismatch_is_rejected() {
    let result = TileGrid::build(3, 3, &[true; 8]);
    assert!(matches!(
        result,
        Err(GridConfigError::ShapeMismatch { expected: 9, actual: 8 })
    ));
}

#[test]
fn test_zero_dimension_is_rejected() {
    let result = TileGrid::build(0, 3, &[]);
    assert!(matches!(result, Err(GridConfigError::ZeroDimension { columns: 0, rows: 3 })));
}

#[test]
fn test_from_config_copies_mask() {
    let config = GridConfig {
        version: None,
        columns: 2,
        rows: 2,
        passable_tiles: vec![true, false, false, true],
    };
    let grid = TileGrid::from_config(&config).unwrap();

    assert_eq!(grid.passable_tiles(), &[true, false, false, true]);
    assert!(!grid.cells()[1].is_passable());
    assert!(grid.cells()[3].is_passable());
}

// ============================================================================
// Flow rule
// ============================================================================

#[test]
fn test_empty_cell_below_takes_everything() {
    // 1 column, 2 rows
    let mut grid = open_grid(1, 2);
    grid.set_capacity(0, 300);

    grid.advance_flow(0);

    assert_eq!(grid.cells()[0].capacity(), 0);
    assert_eq!(grid.cells()[1].capacity(), 300, "empty cell below receives the whole amount");
}

#[test]
fn test_empty_cell_below_skips_lateral_step() {
    // 3x2: middle of the top row has left/right neighbors that would equalize
    let mut grid = open_grid(3, 2);
    grid.set_capacity(0, 10);
    grid.set_capacity(1, 90);
    grid.set_capacity(2, 20);

    grid.advance_flow(1);

    assert_eq!(capacities(&grid), vec![10, 0, 20, 0, 90, 0]);
}

#[test]
fn test_downward_flow_saturates_at_max() {
    let mut grid = open_grid(1, 2);
    grid.set_capacity(0, 100);
    grid.set_capacity(1, 200);

    grid.advance_flow(0);

    assert_eq!(grid.cells()[1].capacity(), 255);
    assert_eq!(grid.cells()[0].capacity(), 45, "only the transferred 55 units leave the cell");
}

#[test]
fn test_downward_flow_moves_all_when_room() {
    let mut grid = open_grid(1, 2);
    grid.set_capacity(0, 40);
    grid.set_capacity(1, 100);

    grid.advance_flow(0);

    assert_eq!(grid.cells()[1].capacity(), 140);
    assert_eq!(grid.cells()[0].capacity(), 0);
}

#[test]
fn test_full_cell_below_blocks_gravity() {
    let mut grid = open_grid(1, 2);
    grid.set_capacity(0, 70);
    grid.set_capacity(1, 255);

    grid.advance_flow(0);

    assert_eq!(capacities(&grid), vec![70, 255]);
}

#[test]
fn test_three_way_split_keeps_remainder_in_processed_cell() {
    let mut grid = open_grid(3, 1);
    grid.set_capacity(0, 10);
    grid.set_capacity(1, 11);
    grid.set_capacity(2, 0);

    grid.advance_flow(1);

    // sum 21 -> 7 each, remainder 0
    assert_eq!(capacities(&grid), vec![7, 7, 7]);

    let mut grid = open_grid(3, 1);
    grid.set_capacity(0, 10);
    grid.set_capacity(1, 13);
    grid.set_capacity(2, 0);

    grid.advance_flow(1);

    // sum 23 -> 7 each, remainder 2 stays in the middle
    assert_eq!(capacities(&grid), vec![7, 9, 7]);
}

#[test]
fn test_three_way_split_conserves_total() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let mut grid = open_grid(3, 1);
        for i in 0..3 {
            grid.set_capacity(i, rng.u32(1..=255));
        }
        let before = grid.total_capacity();

        grid.advance_flow(1);

        assert_eq!(grid.total_capacity(), before);
        let left = grid.cells()[0].capacity();
        let right = grid.cells()[2].capacity();
        assert_eq!(left, right, "outer cells always get the same share");
    }
}

#[test]
fn test_two_way_split_with_only_left_passable() {
    let mut grid = TileGrid::build(3, 1, &[true, true, false]).unwrap();
    grid.set_capacity(0, 4);
    grid.set_capacity(1, 11);

    grid.advance_flow(1);

    // sum 15 -> 7 left, 8 stays
    assert_eq!(capacities(&grid), vec![7, 8, 0]);
}

#[test]
fn test_two_way_split_with_only_right_passable() {
    let mut grid = TileGrid::build(3, 1, &[false, true, true]).unwrap();
    grid.set_capacity(1, 9);
    grid.set_capacity(2, 0);

    grid.advance_flow(1);

    assert_eq!(capacities(&grid), vec![0, 5, 4]);
}

#[test]
fn test_edge_cell_splits_with_single_neighbor() {
    let mut grid = open_grid(2, 1);
    grid.set_capacity(0, 0);
    grid.set_capacity(1, 31);

    grid.advance_flow(1);

    assert_eq!(capacities(&grid), vec![15, 16]);
}

#[test]
fn test_partial_downflow_then_lateral_uses_updated_capacity() {
    // 3x2 grid, cell 1 has 100, below it 250 -> 5 go down, 95 spread laterally
    let mut grid = open_grid(3, 2);
    grid.set_capacity(1, 100);
    grid.set_capacity(4, 250);

    grid.advance_flow(1);

    assert_eq!(grid.cells()[4].capacity(), 255);
    // 0 + 95 + 0 = 95 -> 31 each, remainder 2
    assert_eq!(grid.cells()[0].capacity(), 31);
    assert_eq!(grid.cells()[1].capacity(), 33);
    assert_eq!(grid.cells()[2].capacity(), 31);
}

#[test]
fn test_impassable_cell_below_is_ignored() {
    let mut grid = TileGrid::build(1, 2, &[true, false]).unwrap();
    grid.set_capacity(0, 50);

    grid.advance_flow(0);

    assert_eq!(capacities(&grid), vec![50, 0]);
}

#[test]
fn test_single_cell_grid_never_moves_fluid() {
    let mut grid = open_grid(1, 1);
    grid.set_capacity(0, 123);

    grid.advance_flow(0);
    grid.flow_pass();

    assert_eq!(grid.cells()[0].capacity(), 123);
}

#[test]
fn test_empty_cell_is_a_no_op() {
    let mut grid = open_grid(3, 2);
    grid.set_capacity(0, 80);
    grid.set_capacity(2, 80);

    grid.advance_flow(1);

    assert_eq!(capacities(&grid), vec![80, 0, 80, 0, 0, 0]);
}

#[test]
fn test_single_pass_reprocesses_earlier_cells() {
    // Row-major: cell 0 moves into cell 1's lateral pool, then cell 1 pushes
    // some back into cell 0 within the same tick.
    let mut grid = open_grid(2, 1);
    grid.set_capacity(0, 11);
    grid.set_capacity(1, 0);

    grid.flow_pass();

    // cell 0: 11+0 -> 5 right, 6 stays. cell 1: 6+5 -> 5 left, 6 stays.
    assert_eq!(capacities(&grid), vec![5, 6]);
}

#[test]
fn test_flow_pass_conserves_total_on_random_grids() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..50 {
        let columns = rng.usize(1..12);
        let rows = rng.usize(1..12);
        let mask: Vec<bool> = (0..columns * rows).map(|_| rng.u8(..) > 60).collect();
        let mut grid = TileGrid::build(columns, rows, &mask).unwrap();
        for i in 0..grid.len() {
            grid.set_capacity(i, rng.u32(0..=255));
        }
        let before = grid.total_capacity();

        for _ in 0..10 {
            grid.flow_pass();
            assert_eq!(grid.total_capacity(), before, "flow pass must not create or destroy fluid");
        }
        for (i, cell) in grid.cells().iter().enumerate() {
            if !mask[i] {
                assert_eq!(cell.capacity(), 0, "impassable cell {} gained fluid", i);
            }
        }
    }
}

#[test]
fn test_fluid_settles_at_the_bottom() {
    let mut grid = open_grid(1, 4);
    grid.set_capacity(0, 200);

    for _ in 0..4 {
        grid.flow_pass();
    }

    assert_eq!(capacities(&grid), vec![0, 0, 0, 200]);
}

#[test]
fn test_lateral_split_near_u32_max_does_not_overflow() {
    let mut grid = TileGrid::build(3, 1, &[true; 3]).unwrap();
    for i in 0..3 {
        grid.set_capacity(i, u32::MAX);
    }

    grid.flow_pass();

    assert_eq!(capacities(&grid), vec![u32::MAX; 3]);
}

#[test]
fn test_lateral_split_of_huge_sum_is_exact() {
    let mut grid = TileGrid::build(2, 1, &[true; 2]).unwrap();
    grid.set_capacity(0, u32::MAX);
    grid.set_capacity(1, u32::MAX - 2);

    grid.advance_flow(0);

    // sum = 2 * MAX - 2, split evenly with no remainder
    assert_eq!(capacities(&grid), vec![u32::MAX - 1, u32::MAX - 1]);
}

// ============================================================================
// Mutation helpers
// ============================================================================

#[test]
fn test_blocking_zeroes_capacity_and_updates_mask() {
    let mut grid = open_grid(2, 2);
    grid.set_capacity(3, 99);

    grid.set_passable(3, false);

    assert_eq!(grid.cells()[3].capacity(), 0);
    assert!(!grid.cells()[3].is_passable());
    assert!(!grid.passable_tiles()[3]);

    grid.set_passable(3, true);

    assert_eq!(grid.cells()[3].capacity(), 0, "capacity is not restored when unblocking");
    assert!(grid.passable_tiles()[3]);
}

#[test]
fn test_add_capacity_is_unclamped_until_next_flow() {
    let mut grid = open_grid(1, 1);
    grid.add_capacity(0, 500);
    assert_eq!(grid.cells()[0].capacity(), 500);
}

#[test]
fn test_add_capacity_ignores_blocked_cells() {
    let mut grid = TileGrid::build(1, 1, &[false]).unwrap();
    grid.add_capacity(0, 500);
    assert_eq!(grid.cells()[0].capacity(), 0);
}

#[test]
fn test_drain_floors_at_zero() {
    let mut grid = open_grid(1, 1);
    grid.set_capacity(0, 60);
    grid.drain_capacity(0, 100);
    assert_eq!(grid.cells()[0].capacity(), 0);
}

#[test]
fn test_layout_bounds_are_half_open() {
    let layout = TileLayout::new(Vec2::new(100.0, 20.0), 10.0);

    assert!(layout.contains(0, 0, Vec2::new(100.0, 20.0)));
    assert!(layout.contains(0, 0, Vec2::new(109.9, 29.9)));
    assert!(!layout.contains(0, 0, Vec2::new(110.0, 25.0)));
    assert!(layout.contains(0, 1, Vec2::new(110.0, 25.0)));
    assert!(layout.contains(2, 3, Vec2::new(135.0, 45.0)));
}
