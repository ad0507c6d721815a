//! Obstacle hole filling.
//!
//! Two obstacles that touch only at a corner, with both cells between them
//! open, form a diagonal "pinch". The search happily cuts through such a
//! corner, which looks like moving through a wall. This pass removes one
//! side of every pinch so the obstacle layout reads the same way the search
//! treats it.
//!
//! # Example
//!
//! ```
//! use grid_astar::Grid;
//! use grid_types::CellCoord;
//!
//! let mut grid = Grid::from_ascii(
//!     "....\n\
//!      .#..\n\
//!      ..#.\n\
//!      ....",
//! )
//! .unwrap();
//!
//! assert_eq!(grid.fill_obstacle_holes(), 1);
//! assert!(grid.is_obstacle(CellCoord::new(1, 1)));
//! assert!(!grid.is_obstacle(CellCoord::new(2, 2)));
//!
//! // Nothing left to do.
//! assert_eq!(grid.fill_obstacle_holes(), 0);
//! ```

use grid_types::{CellCoord, Direction};
use tracing::{debug, info};

use crate::grid::Grid;

/// Clears diagonal pinch obstacles until none remain.
///
/// Scans interior cells (the outer ring is never the scanned cell, although
/// it can be the cleared diagonal) in row-major order. For each obstacle,
/// each diagonal neighbor in NW, NE, SW, SE order is cleared when it is an
/// obstacle and both orthogonal cells bridging the two are open.
///
/// A single scan can expose new pinches (clearing a cell opens a bridge for
/// an earlier pair), so scans repeat until one clears nothing. Every clear
/// removes an obstacle, which bounds the number of scans by the obstacle
/// count. The result is a fixed point: calling this again returns 0.
///
/// Returns the total number of obstacles removed.
pub fn fill_obstacle_holes(grid: &mut Grid) -> usize {
    let mut total = 0;
    let mut passes = 0;
    loop {
        let cleared = fill_pass(grid);
        passes += 1;
        debug!(pass = passes, cleared, "Obstacle hole pass");
        if cleared == 0 {
            break;
        }
        total += cleared;
    }

    if total > 0 {
        info!(cleared = total, passes, "Filled obstacle holes");
    }
    total
}

/// One row-major scan. Returns the number of obstacles cleared.
fn fill_pass(grid: &mut Grid) -> usize {
    let (rows, columns) = (grid.rows(), grid.columns());
    let mut cleared = 0;

    for row in 1..rows.saturating_sub(1) {
        for column in 1..columns.saturating_sub(1) {
            let coord = CellCoord::new(row, column);
            if !grid.is_obstacle(coord) {
                continue;
            }

            for diagonal in Direction::DIAGONALS {
                if let Some(pinched) = pinched_diagonal(grid, coord, diagonal) {
                    if let Some(cell) = grid.cell_mut(pinched) {
                        cell.set_obstacle(false);
                        cleared += 1;
                    }
                }
            }
        }
    }

    cleared
}

/// Returns the diagonal neighbor of `coord` if it forms a pinch with it.
fn pinched_diagonal(grid: &Grid, coord: CellCoord, diagonal: Direction) -> Option<CellCoord> {
    let (rows, columns) = (grid.rows(), grid.columns());
    let (vertical, horizontal) = diagonal.components()?;

    let corner = coord.step(diagonal, rows, columns)?;
    let bridge_v = coord.step(vertical, rows, columns)?;
    let bridge_h = coord.step(horizontal, rows, columns)?;

    (grid.is_obstacle(corner) && grid.is_open(bridge_v) && grid.is_open(bridge_h))
        .then_some(corner)
}

/// Returns `true` if the grid has no diagonal pinch left.
#[must_use]
pub fn has_no_holes(grid: &Grid) -> bool {
    let (rows, columns) = (grid.rows(), grid.columns());
    (1..rows.saturating_sub(1)).all(|row| {
        (1..columns.saturating_sub(1)).all(|column| {
            let coord = CellCoord::new(row, column);
            !grid.is_obstacle(coord)
                || Direction::DIAGONALS
                    .iter()
                    .all(|&d| pinched_diagonal(grid, coord, d).is_none())
        })
    })
}
