//! A* search on bounded 2D grids with 8-way movement.
//!
//! This crate provides the grid model and the search engine built on the
//! `grid-types` value types.
//!
//! # Overview
//!
//! - **Grid** ([`Grid`]): dense R×C cell matrix with random obstacle
//!   generation and ASCII fixtures
//! - **Hole filling** ([`holes`]): removes diagonal obstacle pinch points
//! - **Neighbors** ([`NeighborGenerator`]): open cells in N, S, W, E, NW, NE,
//!   SW, SE order
//! - **Search** ([`SearchSession`], [`run_search`]): A* with straight steps
//!   costing 10 and diagonal steps costing 14, driven step by step or run to
//!   completion, emitting [`grid_types::SearchEvent`]s
//! - **Board** ([`Board`]): endpoint selection and the click-driven flow
//!
//! # Quick Start
//!
//! ```
//! use grid_astar::{Grid, run_search};
//! use grid_types::{CellCoord, EventKind, GridConfig, SearchConfig};
//!
//! // Seeded 20×20 grid, 20% obstacles, holes filled
//! let config = GridConfig::default().with_seed(7);
//! let mut grid = Grid::from_config(&config).unwrap();
//!
//! // Pick two open cells
//! let open: Vec<_> = grid
//!     .cells()
//!     .iter()
//!     .filter(|c| !c.is_obstacle())
//!     .map(|c| c.coord())
//!     .collect();
//! let (origin, destination) = (open[0], open[open.len() - 1]);
//!
//! let report = run_search(&mut grid, origin, destination, &SearchConfig::default()).unwrap();
//! if let Some(path) = report.path() {
//!     assert_eq!(path.origin(), Some(origin));
//!     assert!(path.is_contiguous());
//! }
//! assert!(report.events_of(EventKind::Closed).count() > 0);
//! ```
//!
//! # Search Rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Selection | Lowest `f`, then lowest `h`, then earliest insertion |
//! | Updates | An open cell is updated only by a strictly lower `g` |
//! | Origin | Never offered as a neighbor |
//! | Corners | Diagonal moves between two obstacles are allowed |
//! | Unreachable | Reported as [`grid_types::SearchOutcome::NoPathFound`], not an error |

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod astar;
pub mod board;
pub mod grid;
pub mod heuristics;
pub mod holes;
pub mod neighbors;
pub mod open_set;
pub mod session;

// Re-export main types for convenience
pub use astar::{SearchReport, find_path, run_search};
pub use board::{Board, Selection};
pub use grid::Grid;
pub use heuristics::compute_heuristic;
pub use neighbors::NeighborGenerator;
pub use open_set::OpenSet;
pub use session::{SearchSession, SearchStatus};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use grid_types::{CellCoord, EventKind, GridConfig, SearchConfig, SearchOutcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(row: usize, column: usize) -> CellCoord {
        CellCoord::new(row, column)
    }

    /// Open 3×3 grid, corner to corner.
    #[test]
    fn test_three_by_three_diagonal() {
        let mut grid = Grid::new(3, 3).unwrap();
        let report = run_search(&mut grid, c(0, 0), c(2, 2), &SearchConfig::default()).unwrap();
        let path = report.path().unwrap();
        assert_eq!(path.cells(), &[c(0, 0), c(1, 1), c(2, 2)]);
        assert_eq!(path.cost(), Some(28));
    }

    /// Destination surrounded by eight obstacles, no hole filling.
    #[test]
    fn test_walled_in_destination() {
        let mut grid = Grid::from_obstacles(
            7,
            7,
            &[
                c(2, 2),
                c(2, 3),
                c(2, 4),
                c(3, 2),
                c(3, 4),
                c(4, 2),
                c(4, 3),
                c(4, 4),
            ],
        )
        .unwrap();
        let report = run_search(&mut grid, c(0, 0), c(3, 3), &SearchConfig::default()).unwrap();
        assert_eq!(report.outcome(), &SearchOutcome::NoPathFound);
    }

    /// Origin on an obstacle.
    #[test]
    fn test_origin_on_obstacle() {
        let grid = Grid::from_obstacles(4, 4, &[c(1, 2)]).unwrap();
        let mut board = Board::from_grid(grid, SearchConfig::default());
        assert!(board.set_origin(c(1, 2)).unwrap_err().is_invalid_cell());
    }

    /// Generated grid, full click flow, reset, rerun.
    #[test]
    fn test_generated_board_workflow() {
        let config = GridConfig::default().with_obstacle_probability(0.25);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut board = Board::generate(config, SearchConfig::default(), &mut rng).unwrap();

        let open: Vec<_> = board
            .grid()
            .cells()
            .iter()
            .filter(|cell| !cell.is_obstacle())
            .map(|cell| cell.coord())
            .collect();
        let (origin, destination) = (open[0], open[open.len() - 1]);

        assert_eq!(board.select(origin).unwrap(), Selection::OriginSet);
        let Selection::Searched(first) = board.select(destination).unwrap() else {
            panic!("expected a search");
        };

        if let Some(path) = first.path() {
            assert_eq!(path.origin(), Some(origin));
            assert_eq!(path.destination(), Some(destination));
            assert!(path.is_contiguous());
            assert!(path.cells().iter().all(|&p| board.grid().is_open(p)));
            let path_events = first.events_of(EventKind::PathCell).count();
            assert_eq!(path_events, path.len());
        }

        board.reset_search();
        let second = board.run_search().unwrap();
        assert_eq!(first.outcome(), second.outcome());
    }
}
