//! Heuristic functions for the search.
//!
//! # Example
//!
//! ```
//! use grid_astar::heuristics::compute_heuristic;
//! use grid_types::{CellCoord, Heuristic};
//!
//! let from = CellCoord::new(0, 0);
//! let to = CellCoord::new(3, 4);
//!
//! assert_eq!(compute_heuristic(from, to, Heuristic::Manhattan), 7);
//! assert_eq!(compute_heuristic(from, to, Heuristic::Octile), 52); // 3*14 + 1*10
//! assert_eq!(compute_heuristic(from, to, Heuristic::Zero), 0);
//! ```

use grid_types::{CellCoord, DIAGONAL_STEP_COST, Heuristic, STRAIGHT_STEP_COST};

/// Estimates the remaining cost from `from` to `to`.
#[must_use]
pub fn compute_heuristic(from: CellCoord, to: CellCoord, heuristic: Heuristic) -> u32 {
    match heuristic {
        Heuristic::Manhattan => manhattan_distance(from, to),
        Heuristic::Octile => octile_distance(from, to),
        Heuristic::Zero => 0,
    }
}

/// `|Δrow| + |Δcolumn|`, in cells.
#[must_use]
pub fn manhattan_distance(from: CellCoord, to: CellCoord) -> u32 {
    to_cost(from.manhattan_distance(to))
}

/// Diagonal distance in step-cost units.
///
/// Takes `min(|Δrow|, |Δcolumn|)` diagonal steps and the rest straight.
#[must_use]
pub fn octile_distance(from: CellCoord, to: CellCoord) -> u32 {
    let d_row = from.row.abs_diff(to.row);
    let d_column = from.column.abs_diff(to.column);
    let diagonal = to_cost(d_row.min(d_column));
    let straight = to_cost(d_row.max(d_column) - d_row.min(d_column));
    diagonal
        .saturating_mul(DIAGONAL_STEP_COST)
        .saturating_add(straight.saturating_mul(STRAIGHT_STEP_COST))
}

fn to_cost(cells: usize) -> u32 {
    u32::try_from(cells).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, column: usize) -> CellCoord {
        CellCoord::new(row, column)
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan_distance(c(0, 0), c(0, 0)), 0);
        assert_eq!(manhattan_distance(c(19, 0), c(0, 19)), 38);
        assert_eq!(manhattan_distance(c(2, 5), c(4, 1)), 6);
    }

    #[test]
    fn test_octile_straight_and_diagonal() {
        assert_eq!(octile_distance(c(0, 0), c(0, 5)), 50);
        assert_eq!(octile_distance(c(0, 0), c(5, 5)), 70);
        assert_eq!(octile_distance(c(4, 4), c(0, 1)), 3 * 14 + 10);
    }

    #[test]
    fn test_manhattan_is_consistent_on_single_steps() {
        // |h(a) - h(b)| never exceeds the step cost between neighbors.
        let goal = c(7, 3);
        for row in 1..9 {
            for column in 1..9 {
                let a = c(row, column);
                for (dr, dc) in [(0, 1), (1, 0), (1, 1)] {
                    let b = c(row + dr, column + dc);
                    let ha = manhattan_distance(a, goal);
                    let hb = manhattan_distance(b, goal);
                    assert!(Some(ha.abs_diff(hb)) <= a.step_cost(b));
                }
            }
        }
    }

    #[test]
    fn test_heuristics_never_exceed_octile() {
        let goal = c(10, 2);
        for row in 0..12 {
            for column in 0..12 {
                let a = c(row, column);
                let exact = octile_distance(a, goal);
                assert!(compute_heuristic(a, goal, Heuristic::Manhattan) <= exact);
                assert!(compute_heuristic(a, goal, Heuristic::Zero) <= exact);
            }
        }
    }
}
