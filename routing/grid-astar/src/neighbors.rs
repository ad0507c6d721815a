//! Neighbor generation for grid search.
//!
//! # Example
//!
//! ```
//! use grid_astar::{Grid, NeighborGenerator};
//! use grid_types::CellCoord;
//!
//! let grid = Grid::new(5, 5).unwrap();
//! let generator = NeighborGenerator::new(&grid);
//!
//! let neighbors: Vec<_> = generator.neighbors(CellCoord::new(2, 2)).collect();
//! assert_eq!(neighbors.len(), 8);
//! ```

use grid_types::{CellCoord, Direction};

use crate::grid::Grid;

/// Produces the open cells around a coordinate.
///
/// Candidates come in N, S, W, E, NW, NE, SW, SE order. Off-grid cells and
/// obstacles are skipped, and so is the excluded cell (the search origin),
/// which is never offered as a neighbor.
///
/// Diagonal moves are allowed even when both cells bridging the corner are
/// obstacles; hole filling keeps such corners from looking like walls.
pub struct NeighborGenerator<'a> {
    grid: &'a Grid,
    excluded: Option<CellCoord>,
}

impl<'a> NeighborGenerator<'a> {
    /// Creates a generator over `grid` with nothing excluded.
    #[must_use]
    pub const fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            excluded: None,
        }
    }

    /// Leaves `coord` out of every neighbor list.
    #[must_use]
    pub const fn excluding(mut self, coord: Option<CellCoord>) -> Self {
        self.excluded = coord;
        self
    }

    /// The excluded cell, if any.
    #[must_use]
    pub const fn excluded(&self) -> Option<CellCoord> {
        self.excluded
    }

    /// Iterates over the open neighbors of `coord`.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_astar::{Grid, NeighborGenerator};
    /// use grid_types::CellCoord;
    ///
    /// let grid = Grid::from_ascii("#..\n...\n...").unwrap();
    /// let generator = NeighborGenerator::new(&grid);
    ///
    /// // Top edge: the row above is off-grid and (0, 0) is blocked.
    /// let neighbors: Vec<_> = generator.neighbors(CellCoord::new(0, 1)).collect();
    /// assert_eq!(
    ///     neighbors,
    ///     vec![
    ///         CellCoord::new(1, 1),
    ///         CellCoord::new(0, 2),
    ///         CellCoord::new(1, 0),
    ///         CellCoord::new(1, 2),
    ///     ],
    /// );
    /// ```
    pub fn neighbors(&self, coord: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        self.successors(coord).map(|(n, _)| n)
    }

    /// Iterates over the open neighbors of `coord` together with the cost
    /// of stepping onto each.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_astar::{Grid, NeighborGenerator};
    /// use grid_types::CellCoord;
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// let costs: Vec<u32> = NeighborGenerator::new(&grid)
    ///     .successors(CellCoord::new(1, 1))
    ///     .map(|(_, cost)| cost)
    ///     .collect();
    /// assert_eq!(costs, vec![10, 10, 10, 10, 14, 14, 14, 14]);
    /// ```
    pub fn successors(&self, coord: CellCoord) -> impl Iterator<Item = (CellCoord, u32)> + '_ {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        Direction::ALL.into_iter().filter_map(move |direction| {
            let n = coord.step(direction, rows, columns)?;
            (self.grid.is_open(n) && Some(n) != self.excluded).then_some((n, direction.cost()))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn c(row: usize, column: usize) -> CellCoord {
        CellCoord::new(row, column)
    }

    #[test]
    fn test_reference_order() {
        let grid = Grid::new(3, 3).unwrap();
        let neighbors: Vec<_> = NeighborGenerator::new(&grid).neighbors(c(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                c(0, 1),
                c(2, 1),
                c(1, 0),
                c(1, 2),
                c(0, 0),
                c(0, 2),
                c(2, 0),
                c(2, 2)
            ]
        );
    }

    #[test]
    fn test_obstacles_skipped() {
        let grid = Grid::from_ascii(".#.\n...\n..#").unwrap();
        let neighbors: Vec<_> = NeighborGenerator::new(&grid).neighbors(c(1, 1)).collect();
        assert_eq!(neighbors.len(), 6);
        assert!(!neighbors.contains(&c(0, 1)));
        assert!(!neighbors.contains(&c(2, 2)));
    }

    #[test]
    fn test_excluded_cell_skipped() {
        let grid = Grid::new(3, 3).unwrap();
        let generator = NeighborGenerator::new(&grid).excluding(Some(c(0, 0)));
        let neighbors: Vec<_> = generator.neighbors(c(1, 1)).collect();
        assert_eq!(neighbors.len(), 7);
        assert!(!neighbors.contains(&c(0, 0)));
        assert_eq!(generator.excluded(), Some(c(0, 0)));
    }

    #[test]
    fn test_corner_cell() {
        let grid = Grid::new(4, 4).unwrap();
        let neighbors: Vec<_> = NeighborGenerator::new(&grid).neighbors(c(3, 3)).collect();
        assert_eq!(neighbors, vec![c(2, 3), c(3, 2), c(2, 2)]);
    }

    #[test]
    fn test_diagonal_squeeze_allowed() {
        // Both bridges blocked, the diagonal is still offered.
        let grid = Grid::from_ascii(".#\n#.").unwrap();
        let neighbors: Vec<_> = NeighborGenerator::new(&grid).neighbors(c(0, 0)).collect();
        assert_eq!(neighbors, vec![c(1, 1)]);
    }

    #[test]
    fn test_successor_costs() {
        let grid = Grid::new(3, 3).unwrap();
        for (n, cost) in NeighborGenerator::new(&grid).successors(c(0, 0)) {
            let expected = if n.is_in_line_with(c(0, 0)) { 10 } else { 14 };
            assert_eq!(cost, expected);
        }
    }
}
