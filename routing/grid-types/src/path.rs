//! Paths through a grid.
//!
//! # Example
//!
//! ```
//! use grid_types::{CellCoord, GridPath};
//!
//! let path = GridPath::new(vec![
//!     CellCoord::new(0, 0),
//!     CellCoord::new(1, 1),
//!     CellCoord::new(2, 2),
//! ]);
//!
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.cost(), Some(28));
//! assert!(path.is_contiguous());
//! ```

use crate::coord::CellCoord;

/// An ordered sequence of cells from origin to destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    cells: Vec<CellCoord>,
}

impl GridPath {
    /// Creates a path from its cells.
    #[must_use]
    pub const fn new(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// The cells, origin first.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Consumes the path and returns its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<CellCoord> {
        self.cells
    }

    /// Number of cells, endpoints included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell.
    #[must_use]
    pub fn origin(&self) -> Option<CellCoord> {
        self.cells.first().copied()
    }

    /// Last cell.
    #[must_use]
    pub fn destination(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }

    /// Returns `true` if the path visits `coord`.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (CellCoord, CellCoord)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if every consecutive pair is 8-adjacent.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.steps().all(|(a, b)| a.is_adjacent(b))
    }

    /// Weighted length: 10 per straight step, 14 per diagonal step.
    ///
    /// Returns `None` if the path is not contiguous.
    #[must_use]
    pub fn cost(&self) -> Option<u32> {
        self.steps().try_fold(0u32, |total, (a, b)| {
            a.step_cost(b).map(|c| total.saturating_add(c))
        })
    }

    /// Number of diagonal steps.
    #[must_use]
    pub fn diagonal_steps(&self) -> usize {
        self.steps()
            .filter(|(a, b)| a.is_adjacent(*b) && !a.is_in_line_with(*b))
            .count()
    }
}

impl From<Vec<CellCoord>> for GridPath {
    fn from(cells: Vec<CellCoord>) -> Self {
        Self::new(cells)
    }
}

impl<'a> IntoIterator for &'a GridPath {
    type Item = &'a CellCoord;
    type IntoIter = std::slice::Iter<'a, CellCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
