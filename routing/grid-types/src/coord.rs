//! Cell coordinates and the eight movement directions.
//!
//! Rows grow downwards and columns grow to the right, so "north" is
//! `row - 1` and "west" is `column - 1`.

use std::fmt;

/// Cost of a straight (orthogonal) step, in fixed-point units.
pub const STRAIGHT_STEP_COST: u32 = 10;

/// Cost of a diagonal step, in fixed-point units.
///
/// `14 / 10` approximates `sqrt(2)`.
pub const DIAGONAL_STEP_COST: u32 = 14;

/// A `(row, column)` position on a grid.
///
/// # Example
///
/// ```
/// use grid_types::CellCoord;
///
/// let coord = CellCoord::new(2, 3);
/// assert_eq!(coord.row, 2);
/// assert_eq!(coord.column, 3);
/// assert_eq!(coord.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl CellCoord {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the coordinate as a `(row, column)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Returns the neighbor in `direction`, or `None` if it would fall
    /// outside a `rows` × `columns` grid.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::{CellCoord, Direction};
    ///
    /// let corner = CellCoord::new(0, 0);
    /// assert_eq!(corner.step(Direction::North, 3, 3), None);
    /// assert_eq!(corner.step(Direction::SouthEast, 3, 3), Some(CellCoord::new(1, 1)));
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, rows: usize, columns: usize) -> Option<Self> {
        let (d_row, d_column) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        (row < rows && column < columns).then_some(Self { row, column })
    }

    /// Manhattan distance `|Δrow| + |Δcolumn|`, in cells.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::CellCoord;
    ///
    /// let a = CellCoord::new(0, 0);
    /// let b = CellCoord::new(3, 4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// Chebyshev distance `max(|Δrow|, |Δcolumn|)`, in cells.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> usize {
        let d_row = self.row.abs_diff(other.row);
        let d_column = self.column.abs_diff(other.column);
        if d_row > d_column { d_row } else { d_column }
    }

    /// Returns `true` if `other` shares a row or a column with `self`.
    #[must_use]
    pub const fn is_in_line_with(self, other: Self) -> bool {
        self.row == other.row || self.column == other.column
    }

    /// Returns `true` if `other` is one of the eight cells around `self`.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Cost of a single move from `self` to the adjacent cell `other`.
    ///
    /// Returns `None` when the two cells are not adjacent.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::{CellCoord, DIAGONAL_STEP_COST, STRAIGHT_STEP_COST};
    ///
    /// let c = CellCoord::new(1, 1);
    /// assert_eq!(c.step_cost(CellCoord::new(0, 1)), Some(STRAIGHT_STEP_COST));
    /// assert_eq!(c.step_cost(CellCoord::new(2, 2)), Some(DIAGONAL_STEP_COST));
    /// assert_eq!(c.step_cost(CellCoord::new(3, 3)), None);
    /// ```
    #[must_use]
    pub const fn step_cost(self, other: Self) -> Option<u32> {
        if !self.is_adjacent(other) {
            None
        } else if self.is_in_line_with(other) {
            Some(STRAIGHT_STEP_COST)
        } else {
            Some(DIAGONAL_STEP_COST)
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// One of the eight compass directions a move can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Up one row.
    North,
    /// Down one row.
    South,
    /// Left one column.
    West,
    /// Right one column.
    East,
    /// Up and left.
    NorthWest,
    /// Up and right.
    NorthEast,
    /// Down and left.
    SouthWest,
    /// Down and right.
    SouthEast,
}

impl Direction {
    /// All directions in neighbor-expansion order: N, S, W, E, NW, NE, SW, SE.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::West,
        Self::East,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The four diagonal directions, in expansion order.
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// `(Δrow, Δcolumn)` for this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthWest => (1, -1),
            Self::SouthEast => (1, 1),
        }
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthWest | Self::SouthEast
        )
    }

    /// Splits a diagonal into its vertical and horizontal components.
    ///
    /// Returns `None` for straight directions.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::Direction;
    ///
    /// assert_eq!(
    ///     Direction::NorthWest.components(),
    ///     Some((Direction::North, Direction::West)),
    /// );
    /// assert_eq!(Direction::East.components(), None);
    /// ```
    #[must_use]
    pub const fn components(self) -> Option<(Self, Self)> {
        match self {
            Self::NorthWest => Some((Self::North, Self::West)),
            Self::NorthEast => Some((Self::North, Self::East)),
            Self::SouthWest => Some((Self::South, Self::West)),
            Self::SouthEast => Some((Self::South, Self::East)),
            Self::North | Self::South | Self::West | Self::East => None,
        }
    }

    /// Cost of one step in this direction.
    #[must_use]
    pub const fn cost(self) -> u32 {
        if self.is_diagonal() {
            DIAGONAL_STEP_COST
        } else {
            STRAIGHT_STEP_COST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_in_bounds() {
        let c = CellCoord::new(1, 1);
        let stepped: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|&d| c.step(d, 3, 3))
            .collect();
        assert_eq!(
            stepped,
            vec![
                CellCoord::new(0, 1),
                CellCoord::new(2, 1),
                CellCoord::new(1, 0),
                CellCoord::new(1, 2),
                CellCoord::new(0, 0),
                CellCoord::new(0, 2),
                CellCoord::new(2, 0),
                CellCoord::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_step_off_far_edge() {
        let c = CellCoord::new(2, 2);
        assert_eq!(c.step(Direction::South, 3, 3), None);
        assert_eq!(c.step(Direction::East, 3, 3), None);
        assert_eq!(c.step(Direction::NorthWest, 3, 3), Some(CellCoord::new(1, 1)));
    }

    #[test]
    fn test_distances() {
        let a = CellCoord::new(5, 1);
        let b = CellCoord::new(2, 7);
        assert_eq!(a.manhattan_distance(b), 9);
        assert_eq!(a.chebyshev_distance(b), 6);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_adjacency() {
        let c = CellCoord::new(4, 4);
        assert!(c.is_adjacent(CellCoord::new(3, 5)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(CellCoord::new(6, 4)));
    }

    #[test]
    fn test_direction_costs_match_step_cost() {
        let c = CellCoord::new(1, 1);
        for d in Direction::ALL {
            let n = c.step(d, 3, 3).unwrap_or(c);
            assert_eq!(c.step_cost(n), Some(d.cost()));
        }
    }

    #[test]
    fn test_diagonal_components() {
        for d in Direction::DIAGONALS {
            let (v, h) = d.components().unwrap_or((d, d));
            assert!(!v.is_diagonal());
            assert!(!h.is_diagonal());
            let (dr, dc) = d.offset();
            assert_eq!(v.offset().0, dr);
            assert_eq!(h.offset().1, dc);
        }
    }
}
