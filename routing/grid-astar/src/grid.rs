//! The bounded grid model.
//!
//! A [`Grid`] is a dense row-major matrix of [`Cell`]s. Dimensions are fixed
//! at construction; a fresh layout means a fresh grid.

use std::fmt;

use grid_types::config::validate_dimensions;
use grid_types::{Cell, CellCoord, GridConfig, InvalidCellReason, RoutingError};
use rand::{Rng, RngCore, SeedableRng};
use tracing::info;

use crate::holes;
use crate::neighbors::NeighborGenerator;

/// Character used for obstacles in the ASCII form.
pub const OBSTACLE_CHAR: char = '#';
/// Character used for open cells in the ASCII form.
pub const OPEN_CHAR: char = '.';

/// A fixed-size R×C matrix of cells.
///
/// # Example
///
/// ```
/// use grid_astar::Grid;
/// use grid_types::CellCoord;
///
/// let grid = Grid::from_ascii(
///     "...\n\
///      .#.\n\
///      ...",
/// )
/// .unwrap();
///
/// assert_eq!(grid.rows(), 3);
/// assert!(grid.is_obstacle(CellCoord::new(1, 1)));
/// assert_eq!(grid.obstacle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major storage, `rows * columns` long.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an obstacle-free grid.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if either dimension is below 2.
    pub fn new(rows: usize, columns: usize) -> Result<Self, RoutingError> {
        Self::from_fn(rows, columns, |_| false)
    }

    /// Creates a grid whose obstacle flags come from `is_obstacle`, called
    /// once per cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if either dimension is below 2
    /// or the cells cannot be allocated.
    pub fn from_fn(
        rows: usize,
        columns: usize,
        mut is_obstacle: impl FnMut(CellCoord) -> bool,
    ) -> Result<Self, RoutingError> {
        validate_dimensions(rows, columns)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(rows.saturating_mul(columns))
            .map_err(|e| {
                RoutingError::invalid_config(format!(
                    "cannot allocate a {rows}x{columns} grid: {e}"
                ))
            })?;
        for row in 0..rows {
            for column in 0..columns {
                let coord = CellCoord::new(row, column);
                cells.push(Cell::new(coord, is_obstacle(coord)));
            }
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid with obstacles at the listed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for undersized grids and
    /// [`RoutingError::OutOfBounds`] if any obstacle lies outside the grid.
    pub fn from_obstacles(
        rows: usize,
        columns: usize,
        obstacles: &[CellCoord],
    ) -> Result<Self, RoutingError> {
        let mut grid = Self::new(rows, columns)?;
        for &coord in obstacles {
            grid.set_obstacle(coord, true)?;
        }
        Ok(grid)
    }

    /// Parses a grid from lines of `#` (obstacle) and `.` (open).
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for unknown characters, ragged
    /// rows, or undersized grids.
    pub fn from_ascii(text: &str) -> Result<Self, RoutingError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());

        let mut flags = Vec::with_capacity(rows.saturating_mul(columns));
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(RoutingError::invalid_config(format!(
                    "row {row} has {} cells, expected {columns}",
                    line.chars().count()
                )));
            }
            for ch in line.chars() {
                match ch {
                    OBSTACLE_CHAR => flags.push(true),
                    OPEN_CHAR => flags.push(false),
                    other => {
                        return Err(RoutingError::invalid_config(format!(
                            "unexpected character '{other}' in row {row}"
                        )));
                    }
                }
            }
        }

        let mut flags = flags.into_iter();
        Self::from_fn(rows, columns, |_| flags.next().unwrap_or(false))
    }

    /// Builds a grid by rolling each cell independently: a cell becomes an
    /// obstacle when a uniform draw in `[0, 1)` falls below the configured
    /// probability. Holes are filled afterwards if the configuration asks
    /// for it.
    ///
    /// The seed in `config` is ignored; the caller's `rng` is used as is.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the configuration does not
    /// validate.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_astar::Grid;
    /// use grid_types::GridConfig;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let config = GridConfig::default().with_obstacle_probability(0.3);
    /// let a = Grid::generate(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    /// let b = Grid::generate(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        config: &GridConfig,
        rng: &mut R,
    ) -> Result<Self, RoutingError> {
        config.validate()?;
        let probability = config.obstacle_probability();
        let mut grid = Self::from_fn(config.rows(), config.columns(), |_| {
            rng.r#gen::<f64>() < probability
        })?;

        let rolled = grid.obstacle_count();
        let cleared = if config.fill_holes() {
            grid.fill_obstacle_holes()
        } else {
            0
        };

        info!(
            rows = grid.rows,
            columns = grid.columns,
            obstacles = grid.obstacle_count(),
            rolled,
            cleared,
            "Generated grid"
        );
        Ok(grid)
    }

    /// Builds a grid from a configuration alone, seeding from
    /// [`GridConfig::seed`] when present and from the thread RNG otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn from_config(config: &GridConfig) -> Result<Self, RoutingError> {
        let mut rng: Box<dyn RngCore> = if let Some(seed) = config.seed() {
            Box::new(rand::rngs::StdRng::seed_from_u64(seed))
        } else {
            Box::new(rand::thread_rng())
        };
        Self::generate(config, rng.as_mut())
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: grids are at least 2×2.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `coord` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.columns + coord.column)
    }

    fn out_of_bounds(&self, coord: CellCoord) -> RoutingError {
        RoutingError::OutOfBounds {
            coord,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] if `coord` lies outside the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_astar::Grid;
    ///
    /// let grid = Grid::new(4, 4).unwrap();
    /// assert!(grid.get_cell((3, 3)).is_ok());
    /// assert!(grid.get_cell((4, 0)).unwrap_err().is_out_of_bounds());
    /// ```
    pub fn get_cell(&self, coord: impl Into<CellCoord>) -> Result<&Cell, RoutingError> {
        let coord = coord.into();
        self.cell(coord).ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Returns the cell at `coord`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.index(coord).and_then(|i| self.cells.get(i))
    }

    /// Mutable access to the cell at `coord`, or `None` if out of bounds.
    pub fn cell_mut(&mut self, coord: CellCoord) -> Option<&mut Cell> {
        self.index(coord).and_then(|i| self.cells.get_mut(i))
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Returns `true` if `coord` is an in-bounds obstacle.
    #[must_use]
    pub fn is_obstacle(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(Cell::is_obstacle)
    }

    /// Returns `true` if `coord` is an in-bounds open cell.
    #[must_use]
    pub fn is_open(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(|cell| !cell.is_obstacle())
    }

    /// Sets or clears the obstacle flag at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] if `coord` lies outside the grid.
    pub fn set_obstacle(
        &mut self,
        coord: CellCoord,
        is_obstacle: bool,
    ) -> Result<(), RoutingError> {
        let error = self.out_of_bounds(coord);
        let cell = self.cell_mut(coord).ok_or(error)?;
        cell.set_obstacle(is_obstacle);
        Ok(())
    }

    /// Number of obstacle cells.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_obstacle()).count()
    }

    /// Checks that `coord` can serve as an origin or destination.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] outside the grid and
    /// [`RoutingError::InvalidCell`] on obstacles.
    pub fn validate_endpoint(&self, coord: CellCoord) -> Result<(), RoutingError> {
        let cell = self.cell(coord).ok_or_else(|| self.out_of_bounds(coord))?;
        if cell.is_obstacle() {
            return Err(RoutingError::invalid_cell(coord, InvalidCellReason::Obstacle));
        }
        Ok(())
    }

    /// Clears every cell's `g`, `h` and parent link. Obstacles are kept.
    pub fn reset_costs(&mut self) {
        for cell in &mut self.cells {
            cell.clear_costs();
        }
    }

    /// Lists the open neighbors of `coord` in N, S, W, E, NW, NE, SW, SE
    /// order, leaving out `origin` when given.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] if `coord` lies outside the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_astar::Grid;
    /// use grid_types::CellCoord;
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// let origin = CellCoord::new(0, 1);
    ///
    /// let neighbors = grid.find_neighbors(CellCoord::new(1, 1), Some(origin)).unwrap();
    /// assert_eq!(neighbors.len(), 7);
    /// assert!(!neighbors.contains(&origin));
    /// ```
    pub fn find_neighbors(
        &self,
        coord: CellCoord,
        origin: Option<CellCoord>,
    ) -> Result<Vec<CellCoord>, RoutingError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(NeighborGenerator::new(self)
            .excluding(origin)
            .neighbors(coord)
            .collect())
    }

    /// Clears diagonal obstacle pinch points. See [`holes::fill_obstacle_holes`].
    ///
    /// Returns the number of obstacles removed.
    pub fn fill_obstacle_holes(&mut self) -> usize {
        holes::fill_obstacle_holes(self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.row_slices().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let ch = if cell.is_obstacle() {
                    OBSTACLE_CHAR
                } else {
                    OPEN_CHAR
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_is_open() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.obstacle_count(), 0);
        assert!(grid.cells().iter().all(|c| !c.is_annotated()));
    }

    #[test]
    fn test_undersized_grid_rejected() {
        assert!(Grid::new(1, 5).unwrap_err().is_invalid_config());
        assert!(Grid::new(5, 0).unwrap_err().is_invalid_config());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(Grid::new(usize::MAX / 2, 4).unwrap_err().is_invalid_config());
        assert!(Grid::new(4, usize::MAX).unwrap_err().is_invalid_config());

        let config = GridConfig::default().with_size(usize::MAX / 2, 4);
        assert!(Grid::from_config(&config).unwrap_err().is_invalid_config());
    }

    #[test]
    fn test_cells_know_their_coordinates() {
        let grid = Grid::new(4, 3).unwrap();
        for (i, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.coord(), CellCoord::new(i / 3, i % 3));
        }
        assert_eq!(grid.get_cell((2, 1)).unwrap().coord(), CellCoord::new(2, 1));
    }

    #[test]
    fn test_get_cell_out_of_bounds() {
        let grid = Grid::new(4, 3).unwrap();
        let err = grid.get_cell((0, 3)).unwrap_err();
        assert!(matches!(
            err,
            RoutingError::OutOfBounds {
                rows: 4,
                columns: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_ascii_round_trip() {
        let text = "#..\n.#.\n..#";
        let grid = Grid::from_ascii(text).unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.obstacle_count(), 3);
    }

    #[test]
    fn test_ascii_rejects_ragged_rows() {
        let err = Grid::from_ascii("...\n..").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_ascii_rejects_unknown_chars() {
        assert!(Grid::from_ascii("..x\n...").is_err());
    }

    #[test]
    fn test_from_obstacles_bounds_checked() {
        let err = Grid::from_obstacles(3, 3, &[CellCoord::new(3, 0)]).unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn test_generate_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = GridConfig::default().with_obstacle_probability(0.0);
        assert_eq!(Grid::generate(&empty, &mut rng).unwrap().obstacle_count(), 0);

        let full = GridConfig::default()
            .with_obstacle_probability(1.0)
            .with_fill_holes(false);
        assert_eq!(Grid::generate(&full, &mut rng).unwrap().obstacle_count(), 400);
    }

    #[test]
    fn test_generate_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GridConfig::default().with_obstacle_probability(-0.5);
        assert!(Grid::generate(&config, &mut rng).unwrap_err().is_invalid_config());
    }

    #[test]
    fn test_from_config_seed_is_reproducible() {
        let config = GridConfig::default().with_seed(42).with_obstacle_probability(0.35);
        assert_eq!(
            Grid::from_config(&config).unwrap(),
            Grid::from_config(&config).unwrap()
        );
    }

    #[test]
    fn test_generated_density_is_plausible() {
        let config = GridConfig::default()
            .with_size(100, 100)
            .with_obstacle_probability(0.25)
            .with_fill_holes(false)
            .with_seed(3);
        let grid = Grid::from_config(&config).unwrap();
        let density = grid.obstacle_count() as f64 / grid.len() as f64;
        assert!((density - 0.25).abs() < 0.03, "density {density}");
    }

    #[test]
    fn test_validate_endpoint() {
        let grid = Grid::from_ascii("#.\n..").unwrap();
        assert!(grid.validate_endpoint(CellCoord::new(0, 1)).is_ok());
        assert!(grid.validate_endpoint(CellCoord::new(0, 0)).unwrap_err().is_invalid_cell());
        assert!(grid.validate_endpoint(CellCoord::new(2, 0)).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_reset_costs_keeps_obstacles() {
        let mut grid = Grid::from_ascii("#.\n..").unwrap();
        if let Some(cell) = grid.cell_mut(CellCoord::new(1, 1)) {
            cell.set_costs(10, 1);
        }
        grid.reset_costs();
        assert_eq!(grid.obstacle_count(), 1);
        assert!(grid.cells().iter().all(|c| !c.is_annotated()));
    }

    #[test]
    fn test_find_neighbors_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(grid.find_neighbors(CellCoord::new(2, 2), None).is_err());
    }
}
