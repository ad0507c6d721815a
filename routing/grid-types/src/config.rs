//! Configuration types for grid generation and search.
//!
//! # Example
//!
//! ```
//! use grid_types::{GridConfig, Heuristic, SearchConfig};
//!
//! let grid = GridConfig::default()
//!     .with_size(30, 40)
//!     .with_obstacle_probability(0.3)
//!     .with_seed(7);
//! assert!(grid.validate().is_ok());
//!
//! let search = SearchConfig::default()
//!     .with_heuristic(Heuristic::Octile)
//!     .with_max_steps(1_000);
//! assert_eq!(search.max_steps(), Some(1_000));
//! ```

use crate::cell::Cell;
use crate::error::RoutingError;

/// Smallest supported number of rows or columns.
pub const MIN_GRID_DIMENSION: usize = 2;

/// Largest number of cells a grid may hold: the most [`Cell`]s a single
/// allocation can address.
pub const MAX_GRID_CELLS: usize = isize::MAX as usize / size_of::<Cell>();

/// Heuristic functions for the search.
///
/// Step costs are 10 (straight) and 14 (diagonal). Every variant here
/// underestimates the remaining cost on that scale, so all of them keep the
/// search optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Manhattan distance in cells: `|Δrow| + |Δcolumn|`.
    ///
    /// Measured in whole cells rather than step-cost units, so it is a weak
    /// but consistent estimate.
    #[default]
    Manhattan,

    /// Octile distance in step-cost units:
    /// `14 * min(|Δrow|, |Δcolumn|) + 10 * (max - min)`.
    ///
    /// Exact on an obstacle-free grid.
    Octile,

    /// Always zero (Dijkstra's algorithm).
    Zero,
}

impl Heuristic {
    /// Stable lowercase name, used by the CLI and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Octile => "octile",
            Self::Zero => "zero",
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "octile" => Ok(Self::Octile),
            "zero" | "dijkstra" => Ok(Self::Zero),
            other => Err(RoutingError::invalid_config(format!(
                "unknown heuristic '{other}'"
            ))),
        }
    }
}

/// Configuration for building a grid.
///
/// Defaults:
/// - 20 × 20 cells
/// - obstacle probability 0.2
/// - obstacle holes filled after generation
/// - no seed (fresh randomness each time)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    rows: usize,
    columns: usize,
    /// Independent chance for each cell to become an obstacle.
    obstacle_probability: f64,
    fill_holes: bool,
    seed: Option<u64>,
}

impl GridConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: 20,
            columns: 20,
            obstacle_probability: 0.2,
            fill_holes: true,
            seed: None,
        }
    }

    /// Sets the grid dimensions.
    #[must_use]
    pub const fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Sets the per-cell obstacle probability.
    #[must_use]
    pub const fn with_obstacle_probability(mut self, probability: f64) -> Self {
        self.obstacle_probability = probability;
        self
    }

    /// Sets whether diagonal obstacle pinch points are cleared after
    /// generation.
    #[must_use]
    pub const fn with_fill_holes(mut self, fill: bool) -> Self {
        self.fill_holes = fill;
        self
    }

    /// Fixes the random seed so generation is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Removes the seed.
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.seed = None;
        self
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

    /// Per-cell obstacle probability.
    #[must_use]
    pub const fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    /// Whether holes are filled after generation.
    #[must_use]
    pub const fn fill_holes(&self) -> bool {
        self.fill_holes
    }

    /// The random seed, if fixed.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks dimensions and probability.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if either dimension is below
    /// [`MIN_GRID_DIMENSION`], the cell count exceeds [`MAX_GRID_CELLS`], or
    /// the probability is not within `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::GridConfig;
    ///
    /// assert!(GridConfig::default().validate().is_ok());
    /// assert!(GridConfig::default().with_obstacle_probability(1.5).validate().is_err());
    /// assert!(GridConfig::default().with_size(1, 20).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), RoutingError> {
        validate_dimensions(self.rows, self.columns)?;
        validate_probability(self.obstacle_probability)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that a grid is at least [`MIN_GRID_DIMENSION`] cells on each side
/// and holds no more than [`MAX_GRID_CELLS`] cells.
///
/// # Errors
///
/// Returns [`RoutingError::InvalidConfig`] for undersized or oversized grids.
pub fn validate_dimensions(rows: usize, columns: usize) -> Result<(), RoutingError> {
    if rows < MIN_GRID_DIMENSION || columns < MIN_GRID_DIMENSION {
        return Err(RoutingError::invalid_config(format!(
            "grid must be at least {MIN_GRID_DIMENSION}x{MIN_GRID_DIMENSION}, got {rows}x{columns}"
        )));
    }
    match rows.checked_mul(columns) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(RoutingError::invalid_config(format!(
            "grid of {rows}x{columns} exceeds the limit of {MAX_GRID_CELLS} cells"
        ))),
    }
}

/// Checks that an obstacle probability lies within `[0, 1]`.
///
/// # Errors
///
/// Returns [`RoutingError::InvalidConfig`] for values outside the range,
/// including NaN.
pub fn validate_probability(probability: f64) -> Result<(), RoutingError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(RoutingError::invalid_config(format!(
            "obstacle probability must be in [0, 1], got {probability}"
        )))
    }
}

/// Configuration for a search run.
///
/// Defaults to the Manhattan heuristic with no step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    heuristic: Heuristic,
    /// Maximum number of expansions before the search gives up.
    max_steps: Option<usize>,
}

impl SearchConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            max_steps: None,
        }
    }

    /// Sets the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Limits the number of expansions.
    #[must_use]
    pub const fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Removes the expansion limit.
    #[must_use]
    pub const fn without_max_steps(mut self) -> Self {
        self.max_steps = None;
        self
    }

    /// The heuristic in use.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// The expansion limit, if any.
    #[must_use]
    pub const fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }
}
