//! Error types for grid construction and search setup.
//!
//! This module defines the [`RoutingError`] enum. Failing to reach the
//! destination is *not* an error: it is reported as a regular search
//! outcome by the search engine.

use crate::coord::CellCoord;

/// Why a cell was rejected as a search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidCellReason {
    /// The cell is an obstacle.
    Obstacle,
    /// The destination was the same cell as the origin.
    SameAsOrigin,
}

impl std::fmt::Display for InvalidCellReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Obstacle => "cell is an obstacle",
            Self::SameAsOrigin => "destination equals origin",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while building a grid or preparing a search.
///
/// # Example
///
/// ```
/// use grid_types::{CellCoord, RoutingError};
///
/// let error = RoutingError::OutOfBounds {
///     coord: CellCoord::new(20, 0),
///     rows: 20,
///     columns: 20,
/// };
///
/// assert!(error.to_string().contains("out of bounds"));
/// assert!(error.is_out_of_bounds());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RoutingError {
    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A coordinate lies outside the grid.
    #[error("cell {coord} is out of bounds for a {rows}x{columns} grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        columns: usize,
    },

    /// A cell cannot be used as an origin or destination.
    #[error("cell {coord} cannot be used as an endpoint: {reason}")]
    InvalidCell {
        /// The rejected coordinate.
        coord: CellCoord,
        /// Why it was rejected.
        reason: InvalidCellReason,
    },

    /// A destination or a search was requested before the endpoints it
    /// depends on were chosen.
    #[error("origin and destination must be set first")]
    EndpointsNotSet,
}

impl RoutingError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_types::RoutingError;
    ///
    /// let error = RoutingError::invalid_config("obstacle probability must be in [0, 1]");
    /// assert!(error.to_string().contains("obstacle probability"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Creates an invalid cell error.
    #[must_use]
    pub const fn invalid_cell(coord: CellCoord, reason: InvalidCellReason) -> Self {
        Self::InvalidCell { coord, reason }
    }

    /// Returns `true` if this is an out-of-bounds error.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is an invalid cell error.
    #[must_use]
    pub const fn is_invalid_cell(&self) -> bool {
        matches!(self, Self::InvalidCell { .. })
    }

    /// Returns `true` if this is an invalid configuration error.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
