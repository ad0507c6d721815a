//! Search results and statistics.
//!
//! # Example
//!
//! ```
//! use grid_types::{CellCoord, GridPath, SearchOutcome};
//!
//! let outcome = SearchOutcome::Found(GridPath::new(vec![
//!     CellCoord::new(0, 0),
//!     CellCoord::new(0, 1),
//! ]));
//! assert!(outcome.is_found());
//! assert_eq!(outcome.path().map(GridPath::len), Some(2));
//! ```

use std::time::Duration;

use crate::path::GridPath;

/// How a completed search ended.
///
/// Not reaching the destination is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The destination was reached.
    Found(GridPath),
    /// The open set ran dry before the destination was reached.
    NoPathFound,
    /// The configured step budget ran out first.
    StepLimitReached {
        /// Number of expansions performed.
        steps: usize,
    },
}

impl SearchOutcome {
    /// Returns `true` if a path was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` if the destination is unreachable.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound)
    }

    /// The path, when one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&GridPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPathFound | Self::StepLimitReached { .. } => None,
        }
    }

    /// Consumes the outcome and returns the path, when one was found.
    #[must_use]
    pub fn into_path(self) -> Option<GridPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPathFound | Self::StepLimitReached { .. } => None,
        }
    }
}

/// Counters collected while a search runs.
///
/// # Example
///
/// ```
/// use grid_types::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new()
///     .with_cells_expanded(12)
///     .with_elapsed(Duration::from_micros(40));
/// assert_eq!(stats.cells_expanded(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells moved to the closed set.
    cells_expanded: usize,
    /// `Opened` events emitted, including re-openings at a lower cost.
    cells_opened: usize,
    /// Largest open-set size observed.
    peak_open: usize,
    time_elapsed: Duration,
}

impl SearchStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells_expanded: 0,
            cells_opened: 0,
            peak_open: 0,
            time_elapsed: Duration::ZERO,
        }
    }

    /// Sets the number of expanded cells.
    #[must_use]
    pub const fn with_cells_expanded(mut self, count: usize) -> Self {
        self.cells_expanded = count;
        self
    }

    /// Sets the number of opened cells.
    #[must_use]
    pub const fn with_cells_opened(mut self, count: usize) -> Self {
        self.cells_opened = count;
        self
    }

    /// Sets the peak open-set size.
    #[must_use]
    pub const fn with_peak_open(mut self, size: usize) -> Self {
        self.peak_open = size;
        self
    }

    /// Sets the elapsed time.
    #[must_use]
    pub const fn with_elapsed(mut self, duration: Duration) -> Self {
        self.time_elapsed = duration;
        self
    }

    /// Cells moved to the closed set.
    #[must_use]
    pub const fn cells_expanded(&self) -> usize {
        self.cells_expanded
    }

    /// `Opened` events emitted.
    #[must_use]
    pub const fn cells_opened(&self) -> usize {
        self.cells_opened
    }

    /// Largest open-set size observed.
    #[must_use]
    pub const fn peak_open(&self) -> usize {
        self.peak_open
    }

    /// Wall-clock time spent stepping.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.time_elapsed
    }

    /// Counts one expansion.
    pub const fn record_expanded(&mut self) {
        self.cells_expanded += 1;
    }

    /// Counts one `Opened` event given the open-set size right after it.
    pub const fn record_opened(&mut self, open_len: usize) {
        self.cells_opened += 1;
        if open_len > self.peak_open {
            self.peak_open = open_len;
        }
    }

    /// Adds stepping time.
    pub fn add_elapsed(&mut self, duration: Duration) {
        self.time_elapsed += duration;
    }
}
