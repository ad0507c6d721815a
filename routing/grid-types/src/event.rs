//! State-change notifications emitted while a search runs.
//!
//! Renderers consume these in order; they never feed anything back into the
//! search.

use crate::cell::Cell;
use crate::coord::CellCoord;

/// What happened to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The cell entered the open set, or its open entry got cheaper.
    Opened,
    /// The cell was expanded and finalized.
    Closed,
    /// The cell lies on the reconstructed path.
    PathCell,
}

/// A single notification with the cell's annotations at emission time.
///
/// # Example
///
/// ```
/// use grid_types::{Cell, CellCoord, EventKind, SearchEvent};
///
/// let mut cell = Cell::new(CellCoord::new(1, 1), false);
/// cell.set_costs(14, 2);
///
/// let event = SearchEvent::from_cell(EventKind::Opened, &cell);
/// assert_eq!(event.f, Some(16));
/// assert_eq!(event.coord, CellCoord::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchEvent {
    /// What happened.
    pub kind: EventKind,
    /// Which cell it happened to.
    pub coord: CellCoord,
    /// Cost from origin.
    pub g: Option<u32>,
    /// Heuristic estimate.
    pub h: Option<u32>,
    /// `g + h`.
    pub f: Option<u32>,
}

impl SearchEvent {
    /// Snapshots a cell's annotations into an event.
    #[must_use]
    pub const fn from_cell(kind: EventKind, cell: &Cell) -> Self {
        Self {
            kind,
            coord: cell.coord(),
            g: cell.g(),
            h: cell.h(),
            f: cell.f(),
        }
    }

    /// Row of the affected cell.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.coord.row
    }

    /// Column of the affected cell.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.coord.column
    }
}
