//! Grid cells and their search annotations.

use crate::coord::CellCoord;

/// A single grid cell.
///
/// The coordinate is fixed at construction. The cost fields are written by
/// the search and cleared between runs; `f` is never stored, it is always
/// derived from `g` and `h`.
///
/// # Example
///
/// ```
/// use grid_types::{Cell, CellCoord};
///
/// let mut cell = Cell::new(CellCoord::new(0, 0), false);
/// assert_eq!(cell.f(), None);
///
/// cell.set_costs(20, 3);
/// assert_eq!(cell.f(), Some(23));
///
/// cell.clear_costs();
/// assert_eq!(cell.g(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    coord: CellCoord,
    is_obstacle: bool,
    g: Option<u32>,
    h: Option<u32>,
    /// Back-link to the predecessor on the best known path.
    parent: Option<CellCoord>,
}

impl Cell {
    /// Creates an unannotated cell.
    #[must_use]
    pub const fn new(coord: CellCoord, is_obstacle: bool) -> Self {
        Self {
            coord,
            is_obstacle,
            g: None,
            h: None,
            parent: None,
        }
    }

    /// Position of this cell.
    #[must_use]
    pub const fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Whether the cell blocks movement.
    #[must_use]
    pub const fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }

    /// Marks or clears the obstacle flag.
    pub const fn set_obstacle(&mut self, is_obstacle: bool) {
        self.is_obstacle = is_obstacle;
    }

    /// Accumulated cost from the origin.
    #[must_use]
    pub const fn g(&self) -> Option<u32> {
        self.g
    }

    /// Heuristic estimate to the destination.
    #[must_use]
    pub const fn h(&self) -> Option<u32> {
        self.h
    }

    /// `g + h`, present only when both are.
    #[must_use]
    pub const fn f(&self) -> Option<u32> {
        match (self.g, self.h) {
            (Some(g), Some(h)) => Some(g.saturating_add(h)),
            _ => None,
        }
    }

    /// Predecessor on the best known path.
    #[must_use]
    pub const fn parent(&self) -> Option<CellCoord> {
        self.parent
    }

    /// Records both cost components.
    pub const fn set_costs(&mut self, g: u32, h: u32) {
        self.g = Some(g);
        self.h = Some(h);
    }

    /// Sets or clears the back-link.
    pub const fn set_parent(&mut self, parent: Option<CellCoord>) {
        self.parent = parent;
    }

    /// Clears `g`, `h` and the parent link, leaving the obstacle flag alone.
    pub const fn clear_costs(&mut self) {
        self.g = None;
        self.h = None;
        self.parent = None;
    }

    /// Returns `true` if the search has written any annotation to this cell.
    #[must_use]
    pub const fn is_annotated(&self) -> bool {
        self.g.is_some() || self.h.is_some() || self.parent.is_some()
    }
}
