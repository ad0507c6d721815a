//! Terminal rendering of a grid and the events of a search.
//!
//! The canvas only ever reads events; it has no way to influence the search.

use grid_astar::Grid;
use grid_types::{CellCoord, EventKind, SearchEvent};
use owo_colors::OwoColorize;

/// How a single cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Open,
    Obstacle,
    Opened,
    Closed,
    Path,
    Origin,
    Destination,
}

impl Mark {
    const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Obstacle => '#',
            Self::Opened => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
            Self::Origin => 'A',
            Self::Destination => 'B',
        }
    }

    fn paint(self, color: bool) -> String {
        let symbol = self.symbol();
        if !color {
            return symbol.to_string();
        }
        match self {
            Self::Open => symbol.dimmed().to_string(),
            Self::Obstacle => symbol.white().bold().to_string(),
            Self::Opened => symbol.green().to_string(),
            Self::Closed => symbol.red().to_string(),
            Self::Path => symbol.yellow().bold().to_string(),
            Self::Origin | Self::Destination => symbol.cyan().bold().to_string(),
        }
    }
}

/// A character matrix mirroring the grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    columns: usize,
    marks: Vec<Mark>,
    origin: CellCoord,
    destination: CellCoord,
}

impl Canvas {
    /// Starts from the grid's obstacle layout.
    pub fn new(grid: &Grid, origin: CellCoord, destination: CellCoord) -> Self {
        let marks = grid
            .cells()
            .iter()
            .map(|cell| {
                if cell.is_obstacle() {
                    Mark::Obstacle
                } else {
                    Mark::Open
                }
            })
            .collect();
        Self {
            columns: grid.columns(),
            marks,
            origin,
            destination,
        }
    }

    /// Mark currently shown at `coord`.
    pub fn mark(&self, coord: CellCoord) -> Option<Mark> {
        if coord == self.origin {
            return Some(Mark::Origin);
        }
        if coord == self.destination {
            return Some(Mark::Destination);
        }
        self.index(coord).and_then(|i| self.marks.get(i).copied())
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        if coord.column >= self.columns {
            return None;
        }
        coord
            .row
            .checked_mul(self.columns)?
            .checked_add(coord.column)
            .filter(|&i| i < self.marks.len())
    }

    /// Applies one event. Path marks are never overwritten.
    pub fn apply(&mut self, event: &SearchEvent) {
        let Some(slot) = self.index(event.coord).and_then(|i| self.marks.get_mut(i)) else {
            return;
        };
        if *slot == Mark::Path {
            return;
        }
        *slot = match event.kind {
            EventKind::Opened => Mark::Opened,
            EventKind::Closed => Mark::Closed,
            EventKind::PathCell => Mark::Path,
        };
    }

    /// Renders the canvas, one line per row.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::with_capacity(self.marks.len() * 2);
        for (i, _) in self.marks.iter().enumerate() {
            let coord = CellCoord::new(i / self.columns, i % self.columns);
            if coord.column == 0 && i > 0 {
                out.push('\n');
            }
            if let Some(mark) = self.mark(coord) {
                out.push_str(&mark.paint(color));
            }
        }
        out
    }
}

/// One-line key for the symbols.
pub fn legend(color: bool) -> String {
    [
        (Mark::Origin, "origin"),
        (Mark::Destination, "destination"),
        (Mark::Obstacle, "obstacle"),
        (Mark::Opened, "open"),
        (Mark::Closed, "closed"),
        (Mark::Path, "path"),
    ]
    .iter()
    .map(|(mark, label)| format!("{} {label}", mark.paint(color)))
    .collect::<Vec<_>>()
    .join("  ")
}
