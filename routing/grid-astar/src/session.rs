//! Step-wise A* search.
//!
//! A [`SearchSession`] holds the open and closed sets for one
//! origin/destination pair. It does not own the grid: every call that
//! touches cell annotations takes the grid explicitly, so a driver (a UI
//! loop, a replay tool) can render between steps.
//!
//! # Example
//!
//! ```
//! use grid_astar::{Grid, SearchSession, SearchStatus};
//! use grid_types::{CellCoord, EventKind, SearchConfig};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! let mut session = SearchSession::new(
//!     &mut grid,
//!     CellCoord::new(0, 0),
//!     CellCoord::new(2, 2),
//!     SearchConfig::default(),
//! )
//! .unwrap();
//!
//! let path = loop {
//!     match session.step(&mut grid) {
//!         SearchStatus::Continue => {
//!             for event in session.take_events() {
//!                 // draw event.coord as event.kind
//!                 let _ = event;
//!             }
//!         }
//!         SearchStatus::Found(path) => break path,
//!         other => panic!("unexpected {other:?}"),
//!     }
//! };
//!
//! assert_eq!(path.cost(), Some(28));
//! let path_cells = session
//!     .events()
//!     .iter()
//!     .filter(|e| e.kind == EventKind::PathCell)
//!     .count();
//! assert_eq!(path_cells, 3);
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use grid_types::{
    CellCoord, EventKind, GridPath, InvalidCellReason, RoutingError, SearchConfig, SearchEvent,
    SearchOutcome, SearchStats,
};
use tracing::{debug, info, warn};

use crate::grid::Grid;
use crate::heuristics::compute_heuristic;
use crate::neighbors::NeighborGenerator;
use crate::open_set::OpenSet;

/// Result of a single [`SearchSession::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// One cell was expanded; more work remains.
    Continue,
    /// The destination was reached.
    Found(GridPath),
    /// The open set is empty; the destination is unreachable.
    NotFound,
    /// The step budget ran out before the search finished.
    Exhausted,
}

impl SearchStatus {
    /// Returns `true` once the session has stopped.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Continue)
    }

    fn from_outcome(outcome: &SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(path) => Self::Found(path.clone()),
            SearchOutcome::NoPathFound => Self::NotFound,
            SearchOutcome::StepLimitReached { .. } => Self::Exhausted,
        }
    }
}

/// An in-progress A* search between two cells of a grid.
///
/// Creating a session clears every annotation on the grid and primes the
/// origin with `g = 0`. Each [`step`](Self::step) expands exactly one cell
/// and queues the [`SearchEvent`]s it produced.
#[derive(Debug, Clone)]
pub struct SearchSession {
    origin: CellCoord,
    destination: CellCoord,
    config: SearchConfig,
    open: OpenSet,
    closed: HashSet<CellCoord>,
    /// Parent links, mirrored onto the grid cells.
    parents: HashMap<CellCoord, CellCoord>,
    current: Option<CellCoord>,
    events: Vec<SearchEvent>,
    stats: SearchStats,
    steps: usize,
    outcome: Option<SearchOutcome>,
}

impl SearchSession {
    /// Starts a search on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] if either endpoint lies outside
    /// the grid, and [`RoutingError::InvalidCell`] if either endpoint is an
    /// obstacle or both endpoints are the same cell.
    pub fn new(
        grid: &mut Grid,
        origin: CellCoord,
        destination: CellCoord,
        config: SearchConfig,
    ) -> Result<Self, RoutingError> {
        grid.validate_endpoint(origin)?;
        grid.validate_endpoint(destination)?;
        if origin == destination {
            return Err(RoutingError::invalid_cell(
                destination,
                InvalidCellReason::SameAsOrigin,
            ));
        }

        let mut session = Self {
            origin,
            destination,
            config,
            open: OpenSet::new(),
            closed: HashSet::new(),
            parents: HashMap::new(),
            current: None,
            events: Vec::new(),
            stats: SearchStats::new(),
            steps: 0,
            outcome: None,
        };
        session.prime(grid);

        debug!(
            %origin,
            %destination,
            heuristic = config.heuristic().name(),
            max_steps = ?config.max_steps(),
            "Search session started"
        );
        Ok(session)
    }

    /// Clears the grid's annotations and seeds the open set with the origin.
    fn prime(&mut self, grid: &mut Grid) {
        grid.reset_costs();
        let h = self.heuristic(self.origin);
        if let Some(cell) = grid.cell_mut(self.origin) {
            cell.set_costs(0, h);
            cell.set_parent(None);
        }
        self.open.push(self.origin, 0, h);
    }

    fn heuristic(&self, coord: CellCoord) -> u32 {
        compute_heuristic(coord, self.destination, self.config.heuristic())
    }

    /// Expands one cell.
    ///
    /// Once the session has finished, further calls return the same final
    /// status without doing any work.
    pub fn step(&mut self, grid: &mut Grid) -> SearchStatus {
        if let Some(outcome) = &self.outcome {
            return SearchStatus::from_outcome(outcome);
        }

        if self.config.max_steps().is_some_and(|max| self.steps >= max) {
            warn!(
                steps = self.steps,
                open = self.open.len(),
                "Search step budget exhausted"
            );
            self.outcome = Some(SearchOutcome::StepLimitReached { steps: self.steps });
            return SearchStatus::Exhausted;
        }

        let start = Instant::now();
        let status = self.expand_next(grid);
        self.stats.add_elapsed(start.elapsed());

        match &status {
            SearchStatus::Found(path) => {
                info!(
                    cells = path.len(),
                    cost = ?path.cost(),
                    expanded = self.stats.cells_expanded(),
                    "Path found"
                );
                self.outcome = Some(SearchOutcome::Found(path.clone()));
            }
            SearchStatus::NotFound => {
                info!(
                    expanded = self.stats.cells_expanded(),
                    "No path to destination"
                );
                self.outcome = Some(SearchOutcome::NoPathFound);
            }
            SearchStatus::Continue | SearchStatus::Exhausted => {}
        }
        status
    }

    fn expand_next(&mut self, grid: &mut Grid) -> SearchStatus {
        let Some((current, g_current)) = self.open.pop_entry() else {
            self.current = None;
            return SearchStatus::NotFound;
        };

        self.steps += 1;
        self.current = Some(current);
        self.closed.insert(current);
        self.stats.record_expanded();
        self.emit(grid, EventKind::Closed, current);

        if current == self.destination {
            let path = self.reconstruct_path();
            for &coord in path.cells() {
                self.emit(grid, EventKind::PathCell, coord);
            }
            return SearchStatus::Found(path);
        }

        let successors: Vec<(CellCoord, u32)> = NeighborGenerator::new(grid)
            .excluding(Some(self.origin))
            .successors(current)
            .collect();

        for (neighbor, cost) in successors {
            if self.closed.contains(&neighbor) {
                continue;
            }
            let g = g_current.saturating_add(cost);
            if !self.open.improves(neighbor, g) {
                continue;
            }

            let h = self.heuristic(neighbor);
            if let Some(cell) = grid.cell_mut(neighbor) {
                cell.set_costs(g, h);
                cell.set_parent(Some(current));
            }
            self.parents.insert(neighbor, current);
            self.open.push(neighbor, g, h);
            self.stats.record_opened(self.open.len());
            self.emit(grid, EventKind::Opened, neighbor);
        }

        SearchStatus::Continue
    }

    fn emit(&mut self, grid: &Grid, kind: EventKind, coord: CellCoord) {
        if let Some(cell) = grid.cell(coord) {
            self.events.push(SearchEvent::from_cell(kind, cell));
        }
    }

    /// Follows parent links from the destination back to the origin.
    ///
    /// Parents are always cells that were closed earlier, so the links form
    /// a tree rooted at the origin and the walk terminates.
    fn reconstruct_path(&self) -> GridPath {
        let mut cells = vec![self.destination];
        let mut coord = self.destination;
        while let Some(&parent) = self.parents.get(&coord) {
            cells.push(parent);
            coord = parent;
        }
        cells.reverse();
        GridPath::new(cells)
    }

    /// Steps until the session finishes and returns the outcome.
    pub fn run(&mut self, grid: &mut Grid) -> SearchOutcome {
        loop {
            match self.step(grid) {
                SearchStatus::Continue => {}
                SearchStatus::Found(path) => return SearchOutcome::Found(path),
                SearchStatus::NotFound => return SearchOutcome::NoPathFound,
                SearchStatus::Exhausted => {
                    return SearchOutcome::StepLimitReached { steps: self.steps };
                }
            }
        }
    }

    /// Abandons the search and clears the grid's annotations.
    ///
    /// Obstacles are left alone.
    pub fn reset(self, grid: &mut Grid) {
        debug!(steps = self.steps, "Search session reset");
        grid.reset_costs();
    }

    /// Throws away all progress and starts over from the origin with the
    /// same endpoints and configuration.
    pub fn restart(&mut self, grid: &mut Grid) {
        self.open.clear();
        self.closed.clear();
        self.parents.clear();
        self.current = None;
        self.events.clear();
        self.stats = SearchStats::new();
        self.steps = 0;
        self.outcome = None;
        self.prime(grid);
    }

    /// Drains the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<SearchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events not yet drained.
    #[must_use]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// The search origin.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// The search destination.
    #[must_use]
    pub const fn destination(&self) -> CellCoord {
        self.destination
    }

    /// The configuration the session runs with.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The most recently expanded cell.
    #[must_use]
    pub const fn current(&self) -> Option<CellCoord> {
        self.current
    }

    /// Number of expansions so far.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Statistics so far.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The final outcome, once the session has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Returns `true` once the session has finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of open cells.
    #[must_use]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of closed cells.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Returns `true` if `coord` is waiting in the open set.
    #[must_use]
    pub fn is_open(&self, coord: CellCoord) -> bool {
        self.open.contains(coord)
    }

    /// Returns `true` if `coord` has been expanded.
    #[must_use]
    pub fn is_closed(&self, coord: CellCoord) -> bool {
        self.closed.contains(&coord)
    }
}
