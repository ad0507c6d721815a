//! A grid together with its endpoint selection and at most one search.
//!
//! [`Board`] is the stateful front end an interactive driver talks to:
//! pick an origin, pick a destination, search, reset, roll a new layout.
//!
//! # Example
//!
//! ```
//! use grid_astar::{Board, Grid, Selection};
//! use grid_types::{CellCoord, SearchConfig};
//!
//! let grid = Grid::new(3, 3).unwrap();
//! let mut board = Board::from_grid(grid, SearchConfig::default());
//!
//! // First click picks the origin, second the destination and searches.
//! assert_eq!(board.select(CellCoord::new(0, 0)).unwrap(), Selection::OriginSet);
//! let Selection::Searched(report) = board.select(CellCoord::new(2, 2)).unwrap() else {
//!     panic!("expected a search");
//! };
//! assert_eq!(report.path().and_then(|p| p.cost()), Some(28));
//!
//! // A third click starts over.
//! assert_eq!(board.select(CellCoord::new(1, 0)).unwrap(), Selection::OriginSet);
//! assert_eq!(board.destination(), None);
//! ```

use grid_types::{
    CellCoord, GridConfig, InvalidCellReason, RoutingError, SearchConfig, SearchEvent,
};
use rand::Rng;
use tracing::debug;

use crate::astar::{SearchReport, run_search};
use crate::grid::Grid;
use crate::session::{SearchSession, SearchStatus};

/// What a [`Board::select`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The cell became the new origin; any previous selection was dropped.
    OriginSet,
    /// The cell became the destination and a search ran to completion.
    Searched(SearchReport),
}

/// A grid, its selected endpoints and the active search, if any.
#[derive(Debug, Clone)]
pub struct Board {
    grid_config: GridConfig,
    search_config: SearchConfig,
    grid: Grid,
    origin: Option<CellCoord>,
    destination: Option<CellCoord>,
    session: Option<SearchSession>,
}

impl Board {
    /// Generates a grid from `grid_config` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the grid configuration does
    /// not validate.
    pub fn new(grid_config: GridConfig, search_config: SearchConfig) -> Result<Self, RoutingError> {
        let grid = Grid::from_config(&grid_config)?;
        Ok(Self::with_parts(grid_config, search_config, grid))
    }

    /// Generates a grid from `grid_config` using the caller's random source.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the grid configuration does
    /// not validate.
    pub fn generate<R: Rng + ?Sized>(
        grid_config: GridConfig,
        search_config: SearchConfig,
        rng: &mut R,
    ) -> Result<Self, RoutingError> {
        let grid = Grid::generate(&grid_config, rng)?;
        Ok(Self::with_parts(grid_config, search_config, grid))
    }

    /// Wraps an existing grid.
    ///
    /// The stored grid configuration takes the grid's dimensions; rerolling
    /// uses the default obstacle probability.
    #[must_use]
    pub fn from_grid(grid: Grid, search_config: SearchConfig) -> Self {
        let grid_config = GridConfig::default().with_size(grid.rows(), grid.columns());
        Self::with_parts(grid_config, search_config, grid)
    }

    const fn with_parts(grid_config: GridConfig, search_config: SearchConfig, grid: Grid) -> Self {
        Self {
            grid_config,
            search_config,
            grid,
            origin: None,
            destination: None,
            session: None,
        }
    }

    /// The grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration used for rerolls.
    #[must_use]
    pub const fn grid_config(&self) -> &GridConfig {
        &self.grid_config
    }

    /// The configuration used for searches.
    #[must_use]
    pub const fn search_config(&self) -> &SearchConfig {
        &self.search_config
    }

    /// Replaces the search configuration. Takes effect on the next search.
    pub const fn set_search_config(&mut self, config: SearchConfig) {
        self.search_config = config;
    }

    /// The selected origin.
    #[must_use]
    pub const fn origin(&self) -> Option<CellCoord> {
        self.origin
    }

    /// The selected destination.
    #[must_use]
    pub const fn destination(&self) -> Option<CellCoord> {
        self.destination
    }

    /// The active step-wise search, if one was started.
    #[must_use]
    pub const fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    /// Selects a new origin, dropping the destination and any search state.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::OutOfBounds`] outside the grid and
    /// [`RoutingError::InvalidCell`] on obstacles. The board is unchanged on
    /// error.
    pub fn set_origin(&mut self, coord: CellCoord) -> Result<(), RoutingError> {
        self.grid.validate_endpoint(coord)?;
        self.reset_search();
        self.origin = Some(coord);
        self.destination = None;
        debug!(%coord, "Origin set");
        Ok(())
    }

    /// Selects the destination, dropping any search state.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::EndpointsNotSet`] without an origin,
    /// [`RoutingError::OutOfBounds`] outside the grid, and
    /// [`RoutingError::InvalidCell`] on obstacles or on the origin itself.
    pub fn set_destination(&mut self, coord: CellCoord) -> Result<(), RoutingError> {
        let origin = self.origin.ok_or(RoutingError::EndpointsNotSet)?;
        self.grid.validate_endpoint(coord)?;
        if coord == origin {
            return Err(RoutingError::invalid_cell(
                coord,
                InvalidCellReason::SameAsOrigin,
            ));
        }
        self.reset_search();
        self.destination = Some(coord);
        debug!(%coord, "Destination set");
        Ok(())
    }

    /// Clears both endpoints and any search state.
    pub fn clear_selection(&mut self) {
        self.reset_search();
        self.origin = None;
        self.destination = None;
    }

    /// Handles a click on `coord`.
    ///
    /// With no origin, or with both endpoints already chosen, the click
    /// starts a fresh selection and sets the origin. Otherwise it sets the
    /// destination and runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns the endpoint validation errors of [`Board::set_origin`] and
    /// [`Board::set_destination`].
    pub fn select(&mut self, coord: CellCoord) -> Result<Selection, RoutingError> {
        if self.origin.is_none() || self.destination.is_some() {
            self.set_origin(coord)?;
            return Ok(Selection::OriginSet);
        }
        self.set_destination(coord)?;
        self.run_search().map(Selection::Searched)
    }

    fn endpoints(&self) -> Result<(CellCoord, CellCoord), RoutingError> {
        match (self.origin, self.destination) {
            (Some(origin), Some(destination)) => Ok((origin, destination)),
            _ => Err(RoutingError::EndpointsNotSet),
        }
    }

    /// Runs a complete search between the selected endpoints.
    ///
    /// Any step-wise session in progress is abandoned first.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::EndpointsNotSet`] unless both endpoints are
    /// selected.
    pub fn run_search(&mut self) -> Result<SearchReport, RoutingError> {
        let (origin, destination) = self.endpoints()?;
        self.session = None;
        run_search(&mut self.grid, origin, destination, &self.search_config)
    }

    /// Starts a step-wise search between the selected endpoints, replacing
    /// any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::EndpointsNotSet`] unless both endpoints are
    /// selected.
    pub fn start_session(&mut self) -> Result<(), RoutingError> {
        let (origin, destination) = self.endpoints()?;
        self.session = Some(SearchSession::new(
            &mut self.grid,
            origin,
            destination,
            self.search_config,
        )?);
        Ok(())
    }

    /// Advances the active session by one expansion.
    ///
    /// Returns `None` when no session is active.
    pub fn step(&mut self) -> Option<SearchStatus> {
        let session = self.session.as_mut()?;
        Some(session.step(&mut self.grid))
    }

    /// Drains the active session's pending events.
    pub fn take_events(&mut self) -> Vec<SearchEvent> {
        self.session
            .as_mut()
            .map(SearchSession::take_events)
            .unwrap_or_default()
    }

    /// Abandons any search and clears cost annotations. Endpoints and
    /// obstacles stay.
    pub fn reset_search(&mut self) {
        match self.session.take() {
            Some(session) => session.reset(&mut self.grid),
            None => self.grid.reset_costs(),
        }
    }

    /// Rolls a new obstacle layout with the stored grid configuration and
    /// clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the stored configuration
    /// does not validate. The board is unchanged on error.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), RoutingError> {
        let grid = Grid::generate(&self.grid_config, rng)?;
        self.session = None;
        self.origin = None;
        self.destination = None;
        self.grid = grid;
        Ok(())
    }
}
