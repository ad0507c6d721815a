//! Run-to-completion A* search.
//!
//! [`run_search`] drives a [`SearchSession`] until it finishes and hands
//! back everything a renderer needs to replay the search afterwards.
//!
//! # Example
//!
//! ```
//! use grid_astar::{Grid, run_search};
//! use grid_types::{CellCoord, SearchConfig};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! let report = run_search(
//!     &mut grid,
//!     CellCoord::new(0, 0),
//!     CellCoord::new(2, 2),
//!     &SearchConfig::default(),
//! )
//! .unwrap();
//!
//! let path = report.path().unwrap();
//! assert_eq!(
//!     path.cells(),
//!     &[CellCoord::new(0, 0), CellCoord::new(1, 1), CellCoord::new(2, 2)]
//! );
//! assert_eq!(path.cost(), Some(28));
//! ```

use grid_types::{
    CellCoord, EventKind, GridPath, RoutingError, SearchConfig, SearchEvent, SearchOutcome,
    SearchStats,
};

use crate::grid::Grid;
use crate::session::SearchSession;

/// Everything a finished search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    outcome: SearchOutcome,
    events: Vec<SearchEvent>,
    stats: SearchStats,
}

impl SearchReport {
    /// How the search ended.
    #[must_use]
    pub const fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// The path, when one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&GridPath> {
        self.outcome.path()
    }

    /// Every event in emission order.
    #[must_use]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Events of a single kind, in emission order.
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &SearchEvent> {
        self.events.iter().filter(move |event| event.kind == kind)
    }

    /// Search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Splits the report into its parts.
    #[must_use]
    pub fn into_parts(self) -> (SearchOutcome, Vec<SearchEvent>, SearchStats) {
        (self.outcome, self.events, self.stats)
    }
}

/// Runs a search from `origin` to `destination` to completion.
///
/// The grid keeps the final `g`/`h`/parent annotations, so it can be drawn
/// after the fact. An unreachable destination is reported through
/// [`SearchOutcome::NoPathFound`], not as an error.
///
/// # Errors
///
/// Returns [`RoutingError::OutOfBounds`] or [`RoutingError::InvalidCell`]
/// if the endpoints are unusable.
pub fn run_search(
    grid: &mut Grid,
    origin: CellCoord,
    destination: CellCoord,
    config: &SearchConfig,
) -> Result<SearchReport, RoutingError> {
    let mut session = SearchSession::new(grid, origin, destination, *config)?;
    let outcome = session.run(grid);
    Ok(SearchReport {
        outcome,
        events: session.take_events(),
        stats: *session.stats(),
    })
}

/// Convenience function for a plain point-to-point search with the default
/// configuration.
///
/// Returns `Ok(None)` when the destination is unreachable.
///
/// # Errors
///
/// Returns [`RoutingError::OutOfBounds`] or [`RoutingError::InvalidCell`]
/// if the endpoints are unusable.
///
/// # Example
///
/// ```
/// use grid_astar::{Grid, find_path};
/// use grid_types::CellCoord;
///
/// let mut grid = Grid::from_ascii("..\n#.").unwrap();
/// let path = find_path(&mut grid, CellCoord::new(0, 0), CellCoord::new(1, 1)).unwrap();
/// assert_eq!(path.map(|p| p.len()), Some(2));
/// ```
pub fn find_path(
    grid: &mut Grid,
    origin: CellCoord,
    destination: CellCoord,
) -> Result<Option<GridPath>, RoutingError> {
    let report = run_search(grid, origin, destination, &SearchConfig::default())?;
    Ok(report.outcome.into_path())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use grid_types::Heuristic;

    fn c(row: usize, column: usize) -> CellCoord {
        CellCoord::new(row, column)
    }

    #[test]
    fn test_report_events_are_ordered() {
        let mut grid = Grid::new(4, 4).unwrap();
        let report = run_search(&mut grid, c(0, 0), c(3, 3), &SearchConfig::default()).unwrap();

        // The first event closes the origin; the path events come last.
        assert_eq!(report.events()[0].kind, EventKind::Closed);
        assert_eq!(report.events()[0].coord, c(0, 0));

        let path = report.path().unwrap();
        let tail: Vec<_> = report.events()[report.events().len() - path.len()..]
            .iter()
            .map(|e| (e.kind, e.coord))
            .collect();
        let expected: Vec<_> = path.cells().iter().map(|&p| (EventKind::PathCell, p)).collect();
        assert_eq!(tail, expected);
    }

    #[test]
    fn test_closed_events_match_stats() {
        let mut grid = Grid::from_ascii(".....\n.###.\n.....\n.....").unwrap();
        let report = run_search(&mut grid, c(0, 0), c(3, 4), &SearchConfig::default()).unwrap();

        assert_eq!(
            report.events_of(EventKind::Closed).count(),
            report.stats().cells_expanded()
        );
        assert_eq!(
            report.events_of(EventKind::Opened).count(),
            report.stats().cells_opened()
        );
        assert!(report.stats().peak_open() >= 1);
    }

    #[test]
    fn test_path_events_carry_costs() {
        let mut grid = Grid::new(3, 3).unwrap();
        let report = run_search(&mut grid, c(0, 0), c(2, 2), &SearchConfig::default()).unwrap();

        let costs: Vec<_> = report
            .events_of(EventKind::PathCell)
            .map(|e| (e.g, e.h))
            .collect();
        assert_eq!(
            costs,
            vec![(Some(0), Some(4)), (Some(14), Some(2)), (Some(28), Some(0))]
        );
    }

    #[test]
    fn test_unreachable_is_not_an_error() {
        let mut grid = Grid::from_ascii(
            "...#.\n\
             ...#.\n\
             ...#.\n\
             ####.\n\
             .....",
        )
        .unwrap();
        let report = run_search(&mut grid, c(0, 0), c(4, 4), &SearchConfig::default()).unwrap();
        assert!(report.outcome().is_no_path_found());
        assert_eq!(report.events_of(EventKind::PathCell).count(), 0);
        assert_eq!(find_path(&mut grid, c(0, 0), c(4, 4)).unwrap(), None);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let mut grid = Grid::from_ascii(
            "......\n\
             .##...\n\
             ...#..\n\
             .#....\n\
             ....#.",
        )
        .unwrap();
        let config = SearchConfig::default();
        let first = run_search(&mut grid, c(0, 0), c(4, 5), &config).unwrap();
        grid.reset_costs();
        let second = run_search(&mut grid, c(0, 0), c(4, 5), &config).unwrap();

        assert_eq!(first.outcome(), second.outcome());
        assert_eq!(first.events(), second.events());
    }

    #[test]
    fn test_octile_heuristic_optimal() {
        let mut grid = Grid::from_ascii(
            "........\n\
             ..####..\n\
             .....#..\n\
             .....#..\n\
             ........",
        )
        .unwrap();
        let manhattan =
            run_search(&mut grid, c(3, 0), c(0, 7), &SearchConfig::default()).unwrap();
        let octile = run_search(
            &mut grid,
            c(3, 0),
            c(0, 7),
            &SearchConfig::default().with_heuristic(Heuristic::Octile),
        )
        .unwrap();

        assert_eq!(
            manhattan.path().and_then(GridPath::cost),
            octile.path().and_then(GridPath::cost)
        );
    }

    #[test]
    fn test_step_limit_outcome() {
        let mut grid = Grid::new(20, 20).unwrap();
        let config = SearchConfig::default().with_max_steps(5);
        let report = run_search(&mut grid, c(0, 0), c(19, 19), &config).unwrap();
        assert_eq!(
            report.outcome(),
            &SearchOutcome::StepLimitReached { steps: 5 }
        );
        assert!(report.path().is_none());
    }
}
