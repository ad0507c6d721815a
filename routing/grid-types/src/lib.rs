//! Core types for A* search on bounded 2D grids.
//!
//! This crate holds the value types shared by the search engine and its
//! consumers (renderers, CLIs):
//!
//! - **Coordinates**: [`CellCoord`] and the eight [`Direction`]s, with the
//!   fixed-point step costs [`STRAIGHT_STEP_COST`] and [`DIAGONAL_STEP_COST`]
//! - **Cells**: [`Cell`] with its obstacle flag and `g`/`h`/`f` annotations
//! - **Configuration**: [`GridConfig`], [`SearchConfig`], [`Heuristic`]
//! - **Events**: [`SearchEvent`] and [`EventKind`] for renderers
//! - **Results**: [`GridPath`], [`SearchOutcome`], [`SearchStats`]
//! - **Errors**: [`RoutingError`]
//!
//! # Example
//!
//! ```
//! use grid_types::{CellCoord, GridConfig, GridPath, SearchConfig, Heuristic};
//!
//! let grid = GridConfig::default().with_size(10, 10).with_seed(1);
//! assert!(grid.validate().is_ok());
//!
//! let search = SearchConfig::default().with_heuristic(Heuristic::Manhattan);
//! assert_eq!(search.heuristic(), Heuristic::Manhattan);
//!
//! let path = GridPath::new(vec![CellCoord::new(0, 0), CellCoord::new(1, 0)]);
//! assert_eq!(path.cost(), Some(10));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod event;
pub mod outcome;
pub mod path;

pub use cell::Cell;
pub use config::{GridConfig, Heuristic, MAX_GRID_CELLS, MIN_GRID_DIMENSION, SearchConfig};
pub use coord::{CellCoord, DIAGONAL_STEP_COST, Direction, STRAIGHT_STEP_COST};
pub use error::{InvalidCellReason, RoutingError};
pub use event::{EventKind, SearchEvent};
pub use outcome::{SearchOutcome, SearchStats};
pub use path::GridPath;
