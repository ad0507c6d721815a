//! Terminal driver for grid A* search.
//!
//! Generates a grid, picks an origin and destination, runs the search and
//! draws the result. With `--replay` every expansion is drawn as it happens.
//!
//! # Usage
//!
//! - `grid-viz` - 20×20 grid, 20% obstacles, corner to corner
//! - `grid-viz --seed 7 --origin 0,0 --destination 19,19 --replay`
//! - `GRID_VIZ_OBSTACLES=0.35 grid-viz --heuristic octile`
//!
//! Set `RUST_LOG=grid_astar=debug` to see the search log.

mod render;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grid_astar::{Board, SearchReport, SearchStatus};
use grid_types::{CellCoord, GridConfig, GridPath, Heuristic, SearchConfig, SearchOutcome};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::{Canvas, legend};

/// Grid A* search in the terminal
#[derive(Parser, Debug)]
#[command(name = "grid-viz")]
#[command(about = "Generate a grid and watch A* search it", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = 20)]
    columns: usize,

    /// Probability that a cell is an obstacle, in [0, 1]
    #[arg(long, env = "GRID_VIZ_OBSTACLES", default_value_t = 0.2)]
    obstacles: f64,

    /// Seed for the obstacle layout (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Origin as "row,column" (first open cell when omitted)
    #[arg(long, value_parser = parse_coord)]
    origin: Option<CellCoord>,

    /// Destination as "row,column" (last open cell when omitted)
    #[arg(long, value_parser = parse_coord)]
    destination: Option<CellCoord>,

    /// Keep diagonal obstacle pinch points
    #[arg(long)]
    no_fill_holes: bool,

    /// Heuristic: manhattan, octile or zero
    #[arg(long, default_value = "manhattan", value_parser = parse_heuristic)]
    heuristic: Heuristic,

    /// Stop after this many expansions
    #[arg(long)]
    max_steps: Option<usize>,

    /// Draw every expansion instead of only the final state
    #[arg(long)]
    replay: bool,

    /// Pause between replay frames, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn parse_coord(s: &str) -> Result<CellCoord, String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,column\", got \"{s}\""))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row \"{row}\": {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column \"{column}\": {e}"))?;
    Ok(CellCoord::new(row, column))
}

fn parse_heuristic(s: &str) -> Result<Heuristic, String> {
    s.parse().map_err(|e: grid_types::RoutingError| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut grid_config = GridConfig::default()
        .with_size(cli.rows, cli.columns)
        .with_obstacle_probability(cli.obstacles)
        .with_fill_holes(!cli.no_fill_holes);
    if let Some(seed) = cli.seed {
        grid_config = grid_config.with_seed(seed);
    }

    let mut search_config = SearchConfig::default().with_heuristic(cli.heuristic);
    if let Some(steps) = cli.max_steps {
        search_config = search_config.with_max_steps(steps);
    }

    let mut board =
        Board::new(grid_config, search_config).context("Failed to generate grid")?;

    let (origin, destination) = pick_endpoints(&board, cli)?;
    board
        .set_origin(origin)
        .with_context(|| format!("Cannot use {origin} as origin"))?;
    board
        .set_destination(destination)
        .with_context(|| format!("Cannot use {destination} as destination"))?;
    info!(%origin, %destination, "Endpoints selected");

    let color = !cli.no_color;
    let mut canvas = Canvas::new(board.grid(), origin, destination);

    let outcome = if cli.replay {
        replay(&mut board, &mut canvas, cli)?
    } else {
        let report = board.run_search().context("Search failed")?;
        for event in report.events() {
            canvas.apply(event);
        }
        print_stats(&report);
        report.outcome().clone()
    };

    println!("{}", canvas.render(color));
    println!();
    println!("{}", legend(color));
    print_outcome(&outcome, color);
    Ok(())
}

/// Uses the requested endpoints, falling back to the first and last open
/// cells in row-major order.
fn pick_endpoints(board: &Board, cli: &Cli) -> Result<(CellCoord, CellCoord)> {
    let mut open = board
        .grid()
        .cells()
        .iter()
        .filter(|cell| !cell.is_obstacle())
        .map(|cell| cell.coord());

    let first = open.next();
    let last = open.last();
    let origin = match (cli.origin, first) {
        (Some(coord), _) | (None, Some(coord)) => coord,
        (None, None) => bail!("The grid has no open cells; lower --obstacles"),
    };
    let destination = match (cli.destination, last) {
        (Some(coord), _) | (None, Some(coord)) => coord,
        (None, None) => bail!("The grid has a single open cell; lower --obstacles"),
    };
    Ok((origin, destination))
}

/// Steps the search, redrawing after every expansion.
fn replay(board: &mut Board, canvas: &mut Canvas, cli: &Cli) -> Result<SearchOutcome> {
    board.start_session().context("Failed to start search")?;
    let delay = Duration::from_millis(cli.delay_ms);
    let color = !cli.no_color;

    let mut frame = 0usize;
    loop {
        let Some(status) = board.step() else {
            bail!("Search session vanished mid-replay");
        };
        for event in board.take_events() {
            canvas.apply(&event);
        }
        frame += 1;

        // Clear screen and home the cursor before each frame.
        print!("\x1b[2J\x1b[H");
        println!("{}", format!("step {frame}").bold());
        println!("{}", canvas.render(color));

        match status {
            SearchStatus::Continue => thread::sleep(delay),
            SearchStatus::Found(path) => return Ok(SearchOutcome::Found(path)),
            SearchStatus::NotFound => return Ok(SearchOutcome::NoPathFound),
            SearchStatus::Exhausted => {
                return Ok(SearchOutcome::StepLimitReached {
                    steps: board.session().map_or(frame, |s| s.steps()),
                });
            }
        }
    }
}

fn print_stats(report: &SearchReport) {
    let stats = report.stats();
    println!(
        "expanded {} cells, opened {}, peak open set {}, {:.2?}",
        stats.cells_expanded(),
        stats.cells_opened(),
        stats.peak_open(),
        stats.time_elapsed()
    );
}

fn print_outcome(outcome: &SearchOutcome, color: bool) {
    let line = match outcome {
        SearchOutcome::Found(path) => describe_path(path),
        SearchOutcome::NoPathFound => "No path found".to_string(),
        SearchOutcome::StepLimitReached { steps } => {
            format!("Gave up after {steps} steps")
        }
    };
    if !color {
        println!("{line}");
    } else if outcome.is_found() {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}

fn describe_path(path: &GridPath) -> String {
    let cost = path
        .cost()
        .map_or_else(|| "?".to_string(), |cost| cost.to_string());
    format!(
        "Path: {} cells, {} diagonal steps, cost {cost}",
        path.len(),
        path.diagonal_steps()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4").unwrap(), CellCoord::new(3, 4));
        assert_eq!(parse_coord(" 0 , 19 ").unwrap(), CellCoord::new(0, 19));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("-1,2").is_err());
        assert!(parse_coord("a,b").is_err());
    }

    #[test]
    fn test_parse_heuristic() {
        assert_eq!(parse_heuristic("octile").unwrap(), Heuristic::Octile);
        assert!(parse_heuristic("euclid").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["grid-viz"]).unwrap();
        assert_eq!(cli.rows, 20);
        assert_eq!(cli.columns, 20);
        assert_eq!(cli.heuristic, Heuristic::Manhattan);
        assert!(!cli.replay);
    }

    #[test]
    fn test_cli_endpoints() {
        let cli = Cli::try_parse_from([
            "grid-viz",
            "--seed",
            "3",
            "--origin",
            "0,0",
            "--destination",
            "4,4",
            "--rows",
            "5",
            "--columns",
            "5",
            "--obstacles",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.origin, Some(CellCoord::new(0, 0)));
        assert_eq!(cli.destination, Some(CellCoord::new(4, 4)));
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_rejects_obstacle_origin() {
        let cli = Cli::try_parse_from([
            "grid-viz",
            "--obstacles",
            "1",
            "--no-fill-holes",
            "--origin",
            "0,0",
            "--destination",
            "1,1",
            "--no-color",
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("origin"));
    }

    #[test]
    fn test_describe_path() {
        let path = GridPath::new(vec![
            CellCoord::new(0, 0),
            CellCoord::new(1, 1),
            CellCoord::new(1, 2),
        ]);
        assert_eq!(describe_path(&path), "Path: 3 cells, 1 diagonal steps, cost 24");
    }
}
