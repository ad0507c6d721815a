//! Benchmarks for grid-astar operations.
//!
//! Run with: cargo bench -p grid-astar
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p grid-astar -- --save-baseline main
//! 2. After changes: cargo bench -p grid-astar -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grid_astar::{Grid, run_search};
use grid_types::{CellCoord, GridConfig, Heuristic, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Test Grid Generation
// =============================================================================

/// Seeded grid with a guaranteed-open top-left and bottom-right corner.
fn create_grid(size: usize, probability: f64, seed: u64) -> Grid {
    let config = GridConfig::default()
        .with_size(size, size)
        .with_obstacle_probability(probability);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::generate(&config, &mut rng).expect("valid grid config");
    grid.set_obstacle(CellCoord::new(0, 0), false).unwrap();
    grid.set_obstacle(CellCoord::new(size - 1, size - 1), false).unwrap();
    grid
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");

    let test_cases = [
        ("open_20", create_grid(20, 0.0, 1)),
        ("random_20", create_grid(20, 0.2, 1)),
        ("random_64", create_grid(64, 0.25, 7)),
        ("random_128", create_grid(128, 0.25, 7)),
    ];

    for (name, grid) in &test_cases {
        let destination = CellCoord::new(grid.rows() - 1, grid.columns() - 1);
        group.throughput(Throughput::Elements(grid.len() as u64));

        for heuristic in [Heuristic::Manhattan, Heuristic::Octile, Heuristic::Zero] {
            let config = SearchConfig::default().with_heuristic(heuristic);
            group.bench_with_input(
                BenchmarkId::new(heuristic.name(), name),
                grid,
                |b, grid| {
                    let mut grid = grid.clone();
                    b.iter(|| {
                        run_search(
                            &mut grid,
                            black_box(CellCoord::new(0, 0)),
                            black_box(destination),
                            &config,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    for size in [20usize, 64, 128] {
        let config = GridConfig::default()
            .with_size(size, size)
            .with_obstacle_probability(0.3);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("generate", size), &config, |b, config| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| Grid::generate(black_box(config), &mut rng));
        });

        let unfilled = config.with_fill_holes(false);
        group.bench_with_input(
            BenchmarkId::new("fill_obstacle_holes", size),
            &unfilled,
            |b, config| {
                let mut rng = StdRng::seed_from_u64(3);
                let grid = Grid::generate(config, &mut rng).unwrap();
                b.iter(|| {
                    let mut grid = grid.clone();
                    grid.fill_obstacle_holes()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_generation);
criterion_main!(benches);
