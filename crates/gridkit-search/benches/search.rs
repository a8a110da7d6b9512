//! Benchmarks for the priority search and region algorithms.
//!
//! # Benchmarks
//!
//! - **`facing_search`**: full optimal-path search on open square grids with a
//!   turn cost, recovering every optimal position. Open grids maximize the
//!   number of tied paths.
//! - **`regions`**: partitioning a striped grid into regions and counting sides.
//! - **`first_cut`**: blocking a diagonal wall one cell at a time.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridkit_core::{Coord, Direction, Grid};
use gridkit_search::{Facing, FacingWalk, PrioritySearch, first_cut, regions};

const SIZES: [usize; 3] = [16, 32, 64];

#[expect(clippy::cast_possible_wrap)]
fn last(size: usize) -> i64 {
    size as i64 - 1
}

fn bench_facing_search(c: &mut Criterion) {
    for size in SIZES {
        let grid = Grid::filled(size, size, '.');
        let goal = Coord::new(last(size), last(size));
        let walk = FacingWalk::new(&grid, goal, |&cell| cell == '.');
        let start = Facing::new(Coord::ORIGIN, Direction::East);
        c.bench_with_input(BenchmarkId::new("facing_search", size), &walk, |b, walk| {
            b.iter(|| {
                let outcome = PrioritySearch::new(walk).run(hint::black_box(start));
                hint::black_box(outcome.optimal_positions().len())
            });
        });
    }
}

fn bench_regions(c: &mut Criterion) {
    for size in SIZES {
        let grid = Grid::from_fn(size, size, |p| (p.x / 3 + p.y / 2) % 4);
        c.bench_with_input(BenchmarkId::new("regions", size), &grid, |b, grid| {
            b.iter(|| {
                regions(hint::black_box(grid))
                    .iter()
                    .map(|r| r.area() * r.corners())
                    .sum::<usize>()
            });
        });
    }
}

fn bench_first_cut(c: &mut Criterion) {
    for size in SIZES {
        let n = last(size);
        let wall: Vec<_> = (0..=n).map(|i| Coord::new(n - i, i)).collect();
        c.bench_with_input(BenchmarkId::new("first_cut", size), &wall, |b, wall| {
            b.iter(|| first_cut(n + 1, n + 1, hint::black_box(wall).iter().copied()));
        });
    }
}

criterion_group!(benches, bench_facing_search, bench_regions, bench_first_cut);
criterion_main!(benches);
