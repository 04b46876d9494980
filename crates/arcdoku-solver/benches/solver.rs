//! Benchmarks for the solving pipeline.
//!
//! Two representative puzzles are measured: one that propagation decides
//! on its own and one that forces a deep backtracking search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use arcdoku_core::Grid;
use arcdoku_solver::{Domains, SolveStats, Solver};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const PROPAGATION: &str = "5,3,,,7,,,,\n6,,,1,9,5,,,\n,9,8,,,,,6,\n8,,,,6,,,,3\n4,,,8,,3,,,1\n7,,,,2,,,,6\n,6,,,,,2,8,\n,,,4,1,9,,,5\n,,,,8,,,7,9";
const SEARCH: &str = "8,,,,,,,,\n,,3,6,,,,,\n,7,,,9,,2,,\n,5,,,,7,,,\n,,,,4,5,7,,\n,,,1,,,,3,\n,,1,,,,,6,8\n,,8,5,,,,1,\n,9,,,,,4,,";

fn puzzles() -> [(&'static str, Grid); 2] {
    [
        ("propagation", PROPAGATION.parse().unwrap()),
        ("search", SEARCH.parse().unwrap()),
    ]
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new();

    for (param, grid) in puzzles() {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let stats = solver.solve(grid).unwrap();
                    hint::black_box(stats)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_propagate(c: &mut Criterion) {
    let solver = Solver::new();

    for (param, grid) in puzzles() {
        let domains = Domains::for_grid(&grid);
        c.bench_with_input(
            BenchmarkId::new("propagate", param),
            &domains,
            |b, domains| {
                b.iter_batched_ref(
                    || (hint::black_box(domains.clone()), SolveStats::new()),
                    |(domains, stats)| {
                        let consistent = solver.propagate(domains, stats);
                        hint::black_box(consistent)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_propagate);
criterion_main!(benches);
