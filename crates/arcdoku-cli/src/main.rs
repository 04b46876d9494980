//! Command-line Sudoku solver.
//!
//! Reads a puzzle in CSV form, solves it, and prints the solution
//! together with counters describing the work performed.
//!
//! # Usage
//!
//! ```sh
//! arcdoku puzzle.csv
//! ```
//!
//! Cap the backtracking search:
//!
//! ```sh
//! arcdoku --node-limit 100000 puzzle.csv
//! ```
//!
//! Show the candidate domains that constraint propagation leaves open:
//!
//! ```sh
//! arcdoku --domains puzzle.csv
//! ```
//!
//! The exit status is 0 when a solution was found, 1 when the puzzle
//! could not be read or solved, and 2 for usage errors.

use std::{fs, path::PathBuf, process};

use arcdoku_core::Grid;
use arcdoku_solver::{Domains, SolveStats, Solver};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: one CSV line per grid row, empty cells left blank.
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,

    /// Give up after this many search nodes.
    #[arg(long, value_name = "COUNT")]
    node_limit: Option<usize>,

    /// Print the candidate domains left after constraint propagation.
    #[arg(long)]
    domains: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let text = match fs::read_to_string(&args.puzzle) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: {err}", args.puzzle.display());
            return 1;
        }
    };
    let mut grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}: {err}", args.puzzle.display());
            return 1;
        }
    };

    println!("Problem:");
    println!("{grid}");

    if args.domains {
        print_domains(&grid);
    }

    let mut solver = Solver::new();
    if let Some(limit) = args.node_limit {
        solver = solver.with_node_limit(limit);
    }

    log::info!("solving a {0}x{0} puzzle", grid.size());
    match solver.solve(&mut grid) {
        Ok(stats) => {
            log::debug!("solved: {stats:?}");
            println!();
            println!("Solution:");
            println!("{grid}");
            print_stats(&stats);
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn print_domains(grid: &Grid) {
    let mut domains = Domains::for_grid(grid);
    let mut stats = SolveStats::new();
    println!();
    if Solver::new().propagate(&mut domains, &mut stats) {
        println!("Candidates after propagation:");
        println!("{domains}");
    } else {
        println!("Propagation found a contradiction.");
    }
}

fn print_stats(stats: &SolveStats) {
    println!();
    println!("Stats:");
    println!("  revisions: {}", stats.revisions);
    println!("  hidden singles: {}", stats.hidden_singles);
    println!("  pointing exclusions: {}", stats.pointing_exclusions);
    println!("  search nodes: {}", stats.nodes);
}
