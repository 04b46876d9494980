//! Constraint-based Sudoku solving.
//!
//! This crate treats a puzzle as a constraint satisfaction problem. Each
//! empty cell carries a domain of candidate values, arc consistency (AC-3)
//! and unit-based inference shrink those domains, and backtracking search
//! with minimum-remaining-values ordering decides whatever propagation
//! leaves open.
//!
//! # Examples
//!
//! ```
//! use arcdoku_core::{Cell, Grid};
//! use arcdoku_solver::Solver;
//!
//! let mut grid: Grid = "1,,3,\n,4,,2\n,1,,3\n4,,2,".parse()?;
//! let stats = Solver::new().solve(&mut grid)?;
//!
//! assert_eq!(grid.get(Cell::new(0, 1))?, 2);
//! assert!(grid.is_full());
//! assert!(!stats.used_search());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    domains::Domains,
    error::*,
    solver::{Arc, Solver},
    stats::SolveStats,
};

pub mod domains;
mod error;
pub mod inference;
mod solver;
pub mod stats;
