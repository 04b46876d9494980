//! Core data structures for the Arcdoku Sudoku solver.
//!
//! This crate provides the puzzle representation shared by the solver and
//! the command-line front end. It knows nothing about solving strategy:
//! a [`Grid`] is pure storage, and a [`CandidateSet`] is a plain bitset.
//!
//! # Overview
//!
//! - [`grid`]: the puzzle board, a square grid of cell values where `0`
//!   marks an empty cell, with text rendering
//! - [`cell`]: zero-based `(row, column)` coordinates
//! - [`candidates`]: the set of values a cell may still take
//! - [`parse`]: CSV puzzle parsing via [`FromStr`](std::str::FromStr)
//!
//! # Examples
//!
//! ```
//! use arcdoku_core::{Cell, Grid};
//!
//! let mut grid = Grid::default();
//! grid.write(Cell::new(0, 0), 5)?;
//!
//! assert_eq!(grid.get(Cell::new(0, 0))?, 5);
//! assert!(!grid.is_full());
//! # Ok::<(), arcdoku_core::GridError>(())
//! ```

pub mod candidates;
pub mod cell;
pub mod grid;
pub mod parse;

// Re-export commonly used types
pub use self::{
    candidates::CandidateSet,
    cell::Cell,
    grid::{Grid, GridError},
    parse::ParsePuzzleError,
};
