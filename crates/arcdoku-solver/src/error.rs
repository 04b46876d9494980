//! Solver failure modes.

use arcdoku_core::GridError;

/// Errors reported by [`Solver::solve`](crate::Solver::solve).
///
/// A malformed puzzle fails at parse time with
/// [`ParsePuzzleError`](arcdoku_core::ParsePuzzleError); this type covers
/// failures of the solving process itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle admits no solution.
    #[display("no solution exists")]
    Unsolvable,
    /// Backtracking search gave up after expanding too many nodes.
    #[display("search exceeded the limit of {limit} nodes")]
    NodeLimitExceeded {
        /// The configured node cap.
        limit: usize,
    },
    /// Writing the solution back to the grid failed.
    #[display("{_0}")]
    Grid(#[from] GridError),
}
