//! The solving pipeline: node consistency, AC-3, and backtracking search.

use std::collections::VecDeque;

use arcdoku_core::{Cell, Grid};

use crate::{domains::Domains, error::SolveError, inference, stats::SolveStats};

/// A directed constraint arc from one cell to a neighboring cell.
///
/// The arc `(x, y)` is consistent when every candidate of `x` has at
/// least one supporting candidate in the domain of `y` under the
/// not-equal constraint.
pub type Arc = (Cell, Cell);

/// Solves Sudoku puzzles by constraint propagation and backtracking
/// search.
///
/// Solving runs in two stages. [`propagate`](Self::propagate) enforces
/// node consistency, then interleaves [`ac3`](Self::ac3) with
/// unit-based inference until the candidate domains stop changing. If
/// open cells remain, [`backtrack`](Self::backtrack) runs a depth-first
/// search with minimum-remaining-values ordering, restoring arc
/// consistency after every trial assignment.
///
/// # Examples
///
/// ```
/// use arcdoku_core::Grid;
/// use arcdoku_solver::Solver;
///
/// let mut grid: Grid = "1,,3,\n,4,,2\n,1,,3\n4,,2,".parse()?;
/// let stats = Solver::new().solve(&mut grid)?;
///
/// assert!(grid.is_full());
/// assert!(!stats.used_search());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    node_limit: Option<usize>,
}

impl Solver {
    /// Creates a solver with unlimited search.
    #[must_use]
    pub const fn new() -> Self {
        Self { node_limit: None }
    }

    /// Caps backtracking search at `limit` nodes.
    ///
    /// A solver with a node limit gives up with
    /// [`SolveError::NodeLimitExceeded`] once the search has entered
    /// `limit` nodes without finding a solution. Propagation is not
    /// counted against the limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcdoku_solver::Solver;
    ///
    /// let solver = Solver::new().with_node_limit(100_000);
    /// ```
    #[must_use]
    pub const fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Solves `grid` in place.
    ///
    /// On success every cell of `grid` holds a value and each row,
    /// column, and box contains each value exactly once. The givens are
    /// never modified. On failure the grid is left untouched; a partial
    /// assignment is never written back.
    ///
    /// # Arguments
    ///
    /// * `grid` - The puzzle to solve; empty cells hold `0`
    ///
    /// # Returns
    ///
    /// Counters describing the work performed, including whether
    /// backtracking search was needed at all.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Unsolvable`] if the givens admit no solution
    /// - [`SolveError::NodeLimitExceeded`] if the configured node limit
    ///   ran out before the search finished
    ///
    /// # Examples
    ///
    /// ```
    /// use arcdoku_core::{Cell, Grid};
    /// use arcdoku_solver::Solver;
    ///
    /// let mut grid: Grid = ",2,3,4\n3,4,1,2\n2,1,4,3\n4,3,2,1".parse()?;
    /// Solver::new().solve(&mut grid)?;
    ///
    /// assert_eq!(grid.get(Cell::new(0, 0))?, 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn solve(&self, grid: &mut Grid) -> Result<SolveStats, SolveError> {
        let mut domains = Domains::for_grid(grid);
        let mut stats = SolveStats::new();

        if !self.propagate(&mut domains, &mut stats) {
            return Err(SolveError::Unsolvable);
        }
        if !domains.is_decided() && !self.backtrack(&mut domains, &mut stats)? {
            return Err(SolveError::Unsolvable);
        }

        domains.write_back(grid)?;
        Ok(stats)
    }

    /// Runs constraint propagation to a fixed point.
    ///
    /// Node consistency is enforced once, then [`ac3`](Self::ac3),
    /// hidden singles, and locked candidates take turns until a full
    /// round makes no progress. The cheaper deductions always run
    /// first: locked candidates are only consulted when a hidden-single
    /// sweep comes up empty.
    ///
    /// # Returns
    ///
    /// `false` if the domains are inconsistent, `true` once the fixed
    /// point is reached. Reaching the fixed point does not mean the
    /// puzzle is decided; check [`Domains::is_decided`] for that.
    pub fn propagate(&self, domains: &mut Domains, stats: &mut SolveStats) -> bool {
        if !self.enforce_node_consistency(domains) {
            return false;
        }
        loop {
            if !self.ac3(domains, None, stats) {
                return false;
            }
            let Some(placed) = inference::place_hidden_singles(domains, stats) else {
                return false;
            };
            if placed {
                continue;
            }
            let Some(excluded) = inference::point_locked_candidates(domains, stats) else {
                return false;
            };
            if !excluded {
                return true;
            }
        }
    }

    /// Removes each given's value from the candidates of its open
    /// neighbors.
    ///
    /// # Returns
    ///
    /// `false` if two assigned neighbors hold the same value or an open
    /// cell runs out of candidates, `true` otherwise.
    #[allow(clippy::unused_self)]
    pub fn enforce_node_consistency(&self, domains: &mut Domains) -> bool {
        let mut consistent = true;
        for cell in domains.cells() {
            let value = domains.value(cell);
            if value == 0 {
                continue;
            }
            for neighbor in domains.neighbors(cell) {
                if domains.value(neighbor) == value {
                    consistent = false;
                } else if domains.value(neighbor) == 0 && !domains.exclude(neighbor, value) {
                    consistent = false;
                }
            }
        }
        consistent
    }

    /// Enforces arc consistency with the AC-3 algorithm.
    ///
    /// Arcs are taken from a worklist. Revising the arc `(x, y)` drops
    /// every candidate of `x` that has no support in the domain of `y`;
    /// when that shrinks `D(x)`, the arcs `(z, x)` of every other open
    /// neighbor `z` go back on the worklist. Arcs whose endpoints have
    /// been assigned in the meantime are skipped.
    ///
    /// # Arguments
    ///
    /// * `domains` - The domain state to prune
    /// * `arcs` - The seed worklist, or `None` to start from every arc
    ///   between open neighbors
    /// * `stats` - Revision counter; incremented once per arc whose
    ///   revision changed a domain
    ///
    /// # Returns
    ///
    /// `false` if some domain was revised down to empty, proving the
    /// state inconsistent. `true` once the worklist drains; the
    /// surviving domains are then arc consistent.
    #[allow(clippy::unused_self)]
    pub fn ac3(
        &self,
        domains: &mut Domains,
        arcs: Option<Vec<Arc>>,
        stats: &mut SolveStats,
    ) -> bool {
        let mut worklist: VecDeque<Arc> = match arcs {
            Some(seed) => seed.into(),
            None => all_arcs(domains).into(),
        };

        while let Some((x, y)) = worklist.pop_front() {
            if domains.is_assigned(x) || domains.is_assigned(y) {
                continue;
            }
            if revise(domains, x, y) {
                stats.revisions += 1;
                if domains.candidates(x).is_empty() {
                    return false;
                }
                for z in domains.neighbors(x) {
                    if z != y && !domains.is_assigned(z) {
                        worklist.push_back((z, x));
                    }
                }
            }
        }
        true
    }

    /// Searches for a complete assignment by depth-first backtracking.
    ///
    /// Each node picks the open cell with the fewest candidates and
    /// tries its values in ascending order. A trial assignment is
    /// followed by a targeted [`ac3`](Self::ac3) pass seeded with the
    /// arcs around the assigned cell; branches whose propagation hits a
    /// contradiction are abandoned without recursing. The domain state
    /// is snapshotted before each trial and restored when the branch
    /// fails, so an exhausted search leaves `domains` exactly as it
    /// found them.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when every cell has been decided, `Ok(false)` when
    /// all branches were exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NodeLimitExceeded`] if the configured node
    /// limit runs out. The domain state is unspecified afterwards.
    pub fn backtrack(
        &self,
        domains: &mut Domains,
        stats: &mut SolveStats,
    ) -> Result<bool, SolveError> {
        if let Some(limit) = self.node_limit
            && stats.nodes >= limit
        {
            return Err(SolveError::NodeLimitExceeded { limit });
        }
        stats.nodes += 1;

        let Some(cell) = domains.most_constrained() else {
            return Ok(true);
        };

        for value in domains.candidates(cell) {
            let snapshot = domains.clone();
            if domains.assign(cell, value) {
                let seed = arcs_around(domains, cell);
                if self.ac3(domains, Some(seed), stats) && self.backtrack(domains, stats)? {
                    return Ok(true);
                }
            }
            *domains = snapshot;
        }
        Ok(false)
    }
}

/// Collects every arc between two open neighboring cells.
fn all_arcs(domains: &Domains) -> Vec<Arc> {
    let mut arcs = Vec::new();
    for x in domains.cells() {
        if domains.is_assigned(x) {
            continue;
        }
        for y in domains.neighbors(x) {
            if !domains.is_assigned(y) {
                arcs.push((x, y));
            }
        }
    }
    arcs
}

/// Collects the arcs pointing at the open neighbors of a freshly
/// assigned cell, so a targeted AC-3 pass can spread its effects.
fn arcs_around(domains: &Domains, cell: Cell) -> Vec<Arc> {
    let mut arcs = Vec::new();
    for neighbor in domains.neighbors(cell) {
        if domains.is_assigned(neighbor) {
            continue;
        }
        for other in domains.neighbors(neighbor) {
            if other != cell && !domains.is_assigned(other) {
                arcs.push((other, neighbor));
            }
        }
    }
    arcs
}

/// Drops the candidates of `x` that no candidate of `y` supports.
///
/// Under the not-equal constraint a candidate of `x` is unsupported
/// exactly when it is the sole candidate of `y`.
fn revise(domains: &mut Domains, x: Cell, y: Cell) -> bool {
    let y_candidates = domains.candidates(y);
    let mut changed = false;
    for value in domains.candidates(x) {
        let supported = y_candidates.iter().any(|other| other != value);
        if !supported {
            domains.exclude(x, value);
            changed = true;
        }
    }
    changed
}
