//! Counters collected while solving.

/// Statistics collected during a [`Solver::solve`](crate::Solver::solve)
/// run.
///
/// The counters show how much work each stage did and whether propagation
/// alone decided the puzzle.
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
/// println!("revisions: {}", stats.revisions);
/// assert!(!stats.used_search());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Nodes expanded by backtracking search.
    pub nodes: usize,
    /// Domain revisions performed by arc consistency.
    pub revisions: usize,
    /// Values placed because a unit left them a single home.
    pub hidden_singles: usize,
    /// Candidates eliminated by locked-candidate pointing.
    pub pointing_exclusions: usize,
}

impl SolveStats {
    /// Creates a zeroed statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if solving needed backtracking search beyond
    /// constraint propagation.
    #[must_use]
    pub const fn used_search(&self) -> bool {
        self.nodes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let stats = SolveStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.revisions, 0);
        assert_eq!(stats.hidden_singles, 0);
        assert_eq!(stats.pointing_exclusions, 0);
        assert!(!stats.used_search());
    }

    #[test]
    fn test_used_search() {
        let mut stats = SolveStats::new();
        assert!(!stats.used_search());

        stats.nodes = 1;
        assert!(stats.used_search());
    }
}
