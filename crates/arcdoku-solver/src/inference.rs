//! Unit-based inference passes.
//!
//! Arc consistency over not-equal constraints only prunes a candidate
//! when a peer is down to that same single value. The passes here look at
//! whole units instead and recover two classic deductions:
//!
//! - **Hidden single**: exactly one cell of a unit can still take a
//!   value, so that cell takes it.
//! - **Locked candidates (pointing)**: within a box, every cell that can
//!   take a value sits in a single row or column, so the value cannot
//!   appear elsewhere in that row or column.
//!
//! Both run to a fixed point inside
//! [`Solver::propagate`](crate::Solver::propagate); neither is used
//! during backtracking search.

use arcdoku_core::{CandidateSet, Cell};

use crate::{
    domains::{Domains, Unit},
    stats::SolveStats,
};

/// Assigns every hidden single found in one pass over all units.
///
/// Returns whether any value was placed, or `None` if the pass ran into
/// a contradiction: a unit where some value has no remaining home, or an
/// assignment that emptied a neighbor's candidates.
///
/// # Examples
///
/// ```
/// use arcdoku_core::Grid;
/// use arcdoku_solver::{Domains, SolveStats, inference};
///
/// let mut domains = Domains::for_grid(&Grid::default());
/// let mut stats = SolveStats::new();
///
/// // An empty grid gives nothing to infer
/// let progress = inference::place_hidden_singles(&mut domains, &mut stats);
/// assert_eq!(progress, Some(false));
/// ```
pub fn place_hidden_singles(domains: &mut Domains, stats: &mut SolveStats) -> Option<bool> {
    let mut progress = false;
    for unit in domains.units() {
        let cells = domains.unit_cells(unit);
        let mut placed = CandidateSet::new();
        for &cell in &cells {
            let value = domains.value(cell);
            if value != 0 {
                placed.insert(value);
            }
        }

        for value in CandidateSet::full(domains.size()) {
            if placed.contains(value) {
                continue;
            }
            let mut home = None;
            let mut homes = 0;
            for &cell in &cells {
                if !domains.is_assigned(cell) && domains.candidates(cell).contains(value) {
                    homes += 1;
                    home.get_or_insert(cell);
                }
            }
            if homes == 0 {
                // No cell can take this value: the unit is unsatisfiable
                return None;
            }
            // Cells already down to one candidate are left for search or
            // write-back to commit; the deduction only applies when the
            // home still had alternatives.
            if homes == 1
                && let Some(cell) = home
                && domains.candidates(cell).len() > 1
            {
                stats.hidden_singles += 1;
                progress = true;
                if !domains.assign(cell, value) {
                    return None;
                }
                placed.insert(value);
            }
        }
    }
    Some(progress)
}

/// Applies locked-candidate pointing in one pass over all boxes.
///
/// Returns whether any candidate was eliminated, or `None` if an
/// elimination emptied a cell's candidate set.
pub fn point_locked_candidates(domains: &mut Domains, stats: &mut SolveStats) -> Option<bool> {
    let mut progress = false;
    let size = domains.size();
    let box_size = domains.box_size();

    for box_index in 0..size {
        let cells = domains.unit_cells(Unit::Box(box_index));
        let mut placed = CandidateSet::new();
        for &cell in &cells {
            let value = domains.value(cell);
            if value != 0 {
                placed.insert(value);
            }
        }
        let box_row = (box_index / box_size) * box_size;
        let box_col = (box_index % box_size) * box_size;

        for value in CandidateSet::full(size) {
            if placed.contains(value) {
                continue;
            }
            let mut any_home = false;
            let mut home_row = None;
            let mut home_col = None;
            let mut row_locked = true;
            let mut col_locked = true;
            for &cell in &cells {
                if domains.is_assigned(cell) || !domains.candidates(cell).contains(value) {
                    continue;
                }
                any_home = true;
                match home_row {
                    None => home_row = Some(cell.row),
                    Some(row) if row != cell.row => row_locked = false,
                    Some(_) => {}
                }
                match home_col {
                    None => home_col = Some(cell.col),
                    Some(col) if col != cell.col => col_locked = false,
                    Some(_) => {}
                }
            }
            if !any_home {
                // The hidden-single pass reports missing homes
                continue;
            }

            if row_locked && let Some(row) = home_row {
                for col in 0..size {
                    if (box_col..box_col + box_size).contains(&col) {
                        continue;
                    }
                    let cell = Cell::new(row, col);
                    if !domains.is_assigned(cell) && domains.candidates(cell).contains(value) {
                        stats.pointing_exclusions += 1;
                        progress = true;
                        if !domains.exclude(cell, value) {
                            return None;
                        }
                    }
                }
            }
            if col_locked && let Some(col) = home_col {
                for row in 0..size {
                    if (box_row..box_row + box_size).contains(&row) {
                        continue;
                    }
                    let cell = Cell::new(row, col);
                    if !domains.is_assigned(cell) && domains.candidates(cell).contains(value) {
                        stats.pointing_exclusions += 1;
                        progress = true;
                        if !domains.exclude(cell, value) {
                            return None;
                        }
                    }
                }
            }
        }
    }
    Some(progress)
}

#[cfg(test)]
mod tests {
    use arcdoku_core::Grid;

    use super::*;
    use crate::Solver;

    fn prepared(grid: &Grid) -> Domains {
        let mut domains = Domains::for_grid(grid);
        assert!(Solver::new().enforce_node_consistency(&mut domains));
        domains
    }

    #[test]
    fn test_hidden_single_placed_in_row() {
        // Block 7 out of (0, 1)..(0, 8) through disjoint units: a 7 in
        // column 1, column 2, row 1 crossing box 1, and row 2 crossing
        // box 2 leaves (0, 0) as the only home for 7 in row 0.
        let mut grid = Grid::default();
        grid.write(Cell::new(3, 1), 7).unwrap();
        grid.write(Cell::new(6, 2), 7).unwrap();
        grid.write(Cell::new(1, 4), 7).unwrap();
        grid.write(Cell::new(2, 7), 7).unwrap();
        let mut domains = prepared(&grid);
        let mut stats = SolveStats::new();

        assert_eq!(domains.candidates(Cell::new(0, 0)).len(), 9);
        let progress = place_hidden_singles(&mut domains, &mut stats);

        assert_eq!(progress, Some(true));
        assert_eq!(domains.value(Cell::new(0, 0)), 7);
        assert_eq!(stats.hidden_singles, 1);
    }

    #[test]
    fn test_hidden_single_no_progress_on_empty_grid() {
        let mut domains = Domains::for_grid(&Grid::default());
        let mut stats = SolveStats::new();

        assert_eq!(place_hidden_singles(&mut domains, &mut stats), Some(false));
        assert_eq!(stats.hidden_singles, 0);
    }

    #[test]
    fn test_hidden_single_detects_missing_home() {
        // Strip 5 from every cell of row 0; the row can no longer hold
        // a 5 anywhere
        let mut domains = Domains::for_grid(&Grid::default());
        for col in 0..9 {
            domains.exclude(Cell::new(0, col), 5);
        }
        let mut stats = SolveStats::new();

        assert_eq!(place_hidden_singles(&mut domains, &mut stats), None);
    }

    #[test]
    fn test_pointing_eliminates_along_row() {
        // Fill rows 1 and 2 of box 0, leaving {1, 2, 3} locked into
        // (0, 0)..(0, 2). Those values cannot appear in row 0 outside
        // the box.
        let mut grid = Grid::default();
        grid.write(Cell::new(1, 0), 4).unwrap();
        grid.write(Cell::new(1, 1), 5).unwrap();
        grid.write(Cell::new(1, 2), 6).unwrap();
        grid.write(Cell::new(2, 0), 7).unwrap();
        grid.write(Cell::new(2, 1), 8).unwrap();
        grid.write(Cell::new(2, 2), 9).unwrap();
        let mut domains = prepared(&grid);
        let mut stats = SolveStats::new();

        assert_eq!(
            domains.candidates(Cell::new(0, 0)),
            CandidateSet::from_iter([1, 2, 3])
        );
        let progress = point_locked_candidates(&mut domains, &mut stats);

        assert_eq!(progress, Some(true));
        // Three values eliminated from the six row cells outside the box
        assert_eq!(stats.pointing_exclusions, 18);
        assert_eq!(
            domains.candidates(Cell::new(0, 4)),
            CandidateSet::from_iter([4, 5, 6, 7, 8, 9])
        );
        // The locked cells themselves keep their candidates
        assert_eq!(
            domains.candidates(Cell::new(0, 0)),
            CandidateSet::from_iter([1, 2, 3])
        );
    }

    #[test]
    fn test_pointing_eliminates_along_column() {
        // Same shape transposed: columns 1 and 2 of box 0 filled, so
        // {1, 2, 3} lock into column 0 of the box
        let mut grid = Grid::default();
        grid.write(Cell::new(0, 1), 4).unwrap();
        grid.write(Cell::new(0, 2), 5).unwrap();
        grid.write(Cell::new(1, 1), 6).unwrap();
        grid.write(Cell::new(1, 2), 7).unwrap();
        grid.write(Cell::new(2, 1), 8).unwrap();
        grid.write(Cell::new(2, 2), 9).unwrap();
        let mut domains = prepared(&grid);
        let mut stats = SolveStats::new();

        let progress = point_locked_candidates(&mut domains, &mut stats);

        assert_eq!(progress, Some(true));
        assert_eq!(stats.pointing_exclusions, 18);
        assert_eq!(
            domains.candidates(Cell::new(4, 0)),
            CandidateSet::from_iter([4, 5, 6, 7, 8, 9])
        );
        assert_eq!(
            domains.candidates(Cell::new(8, 0)),
            CandidateSet::from_iter([4, 5, 6, 7, 8, 9])
        );
    }

    #[test]
    fn test_pointing_no_progress_on_empty_grid() {
        let mut domains = Domains::for_grid(&Grid::default());
        let mut stats = SolveStats::new();

        assert_eq!(
            point_locked_candidates(&mut domains, &mut stats),
            Some(false)
        );
        assert_eq!(stats.pointing_exclusions, 0);
    }
}
