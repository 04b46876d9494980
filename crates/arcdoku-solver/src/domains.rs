//! Candidate domains for every cell of a puzzle.
//!
//! [`Domains`] is the solver's working state: for each cell either a
//! committed value or the [`CandidateSet`] of values it may still take.
//! Search snapshots a branch by cloning this state wholesale, which stays
//! cheap because the candidate sets are plain bitsets.

use std::{fmt, iter::FusedIterator};

use arcdoku_core::{CandidateSet, Cell, Grid, GridError, cell::Cells};
use tinyvec::TinyVec;

/// Peer cells of one cell: the rest of its row, column, and box.
///
/// A 9x9 cell has exactly 20 peers, which fit inline; larger grids spill
/// to the heap.
pub type Neighbors = TinyVec<[Cell; 20]>;

/// Cells of a single unit, at most 25 for the largest grid.
pub(crate) type UnitCells = TinyVec<[Cell; 25]>;

/// One row, column, or box of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    /// Row `0..size`.
    Row(usize),
    /// Column `0..size`.
    Column(usize),
    /// Box `0..size`, numbered row-major by box origin.
    Box(usize),
}

/// Iterator over every unit of a grid: rows, then columns, then boxes.
#[derive(Debug, Clone)]
pub(crate) struct Units {
    size: usize,
    index: usize,
}

impl Iterator for Units {
    type Item = Unit;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = match self.index {
            index if index < self.size => Unit::Row(index),
            index if index < 2 * self.size => Unit::Column(index - self.size),
            index if index < 3 * self.size => Unit::Box(index - 2 * self.size),
            _ => return None,
        };
        self.index += 1;
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 3 * self.size - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Units {}

impl FusedIterator for Units {}

/// Per-cell solver state derived from a [`Grid`].
///
/// Filled cells of the source grid carry their value and an empty
/// candidate set; empty cells start unassigned with every value as a
/// candidate. Constraint propagation shrinks the candidate sets, and
/// [`assign`](Self::assign) commits values during search.
///
/// # Examples
///
/// ```
/// use arcdoku_core::{Cell, Grid};
/// use arcdoku_solver::Domains;
///
/// let domains = Domains::for_grid(&Grid::default());
///
/// assert_eq!(domains.neighbors(Cell::new(4, 4)).len(), 20);
/// assert_eq!(domains.candidates(Cell::new(4, 4)).len(), 9);
/// assert!(!domains.is_assigned(Cell::new(4, 4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    size: usize,
    box_size: usize,
    values: Vec<u8>,
    candidates: Vec<CandidateSet>,
}

impl Domains {
    /// Builds the domain state for `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let mut values = Vec::with_capacity(size * size);
        let mut candidates = Vec::with_capacity(size * size);
        for (_, value) in grid.cells() {
            values.push(value);
            candidates.push(if value == 0 {
                CandidateSet::full(size)
            } else {
                CandidateSet::EMPTY
            });
        }
        Self {
            size,
            box_size: grid.box_size(),
            values,
            candidates,
        }
    }

    /// Side length of the underlying grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Side length of one box.
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.row < self.size && cell.col < self.size,
            "cell {cell} is outside the {size}x{size} grid",
            size = self.size
        );
        cell.row * self.size + cell.col
    }

    /// Committed value at `cell`, `0` while unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[must_use]
    pub fn value(&self, cell: Cell) -> u8 {
        self.values[self.index(cell)]
    }

    /// Returns `true` if `cell` holds a committed value.
    #[must_use]
    pub fn is_assigned(&self, cell: Cell) -> bool {
        self.value(cell) != 0
    }

    /// Remaining candidates of `cell`. Assigned cells report the empty
    /// set.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> CandidateSet {
        self.candidates[self.index(cell)]
    }

    /// All peers of `cell`: the rest of its row, the rest of its column,
    /// and the rest of its box, in that order, without duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcdoku_core::{Cell, Grid};
    /// use arcdoku_solver::Domains;
    ///
    /// let domains = Domains::for_grid(&Grid::default());
    /// let neighbors = domains.neighbors(Cell::new(4, 4));
    ///
    /// assert_eq!(neighbors.len(), 20);
    /// assert!(neighbors.contains(&Cell::new(4, 0)));
    /// assert!(neighbors.contains(&Cell::new(0, 4)));
    /// assert!(neighbors.contains(&Cell::new(3, 3)));
    /// ```
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        let mut neighbors = Neighbors::default();
        for col in 0..self.size {
            if col != cell.col {
                neighbors.push(Cell::new(cell.row, col));
            }
        }
        for row in 0..self.size {
            if row != cell.row {
                neighbors.push(Cell::new(row, cell.col));
            }
        }
        let box_row = (cell.row / self.box_size) * self.box_size;
        let box_col = (cell.col / self.box_size) * self.box_size;
        for row in box_row..box_row + self.box_size {
            for col in box_col..box_col + self.box_size {
                // Row and column peers are already present
                if row != cell.row && col != cell.col {
                    neighbors.push(Cell::new(row, col));
                }
            }
        }
        neighbors
    }

    /// Commits `value` at `cell` and strips it from the candidates of
    /// every unassigned neighbor. Returns `false` if that empties some
    /// neighbor's candidate set, meaning the assignment is inconsistent.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid or `value` does not fit it.
    pub fn assign(&mut self, cell: Cell, value: u8) -> bool {
        let index = self.index(cell);
        assert!(
            (1..=self.size).contains(&usize::from(value)),
            "value {value} does not fit a grid of size {size}",
            size = self.size
        );
        self.values[index] = value;
        self.candidates[index] = CandidateSet::EMPTY;

        let mut consistent = true;
        for neighbor in self.neighbors(cell) {
            let neighbor_index = self.index(neighbor);
            if self.values[neighbor_index] == 0
                && self.candidates[neighbor_index].remove(value)
                && self.candidates[neighbor_index].is_empty()
            {
                consistent = false;
            }
        }
        consistent
    }

    /// Removes `value` from the candidates of `cell`. Returns `false` if
    /// the set empties.
    pub(crate) fn exclude(&mut self, cell: Cell, value: u8) -> bool {
        let index = self.index(cell);
        self.candidates[index].remove(value);
        !self.candidates[index].is_empty()
    }

    /// Returns `true` once every cell is assigned or down to a single
    /// candidate.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.values
            .iter()
            .zip(&self.candidates)
            .all(|(&value, candidates)| value != 0 || candidates.len() == 1)
    }

    /// Iterates every cell coordinate in row-major order.
    #[must_use]
    pub fn cells(&self) -> Cells {
        Cell::all(self.size)
    }

    /// Iterates every unit: all rows, then all columns, then all boxes.
    pub(crate) fn units(&self) -> Units {
        Units {
            size: self.size,
            index: 0,
        }
    }

    /// The cells of `unit` in reading order.
    pub(crate) fn unit_cells(&self, unit: Unit) -> UnitCells {
        let mut cells = UnitCells::default();
        match unit {
            Unit::Row(row) => {
                for col in 0..self.size {
                    cells.push(Cell::new(row, col));
                }
            }
            Unit::Column(col) => {
                for row in 0..self.size {
                    cells.push(Cell::new(row, col));
                }
            }
            Unit::Box(index) => {
                let box_row = (index / self.box_size) * self.box_size;
                let box_col = (index % self.box_size) * self.box_size;
                for row in box_row..box_row + self.box_size {
                    for col in box_col..box_col + self.box_size {
                        cells.push(Cell::new(row, col));
                    }
                }
            }
        }
        cells
    }

    /// The unassigned cell with the fewest remaining candidates, ties
    /// broken in row-major order. `None` once every cell is assigned.
    pub(crate) fn most_constrained(&self) -> Option<Cell> {
        let mut best: Option<(Cell, usize)> = None;
        for cell in self.cells() {
            let index = self.index(cell);
            if self.values[index] != 0 {
                continue;
            }
            let len = self.candidates[index].len();
            if best.is_none_or(|(_, best_len)| len < best_len) {
                best = Some((cell, len));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Writes the decided state back to `grid`: committed values as-is,
    /// lone candidates as their value, anything still open as `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell or value does not fit `grid`, which
    /// only happens when `grid` has a different size than the grid this
    /// state was built from.
    pub fn write_back(&self, grid: &mut Grid) -> Result<(), GridError> {
        for cell in self.cells() {
            let index = self.index(cell);
            let value = if self.values[index] == 0 {
                self.candidates[index].as_single().unwrap_or(0)
            } else {
                self.values[index]
            };
            grid.write(cell, value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Domains {
    /// Lists the unassigned cells with their remaining candidates, one
    /// cell per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            let index = self.index(cell);
            if self.values[index] == 0 {
                writeln!(f, "{cell}: {}", self.candidates[index])?;
            }
        }
        Ok(())
    }
}
