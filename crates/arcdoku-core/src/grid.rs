//! Puzzle board storage.
//!
//! This module provides [`Grid`], a square board of cell values, together
//! with [`GridError`] for the accessor failures. The grid is pure storage:
//! it range-checks coordinates and values but never enforces Sudoku rules,
//! which are the solver's concern.

use std::fmt::{self, Write as _};

use crate::cell::Cell;

/// Errors reported by [`Grid`] constructors and accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The requested side length is not a supported perfect square.
    #[display("invalid grid size {size}: expected a perfect square between 1 and 25")]
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },
    /// A coordinate lies outside the grid.
    #[display("cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        cell: Cell,
        /// Side length of the grid.
        size: usize,
    },
    /// A cell value does not fit the grid.
    #[display("value {value} does not fit a grid of size {size}")]
    InvalidValue {
        /// The rejected value.
        value: u8,
        /// Side length of the grid.
        size: usize,
    },
}

/// A square puzzle board of cell values.
///
/// Cells hold values from 1 to the side length, with `0` marking an empty
/// cell. The side length must be a perfect square (1, 4, 9, 16, or 25) so
/// the board divides into `box_size` x `box_size` boxes. The grid performs
/// no constraint checking; a write that duplicates a value within a row is
/// accepted and surfaces later as unsolvability.
///
/// # Examples
///
/// ```
/// use arcdoku_core::{Cell, Grid};
///
/// let mut grid = Grid::new(9)?;
/// grid.write(Cell::new(0, 0), 5)?;
///
/// assert_eq!(grid.get(Cell::new(0, 0))?, 5);
/// assert_eq!(grid.get(Cell::new(8, 8))?, 0);
/// # Ok::<(), arcdoku_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<u8>,
}

impl Default for Grid {
    /// Creates an empty standard 9x9 grid.
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            box_size: 3,
            cells: vec![0; Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }
}

impl Grid {
    /// Standard Sudoku side length.
    pub const DEFAULT_SIZE: usize = 9;

    /// Largest supported side length.
    pub const MAX_SIZE: usize = 25;

    /// Creates an empty grid with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] unless `size` is a perfect square
    /// between 1 and [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(GridError::InvalidSize { size });
        }
        let box_size = (1..=size)
            .find(|box_size| box_size * box_size == size)
            .ok_or(GridError::InvalidSize { size })?;
        Ok(Self {
            size,
            box_size,
            cells: vec![0; size * size],
        })
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Side length of one box, the integer square root of the grid size.
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    fn index(&self, cell: Cell) -> Result<usize, GridError> {
        if cell.row >= self.size || cell.col >= self.size {
            return Err(GridError::OutOfBounds {
                cell,
                size: self.size,
            });
        }
        Ok(cell.row * self.size + cell.col)
    }

    /// Reads the value at `cell`, with `0` meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` lies outside the grid.
    pub fn get(&self, cell: Cell) -> Result<u8, GridError> {
        Ok(self.cells[self.index(cell)?])
    }

    /// Writes `value` at `cell`, with `0` clearing the cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` lies outside the grid,
    /// or [`GridError::InvalidValue`] if `value` exceeds the grid size.
    pub fn write(&mut self, cell: Cell, value: u8) -> Result<(), GridError> {
        let index = self.index(cell)?;
        if usize::from(value) > self.size {
            return Err(GridError::InvalidValue {
                value,
                size: self.size,
            });
        }
        self.cells[index] = value;
        Ok(())
    }

    /// Returns `true` once every cell holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Iterates all cells with their values in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> {
        Cell::all(self.size).zip(self.cells.iter().copied())
    }

    /// Renders the grid as text, one row per line.
    ///
    /// Values print in fixed-width columns, empty cells stay blank, and
    /// rule lines separate box bands:
    ///
    /// ```text
    /// 1   | 3
    ///   4 |   2
    /// ----+----
    ///   1 |   3
    /// 4   | 2
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.size < 10 { 1 } else { 2 };
        for row in 0..self.size {
            if row > 0 && row % self.box_size == 0 {
                let mut rule = String::new();
                for col in 0..self.size {
                    if col > 0 {
                        rule.push_str(if col % self.box_size == 0 { "-+-" } else { "-" });
                    }
                    for _ in 0..width {
                        rule.push('-');
                    }
                }
                writeln!(f, "{rule}")?;
            }

            let mut line = String::new();
            for col in 0..self.size {
                if col > 0 {
                    line.push_str(if col % self.box_size == 0 { " | " } else { " " });
                }
                let value = self.cells[row * self.size + col];
                if value == 0 {
                    for _ in 0..width {
                        line.push(' ');
                    }
                } else {
                    write!(line, "{value:>width$}")?;
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_starts_empty() {
        let grid = Grid::new(9).unwrap();
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.box_size(), 3);
        assert!(!grid.is_full());
        for cell in Cell::all(9) {
            assert_eq!(grid.get(cell).unwrap(), 0);
        }
    }

    #[test]
    fn test_new_supported_sizes() {
        for (size, box_size) in [(1, 1), (4, 2), (9, 3), (16, 4), (25, 5)] {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.size(), size);
            assert_eq!(grid.box_size(), box_size);
        }
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        for size in [0, 2, 3, 8, 10, 24, 36] {
            assert_eq!(Grid::new(size), Err(GridError::InvalidSize { size }));
        }
    }

    #[test]
    fn test_default_is_nine_by_nine() {
        let grid = Grid::default();
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.box_size(), 3);
    }

    #[test]
    fn test_write_and_get() {
        let mut grid = Grid::default();
        grid.write(Cell::new(4, 4), 7).unwrap();
        assert_eq!(grid.get(Cell::new(4, 4)).unwrap(), 7);

        // Overwrite, then clear with 0
        grid.write(Cell::new(4, 4), 3).unwrap();
        assert_eq!(grid.get(Cell::new(4, 4)).unwrap(), 3);
        grid.write(Cell::new(4, 4), 0).unwrap();
        assert_eq!(grid.get(Cell::new(4, 4)).unwrap(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::default();
        let cell = Cell::new(9, 0);
        assert_eq!(grid.get(cell), Err(GridError::OutOfBounds { cell, size: 9 }));
        let cell = Cell::new(0, 9);
        assert_eq!(
            grid.write(cell, 1),
            Err(GridError::OutOfBounds { cell, size: 9 })
        );
    }

    #[test]
    fn test_write_rejects_oversized_value() {
        let mut grid = Grid::default();
        assert_eq!(
            grid.write(Cell::new(0, 0), 10),
            Err(GridError::InvalidValue { value: 10, size: 9 })
        );

        let mut small = Grid::new(4).unwrap();
        assert_eq!(
            small.write(Cell::new(0, 0), 5),
            Err(GridError::InvalidValue { value: 5, size: 4 })
        );
        small.write(Cell::new(0, 0), 4).unwrap();
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(4).unwrap();
        assert!(!grid.is_full());
        for (i, cell) in Cell::all(4).enumerate() {
            grid.write(cell, u8::try_from(i % 4 + 1).unwrap()).unwrap();
        }
        assert!(grid.is_full());
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let mut grid = Grid::new(4).unwrap();
        grid.write(Cell::new(0, 1), 2).unwrap();
        grid.write(Cell::new(3, 0), 4).unwrap();

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], (Cell::new(0, 0), 0));
        assert_eq!(cells[1], (Cell::new(0, 1), 2));
        assert_eq!(cells[12], (Cell::new(3, 0), 4));
    }

    #[test]
    fn test_render_separates_boxes() {
        let mut grid = Grid::new(4).unwrap();
        let values = [1, 0, 3, 0, 0, 4, 0, 2, 0, 1, 0, 3, 4, 0, 2, 0];
        for (cell, value) in Cell::all(4).zip(values) {
            grid.write(cell, value).unwrap();
        }

        let expected = "1   | 3\n  4 |   2\n----+----\n  1 |   3\n4   | 2\n";
        assert_eq!(grid.render(), expected);
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_render_wide_values() {
        let mut grid = Grid::new(16).unwrap();
        grid.write(Cell::new(0, 0), 12).unwrap();
        grid.write(Cell::new(0, 1), 3).unwrap();

        let first_line = grid.render().lines().next().unwrap().to_owned();
        assert!(first_line.starts_with("12  3"));
    }

    proptest! {
        #[test]
        fn test_write_then_get_roundtrip(
            row in 0..9_usize,
            col in 0..9_usize,
            value in 0_u8..=9,
        ) {
            let mut grid = Grid::default();
            let cell = Cell::new(row, col);
            grid.write(cell, value).unwrap();
            prop_assert_eq!(grid.get(cell).unwrap(), value);
        }
    }
}
