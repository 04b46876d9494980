//! Grid coordinates.
//!
//! This module provides [`Cell`], a zero-based `(row, column)` coordinate
//! on a square grid, and [`Cells`], an iterator over every coordinate of a
//! grid in row-major order.

use std::{fmt, iter::FusedIterator};

/// A zero-based `(row, column)` coordinate on a square grid.
///
/// Coordinates order row-major: every cell of row 0 precedes every cell of
/// row 1.
///
/// # Examples
///
/// ```
/// use arcdoku_core::Cell;
///
/// let cell = Cell::new(4, 4);
/// assert_eq!(cell.to_string(), "(4, 4)");
/// assert!(Cell::new(0, 8) < Cell::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Cell {
    /// Creates a coordinate from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns an iterator over every cell of a `size`x`size` grid in
    /// row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcdoku_core::Cell;
    ///
    /// let mut cells = Cell::all(2);
    /// assert_eq!(cells.next(), Some(Cell::new(0, 0)));
    /// assert_eq!(cells.next(), Some(Cell::new(0, 1)));
    /// assert_eq!(cells.next(), Some(Cell::new(1, 0)));
    /// assert_eq!(cells.next(), Some(Cell::new(1, 1)));
    /// assert_eq!(cells.next(), None);
    /// ```
    #[must_use]
    pub const fn all(size: usize) -> Cells {
        Cells { size, index: 0 }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row-major iterator over the cells of a square grid.
///
/// Created by [`Cell::all`].
#[derive(Debug, Clone)]
pub struct Cells {
    size: usize,
    index: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.size * self.size {
            return None;
        }
        let cell = Cell::new(self.index / self.size, self.index % self.size);
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size * self.size - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}
