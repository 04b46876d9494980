//! CSV puzzle parsing.
//!
//! Puzzles are plain text with one row per line and comma-separated
//! fields. A field that is empty, all whitespace, or `0` marks an empty
//! cell. The grid size is inferred from the number of lines, so the same
//! format covers 4x4 test boards and full 9x9 puzzles.
//!
//! # Examples
//!
//! ```
//! use arcdoku_core::{Cell, Grid};
//!
//! let grid: Grid = "1,,3,\n,4,,2\n,1,,3\n4,,2,".parse()?;
//!
//! assert_eq!(grid.size(), 4);
//! assert_eq!(grid.get(Cell::new(0, 0))?, 1);
//! assert_eq!(grid.get(Cell::new(0, 1))?, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::str::FromStr;

use crate::{
    cell::Cell,
    grid::{Grid, GridError},
};

/// Errors reported when parsing CSV puzzle text.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParsePuzzleError {
    /// The input contains no lines.
    #[display("puzzle text is empty")]
    Empty,
    /// A row has the wrong number of fields.
    #[display("row {row} has {found} fields, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of fields found.
        found: usize,
        /// Number of fields required.
        expected: usize,
    },
    /// A field holds something other than a cell value.
    #[display("invalid value {token:?} at row {row}, column {col}")]
    InvalidToken {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending field text.
        token: String,
    },
    /// The line count or a parsed value does not form a valid grid.
    #[display("{_0}")]
    Grid(#[from] GridError),
}

impl FromStr for Grid {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.is_empty() {
            return Err(ParsePuzzleError::Empty);
        }

        let size = lines.len();
        let mut grid = Grid::new(size)?;
        for (row, line) in lines.into_iter().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != size {
                return Err(ParsePuzzleError::RowLength {
                    row,
                    found: fields.len(),
                    expected: size,
                });
            }
            for (col, field) in fields.into_iter().enumerate() {
                let token = field.trim();
                if token.is_empty() || token == "0" {
                    continue;
                }
                let value: u8 = token.parse().map_err(|_| ParsePuzzleError::InvalidToken {
                    row,
                    col,
                    token: token.to_owned(),
                })?;
                grid.write(Cell::new(row, col), value)?;
            }
        }
        Ok(grid)
    }
}
