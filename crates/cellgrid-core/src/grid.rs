//! Rectangular raw-text grid.

use thiserror::Error;

use crate::cell_ref::CellRef;

/// Errors from grid construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// An immutable rectangular grid of raw cell text.
///
/// Every row has the same length; this is checked once at construction and
/// relied on everywhere else. A grid with zero rows is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a grid, rejecting ragged input.
    pub fn new(rows: Vec<Vec<String>>) -> Result<Grid, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        Ok(Grid { rows })
    }

    /// Convenience constructor accepting anything row-of-string-like,
    /// e.g. arrays of `&str` literals in tests.
    pub fn from_rows<R, C, S>(rows: R) -> Result<Grid, GridError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Grid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether a coordinate falls inside the grid.
    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.row_count() && cell.col < self.col_count()
    }

    /// Raw text of a cell, or None outside the grid.
    pub fn get(&self, cell: CellRef) -> Option<&str> {
        self.rows.get(cell.row)?.get(cell.col).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(vec![]).unwrap();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.col_count(), 0);
        assert!(!grid.contains(CellRef::new(0, 0)));
    }

    #[test]
    fn test_rectangular_grid() {
        let grid = Grid::from_rows([["1", "2", ""], ["", "3", "4"]]).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.get(CellRef::new(2, 1)), Some("4"));
        assert_eq!(grid.get(CellRef::new(3, 0)), None);
        assert_eq!(grid.get(CellRef::new(0, 2)), None);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let err = Grid::from_rows([vec!["1", "2"], vec!["3"]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                len: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_zero_width_rows() {
        let grid = Grid::from_rows::<_, _, String>([vec![], vec![]]).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 0);
    }
}
