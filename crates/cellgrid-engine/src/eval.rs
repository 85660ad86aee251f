//! Memoized recursive cell evaluation.
//!
//! Each cell is computed at most once. A value table caches results, and a
//! tri-state marker per cell both short-circuits repeat work and detects
//! circular references: a cell re-entered while still `InProgress` is part
//! of a cycle. This is the classic gray/black depth-first-search idiom with
//! dependencies discovered lazily during the descent, so no explicit
//! dependency graph is built.

use std::sync::OnceLock;

use regex::Regex;

use cellgrid_core::{CellRef, Grid, label::label_to_index};

use crate::error::{EvalError, Result};

/// Evaluation progress for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    NotStarted,
    InProgress,
    Done,
}

fn reference_re() -> &'static Regex {
    static REF_RE: OnceLock<Regex> = OnceLock::new();
    REF_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+)([0-9]+)$").expect("cell reference regex must compile")
    })
}

/// A spreadsheet: raw cell text plus per-cell evaluation state.
///
/// Construct with [`Sheet::new`] (or [`Sheet::from_rows`] straight from
/// text), then call [`Sheet::evaluate`]. A `Sheet` owns its tables
/// exclusively, so independent sheets can be evaluated in parallel without
/// any shared state.
#[derive(Debug)]
pub struct Sheet {
    grid: Grid,
    values: Vec<Vec<i64>>,
    markers: Vec<Vec<Marker>>,
}

impl Sheet {
    /// Create a sheet over a validated grid. Value and marker tables are
    /// allocated to the grid's dimensions, all zero / not started.
    pub fn new(grid: Grid) -> Sheet {
        let rows = grid.row_count();
        let cols = grid.col_count();
        Sheet {
            grid,
            values: vec![vec![0; cols]; rows],
            markers: vec![vec![Marker::NotStarted; cols]; rows],
        }
    }

    /// Build a sheet directly from rows of raw cell text.
    /// Fails if the rows are ragged.
    pub fn from_rows<R, C, S>(rows: R) -> Result<Sheet>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Sheet::new(Grid::from_rows(rows)?))
    }

    /// Evaluate every cell and return the resolved values, same dimensions
    /// as the input grid.
    ///
    /// Cells are visited in row-major order; each cell's dependencies are
    /// evaluated recursively as they are discovered. The first error aborts
    /// the sweep. Already-resolved cells are never recomputed, so a second
    /// call returns identical values without re-doing any work.
    pub fn evaluate(&mut self) -> Result<Vec<Vec<i64>>> {
        for row in 0..self.grid.row_count() {
            for col in 0..self.grid.col_count() {
                if self.markers[row][col] != Marker::Done {
                    self.evaluate_cell(CellRef::new(col, row))?;
                }
            }
        }
        Ok(self.values.clone())
    }

    fn evaluate_cell(&mut self, cell: CellRef) -> Result<i64> {
        match self.markers[cell.row][cell.col] {
            Marker::Done => return Ok(self.values[cell.row][cell.col]),
            Marker::InProgress => return Err(EvalError::CircularReference(cell)),
            Marker::NotStarted => {}
        }
        self.markers[cell.row][cell.col] = Marker::InProgress;

        let raw = self.grid.get(cell).unwrap_or("").trim().to_string();

        let value = if raw.is_empty() {
            0
        } else if let Some(formula) = raw.strip_prefix('=') {
            self.evaluate_formula(formula.trim())?
        } else {
            raw.parse::<i64>().map_err(|_| EvalError::InvalidCellValue {
                row: cell.row + 1,
                col: cell.col + 1,
                text: raw.clone(),
            })?
        };

        self.values[cell.row][cell.col] = value;
        self.markers[cell.row][cell.col] = Marker::Done;
        Ok(value)
    }

    /// Evaluate formula text (the part after `=`, already trimmed).
    ///
    /// Legal shapes after the operator split: a single token, or
    /// `token op token`. Both operands are evaluated before the operator
    /// position is examined, so a shape like `-5-` (splitting to
    /// `["-", "5", "-"]`) fails on its operator-as-operand token rather
    /// than on the formula shape.
    fn evaluate_formula(&mut self, formula: &str) -> Result<i64> {
        let tokens = split_operators(formula);
        match tokens.as_slice() {
            [token] => self.evaluate_token(token),
            [left, op, right] => {
                let left = self.evaluate_token(left)?;
                let right = self.evaluate_token(right)?;
                let value = match *op {
                    "+" => left.checked_add(right),
                    "-" => left.checked_sub(right),
                    _ => return Err(EvalError::InvalidFormula(formula.to_string())),
                };
                value.ok_or_else(|| EvalError::Overflow(formula.to_string()))
            }
            _ => Err(EvalError::InvalidFormula(formula.to_string())),
        }
    }

    /// Evaluate a single token: a cell reference recurses into that cell;
    /// anything else must be a signed integer literal.
    fn evaluate_token(&mut self, token: &str) -> Result<i64> {
        if reference_re().is_match(token) {
            let cell = self.resolve_reference(token)?;
            return self.evaluate_cell(cell);
        }
        token
            .parse::<i64>()
            .map_err(|_| EvalError::InvalidToken(token.to_string()))
    }

    /// Turn a reference token into an in-bounds coordinate.
    /// Row 0 and unrepresentably large row numbers are out of range, as is
    /// any coordinate beyond the grid's dimensions.
    fn resolve_reference(&self, token: &str) -> Result<CellRef> {
        let caps = reference_re()
            .captures(token)
            .ok_or_else(|| EvalError::InvalidToken(token.to_string()))?;

        let out_of_range = || EvalError::OutOfRange {
            reference: token.to_string(),
            rows: self.grid.row_count(),
            cols: self.grid.col_count(),
        };

        let col_index = label_to_index(&caps[1])?;
        let col = usize::try_from(col_index - 1).map_err(|_| out_of_range())?;
        let row = caps[2]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| out_of_range())?;

        let cell = CellRef::new(col, row);
        if !self.grid.contains(cell) {
            return Err(out_of_range());
        }
        Ok(cell)
    }
}

/// Split formula text on `+`/`-`, keeping each operator as its own token.
/// Fragments are trimmed and blank fragments dropped, so a leading operator
/// (as in `-5`) yields an operator token with no left-hand side; the
/// resulting two-token shape is rejected by the caller.
fn split_operators(formula: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (at, ch) in formula.char_indices() {
        if ch == '+' || ch == '-' {
            let fragment = formula[start..at].trim();
            if !fragment.is_empty() {
                tokens.push(fragment);
            }
            tokens.push(&formula[at..at + 1]);
            start = at + 1;
        }
    }
    let tail = formula[start..].trim();
    if !tail.is_empty() {
        tokens.push(tail);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_operators_single_token() {
        assert_eq!(split_operators("5"), vec!["5"]);
        assert_eq!(split_operators("A1"), vec!["A1"]);
        assert_eq!(split_operators("  A1  "), vec!["A1"]);
    }

    #[test]
    fn test_split_operators_binary() {
        assert_eq!(split_operators("A1+5"), vec!["A1", "+", "5"]);
        assert_eq!(split_operators("A1 - B2"), vec!["A1", "-", "B2"]);
        assert_eq!(split_operators("10+B2"), vec!["10", "+", "B2"]);
    }

    #[test]
    fn test_split_operators_leading_operator() {
        // The blank fragment before the sign is dropped; the sign survives
        // as a standalone operator token.
        assert_eq!(split_operators("-5"), vec!["-", "5"]);
        assert_eq!(split_operators("+5"), vec!["+", "5"]);
    }

    #[test]
    fn test_split_operators_degenerate() {
        assert_eq!(split_operators(""), Vec::<&str>::new());
        assert_eq!(split_operators("-"), vec!["-"]);
        assert_eq!(split_operators("-5-"), vec!["-", "5", "-"]);
        assert_eq!(split_operators("A1+B2-C3"), vec!["A1", "+", "B2", "-", "C3"]);
    }

    #[test]
    fn test_marker_transitions_memoize() {
        let mut sheet = Sheet::from_rows([["7", "=A1"]]).unwrap();
        assert_eq!(sheet.evaluate_cell(CellRef::new(1, 0)).unwrap(), 7);
        // A1 was resolved on demand; both cells are now memoized.
        assert_eq!(sheet.markers[0][0], Marker::Done);
        assert_eq!(sheet.markers[0][1], Marker::Done);
        assert_eq!(sheet.evaluate_cell(CellRef::new(0, 0)).unwrap(), 7);
    }

    #[test]
    fn test_resolve_reference_bounds() {
        let sheet = Sheet::from_rows([["1", "2"]]).unwrap();
        assert_eq!(sheet.resolve_reference("B1").unwrap(), CellRef::new(1, 0));
        assert!(matches!(
            sheet.resolve_reference("C1"),
            Err(EvalError::OutOfRange { rows: 1, cols: 2, .. })
        ));
        assert!(matches!(
            sheet.resolve_reference("A2"),
            Err(EvalError::OutOfRange { .. })
        ));
        assert!(matches!(
            sheet.resolve_reference("A0"),
            Err(EvalError::OutOfRange { .. })
        ));
    }
}
