//! Error types for sheet evaluation.

use cellgrid_core::{CellRef, GridError, LabelError};
use thiserror::Error;

/// Errors that can occur while evaluating a sheet.
///
/// Every variant names the offending coordinate (in A1 form) or the raw
/// text that failed, so the first error out of [`crate::Sheet::evaluate`]
/// is enough to locate the bad cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Circular reference detected at {0}")]
    CircularReference(CellRef),

    /// A plain (non-formula) cell whose text is not an integer.
    /// Row and column are one-based.
    #[error("Invalid cell value at {row},{col}: {text}")]
    InvalidCellValue {
        row: usize,
        col: usize,
        text: String,
    },

    #[error("Invalid formula: {0}")]
    InvalidFormula(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Arithmetic overflow in formula: {0}")]
    Overflow(String),

    #[error("Reference {reference} out of range for {rows}x{cols} grid")]
    OutOfRange {
        reference: String,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, EvalError>;
