//! cellgrid-engine - spreadsheet-grid evaluation.
//!
//! Takes a rectangular grid of raw cell text (blank, integer literal, or a
//! `=`-prefixed formula referencing other cells) and resolves every cell to
//! a signed integer. Evaluation is memoized and recursive: formulas demand
//! the cells they reference, and a per-cell marker catches circular
//! references as they happen.

pub mod error;
mod eval;

pub use error::{EvalError, Result};
pub use eval::Sheet;

pub use cellgrid_core::{CellRef, Grid, GridError};
