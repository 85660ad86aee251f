//! cellgrid-core - data model for the cellgrid evaluator.
//!
//! Provides the pieces the engine builds on:
//!
//! - [`label`] - bijective base-26 column labels ("A", "Z", "AA", ...)
//! - [`CellRef`] - cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Grid`] - immutable rectangular grid of raw cell text

pub mod cell_ref;
pub mod grid;
pub mod label;

pub use cell_ref::CellRef;
pub use grid::{Grid, GridError};
pub use label::{LabelError, index_to_label, label_to_index};
