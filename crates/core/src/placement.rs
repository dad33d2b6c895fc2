//! Placement legality and cell removal.
//!
//! [`can_place`] is the only legality predicate in the engine. Cursor
//! highlighting, the session's click gating, [`apply_removal`]'s precondition,
//! hints and terminal-state detection all go through it.

use log::trace;

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::shapes::Shape;

/// True iff every 1-cell of `shape`, anchored with its top-left matrix cell at
/// (row, col), lands on an in-bounds filled cell.
///
/// A shape without 1-cells is legal at any in-bounds anchor.
pub fn can_place(shape: &Shape, row: usize, col: usize, grid: &Grid) -> bool {
    if row >= grid.height() || col >= grid.width() {
        return false;
    }
    shape
        .cells()
        .all(|(dr, dc)| grid.is_filled(row + dr, col + dc))
}

/// Every legal anchor for `shape`, row-major.
pub fn legal_anchors<'a>(
    shape: &'a Shape,
    grid: &'a Grid,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    (0..grid.height())
        .flat_map(move |row| (0..grid.width()).map(move |col| (row, col)))
        .filter(move |&(row, col)| can_place(shape, row, col, grid))
}

/// Clear the cells covered by `shape` at (row, col) and return how many were
/// cleared. Colours are left in place.
///
/// Fails with [`EngineError::InvalidPlacement`] without touching the grid when
/// `can_place` does not hold.
pub fn apply_removal(shape: &Shape, row: usize, col: usize, grid: &mut Grid) -> Result<u32> {
    if !can_place(shape, row, col, grid) {
        trace!("removal rejected at ({row}, {col})");
        return Err(EngineError::InvalidPlacement { row, col });
    }

    for (dr, dc) in shape.cells() {
        grid.set_filled(row + dr, col + dc, false);
    }

    Ok(shape.cell_count())
}
