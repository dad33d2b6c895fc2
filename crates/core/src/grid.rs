//! Grid module - the board's cell storage
//!
//! The grid is a fixed-size rectangle of cells, each either filled or empty and
//! carrying a cosmetic colour. Storage is a flat row-major vector so a whole row
//! is a contiguous slice.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left edge.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{EngineError, Result};
use crate::types::ColorTag;

/// A single board cell.
///
/// `color` is only meaningful while `filled` is true, but it is kept when a
/// cell is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub filled: bool,
    pub color: ColorTag,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        color: ColorTag::Yellow,
    };

    pub fn filled(color: ColorTag) -> Self {
        Self {
            filled: true,
            color,
        }
    }
}

/// Generate one cell the way every board fill does: an independent fill roll,
/// then a colour drawn from the palette whether or not the cell is filled.
pub fn random_cell<R: Rng + ?Sized>(
    fill_probability: f64,
    palette: &[ColorTag],
    rng: &mut R,
) -> Cell {
    let filled = rng.gen::<f64>() < fill_probability;
    let color = palette.choose(rng).copied().unwrap_or(Cell::EMPTY.color);
    Cell { filled, color }
}

/// Build a fresh `width` x `height` board with every cell rolled independently.
pub fn create_random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    fill_probability: f64,
    palette: &[ColorTag],
    rng: &mut R,
) -> Grid {
    let cells = (0..width * height)
        .map(|_| random_cell(fill_probability, palette, rng))
        .collect();
    Grid {
        width,
        height,
        cells,
    }
}

/// The game board. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Create a board with every cell filled in one colour
    pub fn full(width: usize, height: usize, color: ColorTag) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::filled(color); width * height],
        }
    }

    /// Build a board from text rows: `#` is a filled cell, anything else is empty.
    ///
    /// ```
    /// use reverse_tetris_core::Grid;
    /// use reverse_tetris_core::types::ColorTag;
    ///
    /// let grid = Grid::from_pattern(&["##.", ".#."], ColorTag::Blue).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert!(grid.is_filled(1, 1));
    /// assert!(!grid.is_filled(1, 2));
    /// ```
    pub fn from_pattern(pattern: &[&str], color: ColorTag) -> Result<Self> {
        let height = pattern.len();
        let width = pattern.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * height);

        for (row, line) in pattern.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(EngineError::RaggedPattern {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars().map(|ch| Cell {
                filled: ch == '#',
                color,
            }));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Within bounds and filled
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell { filled: true, .. }))
    }

    /// Replace a cell. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip the fill flag, keeping the colour. Returns false if out of bounds.
    pub fn set_filled(&mut self, row: usize, col: usize, filled: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx].filled = filled;
                true
            }
            None => false,
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// True if the row exists and none of its cells are filled
    pub fn row_is_empty(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|cell| !cell.filled))
    }

    /// True if the column exists and none of its cells are filled
    pub fn column_is_empty(&self, col: usize) -> bool {
        if col >= self.width {
            return false;
        }
        (0..self.height).all(|row| !self.cells[row * self.width + col].filled)
    }

    /// Re-roll every cell of a row. Out-of-range rows are ignored.
    pub fn regenerate_row<R: Rng + ?Sized>(
        &mut self,
        row: usize,
        fill_probability: f64,
        palette: &[ColorTag],
        rng: &mut R,
    ) {
        if row >= self.height {
            return;
        }
        let start = row * self.width;
        for cell in &mut self.cells[start..start + self.width] {
            *cell = random_cell(fill_probability, palette, rng);
        }
    }

    /// Re-roll every cell of a column, top to bottom. Out-of-range columns are ignored.
    pub fn regenerate_column<R: Rng + ?Sized>(
        &mut self,
        col: usize,
        fill_probability: f64,
        palette: &[ColorTag],
        rng: &mut R,
    ) {
        if col >= self.width {
            return;
        }
        for row in 0..self.height {
            self.set(row, col, random_cell(fill_probability, palette, rng));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    /// `#`/`.` rows, the inverse of [`Grid::from_pattern`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.filled { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
