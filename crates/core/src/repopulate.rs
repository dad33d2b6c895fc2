//! Repopulation - refilling rows and columns that a removal emptied.
//!
//! Two passes over the live grid: every fully-empty row is re-rolled top to
//! bottom, then every fully-empty column left to right. Columns are judged
//! after the row pass, so a row regenerated in pass one can keep a column from
//! being regenerated in pass two. That order is observable and fixed.

use log::debug;
use rand::Rng;

use crate::grid::Grid;
use crate::types::ColorTag;

/// Which lines a repopulation pass regenerated, in the order it did them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepopulateReport {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
}

impl RepopulateReport {
    /// True if any row or column was regenerated
    pub fn changed(&self) -> bool {
        !self.rows.is_empty() || !self.columns.is_empty()
    }
}

/// Regenerate every fully-empty row, then every fully-empty column.
///
/// Regenerated lines use the same per-cell roll as board creation. A line can
/// come back empty by chance; it is not retried.
pub fn repopulate<R: Rng + ?Sized>(
    grid: &mut Grid,
    fill_probability: f64,
    palette: &[ColorTag],
    rng: &mut R,
) -> RepopulateReport {
    let mut report = RepopulateReport::default();

    for row in 0..grid.height() {
        if grid.row_is_empty(row) {
            grid.regenerate_row(row, fill_probability, palette, rng);
            report.rows.push(row);
        }
    }

    for col in 0..grid.width() {
        if grid.column_is_empty(col) {
            grid.regenerate_column(col, fill_probability, palette, rng);
            report.columns.push(col);
        }
    }

    if report.changed() {
        debug!(
            "repopulated rows {:?} and columns {:?}",
            report.rows, report.columns
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(pattern: &[&str]) -> Grid {
        Grid::from_pattern(pattern, ColorTag::Green).unwrap()
    }

    #[test]
    fn test_no_empty_lines_is_a_no_op() {
        let mut g = grid(&["#.", ".#"]);
        let before = g.clone();
        let report = repopulate(&mut g, 1.0, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(1));
        assert!(!report.changed());
        assert_eq!(g, before);
    }

    #[test]
    fn test_rows_regenerate_before_columns() {
        // Row 0 and column 1 are both empty. The row pass fills (0, 1), so by
        // the time columns are checked, column 1 is no longer empty.
        let mut g = grid(&["..", "#."]);
        let report = repopulate(&mut g, 1.0, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(1));

        assert_eq!(report.rows, vec![0]);
        assert!(report.columns.is_empty());
        assert_eq!(g.to_string(), "##\n#.");
    }

    #[test]
    fn test_column_check_reads_live_grid() {
        // With zero fill the regenerated row stays empty, so column 1 is still
        // empty when the column pass looks at it.
        let mut g = grid(&["..", "#."]);
        let report = repopulate(&mut g, 0.0, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(1));

        assert_eq!(report.rows, vec![0]);
        assert_eq!(report.columns, vec![1]);
        assert!(report.changed());
        assert_eq!(g.to_string(), "..\n#.");
    }

    #[test]
    fn test_fully_empty_board_regenerates_every_row() {
        let mut g = Grid::new(3, 4);
        let report = repopulate(&mut g, 1.0, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(2));

        assert_eq!(report.rows, vec![0, 1, 2, 3]);
        assert!(report.columns.is_empty());
        assert_eq!(g.filled_count(), 12);
    }

    #[test]
    fn test_empty_column_alone() {
        let mut g = grid(&["#.#", "#.#"]);
        let report = repopulate(&mut g, 1.0, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(3));

        assert!(report.rows.is_empty());
        assert_eq!(report.columns, vec![1]);
        assert_eq!(g.filled_count(), 6);
    }
}
