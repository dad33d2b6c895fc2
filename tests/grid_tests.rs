//! Board generation and grid helpers

use rand::rngs::StdRng;
use rand::SeedableRng;

use reverse_tetris::core::{create_random_grid, Cell, EngineError, Grid};
use reverse_tetris::types::ColorTag;

#[test]
fn test_random_grid_dimensions() {
    let mut rng = StdRng::seed_from_u64(1);
    let grid = create_random_grid(10, 20, 0.8, &ColorTag::PALETTE, &mut rng);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.cells().len(), 200);
    assert_eq!(grid.rows().count(), 20);
}

#[test]
fn test_fill_probability_extremes() {
    let mut rng = StdRng::seed_from_u64(2);
    let full = create_random_grid(6, 4, 1.0, &ColorTag::PALETTE, &mut rng);
    assert_eq!(full.filled_count(), 24);

    let empty = create_random_grid(6, 4, 0.0, &ColorTag::PALETTE, &mut rng);
    assert_eq!(empty.filled_count(), 0);
}

#[test]
fn test_colours_come_from_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let palette = [ColorTag::Pink, ColorTag::Orange];
    let grid = create_random_grid(8, 8, 1.0, &palette, &mut rng);
    assert!(grid.cells().iter().all(|c| palette.contains(&c.color)));
}

#[test]
fn test_same_seed_same_board() {
    let a = create_random_grid(10, 20, 0.8, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(42));
    let b = create_random_grid(10, 20, 0.8, &ColorTag::PALETTE, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_fill_rate_is_roughly_probability() {
    let mut rng = StdRng::seed_from_u64(4);
    let grid = create_random_grid(100, 100, 0.8, &ColorTag::PALETTE, &mut rng);
    let rate = grid.filled_count() as f64 / 10_000.0;
    assert!((0.75..0.85).contains(&rate), "fill rate {rate}");
}

#[test]
fn test_pattern_round_trips_through_display() {
    let grid = Grid::from_pattern(&["#.#", "..#"], ColorTag::Red).unwrap();
    assert_eq!(grid.to_string(), "#.#\n..#");
    assert!(grid.is_filled(0, 0));
    assert!(!grid.is_filled(1, 0));
    assert_eq!(grid.get(0, 2), Some(Cell::filled(ColorTag::Red)));
}

#[test]
fn test_ragged_pattern_is_rejected() {
    let err = Grid::from_pattern(&["##", "#"], ColorTag::Red).unwrap_err();
    assert_eq!(
        err,
        EngineError::RaggedPattern {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = Grid::full(2, 2, ColorTag::Blue);
    assert_eq!(grid.get(2, 0), None);
    assert!(!grid.is_filled(0, 5));
    assert!(!grid.set_filled(3, 3, false));
    assert_eq!(grid.filled_count(), 4);
}

#[test]
fn test_line_emptiness() {
    let grid = Grid::from_pattern(&["...", "#.."], ColorTag::Blue).unwrap();
    assert!(grid.row_is_empty(0));
    assert!(!grid.row_is_empty(1));
    assert!(!grid.column_is_empty(0));
    assert!(grid.column_is_empty(1));
    assert!(grid.column_is_empty(2));
}
