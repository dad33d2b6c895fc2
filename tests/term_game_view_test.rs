use reverse_tetris::core::{seeded, GameConfig, GameSession, Grid, SessionSnapshot, Shape};
use reverse_tetris::term::{color_rgb, AnchorY, FrameBuffer, GameView, Viewport};
use reverse_tetris::types::{ColorTag, ShapeKind};

fn snapshot(pattern: &[&str], kinds: &[ShapeKind]) -> (GameSession, SessionSnapshot) {
    let grid = Grid::from_pattern(pattern, ColorTag::Orange).unwrap();
    let config = GameConfig::default()
        .with_board(grid.width(), grid.height())
        .with_fill_probability(1.0);
    let shapes: Vec<_> = kinds
        .iter()
        .map(|&kind| (Shape::from_kind(kind), ColorTag::Green))
        .collect();
    let game = GameSession::from_position(config, seeded(1), grid, &shapes).unwrap();
    let snap = game.snapshot();
    (game, snap)
}

fn all_text(fb: &FrameBuffer) -> String {
    fb.text()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 a 10x20 board is 20x20 inside a 22x22 frame
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_filled_and_empty_cells_two_chars_wide() {
    let (_, snap) = snapshot(&["#.", ".."], &[ShapeKind::Mono]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(6, 4));

    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().style.fg, color_rgb(ColorTag::Orange));
    assert_eq!(fb.get(3, 1).unwrap().ch, '·');
    assert_eq!(fb.get(1, 2).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_legal_and_illegal_footprints() {
    let (mut game, _) = snapshot(&["##.", "##."], &[ShapeKind::O]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(8, 4);

    game.select_slot(0);
    game.set_hover(0, 0);
    let legal = view.render(&game.snapshot(), vp);
    assert_eq!(legal.get(1, 1).unwrap().ch, '▓');
    assert_eq!(legal.get(3, 2).unwrap().ch, '▓');

    game.set_hover(0, 1);
    let illegal = view.render(&game.snapshot(), vp);
    // (0, 2) is empty under the footprint
    assert_eq!(illegal.get(5, 1).unwrap().ch, '×');
    assert_ne!(
        illegal.get(3, 1).unwrap().style.bg,
        legal.get(3, 1).unwrap().style.bg
    );
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameSession::new(1);
    game.hint();
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let text = all_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("MOVES"));
    assert!(text.contains("SHAPES"));
    assert!(text.contains('>'));
}

#[test]
fn term_view_skips_panel_on_narrow_viewports() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!all_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let (_, snap) = snapshot(&["#.", ".#"], &[ShapeKind::O]);
    assert!(snap.game_over());

    let fb = GameView::default().render(&snap, Viewport::new(40, 10));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    // start_y = (30 - 22) / 2
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_clips_boards_wider_than_the_viewport() {
    let mut snap = GameSession::new(1).snapshot();
    snap.grid = Grid::full(40_000, 1, ColorTag::Red);
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(79, 1).unwrap().ch, '█');
}

#[test]
fn term_view_maps_positions_back_to_cells() {
    let (_, snap) = snapshot(&["###", "###"], &[ShapeKind::Mono]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(8, 4);

    assert_eq!(view.cell_at(&snap, vp, 1, 1), Some((0, 0)));
    assert_eq!(view.cell_at(&snap, vp, 4, 2), Some((1, 1)));
    assert_eq!(view.cell_at(&snap, vp, 6, 2), Some((1, 2)));
    assert_eq!(view.cell_at(&snap, vp, 0, 1), None);
    assert_eq!(view.cell_at(&snap, vp, 7, 1), None);
}
