//! End-to-end session scenarios

use reverse_tetris::core::{
    seeded, GameConfig, GameSession, Grid, Phase, PlacementOutcome, RejectReason, Shape,
};
use reverse_tetris::types::{ColorTag, GameAction, ShapeKind};

/// Refills draw only monominoes so small boards stay playable.
fn config_for(grid: &Grid, fill: f64) -> GameConfig {
    GameConfig::default()
        .with_board(grid.width(), grid.height())
        .with_fill_probability(fill)
        .with_catalog(vec![Shape::from_kind(ShapeKind::Mono)])
}

fn session(pattern: &[&str], fill: f64, shapes: &[(Shape, ColorTag)]) -> GameSession {
    let grid = Grid::from_pattern(pattern, ColorTag::Yellow).unwrap();
    GameSession::from_position(config_for(&grid, fill), seeded(11), grid, shapes).unwrap()
}

#[test]
fn test_single_cell_board() {
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(&["#"], 1.0, &[(mono, ColorTag::Red)]);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.select_slot(0));
    assert!(game.can_place_selected(0, 0));

    let PlacementOutcome::Placed(report) = game.attempt_placement(0, 0) else {
        panic!("mono on a filled cell must place");
    };
    assert_eq!(report.cells_cleared, 1);
    assert_eq!(game.score(), 1);
    // Row 0 regenerated full, which leaves column 0 non-empty
    assert_eq!(report.repopulated.rows, vec![0]);
    assert!(report.repopulated.columns.is_empty());
    assert!(game.grid().is_filled(0, 0));
    assert!(report.refilled);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_single_cell_board_refilled_empty_ends_game() {
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(&["#"], 0.0, &[(mono, ColorTag::Red)]);
    game.select_slot(0);

    let PlacementOutcome::Placed(report) = game.attempt_placement(0, 0) else {
        panic!("expected placement");
    };
    assert_eq!(report.repopulated.rows, vec![0]);
    assert_eq!(report.repopulated.columns, vec![0]);
    assert!(report.game_over);
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.is_terminal());
}

#[test]
fn test_two_by_two_o_tetromino() {
    let o = Shape::from_kind(ShapeKind::O);
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(&["##", "##"], 1.0, &[(o, ColorTag::Blue), (mono, ColorTag::Red)]);

    game.select_slot(0);
    for (row, col) in [(0, 1), (1, 0), (1, 1)] {
        assert!(!game.can_place_selected(row, col));
    }

    let PlacementOutcome::Placed(report) = game.attempt_placement(0, 0) else {
        panic!("expected placement");
    };
    assert_eq!(report.cells_cleared, 4);
    assert_eq!(game.score(), 4);
    assert_eq!(report.repopulated.rows, vec![0, 1]);
    assert_eq!(game.grid().filled_count(), 4);
    assert_eq!(game.offered().len(), 1);
    assert!(!report.refilled);
}

#[test]
fn test_illegal_attempt_changes_nothing() {
    let t = Shape::from_kind(ShapeKind::T);
    // T fits at (0, 1) but not at (0, 0), where its stem would cover the hole
    let mut game = session(&["####", "#.##"], 1.0, &[(t, ColorTag::Green)]);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.select_slot(0));
    assert!(game.selected().is_some());
    assert!(game.can_place_selected(0, 1));

    let grid = game.grid().clone();
    let offered = game.offered().to_vec();
    let selected = game.selected();

    assert_eq!(
        game.attempt_placement(0, 0),
        PlacementOutcome::Rejected(RejectReason::IllegalAnchor)
    );
    assert_eq!(
        game.attempt_placement(5, 5),
        PlacementOutcome::Rejected(RejectReason::IllegalAnchor)
    );
    assert_eq!(*game.grid(), grid);
    assert_eq!(game.offered(), offered.as_slice());
    assert_eq!(game.selected(), selected);
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_placing_without_selection_is_rejected() {
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(&["##"], 1.0, &[(mono, ColorTag::Red)]);
    assert_eq!(
        game.attempt_placement(0, 0),
        PlacementOutcome::Rejected(RejectReason::NoSelection)
    );
    assert_eq!(game.grid().filled_count(), 2);
}

#[test]
fn test_identical_offers_are_removed_by_id() {
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(
        &["###", "###"],
        1.0,
        &[(mono, ColorTag::Red), (mono, ColorTag::Red), (mono, ColorTag::Red)],
    );
    let ids: Vec<_> = game.offered().iter().map(|o| o.id).collect();
    assert_ne!(ids[0], ids[1]);

    assert!(game.select_shape(ids[1]));
    assert!(game.attempt_placement(0, 0).is_placed());

    let remaining: Vec<_> = game.offered().iter().map(|o| o.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
    assert_eq!(game.selected(), None);
    assert_eq!(game.hover(), None);
}

#[test]
fn test_refill_after_last_offer_used() {
    let mono = Shape::from_kind(ShapeKind::Mono);
    let mut game = session(&["###"], 1.0, &[(mono, ColorTag::Red), (mono, ColorTag::Red)]);
    let old: Vec<_> = game.offered().iter().map(|o| o.id).collect();

    for col in 0..2 {
        game.select_slot(0);
        assert!(game.attempt_placement(0, col).is_placed());
    }
    assert_eq!(game.offered().len(), 3);
    assert!(game.offered().iter().all(|o| !old.contains(&o.id)));
}

#[test]
fn test_game_over_blocks_everything_but_new_game() {
    let o = Shape::from_kind(ShapeKind::O);
    let mut game = session(&["#.", ".#"], 0.8, &[(o, ColorTag::Red)]);
    assert_eq!(game.phase(), Phase::GameOver);

    assert!(!game.select_slot(0));
    assert!(!game.hint());
    assert_eq!(
        game.attempt_placement(0, 0),
        PlacementOutcome::Rejected(RejectReason::GameOver)
    );

    assert!(game.apply_action(GameAction::NewGame));
    assert_eq!(game.score(), 0);
    assert_eq!(game.offered().len(), game.config().offered_count);
    assert_eq!(game.game_id(), 2);
}

#[test]
fn test_unplayable_deal_starts_game_over() {
    let config = GameConfig::default().with_fill_probability(0.0);
    let mut game = GameSession::with_config(config, 13).unwrap();
    assert_eq!(game.grid().filled_count(), 0);
    assert_eq!(game.phase(), Phase::GameOver);

    game.new_game();
    assert_eq!(game.offered().len(), 3);
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.is_terminal());
    assert!(!game.hint());
}

#[test]
fn test_board_larger_than_supported_is_rejected() {
    let config = GameConfig::default().with_board(40_000, 1);
    assert!(GameSession::with_config(config, 1).is_err());
}

#[test]
fn test_new_game_resets_progress() {
    let mut game = GameSession::new(2024);
    let mut placed = 0;
    while placed < 5 && game.hint() {
        assert!(game.place_at_hover().is_placed());
        placed += 1;
    }
    assert!(game.score() > 0);

    game.new_game();
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.offered().len(), 3);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_offered_count_is_configurable() {
    let config = GameConfig::default().with_offered_count(1);
    let game = GameSession::with_config(config, 5).unwrap();
    assert_eq!(game.offered().len(), 1);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let play = |seed: u64| {
        let mut game = GameSession::new(seed);
        let mut trace = Vec::new();
        for _ in 0..30 {
            if !game.hint() {
                break;
            }
            if let PlacementOutcome::Placed(report) = game.place_at_hover() {
                trace.push((report.row, report.col, report.cells_cleared));
            }
        }
        (trace, game.grid().clone(), game.score())
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_score_matches_cells_removed() {
    let mut game = GameSession::new(31337);
    for _ in 0..20 {
        if !game.hint() {
            break;
        }
        let before_score = game.score();
        let Some(offer) = game.selected_offer().copied() else {
            panic!("hint selects an offer");
        };
        let PlacementOutcome::Placed(report) = game.place_at_hover() else {
            panic!("hinted placement must be legal");
        };
        assert_eq!(report.cells_cleared, offer.shape.cell_count());
        assert_eq!(game.score(), before_score + report.cells_cleared);
    }
}
