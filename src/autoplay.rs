//! Headless greedy player.
//!
//! Plays a session to game over (or a move limit) without a terminal and emits
//! one JSON object per line: a `move` record after every placement and a final
//! `summary` record.

use std::io::Write;

use anyhow::{bail, Result};
use log::info;
use rand::Rng;
use serde::Serialize;

use crate::core::{
    all_legal_placements, GameSession, Grid, MoveReport, Placement, PlacementOutcome, Shape,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub game_id: u32,
    pub move_number: u32,
    pub shape_id: u32,
    /// Catalog name of the shape, `"custom"` for shapes outside the standard catalog
    pub shape: &'static str,
    pub row: usize,
    pub col: usize,
    pub cleared: u32,
    pub score: u32,
    pub rows_regenerated: Vec<usize>,
    pub columns_regenerated: Vec<usize>,
    pub refilled: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub seed: Option<u64>,
    pub game_id: u32,
    pub moves: u32,
    pub score: u32,
    pub game_over: bool,
    pub filled_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Move(MoveRecord),
    Summary(Summary),
}

impl MoveRecord {
    fn from_report<R: Rng>(session: &GameSession<R>, report: &MoveReport) -> Self {
        Self {
            game_id: session.game_id(),
            move_number: session.moves(),
            shape_id: report.id.0,
            shape: report.shape.kind().map_or("custom", |kind| kind.as_str()),
            row: report.row,
            col: report.col,
            cleared: report.cells_cleared,
            score: session.score(),
            rows_regenerated: report.repopulated.rows.clone(),
            columns_regenerated: report.repopulated.columns.clone(),
            refilled: report.refilled,
            game_over: report.game_over,
        }
    }
}

/// Pick the move that removes the most cells, breaking ties toward anchors
/// that leave the fewest filled cells in the rows and columns they touch.
/// Among equal candidates the first in enumeration order wins.
pub fn choose_move<R: Rng>(session: &GameSession<R>) -> Option<Placement> {
    let grid = session.grid();
    let mut best: Option<(Placement, (u32, usize))> = None;

    for placement in all_legal_placements(session.offered(), grid) {
        let Some(offer) = session.offered().iter().find(|o| o.id == placement.id) else {
            continue;
        };
        let cleared = offer.shape.cell_count();
        let leftover = leftover_in_touched_lines(&offer.shape, placement.row, placement.col, grid);
        let better = match &best {
            None => true,
            Some((_, (best_cleared, best_leftover))) => {
                cleared > *best_cleared || (cleared == *best_cleared && leftover < *best_leftover)
            }
        };
        if better {
            best = Some((placement, (cleared, leftover)));
        }
    }

    best.map(|(placement, _)| placement)
}

/// Filled cells that would remain in the rows and columns covered by the shape.
fn leftover_in_touched_lines(shape: &Shape, row: usize, col: usize, grid: &Grid) -> usize {
    let mut total = 0;
    for dr in 0..shape.height() {
        let covered = (0..shape.width()).filter(|&dc| shape.contains(dr, dc)).count();
        let filled = (0..grid.width())
            .filter(|&c| grid.is_filled(row + dr, c))
            .count();
        total += filled.saturating_sub(covered);
    }
    for dc in 0..shape.width() {
        let covered = (0..shape.height()).filter(|&dr| shape.contains(dr, dc)).count();
        let filled = (0..grid.height())
            .filter(|&r| grid.is_filled(r, col + dc))
            .count();
        total += filled.saturating_sub(covered);
    }
    total
}

/// Play until game over or `max_moves`, writing JSON lines to `out`.
pub fn run<R: Rng, W: Write>(
    session: &mut GameSession<R>,
    max_moves: Option<u32>,
    out: &mut W,
) -> Result<Summary> {
    let limit = max_moves.unwrap_or(u32::MAX);
    let mut played = 0;

    while played < limit {
        let Some(placement) = choose_move(session) else {
            break;
        };
        if !session.select_shape(placement.id) {
            bail!("offer {} vanished before it could be selected", placement.id);
        }
        let report = match session.attempt_placement(placement.row, placement.col) {
            PlacementOutcome::Placed(report) => report,
            PlacementOutcome::Rejected(reason) => {
                bail!(
                    "legal placement {} at ({}, {}) was rejected: {reason:?}",
                    placement.id,
                    placement.row,
                    placement.col
                )
            }
        };
        played += 1;

        write_record(out, &Record::Move(MoveRecord::from_report(session, &report)))?;
        if report.game_over {
            break;
        }
    }

    let summary = Summary {
        seed: session.seed(),
        game_id: session.game_id(),
        moves: session.moves(),
        score: session.score(),
        game_over: session.is_terminal(),
        filled_cells: session.grid().filled_count(),
    };
    info!(
        "autoplay finished: {} moves, score {}, game over: {}",
        summary.moves, summary.score, summary.game_over
    );
    write_record(out, &Record::Summary(summary.clone()))?;
    out.flush()?;
    Ok(summary)
}

fn write_record<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}
