//! Game session - owns the board, the offered shapes and the score
//!
//! This module ties together all core components: grid, shape catalog,
//! placement, repopulation and terminal detection. The presentation layer holds
//! one `GameSession` and routes every player action through it.
//!
//! A move runs to completion in one call:
//!
//! 1. the selected shape is removed from the board at the anchor
//! 2. the used offer leaves the inventory (matched by id); an empty inventory is redrawn
//! 3. selection and hover are cleared
//! 4. fully-emptied rows, then columns, are regenerated
//! 5. terminality is re-evaluated
//!
//! Illegal requests (no selection, illegal anchor, game over) change nothing.

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::error::{EngineError, Result};
use crate::grid::{create_random_grid, Grid};
use crate::placement::{apply_removal, can_place, legal_anchors};
use crate::repopulate::{repopulate, RepopulateReport};
use crate::rng::{seeded, GameRng};
use crate::shapes::{OfferedSet, OfferedShape, Shape, ShapeCatalog, ShapeId};
use crate::snapshot::SessionSnapshot;
use crate::terminal::{first_legal_placement, has_legal_anchor};
use crate::types::{ColorTag, GameAction, MAX_OFFERED_SHAPES};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    /// No offered shape fits anywhere. Only `new_game` leaves this state.
    GameOver,
}

/// Why a placement attempt did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    GameOver,
    NoSelection,
    /// No hover position to place at
    NoAnchor,
    IllegalAnchor,
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub id: ShapeId,
    pub shape: Shape,
    pub row: usize,
    pub col: usize,
    pub cells_cleared: u32,
    pub repopulated: RepopulateReport,
    /// The inventory ran out and a fresh set was drawn
    pub refilled: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed(MoveReport),
    Rejected(RejectReason),
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed(_))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = GameRng> {
    config: GameConfig,
    rng: R,
    /// Seed the RNG was built from, when known
    seed: Option<u64>,
    catalog: ShapeCatalog,
    grid: Grid,
    offered: OfferedSet,
    selected: Option<ShapeId>,
    hover: Option<(usize, usize)>,
    /// Where the cursor was last; a new selection re-focuses here.
    last_hover: (usize, usize),
    score: u32,
    moves: u32,
    /// Monotonic game id (increments on every new game).
    game_id: u32,
    phase: Phase,
}

impl GameSession<GameRng> {
    /// Create a new game with the default config and the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut session = Self::build(GameConfig::default(), seeded(seed));
        session.seed = Some(seed);
        session.new_game();
        session
    }

    /// Create a new game with a custom config and the given RNG seed
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self> {
        let mut session = Self::with_rng(config, seeded(seed))?;
        session.seed = Some(seed);
        Ok(session)
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a new game drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut session = Self::build(config, rng);
        session.new_game();
        Ok(session)
    }

    /// Start from an explicit board and inventory instead of a random deal.
    ///
    /// The grid must match the configured dimensions. Terminality is evaluated
    /// immediately, so an unplayable position starts in [`Phase::GameOver`].
    pub fn from_position(
        config: GameConfig,
        rng: R,
        grid: Grid,
        shapes: &[(Shape, ColorTag)],
    ) -> Result<Self> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(EngineError::InvalidConfig(format!(
                "grid is {}x{} but config expects {}x{}",
                grid.width(),
                grid.height(),
                config.width,
                config.height
            )));
        }
        if shapes.len() > MAX_OFFERED_SHAPES {
            return Err(EngineError::InvalidConfig(format!(
                "{} offered shapes exceed the inventory capacity of {}",
                shapes.len(),
                MAX_OFFERED_SHAPES
            )));
        }

        let mut session = Self::build(config, rng);
        session.game_id = 1;
        session.grid = grid;
        for &(shape, color) in shapes {
            let offer = session.catalog.offer(shape, color);
            session.offered.push(offer);
        }
        session.refresh_phase();
        Ok(session)
    }

    fn build(config: GameConfig, rng: R) -> Self {
        let catalog = ShapeCatalog::new(config.catalog.clone(), config.palette.clone());
        let grid = Grid::new(config.width, config.height);
        Self {
            config,
            rng,
            seed: None,
            catalog,
            grid,
            offered: OfferedSet::new(),
            selected: None,
            hover: None,
            last_hover: (0, 0),
            score: 0,
            moves: 0,
            game_id: 0,
            phase: Phase::Playing,
        }
    }

    /// Throw away the current game and deal a fresh board and inventory.
    ///
    /// Valid in any phase. The new game starts `Playing` unless the deal is
    /// already unplayable.
    pub fn new_game(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.grid = create_random_grid(
            self.config.width,
            self.config.height,
            self.config.fill_probability,
            &self.config.palette,
            &mut self.rng,
        );
        self.offered = self
            .catalog
            .draw_shapes(self.config.offered_count, &mut self.rng);
        self.selected = None;
        self.hover = None;
        self.last_hover = (0, 0);
        self.score = 0;
        self.moves = 0;
        self.phase = Phase::Playing;
        self.refresh_phase();

        info!(
            "game {} started: {}x{} board, {} cells filled, {} shapes offered",
            self.game_id,
            self.grid.width(),
            self.grid.height(),
            self.grid.filled_count(),
            self.offered.len()
        );
    }

    fn refresh_phase(&mut self) {
        if first_legal_placement(&self.offered, &self.grid).is_none() {
            if self.phase != Phase::GameOver {
                info!(
                    "game {} over after {} moves, score {}",
                    self.game_id, self.moves, self.score
                );
            }
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::Playing;
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn offered(&self) -> &[OfferedShape] {
        &self.offered
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_offer(&self) -> Option<&OfferedShape> {
        let id = self.selected?;
        self.offered.iter().find(|offer| offer.id == id)
    }

    pub fn hover(&self) -> Option<(usize, usize)> {
        self.hover
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Select an offered shape by id. Ignored after game over or for unknown ids.
    pub fn select_shape(&mut self, id: ShapeId) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if !self.offered.iter().any(|offer| offer.id == id) {
            return false;
        }
        self.selected = Some(id);
        if self.hover.is_none() {
            self.hover = Some(self.last_hover);
        }
        true
    }

    /// Select the offer in inventory slot `slot` (0-based)
    pub fn select_slot(&mut self, slot: usize) -> bool {
        let Some(id) = self.offered.get(slot).map(|offer| offer.id) else {
            return false;
        };
        self.select_shape(id)
    }

    /// Select the offer after the current one, wrapping; the first one if none is selected
    pub fn cycle_selection(&mut self) -> bool {
        if self.offered.is_empty() {
            return false;
        }
        let next = self
            .selected
            .and_then(|id| self.offered.iter().position(|offer| offer.id == id))
            .map_or(0, |slot| (slot + 1) % self.offered.len());
        self.select_slot(next)
    }

    /// Record the cursor position. Presentation-only; ignored when out of bounds.
    pub fn set_hover(&mut self, row: usize, col: usize) -> bool {
        if row >= self.grid.height() || col >= self.grid.width() {
            return false;
        }
        self.hover = Some((row, col));
        self.last_hover = (row, col);
        true
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Step the cursor, clamped to the board
    pub fn move_hover(&mut self, d_row: isize, d_col: isize) -> bool {
        let (row, col) = self.hover.unwrap_or(self.last_hover);
        let max_row = self.grid.height().saturating_sub(1);
        let max_col = self.grid.width().saturating_sub(1);
        let row = row.saturating_add_signed(d_row).min(max_row);
        let col = col.saturating_add_signed(d_col).min(max_col);
        self.set_hover(row, col)
    }

    /// Whether the selected shape could be removed at (row, col)
    pub fn can_place_selected(&self, row: usize, col: usize) -> bool {
        self.selected_offer()
            .map_or(false, |offer| can_place(&offer.shape, row, col, &self.grid))
    }

    /// Highlight check for the current hover position
    pub fn hover_is_legal(&self) -> bool {
        match self.hover {
            Some((row, col)) => self.can_place_selected(row, col),
            None => false,
        }
    }

    /// Remove the selected shape anchored at (row, col).
    ///
    /// Nothing changes unless the session is playing, a shape is selected and
    /// the placement is legal.
    pub fn attempt_placement(&mut self, row: usize, col: usize) -> PlacementOutcome {
        if self.phase == Phase::GameOver {
            return PlacementOutcome::Rejected(RejectReason::GameOver);
        }
        let Some(offer) = self.selected_offer().copied() else {
            return PlacementOutcome::Rejected(RejectReason::NoSelection);
        };

        let cells_cleared = match apply_removal(&offer.shape, row, col, &mut self.grid) {
            Ok(cleared) => cleared,
            Err(err) => {
                trace!("placement of {} ignored: {err}", offer.id);
                return PlacementOutcome::Rejected(RejectReason::IllegalAnchor);
            }
        };

        self.score = self.score.saturating_add(cells_cleared);
        self.moves = self.moves.wrapping_add(1);

        self.offered.retain(|o| o.id != offer.id);
        let refilled = self.offered.is_empty();
        if refilled {
            self.offered = self
                .catalog
                .draw_shapes(self.config.offered_count, &mut self.rng);
        }
        self.selected = None;
        self.hover = None;

        let repopulated = repopulate(
            &mut self.grid,
            self.config.fill_probability,
            &self.config.palette,
            &mut self.rng,
        );
        self.refresh_phase();

        debug!(
            "move {}: {} at ({row}, {col}) cleared {cells_cleared}, score {}",
            self.moves, offer.id, self.score
        );

        PlacementOutcome::Placed(MoveReport {
            id: offer.id,
            shape: offer.shape,
            row,
            col,
            cells_cleared,
            repopulated,
            refilled,
            game_over: self.phase == Phase::GameOver,
        })
    }

    /// Place the selected shape at the hover position
    pub fn place_at_hover(&mut self) -> PlacementOutcome {
        match self.hover {
            Some((row, col)) => self.attempt_placement(row, col),
            None if self.phase == Phase::GameOver => {
                PlacementOutcome::Rejected(RejectReason::GameOver)
            }
            None => PlacementOutcome::Rejected(RejectReason::NoAnchor),
        }
    }

    /// Move the cursor onto the first legal anchor of the selected shape.
    ///
    /// With nothing selected, the first offer that fits anywhere is selected
    /// too. Returns false if there is nothing to point at.
    pub fn hint(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        let target = match self.selected_offer() {
            Some(offer) => legal_anchors(&offer.shape, &self.grid)
                .next()
                .map(|(row, col)| (offer.id, row, col)),
            None => first_legal_placement(&self.offered, &self.grid)
                .map(|placement| (placement.id, placement.row, placement.col)),
        };
        let Some((id, row, col)) = target else {
            return false;
        };
        self.selected = Some(id);
        self.set_hover(row, col)
    }

    /// Apply a game action. Returns whether anything happened.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::CursorUp => self.move_hover(-1, 0),
            GameAction::CursorDown => self.move_hover(1, 0),
            GameAction::CursorLeft => self.move_hover(0, -1),
            GameAction::CursorRight => self.move_hover(0, 1),
            GameAction::SelectSlot(slot) => self.select_slot(slot),
            GameAction::CycleSelection => self.cycle_selection(),
            GameAction::Place => self.place_at_hover().is_placed(),
            GameAction::Hint => self.hint(),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    /// Copy the presentation-facing state into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.grid.clone_from(&self.grid);
        out.offered.clear();
        out.playable.clear();
        for offer in &self.offered {
            out.offered.push(*offer);
            out.playable.push(has_legal_anchor(offer, &self.grid));
        }
        out.selected = self.selected;
        out.hover = self.hover;
        out.hover_legal = self.hover_is_legal();
        out.score = self.score;
        out.moves = self.moves;
        out.game_id = self.game_id;
        out.seed = self.seed;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
