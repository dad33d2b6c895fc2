use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::session::Phase;
use crate::shapes::{OfferedSet, OfferedShape, ShapeId};
use crate::types::MAX_OFFERED_SHAPES;

/// Read-only copy of what the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub offered: OfferedSet,
    /// Per offer, in the same order: whether it fits anywhere on the grid
    pub playable: ArrayVec<bool, MAX_OFFERED_SHAPES>,
    pub selected: Option<ShapeId>,
    pub hover: Option<(usize, usize)>,
    /// The selected shape can be removed at `hover`
    pub hover_legal: bool,
    pub score: u32,
    pub moves: u32,
    pub game_id: u32,
    pub seed: Option<u64>,
    pub phase: Phase,
}

impl SessionSnapshot {
    pub fn selected_offer(&self) -> Option<&OfferedShape> {
        let id = self.selected?;
        self.offered.iter().find(|offer| offer.id == id)
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether board cell (row, col) lies under the selected shape anchored at the hover position.
    pub fn under_cursor(&self, row: usize, col: usize) -> bool {
        let (Some(offer), Some((h_row, h_col))) = (self.selected_offer(), self.hover) else {
            return false;
        };
        row >= h_row && col >= h_col && offer.shape.contains(row - h_row, col - h_col)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::new(0, 0),
            offered: OfferedSet::new(),
            playable: ArrayVec::new(),
            selected: None,
            hover: None,
            hover_legal: false,
            score: 0,
            moves: 0,
            game_id: 0,
            seed: None,
            phase: Phase::Playing,
        }
    }
}
