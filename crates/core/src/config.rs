//! Tunable game parameters.

use crate::error::{EngineError, Result};
use crate::shapes::{standard_catalog, Shape};
use crate::types::{
    ColorTag, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FILL_PERCENT, MAX_BOARD_SIDE, MAX_OFFERED_SHAPES,
    OFFERED_SHAPE_COUNT,
};

/// Everything a new game is generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Chance in `[0, 1]` that a generated cell is filled
    pub fill_probability: f64,
    /// Shapes drawn when the inventory empties
    pub offered_count: usize,
    pub catalog: Vec<Shape>,
    pub palette: Vec<ColorTag>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fill_probability: f64::from(INITIAL_FILL_PERCENT) / 100.0,
            offered_count: OFFERED_SHAPE_COUNT,
            catalog: standard_catalog(),
            palette: ColorTag::PALETTE.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fill_probability(mut self, fill_probability: f64) -> Self {
        self.fill_probability = fill_probability;
        self
    }

    pub fn with_offered_count(mut self, offered_count: usize) -> Self {
        self.offered_count = offered_count;
        self
    }

    pub fn with_catalog(mut self, catalog: Vec<Shape>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_palette(mut self, palette: Vec<ColorTag>) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(EngineError::InvalidConfig(format!(
                "board is {}x{} but at most {MAX_BOARD_SIDE} cells per side are supported",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "fill probability {} is outside [0, 1]",
                self.fill_probability
            )));
        }
        if self.offered_count == 0 || self.offered_count > MAX_OFFERED_SHAPES {
            return Err(EngineError::InvalidConfig(format!(
                "offered count {} is outside 1..={}",
                self.offered_count, MAX_OFFERED_SHAPES
            )));
        }
        if self.catalog.is_empty() {
            return Err(EngineError::InvalidConfig("shape catalog is empty".into()));
        }
        if self.palette.is_empty() {
            return Err(EngineError::InvalidConfig("colour palette is empty".into()));
        }
        Ok(())
    }
}
