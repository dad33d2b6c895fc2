//! Engine error type.
//!
//! Player mistakes (clicking an illegal anchor, acting after game over) are not
//! errors; the session treats them as no-ops. These variants cover contract
//! violations by calling code and bad construction input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `apply_removal` was called for a placement that fails `can_place`.
    #[error("shape cannot be removed at anchor ({row}, {col})")]
    InvalidPlacement { row: usize, col: usize },

    #[error("shape matrix {rows}x{cols} exceeds the 4x4 limit")]
    ShapeTooLarge { rows: usize, cols: usize },

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
