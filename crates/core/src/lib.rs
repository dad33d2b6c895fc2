//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and board
//! generation. It has **no dependencies** on terminal, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (for autoplay and tests)
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size board of filled/empty cells and random board generation
//! - [`shapes`]: polyomino matrices, the shape catalog and the offered inventory
//! - [`placement`]: the legality predicate and cell removal
//! - [`repopulate`]: regeneration of emptied rows and columns
//! - [`terminal`]: game-over detection and legal-move enumeration
//! - [`session`]: the game session that owns and orchestrates everything above
//! - [`snapshot`]: read-only state handed to the presentation layer
//! - [`config`]: tunable parameters
//! - [`rng`]: seeded randomness
//!
//! # Game Rules
//!
//! The board starts mostly filled. The player picks one of three offered
//! shapes and removes its footprint from the board:
//!
//! - **Legal removal**: every cell of the shape must sit on a filled, in-bounds cell
//! - **Score**: one point per cell removed
//! - **Inventory**: a used shape leaves the inventory; when all three are used, three more are drawn
//! - **Repopulation**: rows that become completely empty are re-rolled, then columns
//! - **Game over**: no offered shape fits anywhere on the board
//!
//! # Example
//!
//! ```
//! use reverse_tetris_core::{GameSession, Phase};
//!
//! let mut game = GameSession::new(12345);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Let the session find a legal move, then make it
//! if game.hint() {
//!     let (row, col) = game.hover().unwrap();
//!     assert!(game.attempt_placement(row, col).is_placed());
//!     assert!(game.score() > 0);
//! }
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod placement;
pub mod repopulate;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod terminal;

pub use reverse_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::EngineError;
pub use grid::{create_random_grid, Cell, Grid};
pub use placement::{apply_removal, can_place, legal_anchors};
pub use repopulate::{repopulate, RepopulateReport};
pub use rng::{random_seed, seeded, GameRng};
pub use session::{GameSession, MoveReport, Phase, PlacementOutcome, RejectReason};
pub use shapes::{standard_catalog, OfferedSet, OfferedShape, Shape, ShapeCatalog, ShapeId};
pub use snapshot::SessionSnapshot;
pub use terminal::{all_legal_placements, first_legal_placement, is_terminal, Placement};
