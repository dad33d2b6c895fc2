//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless autoplay).
//!
//! # Board Dimensions
//!
//! The default board is the classic playfield turned into a clearing puzzle:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Initial fill**: 80% of cells start filled
//!
//! # Offered Shapes
//!
//! The player picks from a small rotating inventory of shapes:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `OFFERED_SHAPE_COUNT` | 3 | Shapes drawn whenever the inventory runs out |
//! | `MAX_OFFERED_SHAPES` | 3 | Hard capacity of the inventory |
//!
//! # Examples
//!
//! ```
//! use reverse_tetris_types::{ColorTag, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(ColorTag::from_str("Purple"), Some(ColorTag::Purple));
//!
//! // Every catalog entry has a canonical matrix
//! assert_eq!(ShapeKind::O.rows(), &[&[1u8, 1][..], &[1, 1][..]]);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Percentage of cells filled when a board (or a repopulated line) is generated
pub const INITIAL_FILL_PERCENT: u8 = 80;

/// Number of shapes drawn each time the inventory is refilled
pub const OFFERED_SHAPE_COUNT: usize = 3;

/// Capacity of the offered-shape inventory
pub const MAX_OFFERED_SHAPES: usize = 3;

/// Largest board side (rows or columns) a game may be configured with
pub const MAX_BOARD_SIDE: usize = 255;

/// Largest matrix a shape may occupy (rows and columns)
pub const MAX_SHAPE_SIDE: usize = 4;


/// The eight catalog shapes
///
/// Each shape appears in a single canonical orientation; there is no rotation.
/// - **Mono**: single cell
/// - **I**: four in a row
/// - **O**: 2x2 square
/// - **T**, **L**, **J**: three on top with one hanging below
/// - **S**, **Z**: skew pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Mono,
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Catalog order
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Mono,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Canonical binary matrix, top row first.
    pub fn rows(&self) -> &'static [&'static [u8]] {
        match self {
            ShapeKind::Mono => &[&[1]],
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::L => &[&[1, 1, 1], &[1, 0, 0]],
            ShapeKind::J => &[&[1, 1, 1], &[0, 0, 1]],
            ShapeKind::S => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::Z => &[&[0, 1, 1], &[1, 1, 0]],
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use reverse_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("mono"), Some(ShapeKind::Mono));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("pentomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mono" => Some(ShapeKind::Mono),
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Mono => "mono",
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Cosmetic colour of a cell or offered shape
///
/// Colours never influence rules; they only travel with cells so the
/// presentation layer can draw a retro palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Yellow,
    Green,
    Red,
    Blue,
    Purple,
    Pink,
    Orange,
}

impl ColorTag {
    /// Default palette, in draw order
    pub const PALETTE: [ColorTag; 7] = [
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Red,
        ColorTag::Blue,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Orange,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yellow" => Some(ColorTag::Yellow),
            "green" => Some(ColorTag::Green),
            "red" => Some(ColorTag::Red),
            "blue" => Some(ColorTag::Blue),
            "purple" => Some(ColorTag::Purple),
            "pink" => Some(ColorTag::Pink),
            "orange" => Some(ColorTag::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Red => "red",
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Orange => "orange",
        }
    }
}

/// Player actions routed to the game session
///
/// These are produced by the key mapper and consumed by
/// `GameSession::apply_action`. Cursor moves only touch presentation state;
/// everything else goes through the session's rule-checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the hover cursor one row up
    CursorUp,
    /// Move the hover cursor one row down
    CursorDown,
    /// Move the hover cursor one column left
    CursorLeft,
    /// Move the hover cursor one column right
    CursorRight,
    /// Select the offered shape in the given inventory slot (0-based)
    SelectSlot(usize),
    /// Select the next offered shape, wrapping around
    CycleSelection,
    /// Remove the selected shape anchored at the cursor
    Place,
    /// Move the cursor to a legal anchor for the selected shape
    Hint,
    /// Throw away the current board and start over
    NewGame,
}
