//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! key-repeat timing here; every press is one action.

pub mod map;

pub use reverse_tetris_types as types;

pub use map::{handle_key_event, should_quit};
