//! Reverse Tetris (workspace facade crate).
//!
//! The rules live in `crates/core`, terminal rendering in `crates/term` and
//! key mapping in `crates/input`. This package re-exports them under
//! `reverse_tetris::{core,input,term,types}` and adds the command-line layer
//! and the headless autoplay driver used by the binary.

pub mod autoplay;
pub mod cli;

pub use reverse_tetris_core as core;
pub use reverse_tetris_input as input;
pub use reverse_tetris_term as term;
pub use reverse_tetris_types as types;
