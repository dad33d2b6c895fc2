//! Terminal rendering for the puzzle.
//!
//! A small game-oriented rendering layer: the view draws a session snapshot
//! into a framebuffer, and the renderer flushes framebuffer diffs through
//! `crossterm`. No widget toolkit is involved.
//!
//! - [`game_view`]: pure snapshot-to-framebuffer mapping (unit-testable)
//! - [`renderer`]: terminal setup, teardown and diff flushing
//! - [`fb`]: the framebuffer itself

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use reverse_tetris_core as core;
pub use reverse_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{color_rgb, AnchorY, BoardRect, GameView, Viewport};
pub use renderer::{collect_changed_runs, encode_full_into, encode_runs_into, Run, TerminalRenderer};
