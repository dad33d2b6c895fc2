//! Reverse Tetris runner (default binary).
//!
//! Without a subcommand this is the interactive terminal game: crossterm for
//! input and the framebuffer renderer for output. `autoplay` runs the greedy
//! player headless and prints JSON lines.
//!
//! There is no game clock. The loop blocks on the next terminal event and
//! redraws after each one.

use std::fs::OpenOptions;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::{info, LevelFilter};

use reverse_tetris::autoplay;
use reverse_tetris::cli::{Cli, Command};
use reverse_tetris::core::{GameSession, SessionSnapshot};
use reverse_tetris::input::{handle_key_event, should_quit};
use reverse_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const LOG_PATH_ENV: &str = "REVERSE_TETRIS_LOG_PATH";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;
    let seed = cli.resolve_seed();

    match &cli.command {
        Some(Command::Autoplay(args)) => {
            init_logging(true)?;
            let mut session = GameSession::with_config(config, seed)?;
            let stdout = io::stdout();
            autoplay::run(&mut session, args.max_moves, &mut stdout.lock())?;
            Ok(())
        }
        None => {
            init_logging(false)?;
            let mut session = GameSession::with_config(config, seed)?;
            info!("interactive session, seed {seed}");

            let mut term = TerminalRenderer::new();
            term.enter()?;
            let result = run(&mut term, &mut session);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

/// Log to the file named by `REVERSE_TETRIS_LOG_PATH` when set. Otherwise
/// headless runs log to stderr and the interactive game does not log, since it
/// owns the terminal.
fn init_logging(headless: bool) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if headless => {
            builder.target(env_logger::Target::Stderr);
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }

    builder
        .try_init()
        .context("logger was already initialised")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut frame = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    loop {
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut frame);
        term.draw_swap(&mut frame)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Mouse(mouse) => {
                let Some((row, col)) = view.cell_at(&snap, viewport, mouse.column, mouse.row)
                else {
                    continue;
                };
                match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        session.set_hover(row, col);
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        session.set_hover(row, col);
                        session.place_at_hover();
                    }
                    _ => {}
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
            }
            _ => {}
        }
    }
}
