//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of glyphs
//! are written. A size change or [`TerminalRenderer::invalidate`] forces a full
//! redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal run of changed glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: FrameBuffer,
    full_redraw: bool,
    runs: Vec<Run>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: FrameBuffer::new(0, 0),
            full_redraw: true,
            runs: Vec::with_capacity(256),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with mouse reporting on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (after a resize, for instance).
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Draw `frame`, then swap it with the retained previous frame.
    ///
    /// After the call `frame` holds stale content that the caller overwrites on
    /// the next render; no frame is ever cloned.
    pub fn draw_swap(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        if self.full_redraw
            || self.prev.width() != frame.width()
            || self.prev.height() != frame.height()
        {
            encode_full_into(frame, &mut self.buf)?;
            self.full_redraw = false;
        } else {
            collect_changed_runs(&self.prev, frame, &mut self.runs);
            encode_runs_into(frame, &self.runs, &mut self.buf)?;
        }
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        std::mem::swap(&mut self.prev, frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a complete repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            print_at_pen(fb, x, y, &mut pen, out)?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the given runs of `fb` into `out`. Writes nothing for no runs.
pub fn encode_runs_into(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<()> {
    if runs.is_empty() {
        return Ok(());
    }
    let mut pen = None;
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x.saturating_add(run.len) {
            print_at_pen(fb, x, run.y, &mut pen, out)?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Collect maximal runs of glyphs that differ between two equally sized frames into `runs`.
pub fn collect_changed_runs(prev: &FrameBuffer, next: &FrameBuffer, runs: &mut Vec<Run>) {
    runs.clear();
    let width = next.width();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..width {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s,
                y,
                len: width - s,
            });
        }
    }
}

fn print_at_pen(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    pen: &mut Option<Style>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let glyph = fb.get(x, y).unwrap_or_default();
    if *pen != Some(glyph.style) {
        apply_style_into(out, glyph.style)?;
        *pen = Some(glyph.style);
    }
    out.queue(Print(glyph.ch))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
