//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{OfferedShape, SessionSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::ColorTag;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const LEGAL_BG: Rgb = Rgb::new(40, 100, 50);
const ILLEGAL_BG: Rgb = Rgb::new(120, 35, 35);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 110);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the last render; the caller needs it to map
/// mouse positions back onto board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Renders the puzzle board, the cursor footprint and the inventory panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame rectangle (border included) for a board of the given size.
    pub fn board_rect(&self, grid_w: usize, grid_h: usize, viewport: Viewport) -> BoardRect {
        let width = clamp_u16(grid_w).saturating_mul(self.cell_w).saturating_add(2);
        let height = clamp_u16(grid_h).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };
        BoardRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Map a terminal position to the board cell (row, col) under it.
    pub fn cell_at(
        &self,
        snap: &SessionSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let rect = self.board_rect(snap.grid.width(), snap.grid.height(), viewport);
        let col = x.checked_sub(rect.x + 1)? / self.cell_w;
        let row = y.checked_sub(rect.y + 1)? / self.cell_h;
        let (row, col) = (row as usize, col as usize);
        (row < snap.grid.height() && col < snap.grid.width()).then_some((row, col))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let rect = self.board_rect(snap.grid.width(), snap.grid.height(), viewport);
        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
            ' ',
            Style::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, rect, border);

        let footprint_bg = if snap.hover_legal { LEGAL_BG } else { ILLEGAL_BG };
        let selected = snap.selected_offer();

        for (row, cells) in snap.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (ch, mut style) = if cell.filled {
                    ('█', Style::new(color_rgb(cell.color), BOARD_BG))
                } else {
                    ('·', Style::new(Rgb::new(90, 90, 100), BOARD_BG).dim())
                };

                if snap.under_cursor(row, col) {
                    style = style.on(footprint_bg);
                    let ch = if cell.filled { '▓' } else { '×' };
                    self.fill_cell(fb, rect, row, col, ch, style.bold());
                    continue;
                }
                if selected.is_none() && snap.hover == Some((row, col)) {
                    style = style.on(CURSOR_BG);
                }
                self.fill_cell(fb, rect, row, col, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, rect);

        if snap.game_over() {
            draw_overlay(fb, rect, &["GAME OVER", "n: new game"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        rect: BoardRect,
        row: usize,
        col: usize,
        ch: char,
        style: Style,
    ) {
        let px = rect
            .x
            .saturating_add(1)
            .saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
        let py = rect
            .y
            .saturating_add(1)
            .saturating_add(clamp_u16(row).saturating_mul(self.cell_h));
        // Cells past the viewport edge are clipped
        if px >= fb.width() || py >= fb.height() {
            return;
        }
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        rect: BoardRect,
    ) {
        let panel_x = rect.x.saturating_add(rect.width).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = rect.y;
        for (name, n) in [("SCORE", snap.score), ("MOVES", snap.moves), ("GAME", snap.game_id)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SHAPES", label);
        y = y.saturating_add(1);
        for (slot, offer) in snap.offered.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let playable = snap.playable.get(slot).copied().unwrap_or(false);
            let is_selected = snap.selected == Some(offer.id);

            let marker = if is_selected { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, label);
            let mut slot_style = value;
            if !playable {
                slot_style = slot_style.dim();
            }
            fb.put_u32(panel_x + 1, y, slot as u32 + 1, slot_style);

            let drawn = self.draw_preview(fb, panel_x + 3, y, offer, playable);
            y = y.saturating_add(drawn.max(1) as u16 + 1);
        }
    }

    /// Draw a small copy of the shape at (x, y). Returns the number of rows used.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        offer: &OfferedShape,
        playable: bool,
    ) -> usize {
        let mut style = Style::new(color_rgb(offer.color), PANEL_BG);
        if !playable {
            style = style.dim();
        }
        for (row, col) in offer.shape.cells() {
            let px = x.saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
            fb.fill_rect(px, y.saturating_add(clamp_u16(row)), self.cell_w, 1, '█', style);
        }
        offer.shape.height()
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Display colour for a palette entry.
pub fn color_rgb(tag: ColorTag) -> Rgb {
    match tag {
        ColorTag::Yellow => Rgb::new(240, 220, 80),
        ColorTag::Green => Rgb::new(100, 220, 120),
        ColorTag::Red => Rgb::new(220, 80, 80),
        ColorTag::Blue => Rgb::new(80, 120, 220),
        ColorTag::Purple => Rgb::new(170, 110, 230),
        ColorTag::Pink => Rgb::new(240, 130, 190),
        ColorTag::Orange => Rgb::new(255, 165, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, rect: BoardRect, style: Style) {
    let BoardRect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, rect: BoardRect, lines: &[&str]) {
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let top = rect.y.saturating_add(rect.height / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = rect.x.saturating_add(rect.width.saturating_sub(text_w) / 2);
        fb.put_str(x, top.saturating_add(i as u16), text, style);
    }
}
