//! GameView: maps a `SessionView` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: two HUD rows, the framed tile grid (centered
//! in the remaining space), and a one-line key help.

use crate::core::{SessionView, TileView};
use crate::fb::{str_width, CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::types::TileId;

const HUD_ROWS: u16 = 2;
const HELP_ROWS: u16 = 1;
const HELP: &str = "enter flip · p pause · n new · t theme · g level · m sound · v dark · q quit";

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

/// Where the board frame landed for a given view and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Terminal renderer for the tile grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 leaves room for a two-column emoji with padding on both sides.
        Self {
            tile_w: 6,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(2),
            tile_h: tile_h.max(1),
            gap,
        }
    }

    pub fn layout(&self, view: &SessionView, viewport: Viewport) -> BoardLayout {
        let cols = view.columns as u16;
        let rows = view.rows() as u16;
        let inner_w = cols * self.tile_w + cols.saturating_sub(1) * self.gap;
        let inner_h = rows * self.tile_h + rows.saturating_sub(1) * self.gap;
        let width = inner_w + 2 * (self.gap + 1);
        let height = inner_h + 2 * (self.gap.min(1) + 1);

        let avail_h = viewport.height.saturating_sub(HUD_ROWS + HELP_ROWS);
        BoardLayout {
            x: viewport.width.saturating_sub(width) / 2,
            y: HUD_ROWS + avail_h.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Top-left corner of the tile at grid position `(col, row)`.
    fn tile_origin(&self, layout: BoardLayout, col: u16, row: u16) -> (u16, u16) {
        let pad_y = self.gap.min(1);
        (
            layout.x + 1 + self.gap + col * (self.tile_w + self.gap),
            layout.y + 1 + pad_y + row * (self.tile_h + self.gap),
        )
    }

    /// Tile under screen position `(x, y)`: its index in `view.tiles` and id.
    pub fn tile_at(
        &self,
        view: &SessionView,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, TileId)> {
        let layout = self.layout(view, viewport);
        let (ox, oy) = self.tile_origin(layout, 0, 0);
        if x < ox || y < oy {
            return None;
        }
        let (dx, dy) = (x - ox, y - oy);
        let (step_x, step_y) = (self.tile_w + self.gap, self.tile_h + self.gap);
        if dx % step_x >= self.tile_w || dy % step_y >= self.tile_h {
            return None;
        }
        let (col, row) = ((dx / step_x) as usize, (dy / step_y) as usize);
        let tile = view.tile_at(col, row)?;
        Some((row * view.columns + col, tile.id))
    }

    /// Render into an existing framebuffer.
    ///
    /// `cursor` is the keyboard-selected tile index, if the cursor is shown.
    pub fn render_into(
        &self,
        view: &SessionView,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let palette = Palette::for_mode(view.dark_mode);
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(palette.text, palette.background).cell(' '));

        self.draw_hud(fb, view, &palette);

        let layout = self.layout(view, viewport);
        let board = CellStyle::new(palette.text, palette.board);
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.width.saturating_sub(2),
            layout.height.saturating_sub(2),
            ' ',
            board,
        );
        self.draw_border(fb, layout, palette.border_style());

        for (i, tile) in view.tiles.iter().enumerate() {
            let col = (i % view.columns.max(1)) as u16;
            let row = (i / view.columns.max(1)) as u16;
            let (px, py) = self.tile_origin(layout, col, row);
            self.draw_tile(fb, px, py, tile, cursor == Some(i), &palette);
        }

        if view.completed {
            self.draw_completion(fb, view, layout, &palette);
        } else if view.paused {
            self.draw_banner(fb, layout, layout.height / 2, "PAUSED", &palette);
        }

        let help_y = viewport.height.saturating_sub(1);
        let help_x = viewport.width.saturating_sub(str_width(HELP)) / 2;
        fb.put_str(help_x, help_y, HELP, palette.muted_style());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &SessionView, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, cursor, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, view: &SessionView, palette: &Palette) {
        let label = palette.label_style();
        let value = palette.text_style();
        let muted = palette.muted_style();

        let mut x = 1;
        x = fb.put_str(x, 0, "Time ", label);
        x = fb.put_clock(x, 0, view.elapsed_seconds, value);
        x = fb.put_str(x + 3, 0, "Turns ", label);
        x = fb.put_u32(x, 0, view.turn_count, value);
        x = fb.put_str(x + 3, 0, "Best ", label);
        x = match view.best_time_seconds {
            Some(best) => fb.put_clock(x, 0, best, value),
            None => fb.put_str(x, 0, "--", muted),
        };
        x = fb.put_str(x + 3, 0, "Pairs ", label);
        x = fb.put_u32(x, 0, view.matched_pairs() as u32, value);
        x = fb.put_char(x, 0, '/', value) + x;
        fb.put_u32(x, 0, view.total_pairs() as u32, value);

        let mut x = 1;
        x = fb.put_str(x, 1, view.theme.as_str(), muted);
        x = fb.put_str(x, 1, " · ", muted);
        x = fb.put_str(x, 1, view.difficulty.as_str(), muted);
        x = fb.put_str(x, 1, " · sound ", muted);
        fb.put_str(x, 1, if view.sound_enabled { "on" } else { "off" }, muted);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            x,
            y,
            width: w,
            height: h,
        } = layout;
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        tile: &TileView,
        under_cursor: bool,
        palette: &Palette,
    ) {
        let bg = if under_cursor {
            palette.cursor
        } else if tile.matched {
            palette.tile_matched
        } else if tile.face_up {
            palette.tile_face
        } else {
            palette.tile_back
        };
        let mut style = CellStyle::new(palette.text, bg);
        if tile.input_locked && !tile.face_up {
            style = style.dim();
        }
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        let glyph_w = if tile.face_up { str_width(tile.symbol) } else { 1 };
        let cx = px + self.tile_w.saturating_sub(glyph_w) / 2;
        let cy = py + self.tile_h / 2;
        if tile.face_up {
            fb.put_str(cx, cy, tile.symbol, style);
        } else {
            fb.put_char(cx, cy, '?', style.bold());
        }
    }

    fn draw_completion(
        &self,
        fb: &mut FrameBuffer,
        view: &SessionView,
        layout: BoardLayout,
        palette: &Palette,
    ) {
        let mid = layout.height / 2;
        self.draw_banner(fb, layout, mid.saturating_sub(1), "SOLVED!", palette);

        // " 1:05 in 12 turns " centered on the line below.
        let style = palette.banner_style();
        let mut text_w = 15;
        text_w += digits(view.elapsed_seconds / 60) + digits(view.turn_count);
        let mut x = layout.x + layout.width.saturating_sub(text_w) / 2;
        let y = layout.y + mid;
        x = fb.put_char(x, y, ' ', style) + x;
        x = fb.put_clock(x, y, view.elapsed_seconds, style);
        x = fb.put_str(x, y, " in ", style);
        x = fb.put_u32(x, y, view.turn_count, style);
        fb.put_str(x, y, " turns ", style);

        if view.best_time_seconds == Some(view.elapsed_seconds) {
            self.draw_banner(fb, layout, mid + 1, "best time", palette);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, layout: BoardLayout, dy: u16, text: &str, palette: &Palette) {
        let text_w = str_width(text) + 2;
        let x = layout.x + layout.width.saturating_sub(text_w) / 2;
        let y = layout.y + dy;
        let style = palette.banner_style();
        let x = fb.put_char(x, y, ' ', style) + x;
        let x = fb.put_str(x, y, text, style);
        fb.put_char(x, y, ' ', style);
    }
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeckRng, Session, Settings, TileIdAllocator};
    use crate::types::{Difficulty, Theme};

    fn view(difficulty: Difficulty) -> SessionView {
        let mut rng = DeckRng::seeded(4);
        let mut ids = TileIdAllocator::new();
        let session = Session::new(Theme::Food, difficulty, 1, &mut rng, &mut ids).unwrap();
        SessionView::from_session(&session, &Settings::default())
    }

    #[test]
    fn test_layout_fits_expert_in_80x24() {
        let v = view(Difficulty::Expert);
        let layout = GameView::default().layout(&v, Viewport::new(80, 24));
        assert!(layout.x + layout.width <= 80);
        assert!(layout.y + layout.height <= 24 - HELP_ROWS);
        assert!(layout.y >= HUD_ROWS);
    }

    #[test]
    fn test_tile_at_hits_every_tile_center() {
        let v = view(Difficulty::Medium);
        let gv = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = gv.layout(&v, vp);
        for (i, tile) in v.tiles.iter().enumerate() {
            let (px, py) = gv.tile_origin(layout, (i % v.columns) as u16, (i / v.columns) as u16);
            assert_eq!(gv.tile_at(&v, vp, px + 2, py + 1), Some((i, tile.id)));
        }
    }

    #[test]
    fn test_tile_at_misses_gaps_and_border() {
        let v = view(Difficulty::Easy);
        let gv = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = gv.layout(&v, vp);
        let (px, py) = gv.tile_origin(layout, 0, 0);
        assert_eq!(gv.tile_at(&v, vp, layout.x, layout.y), None);
        assert_eq!(gv.tile_at(&v, vp, px + gv.tile_w, py), None);
        assert_eq!(gv.tile_at(&v, vp, 0, 0), None);
    }

    #[test]
    fn test_face_down_tiles_hide_symbols() {
        let v = view(Difficulty::Easy);
        let fb = GameView::default().render(&v, None, Viewport::new(80, 24));
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        for tile in &v.tiles {
            assert!(!all.contains(tile.symbol));
        }
        assert!(all.contains('?'));
        assert!(all.contains("Time 0:00"));
    }
}
