//! Framebuffer and style types for terminal rendering.
//!
//! Emoji occupy two terminal columns. A wide glyph is stored in its left cell
//! and the cell to its right holds [`WIDE_CONTINUATION`], which the encoder
//! skips.

/// Marker for the right half of a wide glyph.
pub const WIDE_CONTINUATION: char = '\0';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub fn is_continuation(&self) -> bool {
        self.ch == WIDE_CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Terminal columns taken by `ch`: 2 for emoji and East Asian wide ranges,
/// 1 otherwise.
pub fn char_width(ch: char) -> u16 {
    match ch as u32 {
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0x1F000..=0x1FAFF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// Terminal columns taken by `s`.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Overwriting either half of a wide glyph blanks the other half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else { return };
        let old = self.cells[i];
        if old.is_continuation() {
            if x > 0 {
                self.cells[i - 1].ch = ' ';
            }
        } else if char_width(old.ch) == 2 {
            if let Some(j) = self.idx(x + 1, y) {
                if self.cells[j].is_continuation() {
                    self.cells[j].ch = ' ';
                }
            }
        }
        self.cells[i] = cell;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Put one glyph; returns the columns it took. A wide glyph that would be
    /// cut by the right edge is replaced by a blank.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> u16 {
        let w = char_width(ch);
        if w == 2 {
            if x.saturating_add(1) >= self.width {
                self.set(x, y, style.cell(' '));
                return 1;
            }
            self.set(x, y, style.cell(ch));
            self.set(x + 1, y, style.cell(WIDE_CONTINUATION));
            2
        } else {
            self.set(x, y, style.cell(ch));
            1
        }
    }

    /// Put a string; returns the column after the last glyph written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            cx = cx.saturating_add(self.put_char(cx, y, ch, style));
        }
        cx
    }

    /// Put a decimal number without allocating; returns the next column.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            cx = cx.saturating_add(self.put_char(cx, y, d as char, style));
        }
        cx
    }

    /// Put seconds as `m:ss`; returns the next column.
    pub fn put_clock(&mut self, x: u16, y: u16, seconds: u32, style: CellStyle) -> u16 {
        let mut cx = self.put_u32(x, y, seconds / 60, style);
        cx = cx.saturating_add(self.put_char(cx, y, ':', style));
        let secs = seconds % 60;
        if secs < 10 {
            cx = cx.saturating_add(self.put_char(cx, y, '0', style));
        }
        self.put_u32(cx, y, secs, style)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), style.cell(ch));
            }
        }
    }

    /// Row `y` as a string, continuation cells dropped. Test helper mostly.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('│'), 1);
        assert_eq!(char_width('🍎'), 2);
        assert_eq!(char_width('🦄'), 2);
        assert_eq!(str_width("a🍕b"), 4);
    }

    #[test]
    fn test_wide_glyph_takes_two_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_char(1, 0, '🍕', style), 2);
        assert_eq!(fb.get(1, 0).unwrap().ch, '🍕');
        assert!(fb.get(2, 0).unwrap().is_continuation());
        assert_eq!(fb.row_text(0), " 🍕 ");
    }

    #[test]
    fn test_overwriting_half_a_wide_glyph() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_char(0, 0, '🍕', style);
        fb.put_char(1, 0, 'x', style);
        assert_eq!(fb.row_text(0), " x  ");

        fb.put_char(2, 0, '🍔', style);
        fb.put_char(2, 0, 'y', style);
        assert_eq!(fb.row_text(0), " xy ");
    }

    #[test]
    fn test_wide_glyph_at_edge_is_blanked() {
        let mut fb = FrameBuffer::new(3, 1);
        assert_eq!(fb.put_char(2, 0, '🍕', CellStyle::default()), 1);
        assert_eq!(fb.get(2, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_numbers_and_clock() {
        let mut fb = FrameBuffer::new(12, 2);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(0, 0, 1203, style), 4);
        fb.put_clock(0, 1, 65, style);
        assert_eq!(fb.row_text(0).trim_end(), "1203");
        assert_eq!(fb.row_text(1).trim_end(), "1:05");
    }
}
