//! Light and dark color sets.

use crate::fb::{CellStyle, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub board: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub tile_back: Rgb,
    pub tile_face: Rgb,
    pub tile_matched: Rgb,
    pub cursor: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgb::new(245, 243, 238),
        board: Rgb::new(226, 222, 212),
        border: Rgb::new(120, 110, 100),
        text: Rgb::new(40, 40, 48),
        muted: Rgb::new(120, 120, 130),
        accent: Rgb::new(200, 80, 60),
        tile_back: Rgb::new(90, 120, 200),
        tile_face: Rgb::new(255, 255, 255),
        tile_matched: Rgb::new(200, 230, 200),
        cursor: Rgb::new(250, 200, 60),
    };

    pub const DARK: Palette = Palette {
        background: Rgb::new(18, 18, 24),
        board: Rgb::new(30, 30, 40),
        border: Rgb::new(200, 200, 200),
        text: Rgb::new(225, 225, 230),
        muted: Rgb::new(130, 130, 145),
        accent: Rgb::new(255, 140, 90),
        tile_back: Rgb::new(60, 70, 130),
        tile_face: Rgb::new(70, 70, 85),
        tile_matched: Rgb::new(40, 70, 50),
        cursor: Rgb::new(220, 170, 40),
    };

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn text_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.background)
    }

    pub fn muted_style(&self) -> CellStyle {
        CellStyle::new(self.muted, self.background)
    }

    pub fn label_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.background).bold()
    }

    pub fn border_style(&self) -> CellStyle {
        CellStyle::new(self.border, self.background)
    }

    pub fn banner_style(&self) -> CellStyle {
        CellStyle::new(self.background, self.accent).bold()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::LIGHT
    }
}
