//! Confetti overlay shown after a completed session.
//!
//! [`ConfettiTrigger`] is the engine-facing half: it only arms a shared flag.
//! The frame loop owns [`Confetti`], which picks the flag up on its next tick
//! and draws falling glyphs for `CELEBRATION_MS`.

use std::cell::Cell;
use std::rc::Rc;

use crate::engine::Celebration;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CELEBRATION_MS;

const GLYPHS: [char; 6] = ['*', '+', '•', '◆', '▪', '~'];
const COLORS: [Rgb; 5] = [
    Rgb::new(255, 95, 95),
    Rgb::new(255, 200, 60),
    Rgb::new(90, 200, 120),
    Rgb::new(80, 160, 255),
    Rgb::new(200, 110, 230),
];
/// Pieces per 100 cells of screen.
const DENSITY: u32 = 3;
/// Rows fallen per second.
const FALL_SPEED: u32 = 12;

#[derive(Debug, Clone, Default)]
pub struct ConfettiTrigger {
    armed: Rc<Cell<bool>>,
}

impl Celebration for ConfettiTrigger {
    fn trigger(&mut self) {
        self.armed.set(true);
    }
}

#[derive(Debug, Default)]
pub struct Confetti {
    trigger: ConfettiTrigger,
    remaining_ms: u32,
    elapsed_ms: u32,
}

impl Confetti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to pass to the engine.
    pub fn trigger(&self) -> ConfettiTrigger {
        self.trigger.clone()
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    pub fn stop(&mut self) {
        self.trigger.armed.set(false);
        self.remaining_ms = 0;
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.trigger.armed.replace(false) {
            self.remaining_ms = CELEBRATION_MS;
            self.elapsed_ms = 0;
            return;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
    }

    /// Draw over whatever is already in `fb`, keeping cell backgrounds.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        if !self.is_active() || fb.width() == 0 || fb.height() == 0 {
            return;
        }
        let (w, h) = (fb.width() as u32, fb.height() as u32);
        let pieces = (w * h * DENSITY / 100).max(1);
        let fallen = self.elapsed_ms * FALL_SPEED / 1000;

        for i in 0..pieces {
            let seed = mix(i);
            let x = (seed % w) as u16;
            let y = ((seed >> 8) % h + fallen) % h;
            let y = y as u16;
            let Some(under) = fb.get(x, y) else { continue };
            if under.is_continuation() || fb.get(x + 1, y).is_some_and(|c| c.is_continuation()) {
                continue;
            }
            let fg = COLORS[(seed >> 16) as usize % COLORS.len()];
            let ch = GLYPHS[(seed >> 20) as usize % GLYPHS.len()];
            fb.put_char(x, y, ch, CellStyle::new(fg, under.style.bg).bold());
        }
    }
}

/// Integer hash for stable piece placement.
fn mix(mut v: u32) -> u32 {
    v = v.wrapping_add(0x9E37_79B9);
    v = (v ^ (v >> 16)).wrapping_mul(0x85EB_CA6B);
    v = (v ^ (v >> 13)).wrapping_mul(0xC2B2_AE35);
    v ^ (v >> 16)
}
