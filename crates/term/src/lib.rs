//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is then flushed to the terminal.
//!
//! - [`GameView`] draws a `SessionView` (tiles, HUD, overlays) and hit-tests
//!   mouse clicks back to tile ids
//! - [`Confetti`] and [`TerminalBell`] are the terminal's completion effects
//! - [`TerminalRenderer`] owns raw mode and diff-flushes frames

pub mod bell;
pub mod confetti;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_types as types;

pub use bell::TerminalBell;
pub use confetti::{Confetti, ConfettiTrigger};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
