//! View model handed to the rendering layer.
//!
//! Plain data, rebuilt from a [`Session`] and [`Settings`] each frame.

use crate::session::Session;
use crate::settings::Settings;
use crate::types::{Difficulty, Theme, TileId, DEFAULT_DIFFICULTY, DEFAULT_THEME};

/// Per-tile state as the tile component sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
    pub input_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub tiles: Vec<TileView>,
    pub columns: usize,
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub turn_count: u32,
    pub elapsed_seconds: u32,
    pub paused: bool,
    pub completed: bool,
    pub best_time_seconds: Option<u32>,
    pub sound_enabled: bool,
    pub dark_mode: bool,
}

impl Default for SessionView {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            tiles: Vec::new(),
            columns: DEFAULT_DIFFICULTY.columns(),
            theme: DEFAULT_THEME,
            difficulty: DEFAULT_DIFFICULTY,
            turn_count: 0,
            elapsed_seconds: 0,
            paused: false,
            completed: false,
            best_time_seconds: settings.best_time_seconds,
            sound_enabled: settings.sound_enabled,
            dark_mode: settings.dark_mode,
        }
    }
}

impl SessionView {
    /// Refill `self` from the session, reusing the tile allocation.
    pub fn fill(&mut self, session: &Session, settings: &Settings) {
        let selection = session.selection();
        let locked = session.input_locked();

        self.tiles.clear();
        self.tiles.extend(session.deck().tiles().iter().map(|t| TileView {
            id: t.id,
            symbol: t.symbol,
            face_up: t.matched || selection.contains(&t.id),
            matched: t.matched,
            input_locked: locked,
        }));
        self.difficulty = session.difficulty();
        self.columns = self.difficulty.columns();
        self.theme = session.theme();
        self.turn_count = session.turn_count();
        self.elapsed_seconds = session.elapsed_seconds();
        self.paused = session.paused();
        self.completed = session.completed();
        self.best_time_seconds = settings.best_time_seconds;
        self.sound_enabled = settings.sound_enabled;
        self.dark_mode = settings.dark_mode;
    }

    pub fn from_session(session: &Session, settings: &Settings) -> Self {
        let mut view = Self::default();
        view.fill(session, settings);
        view
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.tiles.len().div_ceil(self.columns)
    }

    /// Tile at grid position, if any.
    pub fn tile_at(&self, col: usize, row: usize) -> Option<&TileView> {
        if col >= self.columns {
            return None;
        }
        self.tiles.get(row * self.columns + col)
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }
}
