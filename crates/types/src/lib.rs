//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, persistence, terminal rendering).
//!
//! # Themes
//!
//! A theme is a fixed, ordered list of ten symbols. A deck for `N` pairs always
//! takes the first `N` symbols of the list.
//!
//! | Theme | Symbols |
//! |-------|---------|
//! | `food` | 🍕 🍔 🍟 🌮 🍩 🍉 🍓 🍇 🍒 🥑 |
//! | `animals` | 🐶 🐱 🐸 🐵 🐼 🦁 🐰 🐨 🦊 🦄 |
//! | `fruits` | 🍎 🍌 🍇 🍓 🍍 🥝 🍒 🍑 🍈 🥭 |
//!
//! # Difficulty Tiers
//!
//! | Difficulty | Pairs | Grid |
//! |------------|-------|------|
//! | `easy` | 3 | 3x2 |
//! | `medium` | 6 | 4x3 |
//! | `hard` | 8 | 4x4 |
//! | `expert` | 10 | 5x4 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the game loop (~60 FPS) |
//! | `CLOCK_TICK_MS` | 1000 | One session clock second |
//! | `DEFAULT_MISMATCH_DELAY_MS` | 800 | How long a mismatched pair stays face-up |
//! | `CELEBRATION_MS` | 2500 | Length of the completion confetti overlay |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Difficulty, GameAction, Theme};
//!
//! let theme = Theme::from_str("Fruits").unwrap();
//! assert_eq!(theme, Theme::Fruits);
//! assert_eq!(theme.symbols()[0], "🍎");
//!
//! let difficulty = Difficulty::from_str("easy").unwrap();
//! assert_eq!(difficulty.pair_count(), 3);
//! assert_eq!(difficulty.columns(), 3);
//!
//! assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One session clock tick (1 second of wall time)
pub const CLOCK_TICK_MS: u32 = 1000;

/// How long a mismatched pair stays visible before the turn resolves
pub const DEFAULT_MISMATCH_DELAY_MS: u32 = 800;

/// Length of the confetti overlay shown on completion
pub const CELEBRATION_MS: u32 = 2500;

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: Theme = Theme::Food;

/// Difficulty used when nothing else is configured
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

const FOOD_SYMBOLS: [&str; 10] = ["🍕", "🍔", "🍟", "🌮", "🍩", "🍉", "🍓", "🍇", "🍒", "🥑"];
const ANIMAL_SYMBOLS: [&str; 10] = ["🐶", "🐱", "🐸", "🐵", "🐼", "🦁", "🐰", "🐨", "🦊", "🦄"];
const FRUIT_SYMBOLS: [&str; 10] = ["🍎", "🍌", "🍇", "🍓", "🍍", "🥝", "🍒", "🍑", "🍈", "🥭"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(CLOCK_TICK_MS, 1000);
        assert_eq!(DEFAULT_MISMATCH_DELAY_MS, 800);
        assert!(TICK_MS < CLOCK_TICK_MS);
    }

    #[test]
    fn every_theme_covers_the_largest_difficulty() {
        let max_pairs = Difficulty::ALL
            .iter()
            .map(|d| d.pair_count())
            .max()
            .unwrap();
        for theme in Theme::ALL {
            assert!(theme.symbols().len() >= max_pairs, "{theme} too small");
        }
    }

    #[test]
    fn theme_symbols_are_distinct() {
        for theme in Theme::ALL {
            let symbols = theme.symbols();
            for (i, a) in symbols.iter().enumerate() {
                for b in &symbols[i + 1..] {
                    assert_ne!(a, b, "duplicate symbol in {theme}");
                }
            }
        }
    }

    #[test]
    fn cycling_visits_every_variant() {
        let mut theme = Theme::Food;
        for _ in 0..Theme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Food);

        let mut difficulty = Difficulty::Easy;
        for _ in 0..Difficulty::ALL.len() {
            difficulty = difficulty.next();
        }
        assert_eq!(difficulty, Difficulty::Easy);
    }

    #[test]
    fn string_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Theme::from_str("space"), None);
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}

/// Named symbol sets a deck can be drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Food,
    Animals,
    Fruits,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Food, Theme::Animals, Theme::Fruits];

    /// Parse theme from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::Theme;
    ///
    /// assert_eq!(Theme::from_str("food"), Some(Theme::Food));
    /// assert_eq!(Theme::from_str("ANIMALS"), Some(Theme::Animals));
    /// assert_eq!(Theme::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Theme::Food),
            "animals" => Some(Theme::Animals),
            "fruits" => Some(Theme::Fruits),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Food => "food",
            Theme::Animals => "animals",
            Theme::Fruits => "fruits",
        }
    }

    /// The theme's ordered symbol list
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Theme::Food => &FOOD_SYMBOLS,
            Theme::Animals => &ANIMAL_SYMBOLS,
            Theme::Fruits => &FRUIT_SYMBOLS,
        }
    }

    /// Next theme in display order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Theme::Food => Theme::Animals,
            Theme::Animals => Theme::Fruits,
            Theme::Fruits => Theme::Food,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tiers, each mapping to a pair count and grid width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Number of distinct symbols (pairs) in a deck of this difficulty
    pub fn pair_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 6,
            Difficulty::Hard => 8,
            Difficulty::Expert => 10,
        }
    }

    /// Number of tile columns used when laying out the grid
    pub fn columns(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium | Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Expert,
            Difficulty::Expert => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque tile identity
///
/// Assigned when a deck is built and never handed out twice by the same
/// allocator, so two tiles with the same symbol can always be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Player-facing actions produced by the input layer
///
/// Cursor movement and `Flip` are resolved against the board by the game loop;
/// the remaining actions map one-to-one onto game session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one row up
    CursorUp,
    /// Move the board cursor one row down
    CursorDown,
    /// Move the board cursor one column left
    CursorLeft,
    /// Move the board cursor one column right
    CursorRight,
    /// Choose the tile under the cursor
    Flip,
    /// Toggle pause state
    Pause,
    /// Start a new game with the current theme and difficulty
    NewGame,
    /// Toggle the completion sound
    ToggleSound,
    /// Toggle light/dark display mode
    ToggleDarkMode,
    /// Switch to the next theme (starts a new game)
    NextTheme,
    /// Switch to the next difficulty (starts a new game)
    NextDifficulty,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("flip"), Some(GameAction::Flip));
    /// assert_eq!(GameAction::from_str("toggleDarkMode"), Some(GameAction::ToggleDarkMode));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "flip" => Some(GameAction::Flip),
            "pause" => Some(GameAction::Pause),
            "newgame" => Some(GameAction::NewGame),
            "togglesound" => Some(GameAction::ToggleSound),
            "toggledarkmode" => Some(GameAction::ToggleDarkMode),
            "nexttheme" => Some(GameAction::NextTheme),
            "nextdifficulty" => Some(GameAction::NextDifficulty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Flip => "flip",
            GameAction::Pause => "pause",
            GameAction::NewGame => "newGame",
            GameAction::ToggleSound => "toggleSound",
            GameAction::ToggleDarkMode => "toggleDarkMode",
            GameAction::NextTheme => "nextTheme",
            GameAction::NextDifficulty => "nextDifficulty",
        }
    }
}
