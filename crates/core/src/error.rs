//! Error types for deck construction and session restore.

use thiserror::Error;

use crate::types::Theme;

/// Invalid theme or difficulty handed to the deck builder.
///
/// Fatal to the `new_game` call that triggered it; the previous session is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("theme {theme} has {available} symbols, {requested} pairs requested")]
    NotEnoughSymbols {
        theme: Theme,
        requested: usize,
        available: usize,
    },
    #[error("a deck needs at least one pair")]
    EmptyDeck,
}

impl ConfigurationError {
    /// Parse a theme name, failing with [`ConfigurationError::UnknownTheme`].
    pub fn parse_theme(s: &str) -> Result<Theme, Self> {
        Theme::from_str(s).ok_or_else(|| Self::UnknownTheme(s.to_string()))
    }

    /// Parse a difficulty name, failing with [`ConfigurationError::UnknownDifficulty`].
    pub fn parse_difficulty(s: &str) -> Result<crate::types::Difficulty, Self> {
        crate::types::Difficulty::from_str(s).ok_or_else(|| Self::UnknownDifficulty(s.to_string()))
    }
}

/// A delayed mismatch resolution fired against a session it was not scheduled
/// for, or when nothing was pending. Never surfaced to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stale mismatch resolution (scheduled for generation {scheduled}, current {current})")]
pub struct StaleResolution {
    pub scheduled: u32,
    pub current: u32,
}

/// Reasons a persisted session snapshot cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("symbol {0:?} does not belong to this deck")]
    UnexpectedSymbol(String),
    #[error("symbol {symbol:?} appears {count} times")]
    SymbolCount { symbol: String, count: usize },
    #[error("tile id {0} appears more than once")]
    DuplicateId(u64),
    #[error("tile id {0} is out of range")]
    IdOutOfRange(u64),
    #[error("only one tile of {0:?} is marked matched")]
    HalfMatchedPair(String),
}
