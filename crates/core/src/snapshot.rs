//! Persistable session snapshot and its validation.
//!
//! A snapshot carries everything needed to resume a session except the
//! in-flight selection, which is always reset on restore.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::deck::Tile;
use crate::error::{ConfigurationError, SnapshotError};
use crate::types::{Difficulty, Theme, TileId};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: u64,
    pub symbol: String,
    pub matched: bool,
}

impl From<&Tile> for TileSnapshot {
    fn from(value: &Tile) -> Self {
        Self {
            id: value.id.0,
            symbol: value.symbol.to_string(),
            matched: value.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub theme: String,
    pub difficulty: String,
    pub turn_count: u32,
    pub elapsed_seconds: u32,
    pub tiles: Vec<TileSnapshot>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            theme: String::new(),
            difficulty: String::new(),
            turn_count: 0,
            elapsed_seconds: 0,
            tiles: Vec::new(),
        }
    }
}

/// Validated contents of a snapshot, ready to become a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredDeck {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub tiles: Vec<Tile>,
}

impl SessionSnapshot {
    /// Check the record against the deck invariants and resolve symbols back to
    /// the theme's static symbol list.
    pub fn validate(&self) -> Result<RestoredDeck, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        let theme = ConfigurationError::parse_theme(&self.theme)?;
        let difficulty = ConfigurationError::parse_difficulty(&self.difficulty)?;
        let pairs = difficulty.pair_count();
        let symbols = theme.symbols();
        if pairs > symbols.len() {
            return Err(ConfigurationError::NotEnoughSymbols {
                theme,
                requested: pairs,
                available: symbols.len(),
            }
            .into());
        }
        let allowed = &symbols[..pairs];

        if self.tiles.len() != pairs * 2 {
            return Err(SnapshotError::TileCount {
                expected: pairs * 2,
                found: self.tiles.len(),
            });
        }

        let mut seen_ids = HashSet::with_capacity(self.tiles.len());
        let mut per_symbol: HashMap<&'static str, (usize, usize)> = HashMap::new();
        let mut tiles = Vec::with_capacity(self.tiles.len());

        for t in &self.tiles {
            let symbol = allowed
                .iter()
                .copied()
                .find(|s| *s == t.symbol)
                .ok_or_else(|| SnapshotError::UnexpectedSymbol(t.symbol.clone()))?;
            if t.id == u64::MAX {
                return Err(SnapshotError::IdOutOfRange(t.id));
            }
            if !seen_ids.insert(t.id) {
                return Err(SnapshotError::DuplicateId(t.id));
            }
            let entry = per_symbol.entry(symbol).or_insert((0, 0));
            entry.0 += 1;
            if t.matched {
                entry.1 += 1;
            }
            tiles.push(Tile {
                id: TileId(t.id),
                symbol,
                matched: t.matched,
            });
        }

        for symbol in allowed {
            let (count, matched) = per_symbol.get(symbol).copied().unwrap_or((0, 0));
            if count != 2 {
                return Err(SnapshotError::SymbolCount {
                    symbol: symbol.to_string(),
                    count,
                });
            }
            if matched == 1 {
                return Err(SnapshotError::HalfMatchedPair(symbol.to_string()));
            }
        }

        Ok(RestoredDeck {
            theme,
            difficulty,
            tiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy_fruits() -> SessionSnapshot {
        let tiles = [("🍎", 0), ("🍌", 1), ("🍇", 2), ("🍎", 3), ("🍌", 4), ("🍇", 5)]
            .iter()
            .map(|&(symbol, id)| TileSnapshot {
                id,
                symbol: symbol.to_string(),
                matched: false,
            })
            .collect();
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            theme: "fruits".into(),
            difficulty: "easy".into(),
            turn_count: 2,
            elapsed_seconds: 17,
            tiles,
        }
    }

    #[test]
    fn test_valid_snapshot() {
        let restored = easy_fruits().validate().unwrap();
        assert_eq!(restored.theme, Theme::Fruits);
        assert_eq!(restored.difficulty, Difficulty::Easy);
        assert_eq!(restored.tiles.len(), 6);
        assert_eq!(restored.tiles[0].id, TileId(0));
    }

    #[test]
    fn test_unknown_theme() {
        let mut snap = easy_fruits();
        snap.theme = "space".into();
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::Configuration(ConfigurationError::UnknownTheme(
                "space".into()
            )))
        );
    }

    #[test]
    fn test_wrong_tile_count() {
        let mut snap = easy_fruits();
        snap.tiles.pop();
        assert!(matches!(snap.validate(), Err(SnapshotError::TileCount { .. })));
    }

    #[test]
    fn test_foreign_symbol() {
        let mut snap = easy_fruits();
        snap.tiles[0].symbol = "🐶".into();
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::UnexpectedSymbol(_))
        ));
    }

    #[test]
    fn test_three_of_a_kind() {
        let mut snap = easy_fruits();
        snap.tiles[1].symbol = "🍎".into();
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::SymbolCount { .. })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let mut snap = easy_fruits();
        snap.tiles[5].id = 0;
        assert_eq!(snap.validate(), Err(SnapshotError::DuplicateId(0)));
    }

    #[test]
    fn test_id_past_allocator_range() {
        let mut snap = easy_fruits();
        snap.tiles[2].id = u64::MAX;
        assert_eq!(snap.validate(), Err(SnapshotError::IdOutOfRange(u64::MAX)));
    }

    #[test]
    fn test_half_matched_pair() {
        let mut snap = easy_fruits();
        snap.tiles[0].matched = true;
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::HalfMatchedPair("🍎".into()))
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&easy_fruits()).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, easy_fruits());
        assert!(json.contains("\"elapsed_seconds\":17"));
    }
}
