//! Deck builder - produces shuffled, paired tile sets
//!
//! A deck for `N` pairs holds exactly two tiles for each of the first `N`
//! symbols of its theme, in a uniformly random order. Tile identities come from
//! a [`TileIdAllocator`] and are never reused by that allocator.

use crate::error::ConfigurationError;
use crate::rng::DeckRng;
use crate::types::{Theme, TileId};

/// A single face-down (or matched) tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub symbol: &'static str,
    pub matched: bool,
}

impl Tile {
    pub fn new(id: TileId, symbol: &'static str) -> Self {
        Self {
            id,
            symbol,
            matched: false,
        }
    }
}

/// Hands out tile identities in increasing order
#[derive(Debug, Clone, Default)]
pub struct TileIdAllocator {
    next: u64,
}

impl TileIdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Make sure ids already in use (e.g. from a restored deck) are never handed out.
    pub fn reserve_past(&mut self, id: TileId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

/// Ordered tile sequence for one session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Wrap an already validated tile list.
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Mark a tile matched by identity. Returns false for unknown ids.
    pub(crate) fn mark_matched(&mut self, id: TileId) -> bool {
        match self.tiles.iter_mut().find(|t| t.id == id) {
            Some(tile) => {
                tile.matched = true;
                true
            }
            None => false,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    /// True when every tile is matched. An empty deck is never complete.
    pub fn all_matched(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|t| t.matched)
    }
}

/// Build a fresh shuffled deck of `pair_count` pairs from `theme`.
///
/// Fails instead of truncating when the theme cannot supply enough symbols.
pub fn build_deck(
    theme: Theme,
    pair_count: usize,
    rng: &mut DeckRng,
    ids: &mut TileIdAllocator,
) -> Result<Deck, ConfigurationError> {
    let symbols = theme.symbols();
    if pair_count == 0 {
        return Err(ConfigurationError::EmptyDeck);
    }
    if pair_count > symbols.len() {
        return Err(ConfigurationError::NotEnoughSymbols {
            theme,
            requested: pair_count,
            available: symbols.len(),
        });
    }

    let mut tiles: Vec<Tile> = symbols[..pair_count]
        .iter()
        .chain(symbols[..pair_count].iter())
        .map(|&symbol| Tile::new(ids.next_id(), symbol))
        .collect();
    rng.shuffle(&mut tiles);

    Ok(Deck::from_tiles(tiles))
}
