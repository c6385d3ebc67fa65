//! Selection & match resolver - the per-turn state machine
//!
//! ```text
//! Idle -> OneChosen -> TwoChosen -> Matched  -> Idle   (synchronous)
//!                               \-> Mismatch -> Idle   (after the reveal delay)
//! ```
//!
//! `TwoChosen` only exists for the instant the two symbols are compared, so it
//! never survives a call to [`MatchResolver::choose`]. Input is locked while a
//! mismatch is on display.

use arrayvec::ArrayVec;

use crate::deck::Deck;
use crate::types::TileId;

/// Turn phase of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    OneChosen(TileId),
    TwoChosen(TileId, TileId),
    /// Both tiles stay face-up until the delayed resolution fires.
    Mismatch(TileId, TileId),
}

impl TurnPhase {
    /// Currently chosen tiles (zero, one or two).
    pub fn selection(&self) -> ArrayVec<TileId, 2> {
        let mut out = ArrayVec::new();
        match *self {
            TurnPhase::Idle => {}
            TurnPhase::OneChosen(a) => out.push(a),
            TurnPhase::TwoChosen(a, b) | TurnPhase::Mismatch(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
        out
    }

    pub fn input_locked(&self) -> bool {
        matches!(self, TurnPhase::TwoChosen(..) | TurnPhase::Mismatch(..))
    }
}

/// Why a `choose_tile` call had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Paused,
    InputLocked,
    AlreadyMatched,
    AlreadyChosen,
    UnknownTile,
    Completed,
}

/// Result of a successful choice at the resolver level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    First(TileId),
    Matched(TileId, TileId),
    Mismatched(TileId, TileId),
}

#[derive(Debug, Clone, Default)]
pub struct MatchResolver {
    phase: TurnPhase,
}

impl MatchResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn selection(&self) -> ArrayVec<TileId, 2> {
        self.phase.selection()
    }

    pub fn input_locked(&self) -> bool {
        self.phase.input_locked()
    }

    /// Choose a tile. Matched pairs are marked by identity and resolved before
    /// returning; a mismatch leaves the resolver in [`TurnPhase::Mismatch`].
    pub fn choose(&mut self, deck: &mut Deck, id: TileId) -> Result<Choice, IgnoreReason> {
        if self.phase.input_locked() {
            return Err(IgnoreReason::InputLocked);
        }
        let tile = *deck.get(id).ok_or(IgnoreReason::UnknownTile)?;
        if tile.matched {
            return Err(IgnoreReason::AlreadyMatched);
        }

        match self.phase {
            TurnPhase::Idle => {
                self.phase = TurnPhase::OneChosen(id);
                Ok(Choice::First(id))
            }
            TurnPhase::OneChosen(first) if first == id => Err(IgnoreReason::AlreadyChosen),
            TurnPhase::OneChosen(first) => {
                self.phase = TurnPhase::TwoChosen(first, id);
                Ok(self.compare(deck, first, id, tile.symbol))
            }
            TurnPhase::TwoChosen(..) | TurnPhase::Mismatch(..) => Err(IgnoreReason::InputLocked),
        }
    }

    fn compare(&mut self, deck: &mut Deck, first: TileId, second: TileId, symbol: &str) -> Choice {
        let first_symbol = deck.get(first).map(|t| t.symbol);
        if first_symbol == Some(symbol) {
            deck.mark_matched(first);
            deck.mark_matched(second);
            self.phase = TurnPhase::Idle;
            Choice::Matched(first, second)
        } else {
            self.phase = TurnPhase::Mismatch(first, second);
            Choice::Mismatched(first, second)
        }
    }

    /// Leave the mismatch display. Returns false when no mismatch was pending.
    pub fn finish_mismatch(&mut self) -> bool {
        if let TurnPhase::Mismatch(..) = self.phase {
            self.phase = TurnPhase::Idle;
            true
        } else {
            false
        }
    }
}
