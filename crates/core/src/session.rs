//! Session module - one game from deal to completion
//!
//! Ties together the deck, the match resolver and the clock. A session is
//! replaced wholesale on every new game; each one carries a `generation` so a
//! delayed mismatch resolution can tell whether it still belongs here.

use crate::clock::SessionClock;
use crate::deck::{build_deck, Deck, TileIdAllocator};
use crate::error::{ConfigurationError, SnapshotError, StaleResolution};
use crate::rng::DeckRng;
use crate::selection::{Choice, IgnoreReason, MatchResolver, TurnPhase};
use crate::snapshot::{SessionSnapshot, TileSnapshot, SNAPSHOT_VERSION};
use crate::types::{Difficulty, Theme, TileId};

/// Ties a delayed mismatch resolution to the session that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionToken {
    pub generation: u32,
}

/// What a `choose_tile` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    Ignored(IgnoreReason),
    FirstChosen,
    /// The pair matched and the turn resolved. `completed` is true exactly once
    /// per session, on the match that clears the board.
    Matched { completed: bool },
    /// The pair is on display; call [`Session::resolve_mismatch`] with the token
    /// once the reveal delay has passed.
    Mismatched(ResolutionToken),
}

#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    resolver: MatchResolver,
    clock: SessionClock,
    turn_count: u32,
    elapsed_seconds: u32,
    paused: bool,
    completed: bool,
    theme: Theme,
    difficulty: Difficulty,
    generation: u32,
}

impl Session {
    /// Deal a fresh session. Nothing is constructed when the deck cannot be built.
    pub fn new(
        theme: Theme,
        difficulty: Difficulty,
        generation: u32,
        rng: &mut DeckRng,
        ids: &mut TileIdAllocator,
    ) -> Result<Self, ConfigurationError> {
        let deck = build_deck(theme, difficulty.pair_count(), rng, ids)?;
        Ok(Self::from_parts(deck, theme, difficulty, generation, 0, 0))
    }

    /// Rebuild a session from a persisted snapshot.
    ///
    /// Selection always starts empty and the clock resumes from the saved
    /// `elapsed_seconds`. Restored ids are reserved in `ids`.
    pub fn restore(
        snapshot: &SessionSnapshot,
        generation: u32,
        ids: &mut TileIdAllocator,
    ) -> Result<Self, SnapshotError> {
        let restored = snapshot.validate()?;
        for tile in &restored.tiles {
            ids.reserve_past(tile.id);
        }
        Ok(Self::from_parts(
            Deck::from_tiles(restored.tiles),
            restored.theme,
            restored.difficulty,
            generation,
            snapshot.turn_count,
            snapshot.elapsed_seconds,
        ))
    }

    fn from_parts(
        deck: Deck,
        theme: Theme,
        difficulty: Difficulty,
        generation: u32,
        turn_count: u32,
        elapsed_seconds: u32,
    ) -> Self {
        let completed = deck.all_matched();
        Self {
            deck,
            resolver: MatchResolver::new(),
            clock: SessionClock::new(),
            turn_count,
            elapsed_seconds,
            paused: false,
            completed,
            theme,
            difficulty,
            generation,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> TurnPhase {
        self.resolver.phase()
    }

    pub fn selection(&self) -> arrayvec::ArrayVec<TileId, 2> {
        self.resolver.selection()
    }

    pub fn input_locked(&self) -> bool {
        self.resolver.input_locked()
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether clock ticks currently count.
    pub fn clock_running(&self) -> bool {
        !self.paused && !self.completed && !self.deck.is_empty()
    }

    /// Choose a tile by identity
    pub fn choose_tile(&mut self, id: TileId) -> ChooseOutcome {
        if self.completed {
            return ChooseOutcome::Ignored(IgnoreReason::Completed);
        }
        if self.paused {
            return ChooseOutcome::Ignored(IgnoreReason::Paused);
        }

        match self.resolver.choose(&mut self.deck, id) {
            Err(reason) => ChooseOutcome::Ignored(reason),
            Ok(Choice::First(_)) => ChooseOutcome::FirstChosen,
            Ok(Choice::Matched(..)) => {
                self.turn_count = self.turn_count.saturating_add(1);
                let completed = self.deck.all_matched();
                if completed {
                    self.completed = true;
                }
                ChooseOutcome::Matched { completed }
            }
            Ok(Choice::Mismatched(..)) => ChooseOutcome::Mismatched(ResolutionToken {
                generation: self.generation,
            }),
        }
    }

    /// End a mismatch display: clear the selection, count the turn, unlock input.
    pub fn resolve_mismatch(&mut self, token: ResolutionToken) -> Result<(), StaleResolution> {
        let stale = StaleResolution {
            scheduled: token.generation,
            current: self.generation,
        };
        if token.generation != self.generation || !self.resolver.finish_mismatch() {
            return Err(stale);
        }
        self.turn_count = self.turn_count.saturating_add(1);
        Ok(())
    }

    /// Advance the clock by `elapsed_ms` of wall time.
    ///
    /// Pause and completion are checked here, when the tick is delivered, so a
    /// tick scheduled before a pause never counts. Returns whole seconds added.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.clock_running() {
            return 0;
        }
        let seconds = self.clock.advance(elapsed_ms);
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
        seconds
    }

    /// Flip pause; returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.version = SNAPSHOT_VERSION;
        out.theme.clear();
        out.theme.push_str(self.theme.as_str());
        out.difficulty.clear();
        out.difficulty.push_str(self.difficulty.as_str());
        out.turn_count = self.turn_count;
        out.elapsed_seconds = self.elapsed_seconds;
        out.tiles.clear();
        out.tiles
            .extend(self.deck.tiles().iter().map(TileSnapshot::from));
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        let mut rng = DeckRng::seeded(seed);
        let mut ids = TileIdAllocator::new();
        Session::new(Theme::Fruits, Difficulty::Easy, 1, &mut rng, &mut ids).unwrap()
    }

    /// Ids of the two tiles carrying `symbol`.
    fn pair(s: &Session, symbol: &str) -> (TileId, TileId) {
        let ids: Vec<TileId> = s
            .deck()
            .tiles()
            .iter()
            .filter(|t| t.symbol == symbol)
            .map(|t| t.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn test_new_session() {
        let s = session(1);
        assert_eq!(s.deck().len(), 6);
        assert_eq!(s.turn_count(), 0);
        assert_eq!(s.elapsed_seconds(), 0);
        assert!(!s.paused());
        assert!(!s.completed());
        assert_eq!(s.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_mismatch_then_match() {
        let mut s = session(42);
        let (apple_a, apple_b) = pair(&s, "🍎");
        let (banana, _) = pair(&s, "🍌");

        assert_eq!(s.choose_tile(apple_a), ChooseOutcome::FirstChosen);
        let token = match s.choose_tile(banana) {
            ChooseOutcome::Mismatched(token) => token,
            other => panic!("expected mismatch, got {other:?}"),
        };
        assert!(s.input_locked());
        assert_eq!(s.turn_count(), 0);

        s.resolve_mismatch(token).unwrap();
        assert_eq!(s.turn_count(), 1);
        assert!(s.selection().is_empty());

        s.choose_tile(apple_a);
        assert_eq!(
            s.choose_tile(apple_b),
            ChooseOutcome::Matched { completed: false }
        );
        assert_eq!(s.turn_count(), 2);
        assert!(s.deck().get(apple_a).unwrap().matched);
        assert!(s.deck().get(apple_b).unwrap().matched);
    }

    #[test]
    fn test_ignored_choices_do_not_count_turns() {
        let mut s = session(5);
        let (a, _) = pair(&s, "🍎");
        s.choose_tile(a);
        assert_eq!(
            s.choose_tile(a),
            ChooseOutcome::Ignored(IgnoreReason::AlreadyChosen)
        );
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_pause_blocks_choices() {
        let mut s = session(5);
        let (a, _) = pair(&s, "🍎");
        assert!(s.toggle_pause());
        assert_eq!(s.choose_tile(a), ChooseOutcome::Ignored(IgnoreReason::Paused));
        assert!(!s.toggle_pause());
        assert_eq!(s.choose_tile(a), ChooseOutcome::FirstChosen);
    }

    #[test]
    fn test_stale_token_is_rejected() {
        let mut s = session(8);
        let (a, _) = pair(&s, "🍎");
        let (b, _) = pair(&s, "🍌");
        s.choose_tile(a);
        s.choose_tile(b);

        let stale = ResolutionToken { generation: 0 };
        assert_eq!(
            s.resolve_mismatch(stale),
            Err(StaleResolution {
                scheduled: 0,
                current: 1
            })
        );
        assert!(s.input_locked());
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_resolution_without_pending_mismatch() {
        let mut s = session(8);
        assert!(s.resolve_mismatch(ResolutionToken { generation: 1 }).is_err());
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_completion_fires_once() {
        let mut s = session(11);
        let mut completions = 0;
        for symbol in ["🍎", "🍌", "🍇"] {
            let (a, b) = pair(&s, symbol);
            s.choose_tile(a);
            if let ChooseOutcome::Matched { completed: true } = s.choose_tile(b) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(s.completed());
        assert_eq!(s.turn_count(), 3);

        let (a, _) = pair(&s, "🍎");
        assert_eq!(
            s.choose_tile(a),
            ChooseOutcome::Ignored(IgnoreReason::Completed)
        );
    }

    #[test]
    fn test_clock_counts_whole_seconds() {
        let mut s = session(1);
        assert_eq!(s.tick(2500), 2);
        assert_eq!(s.elapsed_seconds(), 2);
        assert_eq!(s.tick(500), 1);
        assert_eq!(s.elapsed_seconds(), 3);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut s = session(1);
        s.tick(2000);
        s.toggle_pause();
        for _ in 0..5 {
            assert_eq!(s.tick(1000), 0);
        }
        assert_eq!(s.elapsed_seconds(), 2);
        s.toggle_pause();
        s.tick(1000);
        assert_eq!(s.elapsed_seconds(), 3);
    }

    #[test]
    fn test_clock_stops_on_completion() {
        let mut s = session(11);
        for symbol in ["🍎", "🍌", "🍇"] {
            let (a, b) = pair(&s, symbol);
            s.choose_tile(a);
            s.choose_tile(b);
        }
        let frozen = s.elapsed_seconds();
        assert_eq!(s.tick(5000), 0);
        assert_eq!(s.elapsed_seconds(), frozen);
    }

    #[test]
    fn test_snapshot_restore_resets_selection() {
        let mut s = session(3);
        let (a, b) = pair(&s, "🍇");
        s.choose_tile(a);
        s.choose_tile(b);
        s.tick(7000);
        let (c, _) = pair(&s, "🍎");
        s.choose_tile(c);

        let snap = s.snapshot();
        let mut ids = TileIdAllocator::new();
        let restored = Session::restore(&snap, 9, &mut ids).unwrap();

        assert_eq!(restored.deck(), s.deck());
        assert_eq!(restored.turn_count(), 1);
        assert_eq!(restored.elapsed_seconds(), 7);
        assert_eq!(restored.theme(), Theme::Fruits);
        assert_eq!(restored.difficulty(), Difficulty::Easy);
        assert_eq!(restored.generation(), 9);
        assert!(restored.selection().is_empty());

        // Fresh ids never collide with the restored deck.
        let next = ids.next_id();
        assert!(restored.deck().tiles().iter().all(|t| t.id < next));
    }
}
