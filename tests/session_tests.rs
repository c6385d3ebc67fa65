//! End-to-end session behavior through the facade crate.

use std::cell::Cell;
use std::rc::Rc;

use memory_match::core::{ChooseOutcome, IgnoreReason, Settings, TurnPhase};
use memory_match::engine::{AudioCue, Celebration, Effects, EngineConfig, GameSession, SessionEvent};
use memory_match::store::{MemoryStore, SessionPersistence};
use memory_match::types::{Difficulty, Theme, TileId};

#[derive(Clone, Default)]
struct Count(Rc<Cell<u32>>);

impl Celebration for Count {
    fn trigger(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

impl AudioCue for Count {
    fn trigger(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn start(store: &MemoryStore, theme: Theme, difficulty: Difficulty) -> GameSession {
    let config = EngineConfig {
        theme,
        difficulty,
        seed: Some(2024),
        restore: false,
        ..EngineConfig::default()
    };
    GameSession::start(config, SessionPersistence::new(store.clone()), Effects::none()).unwrap()
}

fn tiles_with(game: &GameSession, symbol: &str) -> Vec<TileId> {
    game.session()
        .deck()
        .tiles()
        .iter()
        .filter(|t| t.symbol == symbol)
        .map(|t| t.id)
        .collect()
}

fn solve(game: &mut GameSession) {
    let pairs = game.session().difficulty().pair_count();
    for symbol in &game.session().theme().symbols()[..pairs] {
        let ids = tiles_with(game, symbol);
        game.choose_tile(ids[0]);
        game.choose_tile(ids[1]);
    }
}

#[test]
fn fruits_mismatch_then_match_scenario() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Fruits, Difficulty::Easy);

    let deck = game.session().deck();
    assert_eq!(deck.len(), 6);
    for symbol in ["🍎", "🍌", "🍇"] {
        assert_eq!(deck.tiles().iter().filter(|t| t.symbol == symbol).count(), 2);
    }

    let apples = tiles_with(&game, "🍎");
    let bananas = tiles_with(&game, "🍌");
    let (a, b) = (apples[0], bananas[0]);

    game.choose_tile(a);
    assert!(matches!(game.choose_tile(b), ChooseOutcome::Mismatched(_)));

    // Both visible during the delay.
    let view = game.view();
    let face_up: Vec<TileId> = view.tiles.iter().filter(|t| t.face_up).map(|t| t.id).collect();
    assert_eq!(face_up.len(), 2);
    assert!(face_up.contains(&a) && face_up.contains(&b));

    game.tick(game.mismatch_delay_ms());

    let view = game.view();
    assert!(view.tiles.iter().all(|t| !t.face_up));
    assert_eq!(game.session().turn_count(), 1);
    assert_eq!(game.session().phase(), TurnPhase::Idle);

    game.choose_tile(a);
    assert_eq!(
        game.choose_tile(apples[1]),
        ChooseOutcome::Matched { completed: false }
    );
    let deck = game.session().deck();
    assert!(deck.get(a).unwrap().matched);
    assert!(deck.get(apples[1]).unwrap().matched);
    assert_eq!(game.session().turn_count(), 2);
    assert_eq!(game.pending_resolution_ms(), None);
}

#[test]
fn matched_tiles_ignore_further_choices() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Animals, Difficulty::Medium);
    let dogs = tiles_with(&game, "🐶");
    game.choose_tile(dogs[0]);
    game.choose_tile(dogs[1]);
    let turns = game.session().turn_count();

    for id in dogs {
        assert_eq!(
            game.choose_tile(id),
            ChooseOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }
    assert_eq!(game.session().turn_count(), turns);
    assert!(game.session().selection().is_empty());
}

#[test]
fn tiles_are_locked_until_the_mismatch_resolves() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Food, Difficulty::Easy);
    let pizzas = tiles_with(&game, "🍕");
    let burgers = tiles_with(&game, "🍔");

    game.choose_tile(pizzas[0]);
    game.choose_tile(burgers[0]);
    assert_eq!(
        game.choose_tile(pizzas[1]),
        ChooseOutcome::Ignored(IgnoreReason::InputLocked)
    );
    assert_eq!(
        game.choose_tile(pizzas[0]),
        ChooseOutcome::Ignored(IgnoreReason::InputLocked)
    );

    game.tick(game.mismatch_delay_ms() - 1);
    assert!(game.session().input_locked());
    game.tick(1);
    assert_eq!(game.choose_tile(pizzas[0]), ChooseOutcome::FirstChosen);
}

#[test]
fn self_pairing_is_a_no_op() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Fruits, Difficulty::Hard);
    let first = game.session().deck().tiles()[0].id;

    assert_eq!(game.choose_tile(first), ChooseOutcome::FirstChosen);
    assert_eq!(
        game.choose_tile(first),
        ChooseOutcome::Ignored(IgnoreReason::AlreadyChosen)
    );
    assert_eq!(game.session().phase(), TurnPhase::OneChosen(first));
    assert_eq!(game.session().turn_count(), 0);
}

#[test]
fn win_fires_once_even_with_extra_choices() {
    let store = MemoryStore::new();
    let confetti = Count::default();
    let mut game = GameSession::start(
        EngineConfig {
            theme: Theme::Fruits,
            difficulty: Difficulty::Easy,
            seed: Some(1),
            ..EngineConfig::default()
        },
        SessionPersistence::new(store),
        Effects::new(confetti.clone(), Count::default()),
    )
    .unwrap();

    solve(&mut game);
    let ids: Vec<TileId> = game.session().deck().tiles().iter().map(|t| t.id).collect();
    for id in ids {
        game.choose_tile(id);
    }
    game.tick(10_000);

    let completions = game
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, SessionEvent::Completed { .. }))
        .count();
    assert_eq!(completions, 1);
    assert_eq!(confetti.0.get(), 1);
}

#[test]
fn best_time_scenario_12_15_9() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Fruits, Difficulty::Easy);
    let mut bests = Vec::new();

    for seconds in [12u32, 15, 9] {
        game.restart().unwrap();
        game.tick(seconds * 1000);
        solve(&mut game);
        bests.push(game.settings().best_time_seconds);
    }
    assert_eq!(bests, vec![Some(12), Some(12), Some(9)]);

    // A fresh process sees the stored best.
    let reopened = start(&store, Theme::Fruits, Difficulty::Easy);
    assert_eq!(reopened.settings().best_time_seconds, Some(9));
}

#[test]
fn pause_freezes_elapsed_time() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Animals, Difficulty::Easy);
    game.tick(4_000);
    game.toggle_pause();
    for _ in 0..3 {
        game.tick(1_000);
    }
    assert_eq!(game.session().elapsed_seconds(), 4);

    game.toggle_pause();
    game.tick(1_000);
    assert_eq!(game.session().elapsed_seconds(), 5);
}

#[test]
fn stale_resolution_never_touches_a_new_session() {
    let store = MemoryStore::new();
    let mut game = start(&store, Theme::Fruits, Difficulty::Easy);
    let apples = tiles_with(&game, "🍎");
    let bananas = tiles_with(&game, "🍌");
    game.choose_tile(apples[0]);
    let ChooseOutcome::Mismatched(token) = game.choose_tile(bananas[0]) else {
        panic!("expected a mismatch");
    };

    game.cycle_difficulty().unwrap();
    let first = game.session().deck().tiles()[0].id;
    let second = game
        .session()
        .deck()
        .tiles()
        .iter()
        .find(|t| t.symbol != game.session().deck().tiles()[0].symbol)
        .map(|t| t.id)
        .unwrap();
    game.choose_tile(first);
    game.choose_tile(second);

    // The old token names an older generation.
    assert!(!game.resolve_pending(token));
    assert!(game.session().input_locked());
    assert_eq!(game.session().turn_count(), 0);

    // The new session's own timer still resolves it.
    game.tick(game.mismatch_delay_ms());
    assert!(!game.session().input_locked());
    assert_eq!(game.session().turn_count(), 1);
}

#[test]
fn settings_survive_restart() {
    let store = MemoryStore::new();
    {
        let mut game = start(&store, Theme::Food, Difficulty::Medium);
        game.toggle_sound();
        game.toggle_dark_mode();
    }
    let game = start(&store, Theme::Food, Difficulty::Medium);
    assert_eq!(
        *game.settings(),
        Settings {
            best_time_seconds: None,
            sound_enabled: false,
            dark_mode: true,
        }
    );
}
