use memory_match_core::types::{Difficulty, Theme};
use memory_match_core::Settings;

/// Session-level events, drained by the view layer after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session was dealt, or restored from storage.
    NewGame {
        theme: Theme,
        difficulty: Difficulty,
        restored: bool,
    },
    /// Something visible changed: a tile flipped, the clock ticked, pause toggled.
    StateChanged,
    /// A turn finished, by match or once the mismatch delay ran out.
    TurnResolved { matched: bool, turn_count: u32 },
    /// Every tile is matched. Emitted once per session.
    Completed {
        elapsed_seconds: u32,
        new_best: bool,
    },
    SettingsChanged(Settings),
}
