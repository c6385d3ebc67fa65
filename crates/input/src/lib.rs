//! Terminal input for memory-match.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! keyboard cursor over the tile grid. Mouse hit-testing lives with the view,
//! since it depends on layout.

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, should_quit};
