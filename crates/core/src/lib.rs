//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the memory-match rules: deck construction, turn
//! resolution, the session clock, settings and persistable snapshots. It has
//! **no dependencies** on terminals, storage or wall-clock time, making it:
//!
//! - **Deterministic**: A seeded [`DeckRng`] deals the same deck every time
//! - **Testable**: Time is fed in explicitly through [`Session::tick`]
//! - **Portable**: Any view layer can drive a [`Session`]
//!
//! # Module Structure
//!
//! - [`deck`]: Deck builder, tiles and tile identity allocation
//! - [`selection`]: The per-turn state machine (`Idle -> OneChosen -> ...`)
//! - [`clock`]: Whole-second session clock
//! - [`session`]: One game, from deal to completion
//! - [`settings`]: Best time, sound and display mode
//! - [`snapshot`]: Persistable session records and their validation
//! - [`view`]: Plain-data view model for renderers
//!
//! # Example
//!
//! ```
//! use memory_match_core::{ChooseOutcome, DeckRng, Session, TileIdAllocator};
//! use memory_match_core::types::{Difficulty, Theme};
//!
//! let mut rng = DeckRng::seeded(12345);
//! let mut ids = TileIdAllocator::new();
//! let mut session = Session::new(Theme::Fruits, Difficulty::Easy, 1, &mut rng, &mut ids).unwrap();
//!
//! let first = session.deck().tiles()[0];
//! let twin = session
//!     .deck()
//!     .tiles()
//!     .iter()
//!     .find(|t| t.symbol == first.symbol && t.id != first.id)
//!     .copied()
//!     .unwrap();
//!
//! assert_eq!(session.choose_tile(first.id), ChooseOutcome::FirstChosen);
//! assert_eq!(session.choose_tile(twin.id), ChooseOutcome::Matched { completed: false });
//! assert_eq!(session.turn_count(), 1);
//! ```

pub mod clock;
pub mod deck;
pub mod error;
pub mod rng;
pub mod selection;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod view;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use clock::SessionClock;
pub use deck::{build_deck, Deck, Tile, TileIdAllocator};
pub use error::{ConfigurationError, SnapshotError, StaleResolution};
pub use rng::DeckRng;
pub use selection::{IgnoreReason, MatchResolver, TurnPhase};
pub use session::{ChooseOutcome, ResolutionToken, Session};
pub use settings::Settings;
pub use snapshot::{SessionSnapshot, TileSnapshot};
pub use view::{SessionView, TileView};
