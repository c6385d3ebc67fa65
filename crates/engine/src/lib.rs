//! Game session orchestrator for memory-match.
//!
//! [`GameSession`] wraps the pure core session with the parts that touch the
//! outside world:
//!
//! - settings loaded once at start and saved on every change
//! - snapshot saves after each resolved turn and clock tick
//! - the delayed mismatch resolution ([`ResolutionTimer`])
//! - completion effects ([`Celebration`], [`AudioCue`])
//!
//! The caller drives it with [`GameSession::tick`] from its frame loop and
//! drains [`SessionEvent`]s after each step.
//!
//! ```
//! use memory_match_engine::{Effects, EngineConfig, GameSession};
//! use memory_match_store::{MemoryStore, SessionPersistence};
//!
//! let persistence = SessionPersistence::new(MemoryStore::new());
//! let mut game = GameSession::start(EngineConfig::default(), persistence, Effects::none()).unwrap();
//! game.tick(1000);
//! assert_eq!(game.session().elapsed_seconds(), 1);
//! ```

pub mod effects;
pub mod event;
pub mod game;
pub mod timer;

pub use effects::{AudioCue, Celebration, Effects, NoEffect};
pub use event::SessionEvent;
pub use game::{EngineConfig, GameSession};
pub use timer::ResolutionTimer;
