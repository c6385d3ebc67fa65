//! Persistence module - settings and saved sessions in a key-value store
//!
//! The game only ever talks to storage through [`SessionPersistence`], which
//! encodes records as JSON and swallows every [`PersistenceError`] after
//! logging it. The store behind it is pluggable:
//!
//! - [`MemoryStore`]: shared in-process map (tests, headless runs)
//! - [`FileStore`]: one JSON file per key under a data directory
//! - [`BackgroundStore`]: wraps another store and applies writes on a worker
//!   thread so a slow disk never stalls the game loop
//!
//! # Example
//!
//! ```
//! use memory_match_store::{MemoryStore, SessionPersistence};
//!
//! let store = MemoryStore::new();
//! let mut persistence = SessionPersistence::new(store.clone());
//!
//! let mut settings = persistence.load_settings();
//! settings.dark_mode = true;
//! persistence.save_settings(&settings);
//!
//! assert!(SessionPersistence::new(store).load_settings().dark_mode);
//! ```

pub mod background;
pub mod error;
pub mod file;
pub mod kv;
pub mod persistence;

pub use background::BackgroundStore;
pub use error::PersistenceError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use persistence::{SessionPersistence, SESSION_KEY, SETTINGS_KEY};
