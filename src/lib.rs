//! Memory Match (workspace facade crate).
//!
//! Re-exports the member crates under short names and adds the pieces only the
//! binary needs: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_input as input;
pub use memory_match_store as store;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub use config::AppConfig;
