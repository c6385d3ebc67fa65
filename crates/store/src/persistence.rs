//! Session persistence - settings and in-progress session records.
//!
//! Both records are JSON strings under fixed keys. Every operation here is
//! best-effort: failures are logged and swallowed, and loads fall back to
//! defaults (or "nothing saved") when the stored value is absent or malformed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::kv::KeyValueStore;
use memory_match_core::{SessionSnapshot, Settings};

pub const SETTINGS_KEY: &str = "memory-match.settings";
pub const SESSION_KEY: &str = "memory-match.session";

pub struct SessionPersistence {
    store: Box<dyn KeyValueStore>,
}

impl SessionPersistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Settings stored at startup, or defaults.
    pub fn load_settings(&self) -> Settings {
        match self.read::<Settings>(SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!("no stored settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                warn!(error = %e, "could not load settings, using defaults");
                Settings::default()
            }
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) {
        if let Err(e) = self.write(SETTINGS_KEY, settings) {
            warn!(error = %e, "could not save settings");
        }
    }

    /// The saved session record, if one decodes. Deck-level validation is left
    /// to `Session::restore`.
    pub fn load_snapshot(&self) -> Option<SessionSnapshot> {
        match self.read::<SessionSnapshot>(SESSION_KEY) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "could not load saved session");
                None
            }
        }
    }

    pub fn save_snapshot(&mut self, snapshot: &SessionSnapshot) {
        if let Err(e) = self.write(SESSION_KEY, snapshot) {
            warn!(error = %e, "could not save session");
        }
    }

    pub fn clear_snapshot(&mut self) {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            warn!(error = %e, "could not clear saved session");
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Decode {
                key: key.to_string(),
                source,
            })
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(value).map_err(|source| PersistenceError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Unavailable("broken".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("broken".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("broken".into()))
        }
    }

    #[test]
    fn test_missing_settings_are_defaults() {
        let p = SessionPersistence::new(MemoryStore::new());
        assert_eq!(p.load_settings(), Settings::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let store = MemoryStore::new();
        let mut p = SessionPersistence::new(store.clone());
        let settings = Settings {
            best_time_seconds: Some(42),
            sound_enabled: false,
            dark_mode: true,
        };
        p.save_settings(&settings);

        let reopened = SessionPersistence::new(store);
        assert_eq!(reopened.load_settings(), settings);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "not json at all").unwrap();
        let p = SessionPersistence::new(store);
        assert_eq!(p.load_settings(), Settings::default());
    }

    #[test]
    fn test_snapshot_save_and_clear() {
        let store = MemoryStore::new();
        let mut p = SessionPersistence::new(store.clone());
        assert_eq!(p.load_snapshot(), None);

        let snap = SessionSnapshot {
            theme: "food".into(),
            difficulty: "easy".into(),
            turn_count: 4,
            elapsed_seconds: 30,
            ..SessionSnapshot::default()
        };
        p.save_snapshot(&snap);
        assert_eq!(p.load_snapshot(), Some(snap));

        p.clear_snapshot();
        assert_eq!(p.load_snapshot(), None);
        assert!(!store.contains(SESSION_KEY));
    }

    #[test]
    fn test_malformed_snapshot_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, r#"{"version":1}"#).unwrap();
        let p = SessionPersistence::new(store);
        assert_eq!(p.load_snapshot(), None);
    }

    #[test]
    fn test_broken_store_never_panics() {
        let mut p = SessionPersistence::new(BrokenStore);
        assert_eq!(p.load_settings(), Settings::default());
        assert_eq!(p.load_snapshot(), None);
        p.save_settings(&Settings::default());
        p.save_snapshot(&SessionSnapshot::default());
        p.clear_snapshot();
    }
}
