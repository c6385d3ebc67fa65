//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::core::ConfigurationError;
use crate::engine::EngineConfig;
use crate::types::{Difficulty, Theme, DEFAULT_DIFFICULTY, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_THEME};

const APP_DIR: &str = "memory-match";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub theme: Theme,
    pub difficulty: Difficulty,
    pub mismatch_delay_ms: u32,
    pub restore: bool,
    pub data_dir: PathBuf,
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME,
            difficulty: DEFAULT_DIFFICULTY,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            restore: true,
            data_dir: PathBuf::from(".").join(format!(".{APP_DIR}")),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from `MEMORY_MATCH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let theme = match var("MEMORY_MATCH_THEME") {
            Some(s) => ConfigurationError::parse_theme(&s)?,
            None => defaults.theme,
        };
        let difficulty = match var("MEMORY_MATCH_DIFFICULTY") {
            Some(s) => ConfigurationError::parse_difficulty(&s)?,
            None => defaults.difficulty,
        };
        let mismatch_delay_ms = var("MEMORY_MATCH_MISMATCH_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.mismatch_delay_ms);
        let restore = var("MEMORY_MATCH_RESTORE")
            .map(|s| !matches!(s.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.restore);

        let data_dir = var("MEMORY_MATCH_DATA_DIR")
            .map(PathBuf::from)
            .or_else(|| var("XDG_DATA_HOME").map(|d| PathBuf::from(d).join(APP_DIR)))
            .or_else(|| {
                var("HOME").map(|h| PathBuf::from(h).join(".local").join("share").join(APP_DIR))
            })
            .unwrap_or(defaults.data_dir);
        let log_path = var("MEMORY_MATCH_LOG_PATH").map(PathBuf::from);
        let log_filter = var("MEMORY_MATCH_LOG").unwrap_or(defaults.log_filter);

        Ok(Self {
            theme,
            difficulty,
            mismatch_delay_ms,
            restore,
            data_dir,
            log_path,
            log_filter,
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            theme: self.theme,
            difficulty: self.difficulty,
            mismatch_delay_ms: self.mismatch_delay_ms,
            restore: self.restore,
            seed: None,
        }
    }
}
