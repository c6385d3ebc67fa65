//! Process-wide player settings.

use serde::{Deserialize, Serialize};

/// Durable settings: best time, sound and display mode.
///
/// Missing fields in a stored record fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub best_time_seconds: Option<u32>,
    pub sound_enabled: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            best_time_seconds: None,
            sound_enabled: true,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Record a completed session's time. Returns true when it is a new best,
    /// i.e. there was no best yet or `elapsed_seconds` is strictly lower.
    pub fn record_completion(&mut self, elapsed_seconds: u32) -> bool {
        match self.best_time_seconds {
            Some(best) if elapsed_seconds >= best => false,
            _ => {
                self.best_time_seconds = Some(elapsed_seconds);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.best_time_seconds, None);
        assert!(s.sound_enabled);
        assert!(!s.dark_mode);
    }

    #[test]
    fn test_best_time_sequence() {
        let mut s = Settings::default();
        assert!(s.record_completion(12));
        assert_eq!(s.best_time_seconds, Some(12));

        assert!(!s.record_completion(15));
        assert_eq!(s.best_time_seconds, Some(12));

        // Ties are not an improvement.
        assert!(!s.record_completion(12));

        assert!(s.record_completion(9));
        assert_eq!(s.best_time_seconds, Some(9));
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let s: Settings = serde_json::from_str(r#"{"dark_mode":true}"#).unwrap();
        assert_eq!(
            s,
            Settings {
                best_time_seconds: None,
                sound_enabled: true,
                dark_mode: true,
            }
        );
    }
}
