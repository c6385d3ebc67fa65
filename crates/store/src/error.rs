use thiserror::Error;

/// Failure talking to the key-value store.
///
/// Never fatal: the persistence layer logs these and falls back to in-memory
/// state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store i/o failed for {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode {key:?}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed value stored under {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("background writer has stopped")]
    WriterClosed,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    pub fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}
