use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("guide index {index} is out of range for {len} guides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("malformed persisted guide entry: {reason}")]
    MalformedPersistedEntry { reason: String },

    #[error("settings file {} could not be accessed", .path.display())]
    PersistenceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {} is not a valid settings document", .path.display())]
    MalformedSettingsDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[source] serde_json::Error),
}

impl GuideError {
    pub fn malformed_entry(reason: impl Into<String>) -> Self {
        Self::MalformedPersistedEntry {
            reason: reason.into(),
        }
    }
}
