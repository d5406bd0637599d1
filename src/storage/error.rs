//! Storage errors.

use std::path::PathBuf;

/// Error returned when reading or writing the persisted theme fails.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage exists in this environment (e.g. disabled by the browser).
    #[error("theme storage is unavailable")]
    Unavailable,

    /// The backend refused the operation (quota exceeded, read-only, ...).
    #[error("storage rejected write to '{key}': {reason}")]
    Rejected { key: String, reason: String },

    #[error("failed to access theme store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme store {} is not a JSON object of strings: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
