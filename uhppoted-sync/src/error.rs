//! Error types for the commit and fetch layer.

use thiserror::Error;
use uhppoted_types::Oid;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced by fetch and commit operations.
///
/// None of these are fatal: a failed commit leaves its edits `modified`
/// and the `Display` text is what the user is warned with.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// A commit request never produced a response.
    #[error("Error committing record (ERR:{0})")]
    Commit(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// The operation named an entity the cache does not hold.
    #[error("unknown entity: {0}")]
    UnknownEntity(Oid),
}

impl From<toml::de::Error> for SyncError {
    fn from(e: toml::de::Error) -> Self {
        SyncError::Config(e.to_string())
    }
}
