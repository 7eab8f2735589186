//! Error types for content loading and session persistence
//!
//! [`FetchError`] is the only failure a user ever sees: it covers every way a
//! content document can fail to arrive (missing file, non-success HTTP
//! status, transport error, undecodable JSON). Viewers log it and replace the
//! domain title with [`ERROR_TITLE`].
//!
//! [`StoreError`] covers the last-viewed state file. It is never fatal.

use std::path::PathBuf;

/// Title shown in place of a domain's content title when loading fails
pub const ERROR_TITLE: &str = "Error loading";

/// A content document could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Reading from the content directory failed
    #[error("Failed to load {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    /// The request never produced a response
    #[error("Failed to load {path}: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON shape we expected
    #[error("Failed to load {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The content root looked like a URL but could not be used as one
    #[error("Invalid content base URL '{base}'")]
    InvalidBase { base: String },

    /// The HTTP client could not be set up (TLS backend, resolver)
    #[error("Could not set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// The relative path that failed, when there is one
    pub fn path(&self) -> Option<&str> {
        match self {
            FetchError::Io { path, .. }
            | FetchError::Status { path, .. }
            | FetchError::Http { path, .. }
            | FetchError::Decode { path, .. } => Some(path),
            FetchError::InvalidBase { .. } | FetchError::Client(_) => None,
        }
    }
}

/// The session state file could not be read or written
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read session state from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("Failed to write session state to {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("No location for session state: {0}")]
    Location(#[source] confy::ConfyError),
}
