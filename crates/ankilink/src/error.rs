//! Error types for the ankilink crate.
//!
//! The most common errors:
//!
//! - [`Error::ConnectionRefused`]: Anki is not running or the add-on is not
//!   installed. An expected condition: report it and move on.
//! - [`Error::AnkiConnect`]: the action itself failed (duplicate note,
//!   unknown deck, and so on), with the endpoint's message.

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Also covers non-2xx responses from the endpoint.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection refused - Anki is likely not running.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,

    /// The endpoint returned an error message for the action.
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// Response carried neither a result nor an error.
    ///
    /// The protocol guarantees at least one of the two; this indicates a
    /// misbehaving endpoint and is never treated as an empty success.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// Permission was not granted.
    ///
    /// Carries the permission string the endpoint answered with.
    #[error("AnkiConnect permission not granted: {0:?}")]
    PermissionDenied(String),

    /// The endpoint speaks an API version older than this client.
    #[error("AnkiConnect version {0} is too old, version 6 or newer is required")]
    UnsupportedVersion(u8),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
