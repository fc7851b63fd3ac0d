//! Error types for the yadict crate.

use reqwest::StatusCode;
use thiserror::Error;

/// The error type for dictionary operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers transport failures (DNS, connect, TLS) as well as response
    /// bodies that fail to deserialize.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The dictionary service rejected the request.
    ///
    /// Carries the HTTP status code and the service's documented message
    /// for it, see [`ApiError::from_status`].
    #[error(transparent)]
    Api(#[from] ApiError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error reported by the dictionary service through an HTTP status code.
///
/// The service documents a closed set of failure statuses; anything outside
/// that set is kept with a generic message so the code is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// The HTTP status code the service answered with.
    pub code: u16,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ApiError {
    /// Map an HTTP status to the service's documented error message.
    pub fn from_status(status: StatusCode) -> Self {
        let code = status.as_u16();
        let message = match code {
            400 => "Bad request".to_string(),
            401 => "Invalid API key".to_string(),
            402 => "API key has been blocked".to_string(),
            403 => "Exceeded the daily limit of requests".to_string(),
            413 => "Text size exceeded".to_string(),
            501 => "Translation direction is not supported".to_string(),
            _ => format!(
                "Unknown error {}: {}",
                code,
                status.canonical_reason().unwrap_or("")
            ),
        };
        Self { code, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_statuses_map_to_fixed_messages() {
        let table = [
            (400, "Bad request"),
            (401, "Invalid API key"),
            (402, "API key has been blocked"),
            (403, "Exceeded the daily limit of requests"),
            (413, "Text size exceeded"),
            (501, "Translation direction is not supported"),
        ];
        for (code, message) in table {
            let error = ApiError::from_status(StatusCode::from_u16(code).unwrap());
            assert_eq!(error.code, code);
            assert_eq!(error.message, message);
        }
    }

    #[test]
    fn undocumented_status_keeps_code_and_reason() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code, 500);
        assert_eq!(error.message, "Unknown error 500: Internal Server Error");
    }

    #[test]
    fn display_is_the_message() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), "Invalid API key");
    }
}
