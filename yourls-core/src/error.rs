//! Global error types for the YOURLS client.
//!
//! All error categories across the client are unified into a single
//! `YourlsError` enum. Nothing is retried or swallowed internally; every
//! failure propagates to the immediate caller.

use thiserror::Error;

/// Convenience type alias for Results using YourlsError.
pub type YourlsResult<T> = Result<T, YourlsError>;

/// Unified error type covering all failure categories in the client.
#[derive(Error, Debug)]
pub enum YourlsError {
    // -- Argument errors --
    /// A required argument is missing, empty, or invalid. Raised before any
    /// network I/O happens.
    #[error("missing or invalid parameter: {0}")]
    Param(String),

    // -- Network errors --
    /// The response body was not parseable JSON, or (delete only) the HTTP
    /// status was not 200. Carries the real status code and the endpoint.
    #[error("http error {status} from {endpoint}")]
    Http {
        /// HTTP status code of the failed exchange.
        status: u16,
        /// The API endpoint URL the request was sent to.
        endpoint: String,
    },

    /// The request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    // -- Service errors --
    /// The server returned a well-formed JSON error envelope.
    #[error("api error (code {code}): {message}")]
    Api {
        /// Error message from the server, verbatim.
        message: String,
        /// Error code from the server.
        code: String,
    },

    /// The URL passed to shorten or update is already in the database.
    #[error("url already shortened: {0}")]
    UrlAlreadyExists(String),

    /// The credential probe at construction time was rejected.
    #[error("authentication failed (status {status}): {message}")]
    AuthFailed {
        /// HTTP status of the rejected probe (always 403 in practice).
        status: u16,
        /// Human-readable description.
        message: String,
    },

    // -- Decoding errors --
    /// A success envelope was missing an expected payload field.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for YourlsError {
    fn from(e: serde_json::Error) -> Self {
        YourlsError::Serialization(e.to_string())
    }
}
