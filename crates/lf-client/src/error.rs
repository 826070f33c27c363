//! Client error types.

use lf_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to a Labfolder server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection, timeout, body decoding).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Login answered 401.
    #[error("username or password incorrect")]
    InvalidCredentials,

    /// Login answered 400.
    #[error("incorrect login input: {0}")]
    BadRequest(String),

    /// Login answered 403.
    #[error("login blocked by the server")]
    LoginBlocked,

    /// The call needs a bearer token and the client has none.
    #[error("not logged in")]
    NotAuthenticated,

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A create or update was answered with an unexpected status.
    #[error("{kind} could not be {action} Labfolder ({status}): {message}")]
    Rejected {
        /// Record kind, e.g. `TEXT` or `ENTRY`.
        kind: String,
        /// `written to` or `updated on`.
        action: &'static str,
        status: u16,
        message: String,
    },

    /// The server returned 429 Too Many Requests.
    #[error("rate limited; retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A success response did not carry what the call needs.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Local validation or conversion failed before or after a request.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The server URL cannot be used.
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Core(CoreError::Parse(error))
    }
}
