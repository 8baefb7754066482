//! Errors reported by a communicator
//!
//! `ApiError` is stored verbatim in gallery state, so it is a plain value:
//! cloneable and comparable, with the underlying library errors flattened to
//! their messages.

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected type.
    #[error("invalid response payload: {0}")]
    Decode(String),

    /// The base URL or an endpoint could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
