//! Error type shared by every REST helper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{operation} failed: {status}")]
    Status { operation: &'static str, status: u16 },
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// The body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Browser-only call reached from a server-side render.
    #[error("not available on server")]
    Unavailable,
}
