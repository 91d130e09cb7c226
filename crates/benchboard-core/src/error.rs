//! Error types for the REST boundary.

use thiserror::Error;

/// Failure of a single request against the experiments API.
///
/// Both variants are treated uniformly as "the request failed" by the
/// store and the creation form: the dashboard is advisory, so failures are
/// logged and absorbed rather than surfaced as an error state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connection refused, aborted, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
}
