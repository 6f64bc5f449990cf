//! Error types for the raudio client

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by [`TrackClient`](crate::TrackClient) operations and
/// configuration loading.
///
/// Non-success HTTP statuses are not represented here: the client logs them
/// and maps them to sentinel return values (`None` / `false`) instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure (connection refused, DNS failure, interrupted
    /// body read). Always propagates to the caller.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON or lacked the required `title` field.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response body decoded to a song with an empty title.
    #[error("Decoded song has an empty title")]
    EmptyTitle,

    /// Operation has a documented contract but no implementation yet.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}
