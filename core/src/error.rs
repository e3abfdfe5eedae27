//! Error types for the user API client.
//!
//! `NotFound` gets a dedicated variant because the API answers 404 when a
//! mutation targets an id that no longer exists, and callers treat that
//! differently from an arbitrary failure. Every other non-success status
//! lands in `Unexpected` with the raw status and body for debugging.

use thiserror::Error;

/// Errors surfaced by `UserApi` parsing and the app state machine.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: no record with the requested id.
    #[error("user not found")]
    NotFound,

    /// The server returned a non-success status other than 404.
    #[error("unexpected HTTP {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request: {0}")]
    Encode(String),
}
