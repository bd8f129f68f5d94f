//! Error types for the simulator client.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Transport and decoding failures, kept distinct so callers can log them
/// precisely even though the dashboard surfaces them identically.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached the service or the response never arrived.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("simulator returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The service answered 200 but the body was not the expected shape.
    #[error("could not decode simulator response: {detail}")]
    Decode { detail: String },
}
