//! Error types for the remote data clients.

use thiserror::Error;

/// Result type for collection reads.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for remote writes.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for AI text generation.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur while fetching a collection.
///
/// On any of these the caller must treat the collection as empty and
/// surface the error; a collection is never left partially populated.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The response body was not valid JSON.
    #[error("response body is not valid JSON (excerpt: {excerpt})")]
    Parse { excerpt: String },

    /// The endpoint answered with a recognized error envelope.
    #[error("server reported an error: {0}")]
    ServerReported(String),

    /// The body was valid JSON but matched no known shape.
    #[error("unrecognized response format")]
    UnrecognizedFormat,

    /// Non-success status with no recognized body shape.
    #[error("http error: status {status}")]
    Http { status: u16 },

    /// Transport-level failure before any body could be read.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors that can occur while submitting a write.
///
/// A failed write performs no local mutation.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The endpoint rejected the submission.
    #[error("submission rejected: {message}")]
    Rejected { message: String },

    /// Non-success status with no readable rejection message.
    #[error("http error: status {status}")]
    Http { status: u16 },

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur while generating AI text.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key configured; checked before any network call.
    #[error("no API key is configured")]
    MissingApiKey,

    /// The API answered with an error status.
    #[error("generation failed: {0}")]
    Api(String),

    /// The API answered successfully but produced no text.
    #[error("empty response from the model")]
    EmptyResponse,

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}
