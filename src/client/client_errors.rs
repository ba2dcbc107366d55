use thiserror::Error;

/// Network and backend failures crossing the HTTP boundary. Never retried
/// at this layer; callers decide how to surface them.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
