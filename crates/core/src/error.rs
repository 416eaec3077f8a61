use thiserror::Error;

/// Failure talking to the vector backend.
///
/// Every variant is handled the same way by callers: log it and drop the
/// update. Polling and command sends continue regardless.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    pub fn network(msg: impl Into<String>) -> Self {
        ClientError::Network(msg.into())
    }
}
