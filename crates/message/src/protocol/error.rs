use thiserror::Error;

use crate::stream::StreamError;

/// Errors surfaced by the message and response value objects.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("invalid status code {code}: must be a value between 1xx and 5xx")]
    InvalidStatusCode { code: u16 },

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },

    #[error("stream error: {source}")]
    Stream {
        #[from]
        source: StreamError,
    },
}

impl MessageError {
    pub fn invalid_status_code(code: u16) -> Self {
        Self::InvalidStatusCode { code }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }
}
