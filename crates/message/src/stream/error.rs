use thiserror::Error;

use super::Mode;

/// Errors surfaced by stream operations.
///
/// Capability violations are programming errors on the caller's side rather
/// than recoverable byte-level conditions, but they are still reported as
/// values so an embedding can surface them. Out-of-range seeks are *not*
/// errors: the cursor is clamped to the buffer bounds (see
/// [`StreamBuffer::seek`](super::StreamBuffer::seek)).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("read denied: stream is {mode}")]
    NotReadable { mode: Mode },

    #[error("write denied: stream is {mode}")]
    NotWritable { mode: Mode },

    #[error("marker not found in buffer: {marker:?}")]
    MarkerNotFound { marker: String },
}

impl StreamError {
    pub fn not_readable(mode: Mode) -> Self {
        Self::NotReadable { mode }
    }

    pub fn not_writable(mode: Mode) -> Self {
        Self::NotWritable { mode }
    }

    pub fn marker_not_found(marker: &[u8]) -> Self {
        Self::MarkerNotFound { marker: String::from_utf8_lossy(marker).into_owned() }
    }

    /// Returns true if the error is a capability violation (a read on a
    /// non-readable stream or a write on a non-writable one).
    #[inline]
    pub fn is_capability_denied(&self) -> bool {
        matches!(self, StreamError::NotReadable { .. } | StreamError::NotWritable { .. })
    }
}
