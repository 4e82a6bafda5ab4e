//! The stream contract a message body must satisfy.
//!
//! [`MessageEnvelope`](super::MessageEnvelope) never inspects or mutates
//! buffer internals; it consumes its body purely through this trait. The
//! trait is deliberately narrow — construction from bytes, sequential
//! reads, insertion writes, absolute cursor control, the end-of-content
//! query, capability queries and a full-content snapshot. The search and
//! splice operations of [`StreamBuffer`] are *not* part of the contract:
//! they are a superset used by callers assembling templated content before
//! handing the finished buffer to an envelope.

use bytes::Bytes;

use crate::stream::{StreamBuffer, StreamError};

/// A seekable byte stream usable as a message body.
///
/// Implementations own their backing storage exclusively; every operation
/// is synchronous and completes before returning.
pub trait Body {
    /// Reads up to `n` bytes from the current position, advancing it by the
    /// bytes actually returned. Empty result at end of content.
    fn read(&mut self, n: usize) -> Result<Bytes, StreamError>;

    /// Inserts `data` at the current position, returning the count written.
    fn write(&mut self, data: &[u8]) -> Result<usize, StreamError>;

    /// Moves the position to `position`, clamped to the content bounds.
    fn seek(&mut self, position: usize);

    /// Current position.
    fn tell(&self) -> usize;

    /// Moves the position to the start of the content.
    fn rewind(&mut self);

    /// Moves the position to the end of the content.
    fn end(&mut self);

    /// True if the position sits at the end of the content.
    fn eof(&self) -> bool;

    /// True if this stream permits read operations.
    fn is_readable(&self) -> bool;

    /// True if this stream permits write operations.
    fn is_writable(&self) -> bool;

    /// A snapshot of the entire content, independent of the position.
    fn to_bytes(&self) -> Bytes;

    /// Content length in bytes.
    fn len(&self) -> usize;

    /// True if the content is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Body for StreamBuffer {
    fn read(&mut self, n: usize) -> Result<Bytes, StreamError> {
        StreamBuffer::read(self, n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, StreamError> {
        StreamBuffer::write(self, data)
    }

    fn seek(&mut self, position: usize) {
        StreamBuffer::seek(self, position);
    }

    fn tell(&self) -> usize {
        StreamBuffer::tell(self)
    }

    fn rewind(&mut self) {
        StreamBuffer::rewind(self);
    }

    fn end(&mut self) {
        StreamBuffer::end(self);
    }

    fn eof(&self) -> bool {
        StreamBuffer::eof(self)
    }

    fn is_readable(&self) -> bool {
        StreamBuffer::is_readable(self)
    }

    fn is_writable(&self) -> bool {
        StreamBuffer::is_writable(self)
    }

    fn to_bytes(&self) -> Bytes {
        StreamBuffer::to_bytes(self)
    }

    fn len(&self) -> usize {
        StreamBuffer::len(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::stream::Mode;

    use super::*;

    // exercise StreamBuffer through the trait, the way an envelope does
    fn walk(body: &mut dyn Body) -> Bytes {
        let mut collected = Vec::new();
        while !body.eof() {
            collected.extend_from_slice(&body.read(4).unwrap());
        }
        Bytes::from(collected)
    }

    #[test]
    fn stream_buffer_satisfies_the_contract() {
        let mut body = StreamBuffer::new("test the StringStream", Mode::default());
        assert!(Body::is_readable(&body));
        assert!(Body::is_writable(&body));
        assert_eq!(Body::len(&body), 21);

        let all = walk(&mut body);
        assert_eq!(&all[..], b"test the StringStream");
        assert!(Body::eof(&body));

        Body::rewind(&mut body);
        assert_eq!(Body::tell(&body), 0);
        assert_eq!(&Body::to_bytes(&body)[..], b"test the StringStream");
    }
}
