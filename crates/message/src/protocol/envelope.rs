//! Generic HTTP message value object.
//!
//! [`MessageEnvelope`] owns a protocol version, a header bag and a body
//! satisfying the [`Body`] contract. It never inspects or mutates the
//! body's internals; all body I/O is delegated through the trait, so any
//! conforming stream can back a message, with [`StreamBuffer`] as the
//! default.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Version};

use crate::stream::{Mode, StreamBuffer};

use super::{Body, MessageError};

/// An HTTP message: protocol version, headers and a body.
///
/// The generic parameter `B` is the body type (defaults to
/// [`StreamBuffer`]). Headers and version use the `http` crate vocabulary
/// types; header insertion through [`insert_header`](Self::insert_header)
/// validates names and values and reports bad input as
/// [`MessageError::InvalidHeader`].
#[derive(Debug)]
pub struct MessageEnvelope<B = StreamBuffer> {
    version: Version,
    headers: HeaderMap,
    body: B,
}

impl<B: Body> MessageEnvelope<B> {
    /// Creates a message around `body` with protocol version HTTP/1.1 and
    /// no headers.
    pub fn new(body: B) -> Self {
        Self { version: Version::HTTP_11, headers: HeaderMap::new(), body }
    }

    /// The message's protocol version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Replaces the protocol version in place.
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// Returns the message with the given protocol version.
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// A reference to the message's headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A mutable reference to the message's headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Looks up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Inserts a header, validating name and value.
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidHeader`] when the name or value does not
    /// parse as legal header text.
    pub fn insert_header(&mut self, name: &str, value: &str) -> Result<(), MessageError> {
        let name = name.parse::<HeaderName>().map_err(MessageError::invalid_header)?;
        let value = value.parse::<HeaderValue>().map_err(MessageError::invalid_header)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Returns the message with the given header inserted.
    ///
    /// # Errors
    ///
    /// Same as [`insert_header`](Self::insert_header).
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, MessageError> {
        self.insert_header(name, value)?;
        Ok(self)
    }

    /// A reference to the body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// A mutable reference to the body.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Replaces the body in place.
    pub fn set_body(&mut self, body: B) {
        self.body = body;
    }

    /// Attaches a different body, converting into a `MessageEnvelope<B2>`.
    /// Version and headers carry over unchanged.
    pub fn with_body<B2: Body>(self, body: B2) -> MessageEnvelope<B2> {
        MessageEnvelope { version: self.version, headers: self.headers, body }
    }

    /// Consumes the message and returns the body.
    pub fn into_body(self) -> B {
        self.body
    }

    /// A full-content snapshot of the body, independent of its position.
    pub fn body_bytes(&self) -> Bytes {
        self.body.to_bytes()
    }
}

impl Default for MessageEnvelope<StreamBuffer> {
    /// An HTTP/1.1 message with no headers and an empty read+write body.
    fn default() -> Self {
        Self::new(StreamBuffer::default())
    }
}

/// Wraps string content in a read+write [`StreamBuffer`] body.
impl From<&str> for MessageEnvelope<StreamBuffer> {
    fn from(content: &str) -> Self {
        Self::new(StreamBuffer::new(content, Mode::ReadWrite))
    }
}

/// Wraps string content in a read+write [`StreamBuffer`] body.
impl From<String> for MessageEnvelope<StreamBuffer> {
    fn from(content: String) -> Self {
        Self::new(StreamBuffer::new(content, Mode::ReadWrite))
    }
}

/// Wraps raw bytes in a read+write [`StreamBuffer`] body.
impl From<Bytes> for MessageEnvelope<StreamBuffer> {
    fn from(content: Bytes) -> Self {
        Self::new(StreamBuffer::new(content, Mode::ReadWrite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_http_11_and_empty_body() {
        let message = MessageEnvelope::default();
        assert_eq!(message.version(), Version::HTTP_11);
        assert!(message.headers().is_empty());
        assert!(message.body().is_empty());
    }

    #[test]
    fn from_str_wraps_content_in_a_stream() {
        let message = MessageEnvelope::from("hello");
        assert_eq!(&message.body_bytes()[..], b"hello");
        assert!(message.body().is_readable());
        assert!(message.body().is_writable());
    }

    #[test]
    fn header_insertion_validates() {
        let mut message = MessageEnvelope::from("x");
        message.insert_header("Content-Type", "text/html").unwrap();
        assert_eq!(message.header("content-type").unwrap(), "text/html");

        let err = message.insert_header("bad header", "x").unwrap_err();
        assert!(matches!(err, MessageError::InvalidHeader { .. }));

        let err = message.insert_header("x-ok", "bad\nvalue").unwrap_err();
        assert!(matches!(err, MessageError::InvalidHeader { .. }));
    }

    #[test]
    fn with_header_chains() {
        let message = MessageEnvelope::from("x")
            .with_header("content-type", "text/plain")
            .unwrap()
            .with_header("content-length", "1")
            .unwrap();
        assert_eq!(message.headers().len(), 2);
    }

    #[test]
    fn body_io_goes_through_the_contract() {
        let mut message = MessageEnvelope::from("test the StringStream");
        let first = message.body_mut().read(4).unwrap();
        assert_eq!(&first[..], b"test");
        assert!(!message.body().eof());

        // a snapshot is position independent
        assert_eq!(&message.body_bytes()[..], b"test the StringStream");
    }

    #[test]
    fn with_body_swaps_the_stream_and_keeps_headers() {
        let message = MessageEnvelope::from("old")
            .with_header("x-keep", "1")
            .unwrap()
            .with_body(StreamBuffer::new("new", Mode::ReadOnly));
        assert_eq!(&message.body_bytes()[..], b"new");
        assert!(message.header("x-keep").is_some());
        assert!(!message.body().is_writable());
    }

    #[test]
    fn with_version_round_trips() {
        let message = MessageEnvelope::from("x").with_version(Version::HTTP_10);
        assert_eq!(message.version(), Version::HTTP_10);
    }
}
