//! HTTP response value object.
//!
//! [`Response`] adds a status code and reason phrase to a
//! [`MessageEnvelope`]. The status code is validated against the `1xx..5xx`
//! range at every point it can change; the reason phrase defaults to the
//! entry in the [`status`](super::status) table (empty when the table has
//! none) and can be overridden explicitly.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Version};

use crate::stream::StreamBuffer;

use super::envelope::MessageEnvelope;
use super::{status, Body, MessageError};

/// An HTTP response: status line data over a message envelope.
///
/// The generic parameter `B` is the body type (defaults to
/// [`StreamBuffer`]). All message-level accessors delegate to the inner
/// envelope; the response itself only owns the status code and reason
/// phrase.
#[derive(Debug)]
pub struct Response<B = StreamBuffer> {
    message: MessageEnvelope<B>,
    status_code: u16,
    reason_phrase: String,
}

impl Response<StreamBuffer> {
    /// Creates a response with the given status code, an empty read+write
    /// body, no headers and protocol version HTTP/1.1.
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidStatusCode`] when `status_code` lies outside
    /// the `1xx..5xx` range.
    pub fn new(status_code: u16) -> Result<Self, MessageError> {
        Self::from_envelope(MessageEnvelope::default(), status_code)
    }
}

impl Default for Response<StreamBuffer> {
    /// `200 OK` with an empty body.
    fn default() -> Self {
        Self {
            message: MessageEnvelope::default(),
            status_code: 200,
            reason_phrase: default_phrase(200),
        }
    }
}

impl<B: Body> Response<B> {
    /// Builds a response around an existing envelope.
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidStatusCode`] when `status_code` lies outside
    /// the `1xx..5xx` range.
    pub fn from_envelope(message: MessageEnvelope<B>, status_code: u16) -> Result<Self, MessageError> {
        status::validate(status_code)?;
        Ok(Self { message, status_code, reason_phrase: default_phrase(status_code) })
    }

    /// The response's status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The response's reason phrase. Empty when the status code has no
    /// default phrase and none was set explicitly.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Returns the response with a new status code and that code's default
    /// reason phrase.
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidStatusCode`] when `status_code` lies outside
    /// the `1xx..5xx` range.
    pub fn with_status(mut self, status_code: u16) -> Result<Self, MessageError> {
        status::validate(status_code)?;
        self.status_code = status_code;
        self.reason_phrase = default_phrase(status_code);
        Ok(self)
    }

    /// Returns the response with an explicit reason phrase, overriding the
    /// table default.
    pub fn with_reason(mut self, phrase: impl Into<String>) -> Self {
        self.reason_phrase = phrase.into();
        self
    }

    /// A reference to the underlying message envelope.
    pub fn message(&self) -> &MessageEnvelope<B> {
        &self.message
    }

    /// A mutable reference to the underlying message envelope.
    pub fn message_mut(&mut self) -> &mut MessageEnvelope<B> {
        &mut self.message
    }

    /// The response's protocol version.
    pub fn version(&self) -> Version {
        self.message.version()
    }

    /// Returns the response with the given protocol version.
    pub fn with_version(mut self, version: Version) -> Self {
        self.message.set_version(version);
        self
    }

    /// A reference to the response's headers.
    pub fn headers(&self) -> &HeaderMap {
        self.message.headers()
    }

    /// Looks up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.message.header(name)
    }

    /// Returns the response with the given header inserted.
    ///
    /// # Errors
    ///
    /// [`MessageError::InvalidHeader`] when the name or value does not
    /// parse as legal header text.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, MessageError> {
        self.message.insert_header(name, value)?;
        Ok(self)
    }

    /// A reference to the body.
    pub fn body(&self) -> &B {
        self.message.body()
    }

    /// A mutable reference to the body.
    pub fn body_mut(&mut self) -> &mut B {
        self.message.body_mut()
    }

    /// Attaches a different body, converting into a `Response<B2>`.
    pub fn with_body<B2: Body>(self, body: B2) -> Response<B2> {
        Response {
            message: self.message.with_body(body),
            status_code: self.status_code,
            reason_phrase: self.reason_phrase,
        }
    }

    /// Consumes the response and returns the body.
    pub fn into_body(self) -> B {
        self.message.into_body()
    }

    /// A full-content snapshot of the body, independent of its position.
    pub fn body_bytes(&self) -> Bytes {
        self.message.body_bytes()
    }
}

fn default_phrase(status_code: u16) -> String {
    status::reason_phrase(status_code).unwrap_or_default().to_string()
}
