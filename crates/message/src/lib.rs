//! HTTP message value objects over a seekable in-memory body stream.
//!
//! This crate provides the value-object side of HTTP tooling: a generic
//! [`protocol::MessageEnvelope`] (protocol version + headers + body) and a
//! [`protocol::Response`] (status code + reason phrase) that delegate all
//! body I/O to a small stream contract. The core machinery is
//! [`stream::StreamBuffer`], an owned, cursor-addressable byte buffer that
//! satisfies the read/write/seek/tell/eof contract and additionally
//! supports substring search and marker-relative splicing, so templated
//! output can be assembled in place without re-parsing the whole buffer.
//!
//! There is no server, no client and no wire codec here. The crate is
//! synchronous and allocation-light: every operation is a pure in-memory
//! transformation bounded by the buffer size.
//!
//! # Example
//!
//! ```
//! use micro_message::protocol::Response;
//! use micro_message::stream::{Mode, StreamBuffer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // assemble a templated document through the stream's splice operations
//! let mut body = StreamBuffer::new("<html><body>{{main}}</body></html>", Mode::ReadWrite);
//! body.prepend("<nav/>", "{{main}}")?;
//! body.postpend("<footer/>", "{{main}}")?;
//!
//! // then hand the finished buffer to a response
//! let response = Response::new(200)?
//!     .with_header("content-type", "text/html")?
//!     .with_body(body);
//!
//! assert_eq!(response.reason_phrase(), "OK");
//! assert_eq!(
//!     &response.body_bytes()[..],
//!     b"<html><body><nav/>{{main}}<footer/></body></html>" as &[u8],
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules with a strictly one-directional
//! dependency:
//!
//! - [`stream`]: the buffer core — [`stream::StreamBuffer`],
//!   [`stream::Mode`] and [`stream::StreamError`]. Has no knowledge of the
//!   protocol layer.
//! - [`protocol`]: the value objects — [`protocol::MessageEnvelope`],
//!   [`protocol::Response`], the [`protocol::Body`] contract they consume,
//!   status code validation and the default reason-phrase table.
//!
//! # Concurrency
//!
//! A [`stream::StreamBuffer`] is single-owner and synchronous: no locking,
//! no suspension points, no shared mutable state. Ownership rules enforce
//! the exclusive-owner model statically.
//!
//! # Limitations
//!
//! - Bodies live entirely in memory; there is no disk spilling and no
//!   support for arbitrarily large buffers
//! - One owner per stream; multi-consumer concurrent access is out of scope
//! - Status line and header *serialization* belong to transport layers and
//!   are not provided here

pub mod protocol;
pub mod stream;

mod utils;
pub(crate) use utils::ensure;
