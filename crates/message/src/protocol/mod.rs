//! HTTP message value objects and the body contract they consume.
//!
//! This module provides the protocol-facing half of the crate:
//!
//! - **Body contract** ([`body`]): the narrow [`Body`] trait an envelope
//!   relies on; [`StreamBuffer`](crate::stream::StreamBuffer) implements it
//! - **Message handling** ([`envelope`]): [`MessageEnvelope`], owning
//!   protocol version, headers and a generic body
//! - **Response handling** ([`response`]): [`Response`], adding status code
//!   and reason phrase on top of an envelope
//! - **Status codes** ([`status`]): range validation and the immutable
//!   default reason-phrase table
//! - **Error handling** ([`error`]): [`MessageError`], composing the stream
//!   layer's errors via `#[from]`
//!
//! The layering is strictly one-directional: this module depends on
//! [`stream`](crate::stream), never the other way around. An envelope
//! delegates all body I/O through the [`Body`] trait and never touches
//! buffer internals.

mod body;
pub use body::Body;

mod envelope;
pub use envelope::MessageEnvelope;

mod response;
pub use response::Response;

mod error;
pub use error::MessageError;

pub mod status;
