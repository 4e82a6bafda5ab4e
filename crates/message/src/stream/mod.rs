//! The seekable in-memory byte stream backing message bodies.
//!
//! This module is the core of the crate. It provides:
//!
//! - [`StreamBuffer`]: an owned, mutable, cursor-addressable byte buffer
//!   satisfying the read/write/seek/tell/eof contract, with substring
//!   search and marker-relative splicing on top
//! - [`Mode`]: the closed set of access modes, with capability predicates
//!   derived once at construction
//! - [`StreamError`]: the error conditions stream operations can surface
//!
//! A `StreamBuffer` is synchronous and exclusively owned: every operation
//! completes before returning and no instance is ever shared, so the module
//! needs no synchronization primitives. See [`StreamBuffer`] for the
//! operation contracts and the cursor invariants they preserve.

mod buffer;
pub use buffer::StreamBuffer;

mod mode;
pub use mode::Mode;
pub use mode::UnknownModeToken;

mod error;
pub use error::StreamError;
