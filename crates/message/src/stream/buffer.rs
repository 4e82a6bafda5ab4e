//! The in-memory buffer backing message bodies.
//!
//! [`StreamBuffer`] owns a mutable byte sequence, a cursor position and an
//! access [`Mode`]. It satisfies the read/write/seek/tell/eof contract
//! expected of a message body and additionally supports substring search
//! and marker-relative splicing, which callers use to assemble templated
//! output in place (e.g. injecting rendered fragments into placeholder
//! locations) without re-parsing the whole buffer.
//!
//! # Invariants
//!
//! - `0 <= cursor <= buffer.len()` after every operation
//! - [`eof`](StreamBuffer::eof) holds exactly when the cursor sits at the
//!   end of the buffer
//! - capability is checked before every read and before every mutation
//! - reads never change the buffer; only [`write`](StreamBuffer::write) and
//!   the splice operations change its length
//!
//! # Cursor preservation under splicing
//!
//! A splice inserts at an absolute offset computed from the marker, not at
//! the cursor. Any insertion at or before the cursor shifts the cursor
//! right by the inserted length, so the cursor keeps addressing the same
//! original content. This is what allows repeated splicing against a live
//! read position without corrupting subsequent reads.

use std::cmp;
use std::fmt;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace};

use crate::ensure;

use super::{Mode, StreamError};

/// A mutable, cursor-addressable byte buffer with a fixed access mode.
///
/// The buffer is exclusively owned: it is never shared between instances
/// and never reference counted. Writes are *insertions* at the cursor,
/// shifting the bytes at or after the cursor to the right; writing with the
/// cursor at the end of the buffer therefore degenerates to concatenation.
///
/// # Example
///
/// ```
/// use micro_message::stream::{Mode, StreamBuffer};
///
/// let mut stream = StreamBuffer::new("test the StringStream", Mode::default());
/// assert_eq!(&stream.read(3).unwrap()[..], b"tes");
/// assert_eq!(&stream.read(3).unwrap()[..], b"t t");
/// assert_eq!(stream.tell(), 6);
/// assert!(!stream.eof());
/// ```
#[derive(Debug)]
pub struct StreamBuffer {
    buffer: BytesMut,
    cursor: usize,
    mode: Mode,
}

impl StreamBuffer {
    /// Creates a stream over `initial` with the given mode. The cursor
    /// starts at the beginning of the buffer.
    pub fn new(initial: impl AsRef<[u8]>, mode: Mode) -> Self {
        Self { buffer: BytesMut::from(initial.as_ref()), cursor: 0, mode }
    }

    /// The access mode this stream was constructed with.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true if this stream permits read operations.
    #[inline]
    pub fn is_readable(&self) -> bool {
        self.mode.is_readable()
    }

    /// Returns true if this stream permits write operations.
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.mode.is_writable()
    }

    /// Current buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Reads up to `n` bytes starting at the cursor, advancing the cursor
    /// by the number of bytes actually returned.
    ///
    /// Fewer than `n` bytes are returned when fewer remain; a read at the
    /// end of the buffer returns an empty result, not an error.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotReadable`] if the stream mode denies reads.
    pub fn read(&mut self, n: usize) -> Result<Bytes, StreamError> {
        ensure!(self.mode.is_readable(), StreamError::not_readable(self.mode));

        let len = cmp::min(n, self.buffer.len() - self.cursor);
        let bytes = Bytes::copy_from_slice(&self.buffer[self.cursor..self.cursor + len]);
        self.cursor += len;
        Ok(bytes)
    }

    /// Inserts `data` at the cursor, shifting the bytes at or after the
    /// cursor to the right, and advances the cursor past the inserted data.
    /// Returns the number of bytes written.
    ///
    /// With the cursor at the end of the buffer this is plain
    /// concatenation.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotWritable`] if the stream mode denies writes.
    pub fn write(&mut self, data: impl AsRef<[u8]>) -> Result<usize, StreamError> {
        ensure!(self.mode.is_writable(), StreamError::not_writable(self.mode));

        let data = data.as_ref();
        self.insert(self.cursor, data);
        Ok(data.len())
    }

    /// Moves the cursor to `position`, clamping to `[0, len]`.
    ///
    /// Clamping rather than rejecting an out-of-range position is a
    /// deliberate leniency; a clamped call is logged at debug level.
    pub fn seek(&mut self, position: usize) {
        let clamped = cmp::min(position, self.buffer.len());
        if clamped != position {
            debug!(position, len = self.buffer.len(), "seek past end of buffer, clamping");
        }
        self.cursor = clamped;
    }

    /// Current cursor position.
    #[inline]
    pub fn tell(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to the start of the buffer.
    #[inline]
    pub fn rewind(&mut self) {
        self.seek(0);
    }

    /// Moves the cursor to the end of the buffer.
    #[inline]
    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Returns true if the cursor sits at the end of the buffer and no
    /// bytes remain to read.
    #[inline]
    pub fn eof(&self) -> bool {
        self.cursor == self.buffer.len()
    }

    /// The bytes from the cursor to the end of the buffer, without moving
    /// the cursor. This is the idiomatic way to inspect what remains after
    /// a sequence of reads and seeks.
    pub fn contents(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buffer[self.cursor..])
    }

    /// A snapshot of the entire buffer, independent of the cursor.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buffer)
    }

    /// Returns the index of the first occurrence of `needle`, relative to
    /// the start of the buffer.
    ///
    /// Search is a pure query: it always scans from the start and neither
    /// consults nor moves the cursor. An empty needle matches at index 0.
    pub fn search(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        find(&self.buffer, needle.as_ref())
    }

    /// Inserts `text` immediately before the first occurrence of `marker`.
    ///
    /// The cursor is shifted right by `text.len()` when the insertion point
    /// is at or before it, so it keeps addressing the same original
    /// content.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotWritable`] if the stream mode denies writes, or
    /// [`StreamError::MarkerNotFound`] if `marker` does not occur in the
    /// buffer.
    pub fn prepend(&mut self, text: impl AsRef<[u8]>, marker: impl AsRef<[u8]>) -> Result<(), StreamError> {
        let (text, marker) = (text.as_ref(), marker.as_ref());
        ensure!(self.mode.is_writable(), StreamError::not_writable(self.mode));

        let offset = self.search(marker).ok_or_else(|| StreamError::marker_not_found(marker))?;
        trace!(offset, len = text.len(), "splice before marker");
        self.insert(offset, text);
        Ok(())
    }

    /// Inserts `text` immediately after the first occurrence of `marker`.
    ///
    /// Cursor handling and errors are identical to
    /// [`prepend`](StreamBuffer::prepend); only the insertion point differs
    /// (one past the marker's end).
    pub fn postpend(&mut self, text: impl AsRef<[u8]>, marker: impl AsRef<[u8]>) -> Result<(), StreamError> {
        let (text, marker) = (text.as_ref(), marker.as_ref());
        ensure!(self.mode.is_writable(), StreamError::not_writable(self.mode));

        let start = self.search(marker).ok_or_else(|| StreamError::marker_not_found(marker))?;
        let offset = start + marker.len();
        trace!(offset, len = text.len(), "splice after marker");
        self.insert(offset, text);
        Ok(())
    }

    /// Inserts at an absolute offset, applying the cursor preservation
    /// rule: the cursor shifts right iff the insertion is at or before it.
    fn insert(&mut self, offset: usize, data: &[u8]) {
        self.insert_untracked(offset, data);
        if offset <= self.cursor {
            self.cursor += data.len();
        }
    }

    /// Raw insertion at `offset`; cursor bookkeeping is the caller's job.
    fn insert_untracked(&mut self, offset: usize, data: &[u8]) {
        debug_assert!(offset <= self.buffer.len());
        let tail = self.buffer.split_off(offset);
        self.buffer.extend_from_slice(data);
        self.buffer.unsplit(tail);
    }
}

impl Default for StreamBuffer {
    /// An empty buffer with full read and write capability.
    fn default() -> Self {
        Self::new(b"", Mode::ReadWrite)
    }
}

/// The entire buffer rendered as text (lossy for non-UTF-8 bytes),
/// independent of the cursor.
impl fmt::Display for StreamBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.buffer))
    }
}

/// First occurrence of `needle` in `haystack`; empty needles match at 0.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
