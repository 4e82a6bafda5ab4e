//! Property-based tests for the stream buffer core.
//!
//! Each test drives a `StreamBuffer` and a plain `Vec<u8>`-plus-cursor
//! reference model through the same operation sequence and checks that the
//! two never disagree, and that the cursor bound invariant
//! (`0 <= cursor <= len`) holds after every operation.
//!
//! # Operation Types
//!
//! - `Op::Read` / `Op::Write`: sequential I/O at the cursor
//! - `Op::Seek` / `Op::Rewind` / `Op::End`: absolute cursor control
//! - `Op::Prepend` / `Op::Postpend`: marker-relative splices
//!
//! # Weighted Generation
//!
//! Reads and writes are the common case (weight 3), cursor moves weight 2,
//! splices weight 1. Generated buffers always contain `MARKER` so splices
//! have a target; splices only ever add bytes, so the marker stays present
//! for the whole sequence.

use micro_message::stream::{Mode, StreamBuffer};
use proptest::prelude::*;

/// Marker every generated buffer contains, so splices always have a target.
const MARKER: &[u8] = b"{{m}}";

#[derive(Debug, Clone)]
enum Op {
    Read(usize),
    Write(Vec<u8>),
    Seek(usize),
    Rewind,
    End,
    Prepend(Vec<u8>),
    Postpend(Vec<u8>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..48).prop_map(Op::Read),
        3 => proptest::collection::vec(any::<u8>(), 0..12).prop_map(Op::Write),
        2 => (0usize..256).prop_map(Op::Seek),
        2 => Just(Op::Rewind),
        2 => Just(Op::End),
        1 => proptest::collection::vec(any::<u8>(), 1..8).prop_map(Op::Prepend),
        1 => proptest::collection::vec(any::<u8>(), 1..8).prop_map(Op::Postpend),
    ]
}

/// Naive reference model: a byte vector and a cursor, implementing the
/// documented insertion and cursor-preservation rules as directly as
/// possible.
#[derive(Debug)]
struct ModelStream {
    buffer: Vec<u8>,
    cursor: usize,
}

impl ModelStream {
    fn new(initial: &[u8]) -> Self {
        Self { buffer: initial.to_vec(), cursor: 0 }
    }

    fn read(&mut self, n: usize) -> Vec<u8> {
        let end = usize::min(self.cursor + n, self.buffer.len());
        let bytes = self.buffer[self.cursor..end].to_vec();
        self.cursor = end;
        bytes
    }

    fn insert(&mut self, offset: usize, data: &[u8]) {
        self.buffer.splice(offset..offset, data.iter().copied());
        if offset <= self.cursor {
            self.cursor += data.len();
        }
    }

    fn write(&mut self, data: &[u8]) {
        self.insert(self.cursor, data);
    }

    fn seek(&mut self, position: usize) {
        self.cursor = usize::min(position, self.buffer.len());
    }

    fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        self.buffer.windows(needle.len()).position(|window| window == needle)
    }
}

/// Applies one operation to both stream and model, asserting that any
/// produced bytes agree.
fn apply(stream: &mut StreamBuffer, model: &mut ModelStream, op: &Op) {
    match op {
        Op::Read(n) => {
            let got = stream.read(*n).unwrap();
            let want = model.read(*n);
            assert_eq!(&got[..], &want[..]);
        }
        Op::Write(data) => {
            let written = stream.write(data).unwrap();
            assert_eq!(written, data.len());
            model.write(data);
        }
        Op::Seek(position) => {
            stream.seek(*position);
            model.seek(*position);
        }
        Op::Rewind => {
            stream.rewind();
            model.seek(0);
        }
        Op::End => {
            stream.end();
            let len = model.buffer.len();
            model.seek(len);
        }
        Op::Prepend(text) => {
            stream.prepend(text, MARKER).unwrap();
            let offset = model.find(MARKER).unwrap();
            model.insert(offset, text);
        }
        Op::Postpend(text) => {
            stream.postpend(text, MARKER).unwrap();
            let offset = model.find(MARKER).unwrap() + MARKER.len();
            model.insert(offset, text);
        }
    }
}

proptest! {
    #[test]
    fn arbitrary_op_sequences_match_the_model(
        prefix in proptest::collection::vec(any::<u8>(), 0..32),
        suffix in proptest::collection::vec(any::<u8>(), 0..32),
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut initial = prefix;
        initial.extend_from_slice(MARKER);
        initial.extend_from_slice(&suffix);

        let mut stream = StreamBuffer::new(&initial, Mode::ReadWrite);
        let mut model = ModelStream::new(&initial);

        for op in &ops {
            apply(&mut stream, &mut model, op);

            // invariants after every single operation
            prop_assert!(stream.tell() <= stream.len());
            prop_assert_eq!(stream.tell(), model.cursor);
            prop_assert_eq!(&stream.to_bytes()[..], &model.buffer[..]);
            prop_assert_eq!(stream.eof(), model.cursor == model.buffer.len());
        }
    }

    #[test]
    fn split_reads_equal_one_read(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        n in 0usize..40,
        m in 0usize..40,
    ) {
        let mut split = StreamBuffer::new(&data, Mode::ReadWrite);
        let mut whole = StreamBuffer::new(&data, Mode::ReadWrite);

        let mut collected = split.read(n).unwrap().to_vec();
        collected.extend_from_slice(&split.read(m).unwrap());

        prop_assert_eq!(collected, whole.read(n + m).unwrap().to_vec());
        prop_assert_eq!(split.tell(), whole.tell());
    }

    #[test]
    fn write_at_end_reads_back(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        tail in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        let mut stream = StreamBuffer::new(&data, Mode::ReadWrite);
        stream.end();
        let original_end = stream.tell();

        stream.write(&tail).unwrap();
        stream.seek(original_end);
        prop_assert_eq!(stream.read(tail.len()).unwrap().to_vec(), tail);
    }

    #[test]
    fn interior_write_is_insertion(
        data in proptest::collection::vec(any::<u8>(), 1..64),
        position in 0usize..64,
        text in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let position = usize::min(position, data.len());
        let mut stream = StreamBuffer::new(&data, Mode::ReadWrite);
        stream.seek(position);
        stream.write(&text).unwrap();

        let mut expected = data[..position].to_vec();
        expected.extend_from_slice(&text);
        expected.extend_from_slice(&data[position..]);

        prop_assert_eq!(&stream.to_bytes()[..], &expected[..]);
        prop_assert_eq!(stream.tell(), position + text.len());
    }

    #[test]
    fn splice_before_cursor_preserves_remaining_content(
        prefix in proptest::collection::vec(any::<u8>(), 0..24),
        suffix in proptest::collection::vec(any::<u8>(), 0..24),
        past_marker in 0usize..32,
        text in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut initial = prefix;
        initial.extend_from_slice(MARKER);
        initial.extend_from_slice(&suffix);

        let mut stream = StreamBuffer::new(&initial, Mode::ReadWrite);

        // park the cursor at or after the end of the first marker
        // occurrence, so the splice lands at or before it
        let marker_start = stream.search(MARKER).unwrap();
        stream.seek(marker_start + MARKER.len() + past_marker);
        let cursor_before = stream.tell();
        let remaining_before = stream.contents();

        stream.prepend(&text, MARKER).unwrap();

        prop_assert_eq!(stream.contents(), remaining_before);
        prop_assert_eq!(stream.tell(), cursor_before + text.len());
    }
}
