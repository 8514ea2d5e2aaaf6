// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Buffered Byte Iterator
//!
//! Presents the concatenation of every chunk the producer yields as one
//! sequential byte stream, with single-byte advance, bounded rewind within
//! the currently-captured range, and a "capture since the last truncation"
//! operation the recognizer uses to read out whole tokens in one shot.
//!
//! The sentinel byte `0` doubles as "end of stream" from [`next`](Self::next)
//! — acceptable here because JSON source text is not expected to contain a
//! literal NUL.

use jsonshard_domain::JsonShardError;

use super::producer::{AsyncByteProducer, ReadResult};

pub struct BufferedByteIterator {
    producer: AsyncByteProducer,
    buf: Vec<u8>,
    pos: usize,
}

impl BufferedByteIterator {
    pub fn new(producer: AsyncByteProducer) -> Self {
        Self { producer, buf: Vec::new(), pos: 0 }
    }

    /// Returns the next byte, pulling a fresh chunk from the producer if
    /// the buffer is exhausted. Returns `0` on clean end-of-stream; any
    /// non-EOF producer failure is propagated as an error rather than
    /// substituted with a sentinel.
    pub async fn next(&mut self) -> Result<u8, JsonShardError> {
        if self.pos == self.buf.len() {
            match self.producer.read().await? {
                ReadResult::Chunk(chunk) => self.buf.extend_from_slice(chunk.as_bytes()),
                ReadResult::Eof => return Ok(0),
            }
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Moves the cursor. `delta >= 0` discards `delta` leading bytes of the
    /// buffer (used to drop a single already-consumed opener byte);
    /// `delta < 0` rewinds the cursor within the currently captured range
    /// (used to push back a lookahead byte). Rewinding past the start of
    /// the captured range is a programmer error.
    pub fn advance(&mut self, delta: i64) {
        if delta >= 0 {
            let n = delta as usize;
            debug_assert!(n <= self.pos, "advance(n) must not discard unread bytes");
            self.buf.drain(0..n);
            self.pos -= n;
        } else {
            let n = (-delta) as usize;
            debug_assert!(n <= self.pos, "rewind past the captured range");
            self.pos -= n;
        }
    }

    /// Discards the current captured value (`[0, pos)`) without returning
    /// it, resetting the cursor to the head of the buffer.
    pub fn skip(&mut self) {
        self.buf.drain(0..self.pos);
        self.pos = 0;
    }

    /// Returns the current captured value and then performs a [`skip`](Self::skip).
    pub fn take_value(&mut self) -> Vec<u8> {
        let value = self.buf[..self.pos].to_vec();
        self.skip();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::producer::CancelToken;
    use jsonshard_domain::ReadOutcome;

    struct FixedSource {
        data: Vec<u8>,
        offset: usize,
    }

    impl jsonshard_domain::ByteSource for FixedSource {
        fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, JsonShardError> {
            if self.offset >= self.data.len() {
                return Ok(ReadOutcome::Eof);
            }
            let n = std::cmp::min(buf.len(), self.data.len() - self.offset);
            buf[..n].copy_from_slice(&self.data[self.offset..self.offset + n]);
            self.offset += n;
            Ok(ReadOutcome::Read(n))
        }
    }

    fn iter_over(data: &str, chunk_size: usize) -> BufferedByteIterator {
        let source = FixedSource { data: data.as_bytes().to_vec(), offset: 0 };
        let producer = AsyncByteProducer::start(Box::new(source), chunk_size, 4, CancelToken::new());
        BufferedByteIterator::new(producer)
    }

    #[tokio::test]
    async fn reads_bytes_in_order_across_chunk_boundaries() {
        let mut it = iter_over("hello", 2);
        let mut collected = Vec::new();
        for _ in 0..5 {
            collected.push(it.next().await.unwrap());
        }
        assert_eq!(collected, b"hello");
    }

    #[tokio::test]
    async fn next_returns_zero_sentinel_at_eof() {
        let mut it = iter_over("a", 8);
        assert_eq!(it.next().await.unwrap(), b'a');
        assert_eq!(it.next().await.unwrap(), 0);
        assert_eq!(it.next().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rewind_then_take_value_recaptures_the_byte() {
        let mut it = iter_over("ab", 8);
        let _ = it.next().await.unwrap();
        let _ = it.next().await.unwrap();
        it.advance(-1);
        let value = it.take_value();
        assert_eq!(value, b"a");
    }

    #[tokio::test]
    async fn skip_discards_captured_value() {
        let mut it = iter_over("xyz", 8);
        let _ = it.next().await.unwrap();
        it.skip();
        let b = it.next().await.unwrap();
        assert_eq!(b, b'y');
    }
}
