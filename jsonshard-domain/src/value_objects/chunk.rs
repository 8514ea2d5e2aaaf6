// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Chunk Value Object
//!
//! An owned, immutable span of bytes produced by one read of the underlying
//! [`ByteSource`](crate::ports::ByteSource). Unlike the file-processing
//! `FileChunk` this is modeled after, a splitting `Chunk` carries no
//! identity, sequence number, or checksum: chunks exist only to move bytes
//! from the producer task to the buffered iterator, and their ordering is
//! implicit in channel delivery order.

use bytes::Bytes;

/// A single buffer of bytes handed from the producer to the iterator.
#[derive(Debug, Clone)]
pub struct Chunk {
    data: Bytes,
}

impl Chunk {
    /// Wraps `data`. `data` must be non-empty; an empty chunk would be
    /// indistinguishable from EOF to the iterator.
    pub fn new(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        debug_assert!(!data.is_empty(), "chunks must carry at least one byte");
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_bytes_verbatim() {
        let chunk = Chunk::new(vec![1, 2, 3]);
        assert_eq!(chunk.as_bytes(), &[1, 2, 3]);
        assert_eq!(chunk.len(), 3);
    }
}
