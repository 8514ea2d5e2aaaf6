// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! Transparent gzip decompression wrapper around any other [`ByteSource`].

use std::io::Read;

use flate2::read::GzDecoder;
use jsonshard_domain::{ByteSource, JsonShardError, ReadOutcome};

/// Adapts a `Box<dyn ByteSource>` into `std::io::Read` so it can feed
/// [`GzDecoder`], which only knows about the standard I/O traits.
struct AsStdRead(Box<dyn ByteSource>);

impl Read for AsStdRead {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.0.read(buf) {
            Ok(ReadOutcome::Read(n)) => Ok(n),
            Ok(ReadOutcome::Eof) => Ok(0),
            Err(e) => Err(std::io::Error::other(e.to_string())),
        }
    }
}

/// Wraps any [`ByteSource`] whose bytes are gzip-compressed, presenting the
/// decompressed stream as a `ByteSource` in turn.
pub struct GzipSource {
    inner: GzDecoder<AsStdRead>,
}

impl GzipSource {
    pub fn wrap(inner: Box<dyn ByteSource>) -> Self {
        Self { inner: GzDecoder::new(AsStdRead(inner)) }
    }
}

impl ByteSource for GzipSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, JsonShardError> {
        match self.inner.read(buf) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(n) => Ok(ReadOutcome::Read(n)),
            Err(e) => Err(JsonShardError::source_io(format!("gzip decode: {e}"))),
        }
    }
}
