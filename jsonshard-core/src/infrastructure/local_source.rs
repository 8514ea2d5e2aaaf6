// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! A [`ByteSource`] backed by a local filesystem path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use jsonshard_domain::{ByteSource, JsonShardError, ReadOutcome};

pub struct LocalFileSource {
    inner: File,
}

impl LocalFileSource {
    pub fn open(path: &Path) -> Result<Self, JsonShardError> {
        let inner = File::open(path)
            .map_err(|e| JsonShardError::source_io(format!("opening '{}': {e}", path.display())))?;
        Ok(Self { inner })
    }
}

impl ByteSource for LocalFileSource {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, JsonShardError> {
        match self.inner.read(buf) {
            Ok(0) => Ok(ReadOutcome::Eof),
            Ok(n) => Ok(ReadOutcome::Read(n)),
            Err(e) => Err(JsonShardError::source_io(e)),
        }
    }
}
