// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure Ports
//!
//! The splitting engine depends on exactly two narrow seams: a source of
//! bytes, and a factory of sinks to write bytes to. Both are blocking,
//! synchronous traits — the async boundary lives one layer up, in the
//! producer task that calls them from `tokio::task::spawn_blocking`.
//!
//! Keeping these traits here (rather than in the infrastructure crate that
//! implements them) lets the core splitting logic depend only on the domain
//! crate, never on `std::fs`, `flate2`, or `object_store` directly.

use crate::error::JsonShardError;

/// The result of one pull from a [`ByteSource`].
pub enum ReadOutcome {
    /// `n` bytes were placed into the caller-supplied buffer, `1 <= n <=
    /// buf.len()`.
    Read(usize),
    /// The source is exhausted; no more bytes will ever be produced.
    Eof,
}

/// A blocking source of bytes: a local file, a gzip-decompressing wrapper
/// around any other source, or a cloud object reader.
///
/// Implementations are read once, start to finish, by a single caller on a
/// single thread (the producer's blocking task) — no concurrent access, no
/// seeking.
pub trait ByteSource: Send {
    /// Fill as much of `buf` as is available in one underlying read and
    /// report how many bytes were written, or that the source is
    /// exhausted. A `buf` of length zero is a programmer error.
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, JsonShardError>;
}

/// An append-only byte sink that can be explicitly closed.
pub trait WriteCloser: Send {
    /// Write the entirety of `buf`, looping over short writes.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), JsonShardError>;

    /// Flush and release the underlying resource. Must be idempotent:
    /// calling `close` twice is not an error.
    fn close(&mut self) -> Result<(), JsonShardError>;
}

/// A factory that produces a fresh [`WriteCloser`] on demand, naming each
/// one as the splitting sink's rotation policy requires.
pub trait WriterFactory: Send {
    /// Open a new sink. Called once up front and again every time the
    /// current sink rotates out.
    fn create(&mut self) -> Result<Box<dyn WriteCloser>, JsonShardError>;
}

/// Mints a [`WriterFactory`] for a given root-level key. Kept separate from
/// `WriterFactory` itself so the recognizer never has to know the output
/// directory, naming scheme, or filesystem at all — it only knows "give me
/// somewhere to put the array called `key`".
pub trait SinkFactoryProvider: Send {
    fn factory_for(&mut self, key: &str) -> Result<Box<dyn WriterFactory>, JsonShardError>;
}
