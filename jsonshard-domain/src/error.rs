// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Error Taxonomy
//!
//! All fallible operations in this workspace return [`JsonShardError`]. The
//! variants are grouped by where the failure originates rather than by what
//! module raised it, so that the bootstrap layer can map each one to a
//! distinct process exit code (see `jsonshard_bootstrap::exit_code`):
//!
//! - [`JsonShardError::SourceIo`] — reading from, or opening, the byte source
//!   (local file, cloud object, gzip wrapper) failed.
//! - [`JsonShardError::SinkIo`] — writing an output file failed.
//! - [`JsonShardError::Parse`] — the recognizer found the input was not
//!   structured the way a sharded-JSON root document must be.
//! - [`JsonShardError::Cancelled`] — the pipeline was torn down before
//!   finishing, either by an upstream error or by an external shutdown
//!   signal. Carries the error that triggered the cancellation, if any.
//! - [`JsonShardError::Config`] — bad CLI input: a malformed source URI, an
//!   output directory that already exists without `--overwrite`, etc.

use std::fmt;
use std::sync::Arc;

/// The single error type threaded through the splitting pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsonShardError {
    /// Reading the underlying byte source failed (open, read, auth, or
    /// decompression failure).
    #[error("source i/o error: {0}")]
    SourceIo(String),

    /// Writing or rotating an output file failed.
    #[error("sink i/o error: {0}")]
    SinkIo(String),

    /// The recognizer encountered input that could not be interpreted as a
    /// sharded-JSON root document.
    #[error("parse error: {0}")]
    Parse(String),

    /// The pipeline was cancelled before completing. `reason` is the error
    /// that triggered the cancellation, when one is known; a `None` reason
    /// means cancellation was requested directly (e.g. a shutdown signal)
    /// rather than caused by a prior failure.
    #[error("cancelled: {}", .reason.as_ref().map(|e| e.to_string()).unwrap_or_else(|| "shutdown requested".to_string()))]
    Cancelled { reason: Option<Arc<JsonShardError>> },

    /// A configuration or argument problem, detected before any I/O is
    /// attempted.
    #[error("configuration error: {0}")]
    Config(String),
}

impl JsonShardError {
    pub fn source_io(msg: impl fmt::Display) -> Self {
        Self::SourceIo(msg.to_string())
    }

    pub fn sink_io(msg: impl fmt::Display) -> Self {
        Self::SinkIo(msg.to_string())
    }

    pub fn parse(msg: impl fmt::Display) -> Self {
        Self::Parse(msg.to_string())
    }

    pub fn config(msg: impl fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    pub fn cancelled(reason: Option<JsonShardError>) -> Self {
        Self::Cancelled { reason: reason.map(Arc::new) }
    }

    /// True if this variant is [`JsonShardError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<std::io::Error> for JsonShardError {
    fn from(e: std::io::Error) -> Self {
        Self::SourceIo(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_without_reason_has_generic_message() {
        let e = JsonShardError::cancelled(None);
        assert_eq!(e.to_string(), "cancelled: shutdown requested");
        assert!(e.is_cancelled());
    }

    #[test]
    fn cancelled_with_reason_embeds_it() {
        let inner = JsonShardError::source_io("disk unplugged");
        let e = JsonShardError::cancelled(Some(inner));
        assert!(e.to_string().contains("disk unplugged"));
    }
}
