// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Split Stream Service
//!
//! Wires one [`AsyncByteProducer`], one [`BufferedByteIterator`], and one
//! [`JsonSplitter`] together and drives a single document end to end. This
//! is the one seam every entry point (the CLI binary, integration tests)
//! calls through rather than constructing the pipeline by hand.

use jsonshard_domain::{ByteSource, JsonShardError, SinkFactoryProvider};

use super::iterator::BufferedByteIterator;
use super::producer::{AsyncByteProducer, CancelToken};
use super::splitter::JsonSplitter;
use crate::config::RuntimeConfig;

/// Streams `source` through the splitter, dispatching root-level arrays to
/// sinks minted by `sinks` and returning the assembled `root.json` bytes.
///
/// `cancel` is shared with the caller: a caller-triggered cancellation (a
/// shutdown signal, say) reaches the producer's blocking task through the
/// same token passed in here. Conversely, if the recognizer itself fails,
/// this function cancels `cancel` before returning so the producer's
/// background task observes the cancellation and exits instead of reading
/// to EOF (or leaking, if the channel is full and nobody is draining it) —
/// see the "producer task leak on recognizer failure" design note.
pub async fn split_stream(
    source: Box<dyn ByteSource>,
    sinks: &mut dyn SinkFactoryProvider,
    cfg: &RuntimeConfig,
    cancel: CancelToken,
) -> Result<Vec<u8>, JsonShardError> {
    let producer = AsyncByteProducer::start(source, cfg.buffer_size, cfg.channel_depth, cancel.clone());
    let iter = BufferedByteIterator::new(producer);
    let mut splitter = JsonSplitter::new(iter, cfg.split_size);

    match splitter.split_stream(sinks).await {
        Ok(root) => Ok(root),
        Err(e) => {
            cancel.cancel(Some(e.clone()));
            Err(e)
        }
    }
}
