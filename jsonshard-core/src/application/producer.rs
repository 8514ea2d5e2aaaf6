// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Async Byte Producer
//!
//! Decouples the blocking [`ByteSource`] reads from the recognizer's
//! progress. A single background task reads fixed-size chunks and enqueues
//! them on a bounded channel; the consumer pulls them one at a time.
//!
//! ## Typed cancellation
//!
//! Unlike a plain on/off [`CancelToken`], a task observing cancellation here
//! needs the *reason* — was it a source read failure, a caller-requested
//! shutdown, or a downstream recognizer error? [`CancelToken`] pairs the
//! same `AtomicBool` + `Notify` pattern the bootstrap layer's shutdown
//! coordinator uses with a mutex-guarded error slot, set exactly once via a
//! compare-and-swap before the notify fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use jsonshard_domain::{ByteSource, Chunk, JsonShardError, ReadOutcome};
use tokio::sync::{mpsc, Notify};

/// A cancellation signal that carries the error which triggered it, if any.
#[derive(Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
    reason: Arc<Mutex<Option<JsonShardError>>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            reason: Arc::new(Mutex::new(None)),
        }
    }

    /// Cancels this token. `reason` is recorded only the first time this is
    /// called for a given token; later calls (even with a different
    /// reason) are no-ops.
    pub fn cancel(&self, reason: Option<JsonShardError>) {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            if let Some(r) = reason {
                *self.reason.lock().unwrap() = Some(r);
            }
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// The error that caused cancellation, if one was supplied.
    pub fn reason(&self) -> Option<JsonShardError> {
        self.reason.lock().unwrap().clone()
    }

    /// Resolves once `cancel` has been called, immediately if it already
    /// has been.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        self.notify.notified().await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// One pull from the producer's channel.
pub enum ReadResult {
    Chunk(Chunk),
    Eof,
}

/// Runs one blocking [`ByteSource`] on a background task and hands chunks to
/// the consumer across a bounded channel.
pub struct AsyncByteProducer {
    rx: mpsc::Receiver<Chunk>,
    closed: Arc<AtomicBool>,
    cancel: CancelToken,
}

impl AsyncByteProducer {
    /// Spawns the background task and returns the producer handle. `cancel`
    /// is shared with the caller: either side observing a fatal error
    /// should call `cancel.cancel(Some(err))` so the other side stops
    /// promptly instead of leaking.
    pub fn start(
        mut source: Box<dyn ByteSource>,
        buffer_size: usize,
        channel_depth: usize,
        cancel: CancelToken,
    ) -> Self {
        let (tx, rx) = mpsc::channel(channel_depth);
        let closed = Arc::new(AtomicBool::new(false));
        let closed_writer = Arc::clone(&closed);
        let task_cancel = cancel.clone();

        tokio::task::spawn_blocking(move || loop {
            if task_cancel.is_cancelled() {
                break;
            }
            let mut buf = vec![0u8; buffer_size];
            match source.read(&mut buf) {
                Ok(ReadOutcome::Read(n)) => {
                    buf.truncate(n);
                    if tx.blocking_send(Chunk::new(buf)).is_err() {
                        // consumer dropped; nothing left to do.
                        break;
                    }
                }
                Ok(ReadOutcome::Eof) => {
                    closed_writer.store(true, Ordering::SeqCst);
                    break;
                }
                Err(e) => {
                    task_cancel.cancel(Some(e));
                    break;
                }
            }
        });

        Self { rx, closed, cancel }
    }

    /// Pulls the next chunk, or reports end of stream, or returns the error
    /// that cancelled the pipeline (from either side).
    pub async fn read(&mut self) -> Result<ReadResult, JsonShardError> {
        tokio::select! {
            maybe_chunk = self.rx.recv() => match maybe_chunk {
                Some(chunk) => Ok(ReadResult::Chunk(chunk)),
                None => match self.cancel.reason() {
                    Some(reason) => Err(reason),
                    None => Ok(ReadResult::Eof),
                },
            },
            _ = self.cancel.cancelled() => {
                Err(self.cancel.reason().unwrap_or_else(|| JsonShardError::cancelled(None)))
            }
        }
    }

    /// True once the underlying source reached a clean EOF. Informational
    /// only — a cancelled producer never sets this.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}
