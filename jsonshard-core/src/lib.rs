// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

// Production code safety enforced via CI and `make lint-strict`
// (lib/bins checked separately from tests - tests may use unwrap/expect)

//! # jsonshard-core
//!
//! Streams a single root-object JSON document into a directory of JSONL
//! shards, one file-set per root-level array key, plus a `root.json`
//! summary of everything else at the root.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Application Layer                          │
//! │  AsyncByteProducer → BufferedByteIterator → JsonSplitter     │
//! │                                            → SplittingJsonlSink │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Infrastructure Layer                         │
//! │  local/gzip/cloud ByteSource impls, rotating file sink       │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (jsonshard-domain)           │
//! │  error taxonomy, Chunk/ByteStack/SplitSize, ports            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//! One [`application::service::split_stream`] call drives a single producer
//! task, a single-threaded recognizer pass, and one [`application::sink::SplittingJsonlSink`]
//! per root-level array key.
//!
//! ### Chunks
//! The source is read in bounded chunks ([`jsonshard_domain::Chunk`]) handed
//! across a bounded channel from the producer task to the consumer.
//!
//! ### Cancellation
//! Failures on either side of the channel cancel a shared, typed token (see
//! [`application::producer::CancelToken`]) so the other side stops promptly
//! instead of blocking forever or leaking the task.

pub mod application;
pub mod config;
pub mod infrastructure;

pub use application::iterator::BufferedByteIterator;
pub use application::producer::{AsyncByteProducer, CancelToken};
pub use application::service::split_stream;
pub use application::sink::SplittingJsonlSink;
pub use application::splitter::JsonSplitter;
pub use config::RuntimeConfig;
pub use infrastructure::{prepare_output_dir, resolve_source, write_root_json, LocalSinkFactoryProvider};
