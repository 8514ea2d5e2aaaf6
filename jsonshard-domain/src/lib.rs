// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Layer
//!
//! Pure, reusable types shared by every other crate in the workspace: the
//! error taxonomy, the small value objects the splitter manipulates, and the
//! narrow infrastructure ports (`ByteSource`, `WriterFactory`) that decouple
//! the splitting engine from where bytes come from and where they go.
//!
//! ## Architecture Position
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           BOOTSTRAP                         │
//! │  - CLI, signals, exit codes, logging        │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │           CORE (application + infra)        │
//! │  - splitter, producer, iterator, sinks       │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │           DOMAIN (this crate)               │
//! │  - error taxonomy, value objects, ports      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate depends on tokio, file I/O, or any cloud SDK: it is
//! pure enough to unit test without a runtime.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::JsonShardError;
pub use ports::{ByteSource, ReadOutcome, SinkFactoryProvider, WriteCloser, WriterFactory};
pub use value_objects::{ByteStack, Chunk, SplitSize};
