// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Infrastructure Layer
//!
//! Concrete adapters for the two ports the application layer depends on
//! ([`jsonshard_domain::ByteSource`], [`jsonshard_domain::WriterFactory`]):
//! local files, gzip decompression, cloud object reads, and the rotating
//! local-file sink. Nothing in [`crate::application`] imports this module
//! directly; everything here is wired up by the bootstrap binary.

pub mod cloud_source;
pub mod file_sink;
pub mod gzip_source;
pub mod local_source;
pub mod resolve;

pub use file_sink::{prepare_output_dir, write_root_json, LocalSinkFactoryProvider, LocalWriterFactory};
pub use resolve::resolve_source;
