// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Runtime Configuration
//!
//! The few tunables the splitting pipeline exposes, each CLI-overridable
//! (the bootstrap layer's `--buffer-size`, `--channel-depth`, and
//! `--split-size` flags) with documented defaults.

use jsonshard_domain::SplitSize;

/// Bounded read size for one [`application::producer::AsyncByteProducer`](crate::application::producer::AsyncByteProducer)
/// chunk. 1 MiB balances syscall overhead against per-chunk allocation cost.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Producer→consumer channel depth, in chunks. Bounds worst-case in-flight
/// memory to `channel_depth * buffer_size`.
pub const DEFAULT_CHANNEL_DEPTH: usize = 16;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub buffer_size: usize,
    pub channel_depth: usize,
    pub split_size: SplitSize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            channel_depth: DEFAULT_CHANNEL_DEPTH,
            split_size: SplitSize::default(),
        }
    }
}
