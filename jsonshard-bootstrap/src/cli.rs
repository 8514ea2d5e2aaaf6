// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Command-Line Interface
//!
//! `jsonshard --file <source> --output <dir> [--overwrite] [--buffer-size
//! <bytes>] [--channel-depth <n>] [--split-size <bytes>] [-v|--verbose]`.
//!
//! Parsing is a thin [`clap`] derive struct; the only validation that
//! happens here (rather than deeper in the pipeline, where it would be a
//! [`SourceIoError`](jsonshard_domain::JsonShardError::SourceIo) or
//! [`SinkIoError`](jsonshard_domain::JsonShardError::SinkIo)) is the kind
//! that's cheap and meaningful before any I/O is attempted: tunables must
//! be non-zero.

use std::path::PathBuf;

use clap::Parser;
use jsonshard_domain::JsonShardError;

/// Bounded read size for one producer chunk. Mirrors
/// `jsonshard_core::config::DEFAULT_BUFFER_SIZE`; duplicated here rather
/// than depended on, since this crate sits below `jsonshard-core` in the
/// dependency graph (the binary entry point depends on both).
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Producer-to-consumer channel depth, in chunks. Mirrors
/// `jsonshard_core::config::DEFAULT_CHANNEL_DEPTH`.
pub const DEFAULT_CHANNEL_DEPTH: usize = 16;

/// Byte threshold at which a JSONL shard rotates to a fresh file. Mirrors
/// `jsonshard_domain::SplitSize::DEFAULT_BYTES`.
pub const DEFAULT_SPLIT_SIZE: u64 = 4 * 1024 * 1024 * 1024;

/// Streams a single root-object JSON document into a directory of JSONL
/// shards, one file set per root-level array key, plus a `root.json`
/// summary of everything else at the root.
#[derive(Parser, Debug)]
#[command(name = "jsonshard", version, about)]
pub struct Cli {
    /// Local path, or a `gs://`/`s3://` object URI. A `.gz` suffix is
    /// transparently gzip-decompressed.
    #[arg(long)]
    pub file: String,

    /// Output directory. Must not already exist unless `--overwrite` is
    /// given.
    #[arg(long)]
    pub output: PathBuf,

    /// Replace `--output` if it already exists.
    #[arg(long)]
    pub overwrite: bool,

    /// Bytes read per producer chunk.
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Producer-to-consumer channel depth, in chunks.
    #[arg(long, default_value_t = DEFAULT_CHANNEL_DEPTH)]
    pub channel_depth: usize,

    /// Byte threshold at which a JSONL shard rotates to a fresh file.
    #[arg(long, default_value_t = DEFAULT_SPLIT_SIZE)]
    pub split_size: u64,

    /// Emit debug-level logs in addition to info-level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validates the tunables that are cheap and meaningful to check before
    /// any I/O is attempted. Returns a [`JsonShardError::Config`] for any
    /// tunable that's zero; the output-directory precondition and source
    /// resolution are left to `jsonshard-core`, which can produce the
    /// richer `SourceIo`/`SinkIo` errors those failures deserve.
    pub fn validate(&self) -> Result<(), JsonShardError> {
        if self.buffer_size == 0 {
            return Err(JsonShardError::config("--buffer-size must be at least 1"));
        }
        if self.channel_depth == 0 {
            return Err(JsonShardError::config("--channel-depth must be at least 1"));
        }
        if self.split_size == 0 {
            return Err(JsonShardError::config("--split-size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jsonshard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_the_documented_tunables() {
        let cli = parse(&["--file", "in.json", "--output", "out"]);
        cli.validate().unwrap();
        assert_eq!(cli.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(cli.channel_depth, DEFAULT_CHANNEL_DEPTH);
        assert_eq!(cli.split_size, DEFAULT_SPLIT_SIZE);
        assert!(!cli.overwrite);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_a_zero_split_size() {
        let cli = parse(&["--file", "in.json", "--output", "out", "--split-size", "0"]);
        assert!(matches!(cli.validate().unwrap_err(), JsonShardError::Config(_)));
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = parse(&[
            "--file",
            "in.json",
            "--output",
            "out",
            "--overwrite",
            "--buffer-size",
            "4096",
            "--split-size",
            "128",
            "-v",
        ]);
        cli.validate().unwrap();
        assert_eq!(cli.buffer_size, 4096);
        assert_eq!(cli.split_size, 128);
        assert!(cli.overwrite);
        assert!(cli.verbose);
    }
}
