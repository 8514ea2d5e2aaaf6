// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

// Production code safety enforced via CI and `make lint-strict`
// (lib/bins checked separately from tests - tests may use unwrap/expect)

//! # Bootstrap Module
//!
//! The bootstrap module sits **outside** the splitting pipeline's own
//! layers (domain, application, infrastructure, all in `jsonshard-core` and
//! `jsonshard-domain`) and provides everything a process entry point needs
//! around it:
//!
//! - **Argument parsing** - [`cli::Cli`], a `clap`-derived CLI surface
//! - **Logging** - [`config::init_logging`], a `tracing` subscriber
//! - **Signal handling** - [`signals::install_shutdown_signals`] (SIGINT,
//!   and on Unix SIGTERM)
//! - **Shutdown coordination** - [`shutdown::ShutdownCoordinator`]
//! - **Exit codes** - [`exit_code::map_error_to_exit_code`]
//!
//! ## Architecture Position
//!
//! This crate sits *below* `jsonshard-core` in the dependency graph, not
//! above it: it depends only on `jsonshard-domain` (for the shared error
//! type), never on `jsonshard-core` itself. The binary entry point depends
//! on all three and does the wiring — building a
//! `jsonshard_core::RuntimeConfig` from the parsed [`cli::Cli`], and pairing
//! a [`shutdown::ShutdownCoordinator`] token with the pipeline's own typed
//! `jsonshard_core::CancelToken` so a caught signal and a producer read
//! failure cancel the pipeline through the same path.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           binary entry point                │
//! │  wires bootstrap + core + domain together    │
//! └───────────────┬───────────────┬──────────────┘
//!                 │               │
//!                 ▼               ▼
//! ┌───────────────────────┐   ┌───────────────────────────────┐
//! │   jsonshard-bootstrap  │   │         jsonshard-core         │
//! │  - CLI Parsing         │   │  - AsyncByteProducer/Splitter   │
//! │  - Logging Setup       │   │  - local/gzip/cloud sources     │
//! │  - Signal Handling     │   └───────────────┬───────────────┘
//! │  - Shutdown Coord.     │                   │
//! │  - Exit Code Mapping   │                   ▼
//! └───────────┬───────────┘   ┌───────────────────────────────┐
//!             │               │         jsonshard-domain        │
//!             └──────────────▶│  Error taxonomy, value objects  │
//!                             └───────────────────────────────┘
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Separation from the pipeline layers** - this crate never depends on
//!    `jsonshard-core`, so it can be tested and versioned independently of
//!    the pipeline's own internals.
//! 2. **Graceful shutdown** - [`signals::install_shutdown_signals`] drives a
//!    [`shutdown::ShutdownCoordinator`]; the entry point bridges its token
//!    to the pipeline's cancellation so both failure paths converge.
//! 3. **Testability** - [`logger::NoOpLogger`] and the test-only
//!    `CapturingLogger` let bootstrap logic be tested without touching the
//!    global `tracing` subscriber.
//!
//! ## Usage Example
//!
//! ```no_run
//! use clap::Parser;
//! use jsonshard_bootstrap::cli::Cli;
//! use jsonshard_bootstrap::{config, exit_code};
//!
//! #[tokio::main]
//! async fn main() -> std::process::ExitCode {
//!     let cli = Cli::parse();
//!     config::init_logging(cli.verbose);
//!
//!     let result: Result<(), jsonshard_domain::JsonShardError> = Ok(()); // run the pipeline here
//!     exit_code::result_to_exit_code(result)
//! }
//! ```
//!
//! ## Module Structure
//!
//! - `cli` - CLI argument parsing and validation
//! - `config` - Logging subscriber setup
//! - `exit_code` - Process exit code mapping
//! - `logger` - Bootstrap-phase logging abstraction
//! - `shutdown` - Shutdown coordination
//! - `signals` - OS signal handling (SIGINT/SIGTERM)

pub mod cli;
pub mod config;
pub mod exit_code;
pub mod logger;
pub mod shutdown;
pub mod signals;

pub use cli::Cli;
pub use exit_code::{map_error_to_exit_code, result_to_exit_code, ExitCode};
