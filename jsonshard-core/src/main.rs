// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # jsonshard — binary entry point
//!
//! Wires the CLI parsing, logging, and signal handling provided by
//! `jsonshard-bootstrap` to the splitting pipeline implemented in this
//! crate's library target. This is the composition root: it's the only
//! place in the workspace that depends on both
//! [`jsonshard_bootstrap`] and `jsonshard_core`'s own application layer.

use std::time::Instant;

use clap::Parser;
use jsonshard_bootstrap::{cli::Cli, config, exit_code, shutdown::ShutdownCoordinator, signals};
use jsonshard_core::{CancelToken, RuntimeConfig};
use jsonshard_domain::{JsonShardError, SplitSize};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    config::init_logging(cli.verbose);

    exit_code::result_to_exit_code(run(cli).await)
}

async fn run(cli: Cli) -> Result<(), JsonShardError> {
    cli.validate()?;
    let split_size = SplitSize::new(cli.split_size).map_err(JsonShardError::config)?;
    let runtime_config = RuntimeConfig { buffer_size: cli.buffer_size, channel_depth: cli.channel_depth, split_size };

    let coordinator = ShutdownCoordinator::default();
    signals::install_shutdown_signals(coordinator.clone());

    let pipeline_cancel = CancelToken::new();
    let shutdown_token = coordinator.token();
    let bridged_cancel = pipeline_cancel.clone();
    tokio::spawn(async move {
        shutdown_token.cancelled().await;
        bridged_cancel.cancel(None);
    });

    jsonshard_core::prepare_output_dir(&cli.output, cli.overwrite)?;

    tracing::info!(target: "jsonshard", file = %cli.file, "reading source");
    let started = Instant::now();

    // `resolve_source` may open a cloud object, which blocks the calling
    // thread on `Handle::block_on`; that's only legal off the runtime's
    // worker threads, hence `spawn_blocking` rather than a direct call.
    let handle = tokio::runtime::Handle::current();
    let location = cli.file.clone();
    let source = tokio::task::spawn_blocking(move || jsonshard_core::resolve_source(&location, handle))
        .await
        .map_err(|e| JsonShardError::source_io(format!("source resolution task panicked: {e}")))??;
    let mut sinks = jsonshard_core::LocalSinkFactoryProvider::new(cli.output.clone());

    let root_summary = jsonshard_core::split_stream(source, &mut sinks, &runtime_config, pipeline_cancel).await?;
    jsonshard_core::write_root_json(&cli.output, &root_summary)?;

    tracing::info!(
        target: "jsonshard",
        output = %cli.output.display(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "written successfully"
    );

    coordinator.complete_shutdown();
    Ok(())
}
