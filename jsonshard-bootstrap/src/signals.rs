// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Signal Handling
//!
//! Bridges OS shutdown signals (`SIGINT`, and on Unix `SIGTERM`) to a
//! [`ShutdownCoordinator`](crate::shutdown::ShutdownCoordinator). The
//! binary entry point pairs the coordinator's token with the splitting
//! pipeline's own typed `jsonshard_core::CancelToken`, so a caught signal
//! ultimately cancels the pipeline with `reason: None` — a deliberate
//! shutdown request, distinct from the `Some(err)` reason an upstream
//! failure records.

use crate::shutdown::ShutdownCoordinator;

/// Spawns a background task that waits for a shutdown signal and, on
/// receipt, calls `coordinator.initiate_shutdown()`. Returns immediately;
/// the signal wait happens on the spawned task.
pub fn install_shutdown_signals(coordinator: ShutdownCoordinator) {
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!(target: "jsonshard::signals", "shutdown signal received");
        coordinator.initiate_shutdown();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn initiating_shutdown_directly_marks_the_coordinator_shut_down() {
        let coordinator = ShutdownCoordinator::default();
        coordinator.initiate_shutdown();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(coordinator.is_shutting_down());
        assert!(coordinator.token().is_cancelled());
    }
}
