// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cloudtail daemon
//!
//! Receives audit events over HTTP, drops those matching a stash and
//! forwards the rest to the configured notifiers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ct_daemon::{lifecycle, Config};
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Parser)]
#[command(name = "cloudtail", version, about = "Route audit events to notifiers")]
struct Args {
    /// Listen port (overrides `listen` in the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON config file with notifiers and stashes
    #[arg(short = 'f', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    setup_logging(args.debug || config.debug);

    let address = config.listen_address(args.port);
    let daemon = lifecycle::startup(&config, &address)
        .await
        .context("failed to start cloudtail")?;

    info!(address = %daemon.local_addr()?, "listening");

    daemon.serve(shutdown_signal()).await?;
    Ok(())
}

/// Logs go to stderr; stdout belongs to the stdout notifier
fn setup_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT, shutting down..."),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
    }
}
