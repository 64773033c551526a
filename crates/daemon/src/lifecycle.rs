// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup, serving, shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use ct_adapters::build_notifier;
use ct_core::{ConfigurationError, Controller};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::server;

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("could not create {kind} notifier: {source}")]
    Notifier {
        kind: String,
        source: ConfigurationError,
    },

    #[error("failed to bind {0}: {1}")]
    BindFailed(String, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A started daemon, bound but not yet serving
pub struct Daemon {
    pub listener: TcpListener,
    pub controller: Arc<Controller>,
}

impl Daemon {
    pub fn local_addr(&self) -> Result<SocketAddr, LifecycleError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve HTTP until `shutdown` resolves
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), LifecycleError> {
        let app = server::router(self.controller);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("daemon stopped");
        Ok(())
    }
}

/// Build the controller from config: notifiers first, then configured stashes
///
/// Any notifier that cannot be built fails the whole startup.
pub async fn build_controller(config: &Config) -> Result<Controller, LifecycleError> {
    let controller = Controller::new();

    for (kind, settings) in &config.notifiers {
        let notifier = build_notifier(kind, settings).map_err(|source| LifecycleError::Notifier {
            kind: kind.clone(),
            source,
        })?;
        controller.add_notifier(notifier).await;
        info!(notifier = %kind, "registered notifier");
    }

    for stash in &config.stashes {
        let id = controller.add_stash(stash.clone()).await;
        info!(%id, event_name = %stash.event_name, user_name = %stash.user_name, "registered stash");
    }

    Ok(controller)
}

/// Start the daemon
///
/// The listener is bound last, so a bad notifier config never accepts a
/// connection.
pub async fn startup(config: &Config, address: &str) -> Result<Daemon, LifecycleError> {
    let controller = build_controller(config).await?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| LifecycleError::BindFailed(address.to_string(), e))?;

    info!(
        address = %listener.local_addr()?,
        notifiers = ?controller.notifier_names().await,
        "daemon started"
    );

    Ok(Daemon {
        listener,
        controller: Arc::new(controller),
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
