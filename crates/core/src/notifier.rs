// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier contract for delivery sinks

use async_trait::async_trait;
use thiserror::Error;

use crate::event::Event;

/// A notifier failed to accept an event
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A notifier could not be built from its configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing {field}")]
    MissingField {
        notifier: &'static str,
        field: &'static str,
    },
    #[error("unknown notifier type {0:?}")]
    UnknownNotifier(String),
}

/// A delivery sink for events that survive stash evaluation
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Deliver one event
    async fn deliver(&self, event: &Event) -> Result<(), DeliveryError>;

    /// Stable name used in logs and destination lists
    fn name(&self) -> &str;
}
