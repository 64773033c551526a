// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced notifier wrapper for consistent observability

use async_trait::async_trait;
use ct_core::{DeliveryError, Event, Notifier};
use tracing::Instrument;

/// Wrapper that adds tracing to any Notifier
#[derive(Clone)]
pub struct TracedNotifier<N> {
    inner: N,
}

impl<N> TracedNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: Notifier> Notifier for TracedNotifier<N> {
    async fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        let span = tracing::info_span!("notify.deliver", dest = self.inner.name(), id = event.id());

        async {
            tracing::debug!("delivering");

            let start = std::time::Instant::now();
            let result = self.inner.deliver(event).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "delivered"),
                Err(e) => tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "delivery failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
