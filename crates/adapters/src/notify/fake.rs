// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ct_core::{DeliveryError, Event, Notifier};

/// Fake notifier that records every delivery attempt
#[derive(Clone)]
pub struct FakeNotifier {
    name: String,
    calls: Arc<Mutex<Vec<Event>>>,
    fail: Arc<AtomicBool>,
}

impl FakeNotifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::default(),
            fail: Arc::default(),
        }
    }

    /// A fake whose deliveries are recorded and then rejected
    pub fn failing(name: impl Into<String>) -> Self {
        let fake = Self::new(name);
        fake.set_failing(true);
        fake
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Get all recorded delivery attempts
    pub fn calls(&self) -> Vec<Event> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Ids of all recorded delivery attempts
    pub fn delivered_ids(&self) -> Vec<String> {
        self.calls().iter().map(|e| e.id().to_string()).collect()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Transport("fake failure".to_string()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
