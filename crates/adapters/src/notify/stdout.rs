// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console notifier: one JSON line per event on stdout

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use ct_core::{DeliveryError, Event, Notifier};

/// Writes each delivered event as a JSON line
pub struct StdoutNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl StdoutNotifier {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Write to `out` instead of the process's stdout
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }
}

impl Default for StdoutNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        out.write_all(&line)?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

#[cfg(test)]
#[path = "stdout_tests.rs"]
mod tests;
