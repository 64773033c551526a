// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification sinks

mod hipchat;
mod stdout;

pub use hipchat::{HipchatNotifier, HIPCHAT_DEFAULT_ENDPOINT};
pub use stdout::StdoutNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;

use std::collections::HashMap;
use std::sync::Arc;

use ct_core::{ConfigurationError, Notifier};

use crate::traced::TracedNotifier;

/// Build a notifier from its type name and flat configuration
///
/// Recognized types are `stdout` and `hipchat`. The returned notifier
/// is wrapped with tracing.
pub fn build_notifier(
    kind: &str,
    config: &HashMap<String, String>,
) -> Result<Arc<dyn Notifier>, ConfigurationError> {
    match kind {
        "stdout" => Ok(Arc::new(TracedNotifier::new(StdoutNotifier::new()))),
        "hipchat" => Ok(Arc::new(TracedNotifier::new(HipchatNotifier::from_config(
            config,
        )?))),
        other => Err(ConfigurationError::UnknownNotifier(other.to_string())),
    }
}
