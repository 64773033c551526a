// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch engine: stash evaluation and notifier fan-out

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::event::Event;
use crate::notifier::{DeliveryError, Notifier};
use crate::stash::{Stash, StashId};

/// What happened to an event at one notifier
#[derive(Debug)]
pub enum Outcome {
    /// A stash matched; the notifier was not called
    Suppressed { stash: StashId },
    Delivered,
    Failed(DeliveryError),
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Outcome::Suppressed { .. })
    }
}

/// Per-notifier outcomes of one dispatch pass, in notifier order
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub outcomes: Vec<(String, Outcome)>,
}

impl DispatchReport {
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_delivered()).count()
    }

    pub fn suppressed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_suppressed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Failed(_)))
            .count()
    }

    /// Outcome for the first notifier with the given name
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }
}

#[derive(Default)]
struct Registry {
    stashes: BTreeMap<StashId, Stash>,
    notifiers: Vec<Arc<dyn Notifier>>,
    last_id: u64,
}

/// Owns the stashes and notifiers and routes events between them
///
/// Dispatch takes the lock shared, so concurrent `process` calls run side
/// by side. Registration takes it exclusively and waits for in-flight
/// dispatches, including their outbound deliveries.
#[derive(Default)]
pub struct Controller {
    registry: RwLock<Registry>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stash and return its id
    ///
    /// Ids start at 1 and are never reused.
    pub async fn add_stash(&self, stash: Stash) -> StashId {
        if stash.is_inert() {
            warn!("stash has no event_name or user_name; it will never match");
        }
        let mut registry = self.registry.write().await;
        registry.last_id += 1;
        let id = StashId(registry.last_id);
        registry.stashes.insert(id, stash);
        id
    }

    /// Append a notifier to the fan-out list
    pub async fn add_notifier(&self, notifier: Arc<dyn Notifier>) {
        let mut registry = self.registry.write().await;
        registry.notifiers.push(notifier);
    }

    /// Snapshot of registered stashes
    pub async fn stashes(&self) -> BTreeMap<StashId, Stash> {
        self.registry.read().await.stashes.clone()
    }

    /// Number of registered stashes
    pub async fn stash_count(&self) -> usize {
        self.registry.read().await.stashes.len()
    }

    /// Names of registered notifiers, in fan-out order
    pub async fn notifier_names(&self) -> Vec<String> {
        let registry = self.registry.read().await;
        registry
            .notifiers
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }

    /// Evaluate stashes and deliver `event` to every notifier
    ///
    /// Each notifier is considered independently and in registration
    /// order. A delivery failure is recorded and logged and never stops
    /// the pass.
    pub async fn process(&self, event: &Event) -> DispatchReport {
        let registry = self.registry.read().await;
        let mut report = DispatchReport::default();

        for notifier in &registry.notifiers {
            let dest = notifier.name();

            let outcome = match registry.matching_stash(event) {
                Some(stash) => {
                    info!(dest, id = event.id(), %stash, "discard");
                    Outcome::Suppressed { stash }
                }
                None => match notifier.deliver(event).await {
                    Ok(()) => {
                        info!(dest, id = event.id(), status = "ok", "send");
                        Outcome::Delivered
                    }
                    Err(e) => {
                        warn!(dest, id = event.id(), status = "error", error = %e, "send");
                        Outcome::Failed(e)
                    }
                },
            };

            report.outcomes.push((dest.to_string(), outcome));
        }

        report
    }
}

impl Registry {
    fn matching_stash(&self, event: &Event) -> Option<StashId> {
        for (id, stash) in &self.stashes {
            if stash.matches(event) {
                debug!(stash = %id, "match");
                return Some(*id);
            }
            debug!(stash = %id, "no match");
        }
        None
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
