// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HipChat room notifier
//!
//! Posts the event id to `/v2/room/{room}/notification` with a bearer token.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use ct_core::{ConfigurationError, DeliveryError, Event, Notifier};
use serde::Serialize;

/// Used unless the configuration sets `endpoint`
pub const HIPCHAT_DEFAULT_ENDPOINT: &str = "https://api.hipchat.com";

/// Sends a notification to a HipChat room for each event
#[derive(Clone)]
pub struct HipchatNotifier {
    endpoint: String,
    room: String,
    token: String,
    from: String,
    agent: ureq::Agent,
}

/// Body of a room notification
#[derive(Debug, Serialize)]
struct HipchatMessage<'a> {
    from: &'a str,
    message: &'a str,
}

impl HipchatNotifier {
    /// Build from a flat config map with keys `room`, `token`, `from` and
    /// optionally `endpoint`. Unknown keys are ignored.
    pub fn from_config(config: &HashMap<String, String>) -> Result<Self, ConfigurationError> {
        let room = required(config, "room")?;
        let token = required(config, "token")?;
        let from = required(config, "from")?;
        let endpoint = config
            .get("endpoint")
            .filter(|e| !e.is_empty())
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or_else(|| HIPCHAT_DEFAULT_ENDPOINT.to_string());

        // Status codes are inspected by deliver, not turned into errors by ureq
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build(),
        );

        let notifier = Self {
            endpoint,
            room,
            token,
            from,
            agent,
        };
        tracing::info!(?notifier, "hipchat notifier configured");
        Ok(notifier)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    fn notification_url(&self) -> String {
        format!("{}/v2/room/{}/notification", self.endpoint, self.room)
    }
}

fn required(
    config: &HashMap<String, String>,
    field: &'static str,
) -> Result<String, ConfigurationError> {
    match config.get(field) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ConfigurationError::MissingField {
            notifier: "hipchat",
            field,
        }),
    }
}

impl fmt::Debug for HipchatNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HipchatNotifier")
            .field("endpoint", &self.endpoint)
            .field("room", &self.room)
            .field("token", &"[REDACTED]")
            .field("from", &self.from)
            .finish()
    }
}

#[async_trait]
impl Notifier for HipchatNotifier {
    async fn deliver(&self, event: &Event) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(&HipchatMessage {
            from: &self.from,
            message: event.id(),
        })?;
        let agent = self.agent.clone();
        let url = self.notification_url();
        let auth = format!("Bearer {}", self.token);

        tokio::task::spawn_blocking(move || post(&agent, &url, &auth, body))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
    }

    fn name(&self) -> &str {
        "hipchat"
    }
}

fn post(agent: &ureq::Agent, url: &str, auth: &str, body: Vec<u8>) -> Result<(), DeliveryError> {
    let mut response = agent
        .post(url)
        .header("Authorization", auth)
        .header("Content-Type", "application/json")
        .send(body)
        .map_err(|e| DeliveryError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|e| DeliveryError::Transport(format!("failed to read response: {}", e)))?;

    if status >= 300 {
        return Err(DeliveryError::Status { status, body: text });
    }
    Ok(())
}

#[cfg(test)]
#[path = "hipchat_tests.rs"]
mod tests;
