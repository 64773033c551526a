// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound audit events
//!
//! Keys follow the CloudTrail `Event` record, which is the contract with
//! the upstream event source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audit event as submitted to `/test`
///
/// Besides the PascalCase keys, the camelCase, lower case and upper case
/// spellings used by CloudTrail and older event sources are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    #[serde(
        default,
        alias = "eventID",
        alias = "eventId",
        alias = "EventID",
        alias = "eventid",
        alias = "EVENTID",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_id: Option<String>,
    #[serde(
        default,
        alias = "eventName",
        alias = "eventname",
        alias = "EVENTNAME",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_name: Option<String>,
    #[serde(
        default,
        alias = "userName",
        alias = "UserName",
        alias = "username",
        alias = "USERNAME",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    #[serde(
        default,
        alias = "eventSource",
        alias = "eventsource",
        alias = "EVENTSOURCE",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_source: Option<String>,
    #[serde(
        default,
        alias = "eventTime",
        alias = "eventtime",
        alias = "EVENTTIME",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_time: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "accessKeyId",
        alias = "accesskeyid",
        alias = "ACCESSKEYID",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_key_id: Option<String>,
    /// `"true"` or `"false"`, kept as sent
    #[serde(
        default,
        alias = "readOnly",
        alias = "readonly",
        alias = "READONLY",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_only: Option<String>,
    /// Raw JSON of the full CloudTrail record
    #[serde(
        default,
        alias = "cloudTrailEvent",
        alias = "cloudtrailevent",
        alias = "CLOUDTRAILEVENT",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_trail_event: Option<String>,
    #[serde(
        default,
        alias = "resources",
        alias = "RESOURCES",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resources: Vec<Resource>,
}

/// A resource referenced by an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(
        default,
        alias = "resourceName",
        alias = "resourcename",
        alias = "RESOURCENAME",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_name: Option<String>,
    #[serde(
        default,
        alias = "resourceType",
        alias = "resourcetype",
        alias = "RESOURCETYPE",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_type: Option<String>,
}

impl Event {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Event identifier, or an empty string when absent
    pub fn id(&self) -> &str {
        self.event_id.as_deref().unwrap_or_default()
    }
}
