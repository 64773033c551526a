// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stashes: suppression rules evaluated before delivery
//!
//! A stash matches an event when any of its set filters equals the
//! corresponding event field. Only `event_name` and `user_name` are
//! compared today; the remaining fields are accepted and stored but take
//! no part in matching.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Identifier assigned to a stash at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StashId(pub u64);

impl fmt::Display for StashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A suppression rule
///
/// Keys are snake_case; the upper case and capitalised spellings accepted
/// by older clients decode too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stash {
    #[serde(
        default,
        alias = "EVENT_NAME",
        alias = "Event_Name",
        skip_serializing_if = "String::is_empty"
    )]
    pub event_name: String,
    #[serde(
        default,
        alias = "USER_NAME",
        alias = "User_Name",
        skip_serializing_if = "String::is_empty"
    )]
    pub user_name: String,
    /// Reserved: not enforced
    #[serde(
        default,
        alias = "TTL",
        alias = "Ttl",
        with = "humantime_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<Duration>,
    /// Reserved: not enforced
    #[serde(
        default,
        alias = "EXPIRATION",
        alias = "Expiration",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration: Option<DateTime<Utc>>,
    /// Reserved: not compared
    #[serde(
        default,
        alias = "REGEX",
        alias = "Regex",
        skip_serializing_if = "String::is_empty"
    )]
    pub regex: String,
    /// Reserved: not compared
    #[serde(
        default,
        alias = "RESOURCE_NAME",
        alias = "Resource_Name",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_name: String,
    /// Reserved: not compared
    #[serde(
        default,
        alias = "RESOURCE_TYPE",
        alias = "Resource_Type",
        skip_serializing_if = "String::is_empty"
    )]
    pub resource_type: String,
    #[serde(
        default,
        alias = "DESCRIPTION",
        alias = "Description",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    /// Reserved: every stash applies to every notifier regardless of this list
    #[serde(
        default,
        alias = "DESTINATIONS",
        alias = "Destinations",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub destinations: Vec<String>,
}

impl Stash {
    pub fn for_event_name(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            ..Self::default()
        }
    }

    pub fn for_user_name(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Self::default()
        }
    }

    /// Whether this stash suppresses `event`
    ///
    /// True if any set filter equals the event's field exactly. Unset
    /// (empty) filters never contribute, so a stash with nothing set
    /// matches nothing.
    pub fn matches(&self, event: &Event) -> bool {
        field_matches(&self.event_name, event.event_name.as_deref())
            || field_matches(&self.user_name, event.username.as_deref())
    }

    /// True when no compared filter is set
    pub fn is_inert(&self) -> bool {
        self.event_name.is_empty() && self.user_name.is_empty()
    }
}

fn field_matches(filter: &str, value: Option<&str>) -> bool {
    !filter.is_empty() && value == Some(filter)
}

#[cfg(test)]
#[path = "stash_tests.rs"]
mod tests;
