// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ct-core: dispatch engine for cloudtail
//!
//! This crate provides:
//! - The inbound audit `Event` shape
//! - `Stash` suppression rules and their match procedure
//! - The `Notifier` contract that delivery sinks implement
//! - The `Controller`, which evaluates stashes and fans events out

pub mod controller;
pub mod event;
pub mod notifier;
pub mod stash;

pub use controller::{Controller, DispatchReport, Outcome};
pub use event::{Event, Resource};
pub use notifier::{ConfigurationError, DeliveryError, Notifier};
pub use stash::{Stash, StashId};
