// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cloudtail daemon: configuration, startup and the HTTP front end

pub mod config;
pub mod lifecycle;
pub mod server;

pub use config::{Config, ConfigError};
pub use lifecycle::{startup, Daemon, LifecycleError};
pub use server::router;
