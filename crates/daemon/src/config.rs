// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration file

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};

use ct_core::Stash;
use serde::Deserialize;
use thiserror::Error;

/// Port used when neither `--port` nor `listen` is given
pub const DEFAULT_PORT: u16 = 8888;

/// Contents of the JSON config file passed with `-f`
///
/// Keys are accepted in lower case or with the capitalised spelling of
/// older config files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// `host:port` or `:port`
    #[serde(default, alias = "Listen")]
    pub listen: Option<String>,
    #[serde(default, alias = "Debug")]
    pub debug: bool,
    /// Notifier type name to its flat settings
    #[serde(default, alias = "Notifiers")]
    pub notifiers: BTreeMap<String, HashMap<String, String>>,
    /// Stashes registered at startup, in order
    #[serde(default, alias = "Stashes")]
    pub stashes: Vec<Stash>,
}

/// Errors reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Address to bind: an explicit port wins, then `listen`, then the default port
    pub fn listen_address(&self, port: Option<u16>) -> String {
        if let Some(port) = port {
            return format!("0.0.0.0:{}", port);
        }
        match self.listen.as_deref() {
            Some(listen) if listen.starts_with(':') => format!("0.0.0.0{}", listen),
            Some(listen) if !listen.is_empty() => listen.to_string(),
            _ => format!("0.0.0.0:{}", DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
