// src/config.rs
// =============================================================================
// Run settings: which hosts to keep, how long to wait for a page, what
// User-Agent to send, and how many pages to fetch at once.
//
// Settings are layered:
// 1. Built-in defaults
// 2. An optional TOML file (--config path)
// 3. Command-line flags
//
// Example config.toml (every key is optional):
//
//     hosts = ["mediafire", "pixeldrain"]
//     timeout_secs = 20
//     concurrency = 4
//     user_agent = "Mozilla/5.0 ..."
// =============================================================================

use crate::extract::{FetchOptions, HostAllowList, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("host allow-list is empty")]
    EmptyAllowList,

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Substrings a link must contain (case-insensitive) to be kept.
    pub hosts: HostAllowList,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every page request.
    pub user_agent: String,
    /// Maximum number of pages fetched at the same time (1 = one by one).
    pub concurrency: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            hosts: HostAllowList::default(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: 1,
        }
    }
}

// Values given on the command line
//
// None / empty means "not given, keep whatever the file or defaults say".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub hosts: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    pub user_agent: Option<String>,
}

impl HarvestConfig {
    /// Reads a TOML config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let cfg: HarvestConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(cfg)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if !overrides.hosts.is_empty() {
            self.hosts = HostAllowList::from_entries(overrides.hosts);
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(user_agent) = overrides.user_agent {
            self.user_agent = user_agent;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hosts.is_empty() {
            return Err(ConfigError::EmptyAllowList);
        }
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

// Builds the final config: defaults, then the file (if any), then flags
pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<HarvestConfig, ConfigError> {
    let mut cfg = match path {
        Some(path) => HarvestConfig::load(path)?,
        None => HarvestConfig::default(),
    };

    cfg.apply(overrides);
    cfg.validate()?;
    Ok(cfg)
}
