//! Runtime configuration.
//!
//! Configuration is read from a TOML file passed on the command line. A
//! missing file means defaults; missing fields within a present file fall
//! back per-section via `#[serde(default)]`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::{HirewireError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the search service.
    pub search_base_url: String,
    /// Base URL of the item service.
    pub item_base_url: String,
    /// Account that posts the monthly hiring threads.
    pub bot_author: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            search_base_url: "https://hn.algolia.com".into(),
            item_base_url: "https://hacker-news.firebaseio.com".into(),
            bot_author: "whoishiring".into(),
            timeout_secs: 10,
            user_agent: concat!("hirewire/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Seconds after which the resolved thread is considered possibly
    /// outdated. One value governs both the lazy re-resolution on reads and
    /// the background refresh cadence.
    pub staleness_secs: u64,
    /// Upper bound on concurrent item fetches within one page.
    pub fetch_workers: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            staleness_secs: 60,
            fetch_workers: 10,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            HirewireError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            HirewireError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
