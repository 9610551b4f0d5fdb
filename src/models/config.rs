//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::selectors::SelectorConfig;
use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listening address for the API
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream site and HTTP client settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Scraping rules
    #[serde(default)]
    pub selectors: SelectorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::validation("server.port must be > 0"));
        }
        if self.upstream.user_agent.trim().is_empty() {
            return Err(AppError::validation("upstream.user_agent is empty"));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(AppError::validation("upstream.timeout_secs must be > 0"));
        }
        self.upstream.base()?;
        Ok(())
    }
}

/// API listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,

    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

/// How a category maps to an upstream listing URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStrategy {
    /// `{base}/{listing_path}?genre={id}&page={p}`
    #[default]
    GenreQuery,

    /// `{base}/{category_path}/{slug}?page={p}`
    Slug,
}

/// Upstream site layout and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Root of the upstream site, e.g. `https://wix.maxcine.top/public`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Movie listing page, filterable by `genre`
    #[serde(default = "defaults::listing_path")]
    pub listing_path: String,

    /// Per-category pages addressed by slug
    #[serde(default = "defaults::category_path")]
    pub category_path: String,

    /// Search results page, queried with `search`
    #[serde(default = "defaults::search_path")]
    pub search_path: String,

    /// Single movie page, followed by the movie id
    #[serde(default = "defaults::detail_path")]
    pub detail_path: String,

    #[serde(default)]
    pub category_strategy: CategoryStrategy,

    /// User-Agent header for upstream requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Parsed base URL with a trailing slash so relative joins keep its path.
    pub fn base(&self) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?)
    }

    /// Build an upstream URL from path segments below the base URL.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base()?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::config("upstream.base_url cannot be a base"))?;
            path.pop_if_empty();
            for segment in segments {
                for part in segment.split('/').filter(|p| !p.is_empty()) {
                    path.push(part);
                }
            }
        }
        Ok(url)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            listing_path: defaults::listing_path(),
            category_path: defaults::category_path(),
            search_path: defaults::search_path(),
            detail_path: defaults::detail_path(),
            category_strategy: CategoryStrategy::default(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Server defaults
    pub fn host() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        5000
    }

    // Upstream defaults
    pub fn base_url() -> String {
        "https://wix.maxcine.top/public".into()
    }
    pub fn listing_path() -> String {
        "filmes".into()
    }
    pub fn category_path() -> String {
        "categoria".into()
    }
    pub fn search_path() -> String {
        "pesquisa".into()
    }
    pub fn detail_path() -> String {
        "filme".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; maxcine/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
