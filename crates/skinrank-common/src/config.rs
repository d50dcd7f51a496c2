//! Configuration loading for SkinRank.
//! Reads skinrank.toml from the current directory or the path in SKINRANK_CONFIG.
//! A missing file falls back to defaults; SKINRANK_HOST / SKINRANK_PORT override the file.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkinRankError};

pub const CONFIG_ENV: &str = "SKINRANK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "skinrank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; RUST_LOG wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; built-in defaults were used.
    Defaults(PathBuf),
}

impl AppConfig {
    /// Load configuration from file, then apply environment overrides.
    /// Checks SKINRANK_CONFIG first, then the current directory.
    /// Nothing is logged here; callers report the source once tracing is up.
    pub fn load() -> Result<(Self, ConfigSource)> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let (mut config, source) = Self::load_from(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok((config, source))
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())));
        }

        let content = std::fs::read_to_string(path)?;
        Ok((Self::from_toml_str(&content)?, ConfigSource::File(path.to_path_buf())))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply SKINRANK_HOST / SKINRANK_PORT from the given lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SKINRANK_HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup("SKINRANK_PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                SkinRankError::Config(format!("SKINRANK_PORT is not a valid port: {port}"))
            })?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|_| SkinRankError::Config(format!("invalid bind address: {raw}")))
    }
}
