//! Application configuration
//!
//! Values come from an optional JSON file (the `etc/*.json` layout used by
//! earlier deployments) and are then overridden by environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "etc/development.json";
const DEFAULT_DATABASE_URL: &str = "sqlite:course_management.db?mode=rwc";
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection string for the relational store
    pub database_url: String,
    /// Interface to bind
    pub server_host: String,
    /// HTTP listen port
    pub server_port: u16,
    /// Upper bound on a single use-case call
    pub request_timeout: Duration,
    /// CORS allowed origins (empty disables CORS, "*" allows any)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// On-disk configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServer,
    #[serde(default)]
    pub resource: FileResource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileServer {
    /// Either `":8080"` or `"8080"`.
    pub http_port: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileResource {
    pub primary_database: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))
    }
}

impl AppConfig {
    /// Load configuration from `COURSEMGMT_CONFIG` (or the default file if it
    /// exists) and the process environment.
    pub fn load() -> Result<Self> {
        let file = match env::var("COURSEMGMT_CONFIG") {
            Ok(path) => Some(FileConfig::from_path(Path::new(&path))?),
            Err(_) => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Some(FileConfig::from_path(default_path)?)
                } else {
                    None
                }
            }
        };

        Self::from_sources(file, |key| env::var(key).ok())
    }

    /// Merge file values and environment lookups over the defaults.
    pub fn from_sources(
        file: Option<FileConfig>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(port) = file.server.http_port {
                config.server_port = parse_port(&port)?;
            }
            if let Some(database_url) = file.resource.primary_database {
                config.database_url = database_url;
            }
        }

        if let Some(database_url) = lookup("DATABASE_URL") {
            config.database_url = database_url;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            config.server_host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            config.server_port = parse_port(&port)?;
        }
        if let Some(timeout) = lookup("REQUEST_TIMEOUT_MS") {
            let millis: u64 = timeout
                .trim()
                .parse()
                .context("REQUEST_TIMEOUT_MS must be a number of milliseconds")?;
            config.request_timeout = Duration::from_millis(millis);
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .context("SERVER_HOST/SERVER_PORT do not form a valid socket address")
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .trim_start_matches(':')
        .parse()
        .with_context(|| format!("invalid port: {raw}"))
}
