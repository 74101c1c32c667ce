//! TOML configuration for the daemon
//!
//! Every section is optional; missing values fall back to the defaults
//! below. `CORS_ALLOWED_ORIGINS` in the environment overrides the
//! `[cors]` section.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use route_core::{DEFAULT_GROUP_SIZE, DEFAULT_OUTPUT_PATH};
use serde::Deserialize;

/// Environment variable holding comma-separated allowed origins
pub const CORS_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub output: OutputSection,
    pub routing: RoutingSection,
    pub cors: CorsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Artifact written on every batch
    pub path: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingSection {
    /// Places per directions link (origin + waypoints + destination)
    pub group_size: usize,
}

impl Default for RoutingSection {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsSection {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path, e))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `CORS_ALLOWED_ORIGINS` if it is set and non-empty
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var(CORS_ORIGINS_ENV) {
            self.apply_cors_origins(&value);
        }
    }

    fn apply_cors_origins(&mut self, value: &str) {
        let origins = parse_origins(value);
        if !origins.is_empty() {
            tracing::info!(?origins, "Using CORS origins from {}", CORS_ORIGINS_ENV);
            self.cors.allowed_origins = origins;
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}

/// Load variables from a `.env` file into the process environment.
///
/// `None` searches the working directory and its parents. A missing file is
/// not an error; variables already set in the environment are kept.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
