//! services/api/src/config.rs
//!
//! Defines the configuration of the gateway, the front door and the portal
//! client, and their loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use reqwest::Url;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::Level;

/// Namespace of the persisted client session.
pub const SESSION_NAMESPACE: &str = "auth-storage";

const DEFAULT_API_PORT: u16 = 3001;
const DEFAULT_PROXY_PORT: u16 = 8080;
const DEFAULT_BACKEND_URL: &str = "http://localhost:3002";
const DEFAULT_GATEWAY_URL: &str = "http://localhost:3001";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds the gateway configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Candidate directories for the built client bundle, in probing order.
    pub static_dirs: Vec<PathBuf>,
}

/// Holds the front door (reverse proxy) configuration.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub static_dirs: Vec<PathBuf>,
    /// Where `/api/` requests are forwarded.
    pub backend_url: Url,
}

/// Holds the portal client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub gateway_url: Url,
    pub log_level: Level,
    /// Directory holding the persisted session file.
    pub session_dir: PathBuf,
}

/// Where the built client bundle is looked for when `STATIC_DIRS` is unset.
pub fn default_static_dirs() -> Vec<PathBuf> {
    [
        "./public",
        "../frontend/dist",
        "../../frontend/dist",
        "./frontend/dist",
        "/app/frontend/dist",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Only load from .env in non-test mode to avoid contamination.
fn load_dotenv() {
    if !cfg!(test) {
        dotenvy::dotenv().ok();
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: bind_address(&lookup, DEFAULT_API_PORT)?,
            log_level: log_level(&lookup)?,
            static_dirs: static_dirs(&lookup),
        })
    }
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: bind_address(&lookup, DEFAULT_PROXY_PORT)?,
            log_level: log_level(&lookup)?,
            static_dirs: static_dirs(&lookup),
            backend_url: url(&lookup, "BACKEND_URL", DEFAULT_BACKEND_URL)?,
        })
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let session_dir = lookup("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".hr-portal"));
        Ok(Self {
            gateway_url: url(&lookup, "GATEWAY_URL", DEFAULT_GATEWAY_URL)?,
            log_level: log_level(&lookup)?,
            session_dir,
        })
    }
}

fn bind_address(
    lookup: &impl Fn(&str) -> Option<String>,
    default_port: u16,
) -> Result<SocketAddr, ConfigError> {
    let host_str = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let host = host_str
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidValue("HOST".to_string(), e.to_string()))?;

    let port = match lookup("PORT") {
        Some(port_str) => port_str
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), e.to_string()))?,
        None => default_port,
    };
    Ok(SocketAddr::new(host, port))
}

fn log_level(lookup: &impl Fn(&str) -> Option<String>) -> Result<Level, ConfigError> {
    let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
    log_level_str.parse::<Level>().map_err(|_| {
        ConfigError::InvalidValue(
            "RUST_LOG".to_string(),
            format!("'{}' is not a valid log level", log_level_str),
        )
    })
}

fn static_dirs(lookup: &impl Fn(&str) -> Option<String>) -> Vec<PathBuf> {
    match lookup("STATIC_DIRS") {
        Some(list) if !list.trim().is_empty() => std::env::split_paths(&list).collect(),
        _ => default_static_dirs(),
    }
}

fn url(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<Url, ConfigError> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
}
