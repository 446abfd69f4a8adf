//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORIGIN_HOST` - Bind address (default: 0.0.0.0)
//! - `ORIGIN_PORT` - Listen port (default: 8000)
//! - `ORIGIN_ASSETS_DIR` - Directory holding `index.html` (default: `./assets`, then `../assets`)
//! - `ORIGIN_STORAGE` - Cart storage backend: `file`, `memory` or `disabled` (default: file)
//! - `ORIGIN_STORAGE_DIR` - Directory for the file backend (default: .origin-cafe)
//! - `ORIGIN_WHATSAPP_NUMBER` - Number orders are sent to; empty opens the contact picker
//! - `ORIGIN_INSTAGRAM_USERNAME` - Profile orders are sent to (default: origin_tfto)

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which `KeyValueStore` backend the cart persists through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    File(PathBuf),
    Memory,
    Disabled,
}

/// Outbound channel settings used at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// WhatsApp number in international format; may be empty
    pub whatsapp_number: String,
    /// Instagram profile handle
    pub instagram_username: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: String::new(),
            instagram_username: "origin_tfto".to_string(),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory the storefront page is served from
    pub assets_dir: PathBuf,
    /// Cart persistence backend
    pub storage: StorageBackend,
    /// Outbound channels
    pub channels: ChannelConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or_default(&lookup, "ORIGIN_HOST", "0.0.0.0")?;
        let port = parse_or_default(&lookup, "ORIGIN_PORT", "8000")?;

        let assets_dir = match lookup("ORIGIN_ASSETS_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                locate_assets_directory(&current_dir)
            }
        };

        let storage_dir = lookup("ORIGIN_STORAGE_DIR").unwrap_or_else(|| ".origin-cafe".into());
        let storage = match lookup("ORIGIN_STORAGE")
            .unwrap_or_else(|| "file".into())
            .to_ascii_lowercase()
            .as_str()
        {
            "file" => StorageBackend::File(PathBuf::from(storage_dir)),
            "memory" => StorageBackend::Memory,
            "disabled" | "none" => StorageBackend::Disabled,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "ORIGIN_STORAGE".to_string(),
                    format!("unknown backend '{}'", other),
                ))
            }
        };

        let defaults = ChannelConfig::default();
        let channels = ChannelConfig {
            whatsapp_number: lookup("ORIGIN_WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            instagram_username: lookup("ORIGIN_INSTAGRAM_USERNAME")
                .unwrap_or(defaults.instagram_username),
        };

        Ok(Self {
            host,
            port,
            assets_dir,
            storage,
            channels,
        })
    }

    /// Returns the socket address for binding the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Attempts to locate the assets directory using a multi-step strategy
fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // 1. ./assets
    // 2. ../assets (if running from a subdir)
    // 3. Fallback to "assets" relative path

    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets")
}
