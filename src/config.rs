//! Server address resolution
//!
//! The address the client talks to resolves per field with this priority
//! order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`RAUDIO_HOST` / `RAUDIO_PORT`)
//! 3. TOML config file (`~/.config/raudio/config.toml`, `[server]` table)
//! 4. Compiled default (fallback)
//!
//! Configuration is read once at process start and is not reloadable.

use crate::error::{ClientError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default server host, including the scheme.
pub const DEFAULT_HOST: &str = "https://127.0.0.1";
/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

const HOST_ENV_VAR: &str = "RAUDIO_HOST";
const PORT_ENV_VAR: &str = "RAUDIO_PORT";

/// Resolved and validated server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Scheme plus hostname, e.g. `https://127.0.0.1`.
    pub host: String,
    /// TCP port, always nonzero.
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    server: ServerTable,
}

#[derive(Debug, Default, Deserialize)]
struct ServerTable {
    host: Option<String>,
    port: Option<u16>,
}

impl ServerAddress {
    /// Validate and build an address directly, skipping the layered lookup.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(ClientError::Config(
                "server host must not be empty".to_string(),
            ));
        }
        if port == 0 {
            return Err(ClientError::Config(
                "server port must be nonzero".to_string(),
            ));
        }
        Ok(Self { host, port })
    }

    /// Resolve the server address from CLI arguments, environment, config
    /// file, and compiled defaults, in that priority order.
    pub fn resolve(cli_host: Option<&str>, cli_port: Option<u16>) -> Result<Self> {
        let file = load_config_file()?;
        Self::resolve_with(
            cli_host,
            cli_port,
            std::env::var(HOST_ENV_VAR).ok(),
            std::env::var(PORT_ENV_VAR).ok(),
            &file,
        )
    }

    fn resolve_with(
        cli_host: Option<&str>,
        cli_port: Option<u16>,
        env_host: Option<String>,
        env_port: Option<String>,
        file: &TomlConfig,
    ) -> Result<Self> {
        let host = match (cli_host, env_host) {
            (Some(host), _) => host.to_string(),
            (None, Some(host)) => host,
            (None, None) => file
                .server
                .host
                .clone()
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        };

        let port = match (cli_port, env_port) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw.parse::<u16>().map_err(|_| {
                ClientError::Config(format!("{PORT_ENV_VAR} is not a valid port: {raw}"))
            })?,
            (None, None) => file.server.port.unwrap_or(DEFAULT_PORT),
        };

        Self::new(host, port)
    }
}

/// Config file location for the platform.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("raudio").join("config.toml"))
}

fn load_config_file() -> Result<TomlConfig> {
    match config_file_path() {
        Some(path) => load_toml(&path),
        None => Ok(TomlConfig::default()),
    }
}

/// Parse a TOML config file; a missing file yields the empty config.
fn load_toml(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        return Ok(TomlConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        ClientError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content).map_err(|e| {
        ClientError::Config(format!("failed to parse {}: {}", path.display(), e))
    })
}
