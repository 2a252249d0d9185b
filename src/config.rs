//! Configuration management for hastatus.
//!
//! Handles loading, merging, and validating configuration from files and CLI
//! arguments. Supports YAML, JSON, and TOML formats; precedence is
//! CLI > config file > defaults.

use crate::cli::{Args, ConfigFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// Default configuration constants
pub const DEFAULT_SOCKET_PATH: &str = hastatus::DEFAULT_SOCKET;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Tool configuration. Every field is optional so that file values and CLI
/// overrides can be told apart from defaults while merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the HAProxy stats socket.
    #[serde(alias = "socket-path")]
    pub socket: Option<PathBuf>,

    /// Per-operation socket timeout in milliseconds; 0 disables the timeout.
    #[serde(alias = "timeout-ms")]
    pub timeout_ms: Option<u64>,

    /// "text" | "json"
    #[serde(alias = "output-format")]
    pub format: Option<String>,

    // Logging
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket: Some(PathBuf::from(DEFAULT_SOCKET_PATH)),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            format: Some("text".into()),
            log_level: Some("info".into()),
        }
    }
}

impl Config {
    /// Effective socket path after defaulting.
    pub fn socket_path(&self) -> PathBuf {
        self.socket
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
    }

    /// Effective socket timeout; `None` means block indefinitely.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        match self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS) {
            0 => None,
            ms => Some(std::time::Duration::from_millis(ms)),
        }
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if cfg.socket_path().as_os_str().is_empty() {
        return Err("socket path must not be empty".into());
    }

    if let Some(format) = cfg.format.as_deref() {
        match format {
            "text" | "json" => {}
            other => {
                return Err(format!(
                    "Invalid output format '{}', expected 'text' or 'json'",
                    other
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref().and_then(|p| p.to_str()))?
    };

    // Override with CLI args
    if let Some(socket) = &args.socket {
        config.socket = Some(socket.clone());
    }

    if args.timeout_ms.is_some() {
        config.timeout_ms = args.timeout_ms;
    }

    if let Some(format) = &args.format {
        config.format = Some(format.as_str().to_string());
    }

    Ok(config)
}

/// Enhanced configuration loading with multiple format support
pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        // Try default locations
        let defaults = [
            "/etc/hastatus/config.yaml",
            "/etc/hastatus/config.yml",
            "/etc/hastatus/config.json",
            "./hastatus.yaml",
            "./hastatus.yml",
            "./hastatus.json",
        ];

        defaults
            .iter()
            .find(|p| Path::new(p).exists())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(""))
    };

    if !path.exists() || path.to_string_lossy().is_empty() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.socket_path(), PathBuf::from(DEFAULT_SOCKET_PATH));
        assert_eq!(
            cfg.timeout(),
            Some(std::time::Duration::from_millis(DEFAULT_TIMEOUT_MS))
        );
        assert!(validate_effective_config(&cfg).is_ok());
    }

    #[test]
    fn test_zero_timeout_means_blocking() {
        let cfg = Config {
            timeout_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(cfg.timeout(), None);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let cfg = Config {
            format: Some("xml".into()),
            ..Config::default()
        };
        assert!(validate_effective_config(&cfg).is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = "socket: /tmp/ha.sock\ntimeout-ms: 250\nformat: json\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.socket_path(), PathBuf::from("/tmp/ha.sock"));
        assert_eq!(cfg.timeout_ms, Some(250));
        assert_eq!(cfg.format.as_deref(), Some("json"));
    }
}
