//! SpaceBot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceBotConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl Default for SpaceBotConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
        }
    }
}

impl SpaceBotConfig {
    /// Load config from the default path (~/.spacebot/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::SpaceBotError::Config(format!("Failed to read config: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            crate::error::SpaceBotError::Config(format!("Failed to parse config: {e}"))
        })?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::error::SpaceBotError::Config(format!("Failed to serialize config: {e}"))
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".spacebot")
            .join("config.toml")
    }
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SpaceBotConfig::default();
        assert_eq!(cfg.gateway.host, "0.0.0.0");
        assert_eq!(cfg.gateway.port, 5000);
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway]\nport = 8080\n").unwrap();
        let cfg = SpaceBotConfig::load_from(&path).unwrap();
        assert_eq!(cfg.gateway.port, 8080);
        // Host falls back to the serde default.
        assert_eq!(cfg.gateway.host, "0.0.0.0");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();
        assert!(SpaceBotConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let cfg = SpaceBotConfig::default();
        let content = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SpaceBotConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.gateway.port, cfg.gateway.port);
    }
}
