use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StorelensError};

/// Global storelens configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long the "Analysis complete!" status stays visible, in milliseconds
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,

    /// Fixed RNG seed. Random metrics are reproducible when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Page retrieval settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Global request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_status_clear_ms() -> u64 {
    2000
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("Mozilla/5.0 (compatible; storelens/{})", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_clear_ms: default_status_clear_ms(),
            seed: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.fetch.timeout_secs == 0 {
            return Err(StorelensError::ConfigError(
                "fetch.timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StorelensError::ConfigError(e.to_string()))
    }

    /// Get the config file path
    ///
    /// Supports STORELENS_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("STORELENS_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "storelens").ok_or_else(|| {
            StorelensError::ConfigError("Could not determine config directory".into())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.status_clear_ms, 2000);
        assert_eq!(config.fetch.timeout_secs, 10);
        assert!(config.seed.is_none());
        assert!(config.fetch.user_agent.contains("storelens"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("seed = 7\n[fetch]\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fetch.timeout_secs, 3);
        assert_eq!(config.status_clear_ms, 2000);
        assert_eq!(config.fetch.user_agent, default_user_agent());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_toml("[fetch]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, StorelensError::ConfigError(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config { seed: Some(99), ..Config::default() };
        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
