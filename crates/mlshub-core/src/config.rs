//! Application configuration management.
//!
//! Configuration is stored at `~/.config/mlshub/config.json` and covers the
//! stats feed location and where settings and the team catalog live. Every
//! field is optional; a missing file means defaults.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::StatsEndpoint;

/// Application name used for config/data directory paths
const APP_NAME: &str = "mlshub";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the stats feed host
pub const STATS_URL_ENV: &str = "MLSHUB_STATS_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub stats_base_url: Option<String>,
    pub stats_path: Option<String>,
    /// Directory for persisted settings
    pub data_dir: Option<PathBuf>,
    /// Directory searched first for `teams.json`
    pub resource_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where settings are persisted.
    pub fn settings_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join("settings"))
    }

    /// Apply environment overrides on top of the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = std::env::var(STATS_URL_ENV).ok().filter(|u| !u.trim().is_empty()) {
            self.stats_base_url = Some(url);
        }
        self
    }

    /// The stats endpoint with any configured overrides applied.
    pub fn stats_endpoint(&self) -> StatsEndpoint {
        let mut endpoint = StatsEndpoint::team_stats();
        if let Some(ref base) = self.stats_base_url {
            endpoint = endpoint.with_base_url(base.trim_end_matches('/'));
        }
        if let Some(ref path) = self.stats_path {
            endpoint = endpoint.with_path(path.clone());
        }
        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, STATS_BASE_URL, STATS_PATH};

    #[test]
    fn test_default_endpoint() {
        let endpoint = Config::default().stats_endpoint();
        assert_eq!(endpoint.base_url(), STATS_BASE_URL);
        assert_eq!(endpoint.path(), STATS_PATH);
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = Config {
            stats_base_url: Some("http://localhost:8080/".to_string()),
            stats_path: Some("/mls.json".to_string()),
            ..Default::default()
        };
        let endpoint = config.stats_endpoint();
        assert_eq!(endpoint.base_url(), "http://localhost:8080");
        assert_eq!(endpoint.path(), "/mls.json");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/tmp/mlshub"}"#).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/mlshub")));
        assert_eq!(config.stats_base_url, None);
        assert_eq!(config.settings_dir().unwrap(), PathBuf::from("/tmp/mlshub"));
    }
}
