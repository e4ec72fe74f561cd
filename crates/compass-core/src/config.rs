use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Result, anyhow, bail};

use crate::chat::RandomDelay;
use crate::roadmap::DEFAULT_START_BASE;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub min_reply_delay_ms: u64,
    pub max_reply_delay_ms: u64,
    pub start_url_base: String,
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_reply_delay_ms: 1000,
            max_reply_delay_ms: 3000,
            start_url_base: DEFAULT_START_BASE.to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the user config dir, falling back to defaults when the file
    /// does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    /// Write this config to `path` unless a file is already there, so users
    /// have something to edit. Returns whether a file was written.
    pub fn write_if_missing(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to(path)?;
        Ok(true)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_reply_delay_ms > self.max_reply_delay_ms {
            bail!(
                "min_reply_delay_ms ({}) is greater than max_reply_delay_ms ({})",
                self.min_reply_delay_ms,
                self.max_reply_delay_ms
            );
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> RandomDelay {
        RandomDelay::new(
            Duration::from_millis(self.min_reply_delay_ms),
            Duration::from_millis(self.max_reply_delay_ms),
        )
    }

    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("career-compass"))
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ReplyDelay;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.start_url_base, "careers.html");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"max_reply_delay_ms": 10}"#).unwrap();
        // min (1000) > max (10) is rejected
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, r#"{"min_reply_delay_ms": 5, "max_reply_delay_ms": 10}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.min_reply_delay_ms, 5);
        assert_eq!(config.start_url_base, "careers.html");
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            log_filter: Some("compass=debug".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_write_if_missing_keeps_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(Config::default().write_if_missing(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        fs::write(&path, r#"{"start_url_base": "start.html"}"#).unwrap();
        assert!(!Config::default().write_if_missing(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap().start_url_base, "start.html");
    }

    #[test]
    fn test_reply_delay_uses_configured_bounds() {
        let config = Config {
            min_reply_delay_ms: 20,
            max_reply_delay_ms: 20,
            ..Config::default()
        };
        let mut delay = config.reply_delay();
        assert_eq!(delay.next_delay(), Duration::from_millis(20));
    }
}
