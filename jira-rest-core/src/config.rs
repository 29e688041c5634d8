//! # Configuration Management
//!
//! Loads the jira-rest configuration file from the XDG config directory and
//! applies environment overrides. Every key is optional:
//!
//! ```toml
//! host = "company.atlassian.net"
//! api_path = "/rest/api/2"
//! timeout_secs = 30
//! connect_timeout_secs = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{APP_NAME, CONFIG_FILE_NAME, DEFAULT_API_PATH, ENV_JIRA_HOST};
use crate::url::ensure_url_scheme;

/// Represents the configuration directories for the jira-rest application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", APP_NAME).context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Load the configuration file, with environment overrides applied
  pub fn load_config(&self) -> Result<Config> {
    Ok(Config::load(&self.config_path())?.with_env_overrides())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Jira host, with or without scheme
  pub host: Option<String>,
  /// REST prefix, e.g. `/rest/api/2`
  pub api_path: Option<String>,
  /// Whole-request timeout in seconds
  pub timeout_secs: Option<u64>,
  /// Connect timeout in seconds
  pub connect_timeout_secs: Option<u64>,
}

impl Config {
  /// Load configuration from `path`, or defaults when the file is absent
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    Self::parse(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
  }

  /// Parse configuration from TOML text
  pub fn parse(content: &str) -> Result<Self> {
    Ok(toml::from_str(content)?)
  }

  /// Apply `JIRA_HOST` on top of the file settings
  pub fn with_env_overrides(mut self) -> Self {
    if let Some(host) = std::env::var(ENV_JIRA_HOST).ok().filter(|host| !host.trim().is_empty()) {
      debug!("Using Jira host from ${ENV_JIRA_HOST}");
      self.host = Some(host);
    }
    self
  }

  /// Jira base URL with scheme, e.g. `https://company.atlassian.net`
  pub fn base_url(&self) -> Result<String> {
    let host = self.host.as_deref().ok_or_else(|| {
      anyhow::anyhow!("Jira host not configured. Set ${ENV_JIRA_HOST} or `host` in {CONFIG_FILE_NAME}")
    })?;
    ensure_url_scheme(host)
  }

  /// REST prefix with a leading slash and no trailing slash
  pub fn api_path(&self) -> String {
    let path = self
      .api_path
      .as_deref()
      .map(|path| path.trim().trim_matches('/'))
      .filter(|path| !path.is_empty());

    match path {
      Some(path) => format!("/{path}"),
      None => DEFAULT_API_PATH.to_string(),
    }
  }

  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }

  pub fn connect_timeout(&self) -> Option<Duration> {
    self.connect_timeout_secs.map(Duration::from_secs)
  }
}
