//! Configuration directory management for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary configuration directory for a single test
pub struct ConfigDirsTestGuard {
  temp_dir: TempDir,
  config_dir: PathBuf,
}

impl Default for ConfigDirsTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl ConfigDirsTestGuard {
  /// Create the temporary `config/jira-rest` directory tree
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join("config").join("jira-rest");
    fs::create_dir_all(&config_dir).expect("Failed to create config directory");

    Self { temp_dir, config_dir }
  }

  /// Root to use as `XDG_CONFIG_HOME`
  pub fn xdg_config_home(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Directory holding `config.toml`
  pub fn config_dir(&self) -> &Path {
    &self.config_dir
  }

  /// Write `config.toml` and return its path
  pub fn write_config(&self, content: &str) -> PathBuf {
    let path = self.config_dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write test config");
    path
  }
}
