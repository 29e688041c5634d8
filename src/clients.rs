//! # Client Creation
//!
//! Resolves configuration and credentials from the user's environment and
//! builds an authenticated Jira client for the CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use jira_rest_client::JiraClient;
use jira_rest_client::auth;
use jira_rest_core::{Config, get_config_dirs};
use tokio::runtime::Runtime;
use tracing::info;

/// Load `config.toml` (with `$JIRA_HOST` applied) and locate the home
/// directory holding `.netrc`
pub fn load_config_and_home() -> Result<(Config, PathBuf)> {
  let config = get_config_dirs()?.load_config()?;
  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  Ok((config, base_dirs.home_dir().to_path_buf()))
}

/// Creates a tokio runtime and an authenticated Jira client
///
/// Configuration comes from `config.toml` in the XDG config directory with
/// `$JIRA_HOST` taking precedence; credentials come from `~/.netrc`.
pub fn create_jira_runtime_and_client() -> Result<(Runtime, JiraClient)> {
  let (config, home) = load_config_and_home()?;

  let (rt, client) = auth::create_jira_runtime_and_client(&home, &config)?;
  info!("Using Jira at {}", client.base_url());
  Ok((rt, client))
}
