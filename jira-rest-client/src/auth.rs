//! Authentication helpers for the Jira client.
//!
//! These helpers centralize credential lookup and client construction so the
//! command-line front end and library callers resolve the host, credentials
//! and HTTP settings the same way.

use std::path::Path;

use anyhow::{Context, Result};
use jira_rest_core::Config;
use jira_rest_core::consts::FALLBACK_CREDENTIALS_MACHINE;
use jira_rest_core::creds::Credentials;
use jira_rest_core::creds::netrc::lookup_credentials;
use jira_rest_core::url::normalize_host;
use tokio::runtime::Runtime;

use crate::client::{ClientConfig, JiraClient};
use crate::models::JiraAuth;

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Retrieve Jira credentials for `jira_host` from `<home>/.netrc`, falling
/// back to the `atlassian.net` entry.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let normalized_host = normalize_host(jira_host);
  if let Some(creds) = lookup_credentials(home, &normalized_host)? {
    return Ok(creds);
  }
  if let Some(creds) = lookup_credentials(home, FALLBACK_CREDENTIALS_MACHINE)? {
    return Ok(creds);
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or '{FALLBACK_CREDENTIALS_MACHINE}'."
  ))
}

/// Build the client settings from loaded configuration and credentials.
pub fn client_config_from(config: &Config, credentials: &Credentials) -> Result<ClientConfig> {
  let auth = JiraAuth {
    username: credentials.username.clone(),
    api_token: credentials.password.clone(),
  };

  let mut client_config = ClientConfig::new(&config.base_url()?, auth);
  client_config.api_path = config.api_path();
  client_config.timeout = config.timeout();
  client_config.connect_timeout = config.connect_timeout();
  Ok(client_config)
}

/// Creates an authenticated Jira client using `config` and credentials from
/// `.netrc`.
pub fn create_jira_client_from_netrc(home: &Path, config: &Config) -> Result<JiraClient> {
  let base_url = config.base_url()?;
  let credentials = get_jira_credentials(home, &base_url).context("Failed to get credentials")?;

  JiraClient::from_config(client_config_from(config, &credentials)?)
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, config: &Config) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, config)?;
  Ok((rt, client))
}
