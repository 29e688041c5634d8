use anyhow::Result;
use jira_rest_client::auth::{check_jira_credentials, create_jira_runtime_and_client};
use jira_rest_core::consts::FALLBACK_CREDENTIALS_MACHINE;
use jira_rest_core::output::{print_error, print_info, print_success, print_warning};
use jira_rest_core::url::normalize_host;

use crate::clients::load_config_and_home;

/// Handle the check command
pub(crate) fn handle_check_command() -> Result<()> {
  let (config, home) = load_config_and_home()?;
  let base_url = config.base_url()?;
  print_info(&format!("Checking connection to {base_url}"));

  if !check_jira_credentials(&home, &base_url)? {
    print_warning(&format!(
      "No credentials for '{}' or '{FALLBACK_CREDENTIALS_MACHINE}' in {}",
      normalize_host(&base_url),
      home.join(".netrc").display()
    ));
    return Err(anyhow::anyhow!("Jira credentials not found"));
  }

  let (rt, client) = create_jira_runtime_and_client(&home, &config)?;
  match rt.block_on(client.myself()) {
    Ok(user) => {
      let name = user["displayName"]
        .as_str()
        .or_else(|| user["name"].as_str())
        .unwrap_or("unknown user");
      print_success(&format!("Connected to {} as {}", client.base_url(), name));
      Ok(())
    }
    Err(err) => {
      print_error(&format!("Could not connect to {}", client.base_url()));
      Err(err.into())
    }
  }
}
