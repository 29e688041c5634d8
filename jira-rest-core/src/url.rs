//! Host URL helpers shared across crates.

use anyhow::{Context, Result};
use url::Url;

/// Ensure a host has a scheme, defaulting to `https://`.
///
/// The result has no trailing slash so REST paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  if url.host_str().is_none() {
    return Err(anyhow::anyhow!("URL '{input}' has no host"));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Strip scheme and trailing slashes from a host URL, leaving the machine name
/// used as the `.netrc` key.
///
/// ```
/// use jira_rest_core::url::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com"), "jira.example.com");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim()
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}
