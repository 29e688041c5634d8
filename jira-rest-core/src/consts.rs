//! Core constants shared across jira-rest components.

/// Environment variable for the Jira host URL; overrides the config file.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// REST prefix used when the config file does not name one
pub const DEFAULT_API_PATH: &str = "/rest/api/2";

/// `.netrc` machine consulted when the configured host has no entry
pub const FALLBACK_CREDENTIALS_MACHINE: &str = "atlassian.net";

/// Application name used for the XDG config directory
pub const APP_NAME: &str = "jira-rest";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
