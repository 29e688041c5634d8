//! Helpers for reading credentials stored in `.netrc` files.
//!
//! Both the single-line (`machine host login user password pass`) and the
//! multi-line layouts are accepted, since the file is tokenized on whitespace
//! rather than parsed line by line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jira_rest_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

#[derive(Default)]
struct Entry<'a> {
  machine: &'a str,
  login: Option<&'a str>,
  password: Option<&'a str>,
}

impl Entry<'_> {
  fn credentials_for(&self, target_machine: &str) -> Option<Credentials> {
    if self.machine != target_machine {
      return None;
    }
    Some(Credentials {
      username: self.login?.to_string(),
      password: self.password?.to_string(),
    })
  }
}

/// Parses `.netrc` content and returns credentials for the requested machine.
///
/// Entries missing either `login` or `password` are skipped. The first
/// complete entry for `target_machine` wins.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content.split_whitespace();
  let mut current: Option<Entry> = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if let Some(creds) = current.take().and_then(|entry| entry.credentials_for(target_machine)) {
          return Some(creds);
        }
        current = tokens.next().map(|machine| Entry {
          machine,
          ..Entry::default()
        });
      }
      "login" => {
        let value = tokens.next();
        if let Some(entry) = current.as_mut() {
          entry.login = value;
        }
      }
      "password" => {
        let value = tokens.next();
        if let Some(entry) = current.as_mut() {
          entry.password = value;
        }
      }
      _ => {}
    }
  }

  current.and_then(|entry| entry.credentials_for(target_machine))
}

/// Reads a `.netrc` file and returns credentials for the requested machine.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content =
    fs::read_to_string(path).with_context(|| format!("Failed to read .netrc file at {}", path.display()))?;
  Ok(parse_netrc(&content, target_machine))
}

/// Looks up credentials for `machine` in `<home>/.netrc`.
///
/// A missing `.netrc` is treated as "no credentials" rather than an error.
pub fn lookup_credentials(home: &Path, machine: &str) -> Result<Option<Credentials>> {
  let path = get_netrc_path(home);
  if !path.exists() {
    debug!("No .netrc file found at {}", path.display());
    return Ok(None);
  }
  parse_netrc_file(&path, machine)
}

#[cfg(test)]
mod tests {
  use jira_rest_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_parse_netrc_basic() {
    let content = r#"machine example.com
  login testuser
  password testpass
"#;

    let creds = parse_netrc(content, "example.com").unwrap();
    assert_eq!(creds.username, "testuser");
    assert_eq!(creds.password, "testpass");
  }

  #[test]
  fn test_parse_netrc_multiple_machines() {
    let content = r#"machine example.com
  login user1
  password pass1

machine company.atlassian.net
  login user2
  password pass2

machine atlassian.net
  login user3
  password pass3
"#;

    let creds = parse_netrc(content, "example.com").unwrap();
    assert_eq!(creds.username, "user1");

    let creds = parse_netrc(content, "company.atlassian.net").unwrap();
    assert_eq!(creds.username, "user2");
    assert_eq!(creds.password, "pass2");

    let creds = parse_netrc(content, "atlassian.net").unwrap();
    assert_eq!(creds.username, "user3");
    assert_eq!(creds.password, "pass3");
  }

  #[test]
  fn test_parse_netrc_machine_not_found() {
    let content = "machine example.com login testuser password testpass\n";
    assert!(parse_netrc(content, "nonexistent.com").is_none());
  }

  #[test]
  fn test_parse_netrc_incomplete_entry() {
    let content = r#"machine example.com
  login testuser
machine other.com
  login user2
  password pass2
"#;

    // example.com has no password, and other.com's password must not leak into it
    assert!(parse_netrc(content, "example.com").is_none());

    let creds = parse_netrc(content, "other.com").unwrap();
    assert_eq!(creds.username, "user2");
    assert_eq!(creds.password, "pass2");
  }

  #[test]
  fn test_parse_netrc_mixed_format() {
    let content = r#"machine example.com login user1 password pass1
machine other.com
  login user2
  password pass2
machine atlassian.net login user3
  password pass3
"#;

    assert_eq!(parse_netrc(content, "example.com").unwrap().password, "pass1");
    assert_eq!(parse_netrc(content, "other.com").unwrap().password, "pass2");
    assert_eq!(parse_netrc(content, "atlassian.net").unwrap().password, "pass3");
  }

  #[test]
  fn test_parse_netrc_empty() {
    assert!(parse_netrc("", "example.com").is_none());
  }

  #[test]
  fn test_lookup_credentials() {
    let guard = NetrcGuard::new("machine example.com login testuser password testpass\n");

    let creds = lookup_credentials(guard.home_dir(), "example.com").unwrap().unwrap();
    assert_eq!(creds.username, "testuser");
    assert!(lookup_credentials(guard.home_dir(), "missing.com").unwrap().is_none());
  }

  #[test]
  fn test_lookup_credentials_without_netrc() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    assert!(lookup_credentials(temp_dir.path(), "example.com").unwrap().is_none());
  }

  #[test]
  fn test_credentials_debug_hides_password() {
    let creds = parse_netrc("machine a login u password secret", "a").unwrap();
    assert!(!format!("{creds:?}").contains("secret"));
  }
}
