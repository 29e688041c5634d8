//! # Jira Request Errors
//!
//! The failure half of every dispatcher call, plus the fatal-on-failure
//! wrapper used by callers that would rather abort than handle an error.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure outcome of a Jira request
#[derive(Debug, Error)]
pub enum JiraError {
  /// Jira answered with a non-2xx status and a JSON body. The body keeps the
  /// remote error vocabulary (`errorMessages`, `errors`) untouched.
  #[error("Jira API returned HTTP {status}: {body}")]
  Api { status: StatusCode, body: Value },

  /// No usable response: connection, timeout or DNS failure, or a body that
  /// could not be decoded.
  #[error("Jira request failed: {0}")]
  Transport(String),
}

impl JiraError {
  /// Decoded error body, if Jira sent one
  pub const fn body(&self) -> Option<&Value> {
    match self {
      JiraError::Api { body, .. } => Some(body),
      JiraError::Transport(_) => None,
    }
  }

  /// HTTP status of the failed response, if there was one
  pub const fn status(&self) -> Option<StatusCode> {
    match self {
      JiraError::Api { status, .. } => Some(*status),
      JiraError::Transport(_) => None,
    }
  }

  pub const fn is_transport(&self) -> bool {
    matches!(self, JiraError::Transport(_))
  }
}

impl From<reqwest::Error> for JiraError {
  fn from(err: reqwest::Error) -> Self {
    JiraError::Transport(err.to_string())
  }
}

/// Result of every Jira network operation
pub type JiraResult<T> = std::result::Result<T, JiraError>;

/// Return the success payload or panic with `"{label} failed: {error}"`.
///
/// `label` names the calling module and function, e.g. `project::get_project`.
#[allow(clippy::panic)]
#[track_caller]
pub fn unwrap_or_abort<T>(result: JiraResult<T>, label: &str) -> T {
  match result {
    Ok(value) => value,
    Err(err) => panic!("{label} failed: {err}"),
  }
}

/// Method form of [`unwrap_or_abort`]
pub trait OrAbort<T> {
  fn or_abort(self, label: &str) -> T;
}

impl<T> OrAbort<T> for JiraResult<T> {
  #[track_caller]
  fn or_abort(self, label: &str) -> T {
    unwrap_or_abort(self, label)
  }
}
