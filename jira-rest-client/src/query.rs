//! # Query Parameter Filter
//!
//! Turns caller-supplied `(name, value)` options into the query-string fragment
//! for an endpoint. Only names on the endpoint's whitelist survive, they are
//! emitted in whitelist order, and every pair is terminated by `&` so a raw
//! fragment such as `jql=project=123` can be appended directly.
//!
//! When the same name appears more than once, the first occurrence wins.

use url::form_urlencoded::byte_serialize;

use crate::consts::ENDPOINT_OPTIONS;

/// Jira operations that accept query options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  ListProjects,
  GetProject,
  GetProjectIssues,
  GetIssue,
  CreateIssue,
  UpdateIssue,
  Search,
  GetTransitions,
}

impl Endpoint {
  /// Every endpoint in the whitelist table
  pub const ALL: [Endpoint; 8] = [
    Endpoint::ListProjects,
    Endpoint::GetProject,
    Endpoint::GetProjectIssues,
    Endpoint::GetIssue,
    Endpoint::CreateIssue,
    Endpoint::UpdateIssue,
    Endpoint::Search,
    Endpoint::GetTransitions,
  ];

  /// Operation name used as the whitelist table key
  pub const fn name(self) -> &'static str {
    match self {
      Endpoint::ListProjects => "list-projects",
      Endpoint::GetProject => "get-project",
      Endpoint::GetProjectIssues => "get-project-issues",
      Endpoint::GetIssue => "get-issue",
      Endpoint::CreateIssue => "create-issue",
      Endpoint::UpdateIssue => "update-issue",
      Endpoint::Search => "search",
      Endpoint::GetTransitions => "get-transitions",
    }
  }

  /// Option names this endpoint accepts
  pub fn allowed_options(self) -> &'static [&'static str] {
    ENDPOINT_OPTIONS
      .iter()
      .find(|(endpoint, _)| *endpoint == self)
      .map(|(_, allowed)| *allowed)
      .unwrap_or(&[])
  }

  /// Filter `options` through this endpoint's whitelist
  pub fn query<K, V>(self, options: &[(K, V)]) -> String
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    convert(options, self.allowed_options())
  }
}

/// Build a query fragment from `options`, keeping only names in `allowed`.
///
/// Values are form-urlencoded; names are written as-is since they come from
/// the static whitelist. Returns an empty string when nothing survives.
///
/// ```
/// use jira_rest_client::convert;
///
/// let query = convert(&[("recent", "5"), ("bogus", "x"), ("expand", "a b")], &["expand", "recent"]);
/// assert_eq!(query, "expand=a+b&recent=5&");
/// ```
pub fn convert<K, V>(options: &[(K, V)], allowed: &[&str]) -> String
where
  K: AsRef<str>,
  V: AsRef<str>,
{
  let mut query = String::new();

  for name in allowed {
    let Some((_, value)) = options.iter().find(|(key, _)| key.as_ref() == *name) else {
      continue;
    };

    query.push_str(name);
    query.push('=');
    query.extend(byte_serialize(value.as_ref().as_bytes()));
    query.push('&');
  }

  query
}
