//! Constants for the jira-rest client.

use crate::query::Endpoint;

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Value returned by POST and PUT when Jira answers 2xx without a JSON body
pub const REQUEST_SUCCESSFUL: &str = "Request successful";

/// Envelope field wrapping search results
pub const ISSUES_FIELD: &str = "issues";

/// Envelope field wrapping the transitions of an issue
pub const TRANSITIONS_FIELD: &str = "transitions";

/// Query option names each endpoint accepts, in emission order.
pub const ENDPOINT_OPTIONS: &[(Endpoint, &[&str])] = &[
  (Endpoint::ListProjects, &["expand", "recent"]),
  (Endpoint::GetProject, &["expand"]),
  (Endpoint::GetProjectIssues, &["fields", "expand", "properties"]),
  (Endpoint::GetIssue, &["expand"]),
  (Endpoint::CreateIssue, &["updateHistory"]),
  (Endpoint::UpdateIssue, &["notifyUsers"]),
  (
    Endpoint::Search,
    &["startAt", "maxResults", "validateQuery", "fields", "expand", "properties"],
  ),
  (Endpoint::GetTransitions, &["expand", "transitionId"]),
];
