//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations,
//! including fetching, creating, and updating Jira issues.

use serde::Serialize;
use serde_json::Value;

use crate::client::JiraClient;
use crate::error::JiraResult;
use crate::query::Endpoint;

const NO_OPTIONS: &[(&str, &str)] = &[];

impl JiraClient {
  /// Get a Jira issue by id or key
  ///
  /// Accepted options: `expand`.
  pub async fn get_issue<K, V>(&self, issue_key: &str, options: &[(K, V)]) -> JiraResult<Value>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::GetIssue.query(options);
    self.get_one(&format!("/issue/{issue_key}"), &query).await
  }

  /// Create an issue from a full `{"fields": {...}}` payload
  pub async fn create_issue<P>(&self, payload: &P) -> JiraResult<Value>
  where
    P: Serialize + ?Sized,
  {
    self.create_issue_with_options(payload, NO_OPTIONS).await
  }

  /// Create an issue, passing whitelisted options such as `updateHistory`
  pub async fn create_issue_with_options<P, K, V>(&self, payload: &P, options: &[(K, V)]) -> JiraResult<Value>
  where
    P: Serialize + ?Sized,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::CreateIssue.query(options);
    self.post("/issue", &query, payload).await
  }

  /// Update an issue; only the fields present in `payload` change
  pub async fn update_issue<P>(&self, issue_key: &str, payload: &P) -> JiraResult<Value>
  where
    P: Serialize + ?Sized,
  {
    self.update_issue_with_options(issue_key, payload, NO_OPTIONS).await
  }

  /// Update an issue, passing whitelisted options such as `notifyUsers`
  pub async fn update_issue_with_options<P, K, V>(
    &self,
    issue_key: &str,
    payload: &P,
    options: &[(K, V)],
  ) -> JiraResult<Value>
  where
    P: Serialize + ?Sized,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::UpdateIssue.query(options);
    self.put(&format!("/issue/{issue_key}"), &query, payload).await
  }
}
