//! # Jira Transition Endpoints
//!
//! Lists the workflow transitions available for an issue and moves an issue
//! through one of them.

use serde_json::Value;

use crate::client::JiraClient;
use crate::consts::TRANSITIONS_FIELD;
use crate::error::JiraResult;
use crate::models::TransitionRequest;
use crate::query::Endpoint;

impl JiraClient {
  /// Get available transitions for an issue
  ///
  /// Accepted options: `expand`, `transitionId`.
  pub async fn get_transitions<K, V>(&self, issue_key: &str, options: &[(K, V)]) -> JiraResult<Vec<Value>>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::GetTransitions.query(options);
    self
      .get_all(&format!("/issue/{issue_key}/transitions"), TRANSITIONS_FIELD, &query)
      .await
  }

  /// Transition an issue to a new status
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> JiraResult<Value> {
    let payload = TransitionRequest::new(transition_id);
    self
      .post(&format!("/issue/{issue_key}/transitions"), "", &payload)
      .await
  }
}
