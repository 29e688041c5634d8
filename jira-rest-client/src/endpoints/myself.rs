//! # Jira Current User Endpoint
//!
//! Fetches the authenticated user, which doubles as a connection check.

use serde_json::Value;

use crate::client::JiraClient;
use crate::error::JiraResult;

impl JiraClient {
  /// Get the user the client is authenticated as
  pub async fn myself(&self) -> JiraResult<Value> {
    self.get_one("/myself", "").await
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> bool {
    self.myself().await.is_ok()
  }
}
