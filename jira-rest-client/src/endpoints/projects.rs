//! # Jira Project Endpoints

use serde_json::Value;
use url::form_urlencoded::byte_serialize;

use crate::client::JiraClient;
use crate::consts::ISSUES_FIELD;
use crate::error::JiraResult;
use crate::query::Endpoint;

impl JiraClient {
  /// List the projects visible to the current user
  ///
  /// Accepted options: `expand`, `recent`.
  pub async fn list_projects<K, V>(&self, options: &[(K, V)]) -> JiraResult<Value>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::ListProjects.query(options);
    self.get_one("/project", &query).await
  }

  /// Get a project by id or key
  ///
  /// Accepted options: `expand`.
  pub async fn get_project<K, V>(&self, project_id: &str, options: &[(K, V)]) -> JiraResult<Value>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let query = Endpoint::GetProject.query(options);
    self.get_one(&format!("/project/{project_id}"), &query).await
  }

  /// Get the first page of issues belonging to a project
  ///
  /// Accepted options: `fields`, `expand`, `properties`.
  pub async fn get_project_issues<K, V>(&self, project_id: &str, options: &[(K, V)]) -> JiraResult<Vec<Value>>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut query = Endpoint::GetProjectIssues.query(options);
    query.push_str("jql=project=");
    query.extend(byte_serialize(project_id.as_bytes()));
    self.get_all("/search", ISSUES_FIELD, &query).await
  }
}
