//! # Jira Search Endpoint
//!
//! Runs JQL searches and returns the issues of the first result page. The JQL
//! itself is escaped and appended after the filtered query options.

use serde_json::Value;
use url::form_urlencoded::byte_serialize;

use crate::client::JiraClient;
use crate::consts::ISSUES_FIELD;
use crate::error::JiraResult;
use crate::query::Endpoint;

impl JiraClient {
  /// Run a JQL search and return the first page of matching issues
  ///
  /// Accepted options: `startAt`, `maxResults`, `validateQuery`, `fields`,
  /// `expand`, `properties`.
  pub async fn search<K, V>(&self, jql: &str, options: &[(K, V)]) -> JiraResult<Vec<Value>>
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut query = Endpoint::Search.query(options);
    query.push_str("jql=");
    query.extend(byte_serialize(jql.as_bytes()));
    self.get_all("/search", ISSUES_FIELD, &query).await
  }
}
