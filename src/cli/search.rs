use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::cli::{QueryOptionArgs, print_result};
use crate::clients::create_jira_runtime_and_client;

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
  /// JQL query, e.g. "assignee = currentUser() AND status != Done"
  #[arg(required = true, index = 1)]
  pub jql: String,

  // Accepted options: startAt, maxResults, validateQuery, fields, expand, properties
  #[command(flatten)]
  pub query: QueryOptionArgs,
}

/// Handle the search command
pub(crate) fn handle_search_command(search: SearchArgs) -> Result<()> {
  let (rt, client) = create_jira_runtime_and_client()?;
  let issues = rt.block_on(client.search(&search.jql, &search.query.options))?;
  print_result(&Value::Array(issues))
}
