//! # Issue Command
//!
//! Shows, creates, updates and transitions Jira issues.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::cli::{PayloadArgs, QueryOptionArgs, print_result};
use crate::clients::create_jira_runtime_and_client;

/// Command for Jira issues
#[derive(Args)]
pub struct IssueArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: IssueSubcommands,
}

/// Subcommands for the issue command
#[derive(Subcommand)]
pub enum IssueSubcommands {
  /// Show an issue
  #[command(long_about = "Show a Jira issue by id or key.\n\n\
                   Accepted options: expand.")]
  #[command(alias = "view")]
  Get {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// Create an issue
  #[command(long_about = "Create a Jira issue from a JSON payload of the form {\"fields\": {...}}.\n\n\
                   Accepted options: updateHistory.")]
  Create {
    #[command(flatten)]
    payload: PayloadArgs,

    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// Update an issue
  #[command(long_about = "Update a Jira issue. Only the fields present in the payload change.\n\n\
                   Accepted options: notifyUsers.")]
  Update {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    #[command(flatten)]
    payload: PayloadArgs,

    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// List the transitions available for an issue
  #[command(long_about = "List the workflow transitions currently available for an issue.\n\n\
                   Accepted options: expand, transitionId.")]
  Transitions {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// Transition an issue
  #[command(long_about = "Move a Jira issue through its workflow using a transition id.\n\n\
                   Use `issue transitions` to list the ids available.")]
  Transition {
    /// The Jira issue key (e.g., PROJ-123)
    #[arg(required = true, index = 1)]
    issue_key: String,

    /// The transition id
    #[arg(required = true, index = 2)]
    transition_id: String,
  },
}

/// Handle the issue command
pub(crate) fn handle_issue_command(issue: IssueArgs) -> Result<()> {
  let (rt, client) = create_jira_runtime_and_client()?;

  let result = match issue.subcommand {
    IssueSubcommands::Get { issue_key, query } => rt.block_on(client.get_issue(&issue_key, &query.options))?,
    IssueSubcommands::Create { payload, query } => {
      let payload = payload.load()?;
      rt.block_on(client.create_issue_with_options(&payload, &query.options))?
    }
    IssueSubcommands::Update {
      issue_key,
      payload,
      query,
    } => {
      let payload = payload.load()?;
      rt.block_on(client.update_issue_with_options(&issue_key, &payload, &query.options))?
    }
    IssueSubcommands::Transitions { issue_key, query } => {
      Value::Array(rt.block_on(client.get_transitions(&issue_key, &query.options))?)
    }
    IssueSubcommands::Transition {
      issue_key,
      transition_id,
    } => rt.block_on(client.transition_issue(&issue_key, &transition_id))?,
  };

  print_result(&result)
}
