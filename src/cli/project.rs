//! # Project Command
//!
//! Lists projects, shows a single project, and lists the issues of a project.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::cli::{QueryOptionArgs, print_result};
use crate::clients::create_jira_runtime_and_client;

/// Command for Jira projects
#[derive(Args)]
pub struct ProjectArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ProjectSubcommands,
}

/// Subcommands for the project command
#[derive(Subcommand)]
pub enum ProjectSubcommands {
  /// List visible projects
  #[command(long_about = "List the projects visible to the current user.\n\n\
                   Accepted options: expand, recent.")]
  #[command(alias = "ls")]
  List {
    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// Show one project
  #[command(long_about = "Show a single project by id or key.\n\n\
                   Accepted options: expand.")]
  Get {
    /// Project id or key
    #[arg(required = true, index = 1)]
    project_id: String,

    #[command(flatten)]
    query: QueryOptionArgs,
  },

  /// List the issues of a project
  #[command(long_about = "List the first page of issues belonging to a project.\n\n\
                   Accepted options: fields, expand, properties.")]
  Issues {
    /// Project id or key
    #[arg(required = true, index = 1)]
    project_id: String,

    #[command(flatten)]
    query: QueryOptionArgs,
  },
}

/// Handle the project command
pub(crate) fn handle_project_command(project: ProjectArgs) -> Result<()> {
  let (rt, client) = create_jira_runtime_and_client()?;

  let result = match project.subcommand {
    ProjectSubcommands::List { query } => rt.block_on(client.list_projects(&query.options))?,
    ProjectSubcommands::Get { project_id, query } => rt.block_on(client.get_project(&project_id, &query.options))?,
    ProjectSubcommands::Issues { project_id, query } => {
      Value::Array(rt.block_on(client.get_project_issues(&project_id, &query.options))?)
    }
  };

  print_result(&result)
}
