//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for jira-rest. Each
//! subcommand maps onto one resource accessor of the client library.

mod check;
mod issue;
mod project;
mod search;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use jira_rest_client::consts::REQUEST_SUCCESSFUL;
use jira_rest_core::output::{print_json, print_success};
use serde_json::Value;

/// Top-level CLI command for jira-rest
#[derive(Parser)]
#[command(name = "jira-rest")]
#[command(about = "Query and update Jira Cloud from the command line")]
#[command(
  long_about = "jira-rest talks to the Jira Cloud REST API and prints the JSON it returns.\n\n\
        The Jira host comes from $JIRA_HOST or the `host` key in config.toml;\n\
        credentials are read from ~/.netrc."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for jira-rest
#[derive(Subcommand)]
pub enum Commands {
  /// Project operations
  #[command(long_about = "List projects, show one project, or list the issues of a project.")]
  #[command(alias = "p")]
  Project(project::ProjectArgs),

  /// Issue operations
  #[command(long_about = "Show, create, update and transition Jira issues.")]
  #[command(alias = "i")]
  Issue(issue::IssueArgs),

  /// Search issues with JQL
  #[command(long_about = "Run a JQL search and print the first page of matching issues.")]
  Search(search::SearchArgs),

  /// Check the Jira connection and credentials
  Check,
}

/// Query options shared by the read commands
#[derive(Args, Clone, Default)]
pub struct QueryOptionArgs {
  /// Query option as NAME=VALUE (repeatable)
  #[arg(
    short = 'o',
    long = "option",
    value_name = "NAME=VALUE",
    value_parser = parse_query_option,
    long_help = "Query option passed to Jira as NAME=VALUE. Can be given multiple times.\n\
             Names the endpoint does not accept are ignored; when a name repeats,\n\
             the first value is used."
  )]
  pub options: Vec<(String, String)>,
}

/// JSON payload given inline or from a file
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
  /// Inline JSON payload
  #[arg(long, value_name = "JSON")]
  pub data: Option<String>,

  /// Read the JSON payload from a file
  #[arg(long, value_name = "PATH")]
  pub file: Option<PathBuf>,
}

impl PayloadArgs {
  pub(crate) fn load(&self) -> Result<Value> {
    let raw = match (&self.data, &self.file) {
      (Some(data), _) => data.clone(),
      (None, Some(path)) => {
        fs::read_to_string(path).with_context(|| format!("Failed to read payload from {}", path.display()))?
      }
      (None, None) => return Err(anyhow::anyhow!("Either --data or --file is required")),
    };

    serde_json::from_str(&raw).context("Payload is not valid JSON")
  }
}

fn parse_query_option(raw: &str) -> std::result::Result<(String, String), String> {
  match raw.split_once('=') {
    Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
    _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
  }
}

/// Print a command result: the write confirmation as a message, everything
/// else as JSON
pub(crate) fn print_result(value: &Value) -> Result<()> {
  if is_write_confirmation(value) {
    print_success(REQUEST_SUCCESSFUL);
    return Ok(());
  }
  print_json(value)
}

fn is_write_confirmation(value: &Value) -> bool {
  value.as_str() == Some(REQUEST_SUCCESSFUL)
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Project(args) => project::handle_project_command(args),
    Commands::Issue(args) => issue::handle_issue_command(args),
    Commands::Search(args) => search::handle_search_command(args),
    Commands::Check => check::handle_check_command(),
  }
}
