//! # jira-rest Core Library
//!
//! Configuration loading, host URL normalization, credential lookup and
//! terminal output helpers shared by the jira-rest client and command-line
//! front end.

pub mod config;
pub mod consts;
pub mod creds;
pub mod output;
pub mod url;

// Re-export main types
pub use config::{Config, ConfigDirs, get_config_dirs};
pub use creds::Credentials;
pub use output::{print_error, print_info, print_success, print_warning};
