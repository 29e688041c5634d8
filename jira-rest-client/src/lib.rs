//! # Jira REST Client
//!
//! Jira Cloud REST API integration built from two pieces: a query parameter
//! filter that keeps only the options an endpoint accepts, and a request
//! dispatcher that maps every HTTP exchange to a [`JiraResult`] carrying
//! dynamic JSON. Resource accessors for projects, issues, search and
//! transitions compose the two.

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;
pub mod query;

// Re-export the client
pub use client::{ClientConfig, JiraClient};
// Re-export error handling
pub use error::{JiraError, JiraResult, OrAbort, unwrap_or_abort};
// Re-export models
pub use models::{JiraAuth, TransitionId, TransitionRequest};
// Re-export the query filter
pub use query::{Endpoint, convert};
