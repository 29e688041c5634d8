//! # Jira API Endpoints
//!
//! Resource accessors grouped by Jira resource. Each one interpolates its
//! identifier into the endpoint path, filters the caller's options through
//! the endpoint whitelist, and hands off to the dispatcher.

pub mod issues;
pub mod myself;
pub mod projects;
pub mod search;
pub mod transitions;
