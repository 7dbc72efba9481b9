//! Shared domain types and errors for the sitesmith workspace.

pub mod error;
pub mod types;
