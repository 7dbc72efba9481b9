//! Request extractors shared by admin handlers.

pub mod auth;
