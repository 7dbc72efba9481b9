use std::sync::Arc;

use sitesmith_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend. A trait object so tests can swap in
    /// `MemoryStore` without a database.
    pub store: Arc<dyn Store>,
    /// Server configuration (JWT secret and expiry live here).
    pub config: Arc<ServerConfig>,
}
