//! Route modules and the `/api` route tree.

pub mod admin;
pub mod admin_pages;
pub mod health;
pub mod site_pages;
pub mod submissions;
pub mod ui;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /submit-form          lead submission (public)
///
/// POST   /admin/register       create admin credential (public, out-of-band)
/// POST   /admin/login          issue bearer token (public)
/// GET    /admin/forms          list submissions (bearer token)
/// DELETE /admin/forms/{id}     delete submission (bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(submissions::router())
        .nest("/admin", admin::router())
}
