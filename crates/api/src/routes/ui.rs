//! Server-rendered pages for the public site and the admin panel.
//!
//! Both "apps" are embedded HTML/CSS/JS constants assembled by small
//! shell builders and served as [`Html`] responses -- no separate
//! frontend build. Page content lives in [`super::site_pages`] and
//! [`super::admin_pages`]; all API calls are same-origin fetches.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use super::admin_pages::{DASHBOARD_CONTENT, DASHBOARD_SCRIPT, LOGIN_CONTENT, LOGIN_SCRIPT};
use super::site_pages::{
    FORM_CONTENT, FORM_SCRIPT, LANDING_BODY, SITE_CSS, TYPEWRITER_SCRIPT,
};
use crate::state::AppState;

/// Build the UI router.
///
/// ```text
/// GET /              marketing landing page
/// GET /get-started   lead-capture form
/// GET /admin/login   admin login
/// GET /admin         admin dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/get-started", get(form_page))
        .route("/admin/login", get(admin_login_page))
        .route("/admin", get(admin_dashboard_page))
}

async fn landing_page() -> Html<String> {
    Html(site_shell(LANDING_BODY, TYPEWRITER_SCRIPT))
}

async fn form_page() -> Html<String> {
    Html(site_shell(FORM_CONTENT, FORM_SCRIPT))
}

async fn admin_login_page() -> Html<String> {
    Html(site_shell(LOGIN_CONTENT, LOGIN_SCRIPT))
}

async fn admin_dashboard_page() -> Html<String> {
    Html(site_shell(DASHBOARD_CONTENT, DASHBOARD_SCRIPT))
}

/// Assemble a full HTML document from the shared stylesheet, a body
/// fragment, and the page's script block.
fn site_shell(content: &str, script: &str) -> String {
    let mut html = String::with_capacity(32768);
    html.push_str(SITE_CSS);
    html.push_str("<body>\n");
    html.push_str(content);
    html.push_str(script);
    html.push_str("\n</body>\n</html>");
    html
}
