//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;

/// Template for the landing page with the shorten form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate;

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /app`
pub async fn home_handler() -> HomeTemplate {
    HomeTemplate
}
