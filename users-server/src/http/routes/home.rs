//! Plain-text landing page

use axum::{routing::get, Router};

pub const WELCOME: &str =
    "Welcome to the users API! Available endpoints: GET/POST/PUT/DELETE /api/users";

/// GET /
async fn home() -> &'static str {
    WELCOME
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
