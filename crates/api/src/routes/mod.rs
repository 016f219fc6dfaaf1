pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /        the archive listing page (sort, filter, search)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::listing::show))
}
