//! Handler for the archive listing page.

use axum::extract::{RawQuery, State};
use axum::response::Html;

use mixarchive_core::params::ViewParams;
use mixarchive_db::repositories::MixRepo;

use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

/// GET /?sort=&order=&years[]=...
///
/// The whole page flow: validate the query string, run the listing and
/// distinct-years queries, render the document. Any store failure aborts
/// the request; there is no partial page.
///
/// `RawQuery` rather than a serde extractor because the filter uses the
/// repeated `years[]` key, which `ViewParams::from_query` handles directly.
pub async fn show(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Html<String>> {
    let params = ViewParams::from_query(query.as_deref().unwrap_or(""));

    let mixes = MixRepo::list(&state.pool, &params).await?;
    let years = MixRepo::distinct_years(&state.pool).await?;

    tracing::debug!(
        sort = params.sort.query_value(),
        order = params.order.as_str(),
        year_filters = params.years.len(),
        rows = mixes.len(),
        "Rendering listing page"
    );

    Ok(Html(render::listing_page(&params, &mixes, &years)))
}
