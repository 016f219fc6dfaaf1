//! URL construction for sort links and filter round-trips.
//!
//! Contract: `?sort=<col>&order=<ASC|DESC>[&years[]=<y1>&years[]=<y2>...]`.
//! All interpolated values come from the validated enums and integer filter
//! set, so no percent-encoding is needed.

use crate::params::{SortColumn, SortOrder, ViewParams};

/// Build the href for a sortable column header.
///
/// Clicking the currently active column toggles its direction; clicking any
/// other column sorts ascending. The current year filter is always
/// preserved.
pub fn sort_url(column: SortColumn, current: &ViewParams) -> String {
    let order = if current.sort == column {
        current.order.toggled()
    } else {
        SortOrder::Asc
    };

    let mut url = format!("?sort={}&order={}", column.query_value(), order.as_str());
    for year in &current.years {
        url.push_str(&format!("&years[]={year}"));
    }
    url
}

/// Build the "clear filters" href: current sort state, no year restriction.
pub fn clear_filters_url(current: &ViewParams) -> String {
    format!(
        "?sort={}&order={}",
        current.sort.query_value(),
        current.order.as_str()
    )
}
