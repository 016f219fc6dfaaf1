//! Headless counterpart of the page's live-search behavior.
//!
//! The embedded script hides any table row whose cells do not contain the
//! query as a case-insensitive substring. [`row_matches`] is the same
//! predicate as a pure function, so the matching rules are unit-testable
//! without a rendering surface.

/// Whether a row with the given cell texts matches a search query.
///
/// Empty (or whitespace-only) queries match everything. Matching is a
/// case-insensitive substring check against each cell.
pub fn row_matches(cells: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    cells
        .iter()
        .any(|cell| cell.to_lowercase().contains(&needle))
}
