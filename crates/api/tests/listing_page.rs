//! Tests for the rendered listing page.
//!
//! The renderer is a pure function of the validated parameters and fetched
//! data, so the whole HTML contract is testable without a database or a
//! running server.

use chrono::NaiveDate;

use mixarchive_api::render::{error_page, listing_page};
use mixarchive_core::params::{SortColumn, SortOrder, ViewParams};
use mixarchive_db::models::mix::Mix;

fn mix(id: i64, artist: &str, date: (i32, u32, u32), year: i32) -> Mix {
    Mix {
        mix_id: id,
        artist: artist.to_string(),
        mix_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        year,
    }
}

fn params(sort: SortColumn, order: SortOrder, years: Vec<i32>) -> ViewParams {
    ViewParams { sort, order, years }
}

/// Byte offset of a needle within the page, asserting it exists.
fn offset_of(page: &str, needle: &str) -> usize {
    page.find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in rendered page"))
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[test]
fn rows_render_in_fetch_order() {
    // The store sorts; the renderer must not reorder. Artist-ascending
    // input means Ann before Zed in the emitted document.
    let rows = vec![
        mix(2, "Ann", (2021, 5, 1), 2021),
        mix(1, "Zed", (2020, 3, 14), 2020),
    ];
    let page = listing_page(
        &params(SortColumn::Artist, SortOrder::Asc, vec![]),
        &rows,
        &[2020, 2021],
    );

    assert!(offset_of(&page, "Ann") < offset_of(&page, "Zed"));
    assert!(page.contains("<td>2</td><td>Ann</td><td>2021-05-01</td><td>2021</td>"));
}

#[test]
fn empty_result_set_renders_no_results_row() {
    let page = listing_page(&ViewParams::default(), &[], &[2020]);
    assert!(page.contains("<td colspan=\"4\">No results found</td>"));
    // No data rows at all.
    assert_eq!(page.matches("<tr><td>").count(), 0);
}

#[test]
fn store_derived_text_is_escaped() {
    let rows = vec![mix(1, "<script>alert('x')</script> & Friends", (2019, 1, 1), 2019)];
    let page = listing_page(&ViewParams::default(), &rows, &[2019]);

    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;alert('x')&lt;/script&gt; &amp; Friends"));
}

// ---------------------------------------------------------------------------
// Sort headers
// ---------------------------------------------------------------------------

#[test]
fn active_column_link_toggles_direction() {
    let page = listing_page(
        &params(SortColumn::Artist, SortOrder::Asc, vec![]),
        &[],
        &[],
    );

    // Active ascending column links to DESC; the rest default to ASC.
    assert!(page.contains("<a href=\"?sort=Artist&amp;order=DESC\">Artist"));
    assert!(page.contains("<a href=\"?sort=MixID&amp;order=ASC\">ID"));
    assert!(page.contains("<a href=\"?sort=Date&amp;order=ASC\">Date"));
    assert!(page.contains("<a href=\"?sort=Year&amp;order=ASC\">Year"));
}

#[test]
fn only_the_active_column_carries_a_direction_indicator() {
    let page = listing_page(
        &params(SortColumn::Date, SortOrder::Desc, vec![]),
        &[],
        &[],
    );

    assert_eq!(page.matches("sort-icon").count(), 2, "one CSS rule, one indicator");
    assert!(page.contains("Date <span class=\"sort-icon\">&#9660;</span>"));
}

#[test]
fn sort_links_preserve_the_year_filter() {
    let page = listing_page(
        &params(SortColumn::MixId, SortOrder::Asc, vec![2020, 2021]),
        &[],
        &[2020, 2021, 2022],
    );

    assert!(page.contains(
        "<a href=\"?sort=Artist&amp;order=ASC&amp;years[]=2020&amp;years[]=2021\">Artist"
    ));
}

// ---------------------------------------------------------------------------
// Filter form
// ---------------------------------------------------------------------------

#[test]
fn hidden_fields_round_trip_sort_state() {
    let page = listing_page(
        &params(SortColumn::Year, SortOrder::Desc, vec![]),
        &[],
        &[],
    );

    assert!(page.contains("<input type=\"hidden\" name=\"sort\" value=\"Year\">"));
    assert!(page.contains("<input type=\"hidden\" name=\"order\" value=\"DESC\">"));
}

#[test]
fn selected_years_are_pre_checked() {
    let page = listing_page(
        &params(SortColumn::MixId, SortOrder::Asc, vec![2021]),
        &[],
        &[2020, 2021],
    );

    assert!(page.contains("value=\"2021\" checked"));
    assert!(page.contains("value=\"2020\">"));
    assert!(!page.contains("value=\"2020\" checked"));
}

#[test]
fn year_checkboxes_render_descending_regardless_of_input_order() {
    // "Last 5 Years" selects the first five checkboxes in DOM order, so the
    // renderer owns the descending guarantee even for unsorted input.
    let page = listing_page(
        &ViewParams::default(),
        &[],
        &[2019, 2024, 2021, 2024, 2020, 2023, 2022],
    );

    let positions: Vec<usize> = [2024, 2023, 2022, 2021, 2020, 2019]
        .iter()
        .map(|y| offset_of(&page, &format!("value=\"{y}\"")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Duplicates collapse to a single checkbox.
    assert_eq!(page.matches("value=\"2024\"").count(), 1);
}

#[test]
fn clear_filters_navigates_to_current_sort_without_years() {
    let page = listing_page(
        &params(SortColumn::Artist, SortOrder::Desc, vec![2020]),
        &[],
        &[2020],
    );

    assert!(page.contains("window.location.href = '?sort=Artist&order=DESC';"));
}

#[test]
fn shortcut_buttons_are_present() {
    let page = listing_page(&ViewParams::default(), &[], &[2020]);

    assert!(page.contains(">Apply Filters</button>"));
    assert!(page.contains("onclick=\"clearFilters()\""));
    assert!(page.contains("onclick=\"selectAllYears()\""));
    assert!(page.contains("onclick=\"selectRecentYears(5)\""));
}

// ---------------------------------------------------------------------------
// Error page
// ---------------------------------------------------------------------------

#[test]
fn error_page_carries_status_and_diagnostic() {
    let page = error_page(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        "The archive database is currently unavailable.",
    );

    assert!(page.contains("500 Internal Server Error"));
    assert!(page.contains("The archive database is currently unavailable."));
}
