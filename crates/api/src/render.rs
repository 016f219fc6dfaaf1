//! HTML rendering for the archive listing page.
//!
//! The page is one self-contained document: inline styles, the filter
//! form, the results table, and a small script for live search and the
//! year-selection shortcuts. Everything store-derived goes through the
//! escaping helpers before interpolation.

use axum::http::StatusCode;

use mixarchive_core::escape::{escape_attr, escape_text};
use mixarchive_core::params::{SortColumn, SortOrder, ViewParams};
use mixarchive_core::urls;
use mixarchive_db::models::mix::Mix;

const PAGE_TITLE: &str = "Essential Mix Archive";

/// How many checkboxes the "Last 5 Years" shortcut selects.
const RECENT_YEARS_COUNT: usize = 5;

/// Render the full listing page.
///
/// `years` is the distinct-year universe for the filter checkboxes. The
/// renderer sorts it descending (and drops duplicates) itself rather than
/// trusting fetch order: the "Last N Years" script selects the first N
/// checkboxes in DOM order, so the descending order is a guarantee this
/// function owns, not an accident of the query.
pub fn listing_page(params: &ViewParams, mixes: &[Mix], years: &[i32]) -> String {
    let mut years = years.to_vec();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str("<style>");
    html.push_str(STYLES);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str(&format!("<h1>{PAGE_TITLE}</h1>\n"));

    // Live search box. Filtering happens client-side over the rendered rows.
    html.push_str(concat!(
        "<div class=\"search-container\">\n",
        "<input type=\"text\" id=\"searchInput\" onkeyup=\"searchTable()\" ",
        "placeholder=\"Search for mixes...\">\n",
        "</div>\n",
    ));

    html.push_str(&filter_form(params, &years));
    html.push_str(&results_table(params, mixes));

    html.push_str("</div>\n<script>\n");
    html.push_str(&SCRIPT.replace("__CLEAR_FILTERS_URL__", &urls::clear_filters_url(params)));
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Render a minimal diagnostic page for a failed request.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>{code} - {PAGE_TITLE}</title>\n</head>\n<body>\n\
         <h1>{code} {reason}</h1>\n<p>{message}</p>\n</body>\n</html>\n",
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape_text(message),
    )
}

/// The year filter form: hidden sort/order fields so sort state survives a
/// filter change, one checkbox per distinct year, and the shortcut buttons.
fn filter_form(params: &ViewParams, years: &[i32]) -> String {
    let mut form = String::new();
    form.push_str("<form id=\"yearFilterForm\" method=\"get\" action=\"\">\n");
    form.push_str(&format!(
        "<input type=\"hidden\" name=\"sort\" value=\"{}\">\n",
        params.sort.query_value()
    ));
    form.push_str(&format!(
        "<input type=\"hidden\" name=\"order\" value=\"{}\">\n",
        params.order.as_str()
    ));

    form.push_str("<div class=\"filter-section\">\n");
    form.push_str("<span class=\"filter-title\">Filter by Year:</span>\n");
    form.push_str("<div class=\"year-filters\">\n");
    for &year in years {
        let checked = if params.years.contains(&year) {
            " checked"
        } else {
            ""
        };
        form.push_str(&format!(
            "<label class=\"year-checkbox\">\
             <input type=\"checkbox\" name=\"years[]\" value=\"{year}\"{checked}> {year}\
             </label>\n"
        ));
    }
    form.push_str("</div>\n");

    form.push_str(&format!(
        "<div class=\"filter-buttons\">\n\
         <button type=\"submit\">Apply Filters</button>\n\
         <button type=\"button\" onclick=\"clearFilters()\">Clear Filters</button>\n\
         <button type=\"button\" onclick=\"selectAllYears()\">Select All</button>\n\
         <button type=\"button\" onclick=\"selectRecentYears({RECENT_YEARS_COUNT})\">\
         Last {RECENT_YEARS_COUNT} Years</button>\n\
         </div>\n"
    ));
    form.push_str("</div>\n</form>\n");
    form
}

/// The results table: sortable headers plus one row per mix, or an
/// explicit no-results row.
fn results_table(params: &ViewParams, mixes: &[Mix]) -> String {
    let mut table = String::new();
    table.push_str("<table id=\"mixTable\">\n<thead>\n<tr>\n");
    for column in SortColumn::ALL {
        table.push_str(&header_cell(column, params));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    if mixes.is_empty() {
        table.push_str(&format!(
            "<tr><td colspan=\"{}\">No results found</td></tr>\n",
            SortColumn::ALL.len()
        ));
    } else {
        for mix in mixes {
            table.push_str(&table_row(mix));
        }
    }

    table.push_str("</tbody>\n</table>\n");
    table
}

/// One sortable header cell: a link that preserves the year filter and
/// toggles the direction on the active column, with a direction indicator.
fn header_cell(column: SortColumn, params: &ViewParams) -> String {
    let href = urls::sort_url(column, params);
    let indicator = if params.sort == column {
        match params.order {
            SortOrder::Asc => " <span class=\"sort-icon\">&#9650;</span>",
            SortOrder::Desc => " <span class=\"sort-icon\">&#9660;</span>",
        }
    } else {
        ""
    };
    format!(
        "<th><a href=\"{href}\">{caption}{indicator}</a></th>\n",
        href = escape_attr(&href),
        caption = column.caption(),
    )
}

fn table_row(mix: &Mix) -> String {
    format!(
        "<tr><td>{id}</td><td>{artist}</td><td>{date}</td><td>{year}</td></tr>\n",
        id = mix.mix_id,
        artist = escape_text(&mix.artist),
        date = mix.mix_date,
        year = mix.year,
    )
}

/// Inline stylesheet, carried over from the reference page design.
const STYLES: &str = r##"
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f5f5f5; }
h1 { color: #333; text-align: center; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; background-color: white;
        box-shadow: 0 1px 3px rgba(0,0,0,0.12), 0 1px 2px rgba(0,0,0,0.24); }
th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: rgb(22, 16, 29); color: white; }
th a { color: white; text-decoration: none; display: block; }
th a:hover { text-decoration: underline; }
tr:hover { background-color: #f1f1f1; }
.container { max-width: 1200px; margin: 0 auto; }
.search-container { margin: 20px 0; text-align: center; }
input[type=text] { padding: 10px; width: 300px; border: 1px solid #ddd; border-radius: 4px;
                   margin-bottom: 15px; }
.sort-icon { margin-left: 5px; font-size: 0.8em; }
.filter-section { margin: 15px 0; text-align: center; }
.filter-title { font-weight: bold; margin-bottom: 10px; display: block; }
.year-filters { display: flex; flex-wrap: wrap; justify-content: center; gap: 10px;
                margin-bottom: 15px; }
.year-checkbox { display: inline-flex; align-items: center; margin-right: 5px;
                 background-color: #f0f0f0; padding: 5px 10px; border-radius: 4px;
                 cursor: pointer; }
.year-checkbox:hover { background-color: #e0e0e0; }
.year-checkbox input { margin-right: 5px; }
.filter-buttons { margin-top: 10px; }
button { padding: 8px 16px; background-color: rgb(22, 16, 29); color: white; border: none;
         border-radius: 4px; cursor: pointer; margin: 0 5px; }
button:hover { background-color: rgb(45, 35, 56); }
"##;

/// Client-side behavior over the already-rendered DOM. `searchTable` is the
/// DOM adapter of `mixarchive_core::search::row_matches`: a row stays
/// visible when any cell contains the query, case-insensitively.
/// `selectRecentYears` relies on the checkbox DOM order being descending by
/// year, which `listing_page` guarantees by sorting.
const SCRIPT: &str = r##"
function searchTable() {
    var filter = document.getElementById('searchInput').value.toUpperCase().trim();
    var rows = document.getElementById('mixTable').tBodies[0].rows;
    for (var i = 0; i < rows.length; i++) {
        var found = filter === '';
        for (var j = 0; j < rows[i].cells.length && !found; j++) {
            var text = rows[i].cells[j].textContent || rows[i].cells[j].innerText;
            if (text.toUpperCase().indexOf(filter) > -1) {
                found = true;
            }
        }
        rows[i].style.display = found ? '' : 'none';
    }
}

function clearFilters() {
    window.location.href = '__CLEAR_FILTERS_URL__';
}

function selectAllYears() {
    var checkboxes = document.querySelectorAll('input[name="years[]"]');
    for (var i = 0; i < checkboxes.length; i++) {
        checkboxes[i].checked = true;
    }
    document.getElementById('yearFilterForm').submit();
}

function selectRecentYears(count) {
    var checkboxes = document.querySelectorAll('input[name="years[]"]');
    for (var i = 0; i < checkboxes.length; i++) {
        checkboxes[i].checked = i < count;
    }
    document.getElementById('yearFilterForm').submit();
}
"##;
