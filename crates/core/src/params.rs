//! Validated view parameters for the listing page.
//!
//! Raw query-string input is untrusted; everything here normalizes it to a
//! fixed enumerated sort column, a fixed sort direction, and an
//! integer-coerced year filter set. Invalid input is silently replaced with
//! defaults rather than rejected, so parsing can never fail.
//!
//! The sort column and direction are the only values ever interpolated into
//! SQL downstream, which is safe precisely because they are enums here and
//! the repository layer accepts nothing else.

/// A sortable column of the `mix_list` table.
///
/// The variant set is the whitelist: any query-string value outside it maps
/// to [`SortColumn::MixId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    MixId,
    Artist,
    Date,
    Year,
}

impl SortColumn {
    /// All columns, in table display order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::MixId,
        SortColumn::Artist,
        SortColumn::Date,
        SortColumn::Year,
    ];

    /// Parse a raw `sort` parameter, falling back to `MixId` on anything
    /// unrecognized. Matching is exact (case-sensitive), mirroring the
    /// public URL contract.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "MixID" => SortColumn::MixId,
            "Artist" => SortColumn::Artist,
            "Date" => SortColumn::Date,
            "Year" => SortColumn::Year,
            _ => SortColumn::MixId,
        }
    }

    /// The value used in query strings (`?sort=...`).
    pub fn query_value(self) -> &'static str {
        match self {
            SortColumn::MixId => "MixID",
            SortColumn::Artist => "Artist",
            SortColumn::Date => "Date",
            SortColumn::Year => "Year",
        }
    }

    /// The SQL identifier this column sorts by.
    ///
    /// Only ever interpolated into `ORDER BY` clauses; the enum itself is
    /// the injection guard.
    pub fn sql_ident(self) -> &'static str {
        match self {
            SortColumn::MixId => "mix_id",
            SortColumn::Artist => "artist",
            SortColumn::Date => "mix_date",
            SortColumn::Year => "year",
        }
    }

    /// Column caption shown in the table header.
    pub fn caption(self) -> &'static str {
        match self {
            SortColumn::MixId => "ID",
            SortColumn::Artist => "Artist",
            SortColumn::Date => "Date",
            SortColumn::Year => "Year",
        }
    }
}

impl Default for SortColumn {
    fn default() -> Self {
        SortColumn::MixId
    }
}

/// Sort direction. Anything other than an exact `ASC`/`DESC` parses as `Asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a raw `order` parameter, falling back to `Asc`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ASC" => SortOrder::Asc,
            "DESC" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    /// The SQL keyword and query-string value (`ASC` / `DESC`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Validated request state for one page render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub sort: SortColumn,
    pub order: SortOrder,
    /// Integer-coerced year filter. Empty means "no restriction", not
    /// "match year 0".
    pub years: Vec<i32>,
}

impl ViewParams {
    /// Parse a raw query string (without the leading `?`) into validated
    /// parameters. Never fails; unknown keys are ignored, repeated
    /// `sort`/`order` keys are last-wins, and both `years[]` and `years`
    /// are accepted for the filter list.
    pub fn from_query(query: &str) -> Self {
        let mut params = ViewParams::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.apply(&key, &value);
        }
        params
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "sort" => self.sort = SortColumn::parse(value),
            "order" => self.order = SortOrder::parse(value),
            "years[]" | "years" => self.years.push(coerce_year(value)),
            _ => {}
        }
    }

    /// Whether the listing query should carry a year restriction.
    pub fn has_year_filter(&self) -> bool {
        !self.years.is_empty()
    }
}

/// Best-effort integer coercion for year filter values.
///
/// Accepts an optional sign followed by a leading run of digits and ignores
/// any trailing garbage (`"2021"` → 2021, `"12ab"` → 12). Anything without a
/// leading numeric prefix yields `0`, which acts as a likely-non-matching
/// filter value rather than an error. Saturates at the `i32` bounds.
pub fn coerce_year(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
        if value > i64::from(i32::MAX) {
            value = i64::from(i32::MAX) + 1;
            // Already past the i32 range in either direction.
            break;
        }
    }

    if !seen_digit {
        return 0;
    }
    let signed = if negative { -value } else { value };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- SortColumn ----------------------------------------------------------

    #[test]
    fn sort_column_parses_whitelisted_values() {
        assert_eq!(SortColumn::parse("MixID"), SortColumn::MixId);
        assert_eq!(SortColumn::parse("Artist"), SortColumn::Artist);
        assert_eq!(SortColumn::parse("Date"), SortColumn::Date);
        assert_eq!(SortColumn::parse("Year"), SortColumn::Year);
    }

    #[test]
    fn unrecognized_sort_column_defaults_to_mix_id() {
        assert_eq!(SortColumn::parse("Bogus"), SortColumn::MixId);
        assert_eq!(SortColumn::parse(""), SortColumn::MixId);
        // Case-sensitive match: wrong case is not whitelisted.
        assert_eq!(SortColumn::parse("artist"), SortColumn::MixId);
    }

    #[test]
    fn injection_attempt_in_sort_falls_back_silently() {
        assert_eq!(
            SortColumn::parse("DROP TABLE mix_list; --"),
            SortColumn::MixId
        );
        assert_eq!(SortColumn::parse("mix_id, (SELECT 1)"), SortColumn::MixId);
    }

    // -- SortOrder -----------------------------------------------------------

    #[test]
    fn unrecognized_order_defaults_to_asc() {
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("ASC; DROP"), SortOrder::Asc);
    }

    #[test]
    fn order_toggles() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    // -- coerce_year ---------------------------------------------------------

    #[test]
    fn year_coercion_parses_plain_integers() {
        assert_eq!(coerce_year("2021"), 2021);
        assert_eq!(coerce_year("-5"), -5);
        assert_eq!(coerce_year("+7"), 7);
    }

    #[test]
    fn year_coercion_takes_leading_numeric_prefix() {
        assert_eq!(coerce_year("12ab"), 12);
        assert_eq!(coerce_year("  2020 "), 2020);
    }

    #[test]
    fn non_numeric_year_coerces_to_zero() {
        assert_eq!(coerce_year("abc"), 0);
        assert_eq!(coerce_year(""), 0);
        assert_eq!(coerce_year("-"), 0);
        assert_eq!(coerce_year("year"), 0);
    }

    #[test]
    fn year_coercion_saturates_out_of_range_input() {
        assert_eq!(coerce_year("99999999999999999999"), i32::MAX);
        assert_eq!(coerce_year("-99999999999999999999"), i32::MIN);
    }

    // -- ViewParams ----------------------------------------------------------

    #[test]
    fn empty_query_yields_defaults() {
        let params = ViewParams::from_query("");
        assert_eq!(params.sort, SortColumn::MixId);
        assert_eq!(params.order, SortOrder::Asc);
        assert!(params.years.is_empty());
        assert!(!params.has_year_filter());
    }

    #[test]
    fn full_query_parses() {
        let params = ViewParams::from_query("sort=Artist&order=DESC&years[]=2020&years[]=2021");
        assert_eq!(params.sort, SortColumn::Artist);
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.years, vec![2020, 2021]);
    }

    #[test]
    fn percent_encoded_years_key_is_accepted() {
        let params = ViewParams::from_query("years%5B%5D=2019");
        assert_eq!(params.years, vec![2019]);
    }

    #[test]
    fn plain_years_key_is_accepted() {
        let params = ViewParams::from_query("years=2018&years=2019");
        assert_eq!(params.years, vec![2018, 2019]);
    }

    #[test]
    fn garbage_year_becomes_zero_filter() {
        let params = ViewParams::from_query("years[]=abc");
        assert_eq!(params.years, vec![0]);
        assert!(params.has_year_filter());
    }

    #[test]
    fn invalid_sort_and_order_default_silently() {
        let params = ViewParams::from_query("sort=DROP+TABLE&order=SIDEWAYS");
        assert_eq!(params.sort, SortColumn::MixId);
        assert_eq!(params.order, SortOrder::Asc);
    }

    #[test]
    fn repeated_scalar_keys_are_last_wins() {
        let params = ViewParams::from_query("sort=Artist&sort=Year&order=DESC&order=ASC");
        assert_eq!(params.sort, SortColumn::Year);
        assert_eq!(params.order, SortOrder::Asc);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = ViewParams::from_query("page=3&q=hello&sort=Date");
        assert_eq!(params.sort, SortColumn::Date);
        assert!(params.years.is_empty());
    }
}
