//! Read-only repository for the `mix_list` table.

use sqlx::PgPool;

use mixarchive_core::params::{SortColumn, SortOrder, ViewParams};

use crate::models::mix::Mix;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "mix_id, artist, mix_date, year";

/// Provides the two queries the listing page needs: the filtered/sorted
/// listing itself and the distinct-years universe for the filter form.
pub struct MixRepo;

impl MixRepo {
    /// Build the listing query text.
    ///
    /// The sort identifier and direction are interpolated from the
    /// validated enums only; this function deliberately does not accept
    /// strings for either. Year values are never spliced into the text --
    /// when a filter is present they are bound as an array parameter.
    fn listing_query(filtered: bool, sort: SortColumn, order: SortOrder) -> String {
        let mut query = format!("SELECT {COLUMNS} FROM mix_list");
        if filtered {
            query.push_str(" WHERE year = ANY($1)");
        }
        query.push_str(&format!(" ORDER BY {} {}", sort.sql_ident(), order.as_str()));
        query
    }

    /// List mixes per the validated view parameters.
    ///
    /// An empty year filter means no restriction, not "year 0".
    pub async fn list(pool: &PgPool, params: &ViewParams) -> Result<Vec<Mix>, sqlx::Error> {
        let query = Self::listing_query(params.has_year_filter(), params.sort, params.order);
        if params.has_year_filter() {
            sqlx::query_as::<_, Mix>(&query)
                .bind(&params.years)
                .fetch_all(pool)
                .await
        } else {
            sqlx::query_as::<_, Mix>(&query).fetch_all(pool).await
        }
    }

    /// All distinct years present in the table, newest first.
    ///
    /// Independent of the current filter; this populates the checkbox
    /// universe for the filter form.
    pub async fn distinct_years(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT year FROM mix_list ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }
}
