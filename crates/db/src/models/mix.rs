use chrono::NaiveDate;
use mixarchive_core::types::DbId;
use sqlx::FromRow;

/// A row from the `mix_list` table.
///
/// `year` is stored redundantly with `mix_date` because it is both a
/// displayed column and the filter dimension.
#[derive(Debug, Clone, FromRow)]
pub struct Mix {
    pub mix_id: DbId,
    pub artist: String,
    pub mix_date: NaiveDate,
    pub year: i32,
}
