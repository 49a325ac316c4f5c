//! Daily macro totals.
//!
//! Every meal entry on a calendar date is joined to its food item and each macro is scaled by
//! `amount / serving_size` before summing. The join is an inner join, so orphaned entries drop
//! out. Dates are compared with `SQLite`'s `date()` on the stored local timestamps; no timezone
//! conversion happens.

use crate::errors::{Error, Result};
use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const DAILY_TOTALS_SQL: &str = r#"
    SELECT
        SUM(f.calories * (m.amount / f.serving_size)) AS calories,
        SUM(f.protein * (m.amount / f.serving_size)) AS protein,
        SUM(f.carbs * (m.amount / f.serving_size)) AS carbs,
        SUM(f.fat * (m.amount / f.serving_size)) AS fat
    FROM meal_entries m
    JOIN food_items f ON m.food_item_id = f.id
    WHERE date(m.date) = date(?)
"#;

/// Summed macros for one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Total calories
    pub calories: f64,
    /// Total protein, in grams
    pub protein: f64,
    /// Total carbohydrates, in grams
    pub carbs: f64,
    /// Total fat, in grams
    pub fat: f64,
}

impl fmt::Display for DailyTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calories: {:.1}, protein: {:.1}g, carbs: {:.1}g, fat: {:.1}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

// SUM over zero rows is NULL, so each column comes back optional.
#[derive(Debug, FromQueryResult)]
struct DailyTotalsRow {
    calories: Option<f64>,
    protein: Option<f64>,
    carbs: Option<f64>,
    fat: Option<f64>,
}

impl From<DailyTotalsRow> for DailyTotals {
    fn from(row: DailyTotalsRow) -> Self {
        Self {
            calories: row.calories.unwrap_or(0.0),
            protein: row.protein.unwrap_or(0.0),
            carbs: row.carbs.unwrap_or(0.0),
            fat: row.fat.unwrap_or(0.0),
        }
    }
}

/// Computes the macro totals for the calendar date of `date`.
///
/// A date with no meal entries yields all zeros. A food item with a `serving_size` of zero makes
/// its entries' terms NULL in `SQLite`, which the sum skips.
///
/// # Errors
/// Returns `Error::StorageReadFailed` if the query fails.
pub async fn get_daily_totals<C>(db: &C, date: NaiveDateTime) -> Result<DailyTotals>
where
    C: ConnectionTrait,
{
    let statement = Statement::from_sql_and_values(
        db.get_database_backend(),
        DAILY_TOTALS_SQL,
        [date.into()],
    );

    let totals = DailyTotalsRow::find_by_statement(statement)
        .one(db)
        .await
        .map_err(Error::StorageReadFailed)?
        .map(DailyTotals::from)
        .unwrap_or_default();

    debug!("Daily totals for {}: {}", date.date(), totals);
    Ok(totals)
}
