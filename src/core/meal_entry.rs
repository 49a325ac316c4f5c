//! Meal entry business logic - Logging what was eaten and when.
//!
//! The referenced food item is not checked on insert. Entries pointing at a missing item are
//! stored anyway and ignored when totals are computed.

use crate::{
    entities::{MealEntry, meal_entry},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A meal entry that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMealEntry {
    /// ID of the food item eaten
    pub food_item_id: i64,
    /// Amount eaten, in the food item's serving unit
    pub amount: f64,
    /// When it was eaten
    pub date: NaiveDateTime,
}

impl NewMealEntry {
    /// Builds an entry for `amount` of `food_item_id` eaten at `date`.
    #[must_use]
    pub const fn new(food_item_id: i64, amount: f64, date: NaiveDateTime) -> Self {
        Self {
            food_item_id,
            amount,
            date,
        }
    }
}

/// Inserts a meal entry and returns the id assigned by storage.
///
/// # Errors
/// Returns `Error::StorageWriteFailed` if the insert fails.
pub async fn add_meal_entry<C>(db: &C, entry: &NewMealEntry) -> Result<i64>
where
    C: ConnectionTrait,
{
    let model = meal_entry::ActiveModel {
        food_item_id: Set(Some(entry.food_item_id)),
        amount: Set(entry.amount),
        date: Set(entry.date),
        ..Default::default()
    };

    let id = MealEntry::insert(model)
        .exec(db)
        .await
        .map_err(Error::StorageWriteFailed)?
        .last_insert_id;

    info!(
        "Logged meal entry {} for food_item_id {}: amount {} at {}",
        id, entry.food_item_id, entry.amount, entry.date
    );
    Ok(id)
}

/// Retrieves every meal entry on the same calendar date as `date`, oldest first.
///
/// Only the date part of `date` is compared, using `SQLite`'s `date()` on the stored local
/// timestamp. Orphaned entries are included.
///
/// # Errors
/// Returns `Error::StorageReadFailed` if the query fails.
pub async fn get_meal_entries_for_date<C>(
    db: &C,
    date: NaiveDateTime,
) -> Result<Vec<meal_entry::Model>>
where
    C: ConnectionTrait,
{
    let entries = MealEntry::find()
        .filter(Expr::cust_with_values(
            "date(\"meal_entries\".\"date\") = date(?)",
            [date],
        ))
        .order_by_asc(meal_entry::Column::Date)
        .all(db)
        .await
        .map_err(Error::StorageReadFailed)?;

    debug!("Fetched {} meal entries for {}", entries.len(), date.date());
    Ok(entries)
}
