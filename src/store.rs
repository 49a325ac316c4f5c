//! The nutrition store handle.
//!
//! `NutritionStore` owns one connection to an `SQLite` file and exposes the store operations on
//! it. Open it with [`NutritionStore::open`], pass it around by reference, and release it with
//! [`NutritionStore::close`]. Dropping the handle also releases the connection.

use crate::{
    config::{StoreConfig, database},
    core::{self, DailyTotals, NewFoodItem, NewMealEntry},
    entities::{food_item, meal_entry},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Handle to an open nutrition store.
#[derive(Debug)]
pub struct NutritionStore {
    db: DatabaseConnection,
    location: String,
}

impl NutritionStore {
    /// Opens or creates the store at `location` and ensures its tables exist.
    ///
    /// `location` is a file path, `:memory:`, or a full `sqlite:` URL.
    ///
    /// # Errors
    /// Returns `Error::StorageUnavailable` if the location is not accessible or the schema
    /// cannot be created.
    #[instrument]
    pub async fn open(location: &str) -> Result<Self> {
        let db = database::init_db(location).await?;
        info!("Nutrition store ready at {}", location);
        Ok(Self {
            db,
            location: location.to_string(),
        })
    }

    /// Opens the store at the configured location.
    ///
    /// # Errors
    /// Same as [`NutritionStore::open`].
    pub async fn open_with_config(config: &StoreConfig) -> Result<Self> {
        Self::open(&config.database_path).await
    }

    /// Location this store was opened from.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Underlying connection, for callers composing their own queries.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Registers a food item and returns its new id.
    ///
    /// # Errors
    /// Returns `Error::StorageWriteFailed` if the insert fails.
    #[instrument(skip(self))]
    pub async fn add_food_item(&self, item: &NewFoodItem) -> Result<i64> {
        core::add_food_item(&self.db, item).await
    }

    /// Records a meal entry and returns its new id. The food item is not checked.
    ///
    /// # Errors
    /// Returns `Error::StorageWriteFailed` if the insert fails.
    #[instrument(skip(self))]
    pub async fn add_meal_entry(&self, entry: &NewMealEntry) -> Result<i64> {
        core::add_meal_entry(&self.db, entry).await
    }

    /// Sums the scaled macros of every meal entry on the calendar date of `date`.
    ///
    /// # Errors
    /// Returns `Error::StorageReadFailed` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_daily_totals(&self, date: NaiveDateTime) -> Result<DailyTotals> {
        core::get_daily_totals(&self.db, date).await
    }

    /// Lists food items whose name matches `%query%` under `SQLite` `LIKE` rules.
    ///
    /// # Errors
    /// Returns `Error::StorageReadFailed` if the query fails.
    #[instrument(skip(self))]
    pub async fn search_food_items(&self, query: &str) -> Result<Vec<food_item::Model>> {
        core::search_food_items(&self.db, query).await
    }

    /// Looks up a single food item.
    ///
    /// # Errors
    /// Returns `Error::StorageReadFailed` if the query fails.
    pub async fn get_food_item(&self, id: i64) -> Result<Option<food_item::Model>> {
        core::get_food_item_by_id(&self.db, id).await
    }

    /// Lists the meal entries logged on the calendar date of `date`.
    ///
    /// # Errors
    /// Returns `Error::StorageReadFailed` if the query fails.
    pub async fn get_meal_entries_for_date(
        &self,
        date: NaiveDateTime,
    ) -> Result<Vec<meal_entry::Model>> {
        core::get_meal_entries_for_date(&self.db, date).await
    }

    /// Closes the connection.
    ///
    /// # Errors
    /// Returns `Error::StorageUnavailable` if the connection could not be shut down cleanly.
    pub async fn close(self) -> Result<()> {
        let Self { db, location } = self;
        db.close()
            .await
            .map_err(|source| Error::StorageUnavailable {
                location: location.clone(),
                source,
            })?;
        info!("Nutrition store at {} closed", location);
        Ok(())
    }
}
