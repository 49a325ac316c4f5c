//! Shared test utilities for the nutrition store.
//!
//! This module provides helpers for setting up in-memory databases and creating food items and
//! meal entries with sensible defaults.

use crate::{
    config::database,
    core::{food_item, meal_entry},
    entities,
    errors::Result,
};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a tracing subscriber that writes through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with both tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    database::init_db(":memory:").await
}

/// Builds a naive local timestamp.
///
/// # Panics
/// Panics if the date or time is out of range.
#[allow(clippy::unwrap_used)]
#[must_use]
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// 165 kcal, 31g protein, 0g carbs, 3.6g fat per 100g.
#[must_use]
pub fn chicken_breast() -> food_item::NewFoodItem {
    food_item::NewFoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 100.0)
}

/// 130 kcal, 2.7g protein, 28g carbs, 0.3g fat per 100g.
#[must_use]
pub fn white_rice() -> food_item::NewFoodItem {
    food_item::NewFoodItem::new("White Rice", 130.0, 2.7, 28.0, 0.3, 100.0)
}

/// Strips the id from a stored food item so it can be compared with what was inserted.
#[must_use]
pub fn as_new_food_item(model: &entities::FoodItemModel) -> food_item::NewFoodItem {
    food_item::NewFoodItem {
        name: model.name.clone(),
        calories: model.calories,
        protein: model.protein,
        carbs: model.carbs,
        fat: model.fat,
        serving_size: model.serving_size,
        is_unit_based: model.is_unit_based,
    }
}

/// Logs `amount` of `food_item_id` at `date` and returns the entry id.
pub async fn log_test_meal(
    db: &DatabaseConnection,
    food_item_id: i64,
    amount: f64,
    date: NaiveDateTime,
) -> Result<i64> {
    meal_entry::add_meal_entry(db, &meal_entry::NewMealEntry::new(food_item_id, amount, date))
        .await
}

/// Sets up a test database holding a single "Chicken Breast" item.
/// Returns (db, `food_item_id`).
pub async fn setup_with_food_item() -> Result<(DatabaseConnection, i64)> {
    let db = setup_test_db().await?;
    let id = food_item::add_food_item(&db, &chicken_breast()).await?;
    Ok((db, id))
}
