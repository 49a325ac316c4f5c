//! Food item business logic - Registering and finding food items.
//!
//! Food items are append-only: once inserted they are never updated or deleted. Inputs are
//! stored exactly as given; see [`crate::core::validation`] for checks a caller may run first.

use crate::{
    entities::{FoodItem, food_item},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A food item that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodItem {
    /// Display name
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving, in grams
    pub protein: f64,
    /// Carbohydrates per serving, in grams
    pub carbs: f64,
    /// Fat per serving, in grams
    pub fat: f64,
    /// Reference amount the macros are expressed against
    pub serving_size: f64,
    /// True for discrete items like "1 bar"
    #[serde(default)]
    pub is_unit_based: bool,
}

impl NewFoodItem {
    /// Builds a mass/volume based food item (`is_unit_based` is false).
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        serving_size: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            serving_size,
            is_unit_based: false,
        }
    }

    /// Marks the item as counted in discrete units.
    #[must_use]
    pub const fn unit_based(mut self) -> Self {
        self.is_unit_based = true;
        self
    }
}

/// Inserts a new food item and returns the id assigned by storage.
///
/// The row is visible to every later read on the same connection and the id can be used as a
/// meal entry's `food_item_id` right away.
///
/// # Errors
/// Returns `Error::StorageWriteFailed` if the insert fails.
pub async fn add_food_item<C>(db: &C, item: &NewFoodItem) -> Result<i64>
where
    C: ConnectionTrait,
{
    let model = food_item::ActiveModel {
        name: Set(item.name.clone()),
        calories: Set(item.calories),
        protein: Set(item.protein),
        carbs: Set(item.carbs),
        fat: Set(item.fat),
        serving_size: Set(item.serving_size),
        is_unit_based: Set(item.is_unit_based),
        ..Default::default()
    };

    let id = FoodItem::insert(model)
        .exec(db)
        .await
        .map_err(Error::StorageWriteFailed)?
        .last_insert_id;

    info!(
        "Added food item '{}' (ID: {}) per {} serving",
        item.name, id, item.serving_size
    );
    Ok(id)
}

/// Finds food items whose name contains `query`.
///
/// Matching is `SQLite` `LIKE` against `%query%`: ASCII case-insensitive, and `%` or `_` inside
/// `query` act as wildcards. An empty query returns every item. Row order is whatever the
/// engine returns.
///
/// # Errors
/// Returns `Error::StorageReadFailed` if the query fails.
pub async fn search_food_items<C>(db: &C, query: &str) -> Result<Vec<food_item::Model>>
where
    C: ConnectionTrait,
{
    let items = FoodItem::find()
        .filter(food_item::Column::Name.like(format!("%{query}%")))
        .all(db)
        .await
        .map_err(Error::StorageReadFailed)?;

    debug!("Food item search '{}' matched {} items", query, items.len());
    Ok(items)
}

/// Retrieves a food item by id, returning None if it does not exist.
///
/// # Errors
/// Returns `Error::StorageReadFailed` if the query fails.
pub async fn get_food_item_by_id<C>(db: &C, id: i64) -> Result<Option<food_item::Model>>
where
    C: ConnectionTrait,
{
    FoodItem::find_by_id(id)
        .one(db)
        .await
        .map_err(Error::StorageReadFailed)
}
