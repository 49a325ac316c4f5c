//! Food item entity - A reusable nutritional template.
//!
//! Macro values are expressed per one `serving_size`. Meal entries reference food items by id
//! and are scaled against the serving size when daily totals are computed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Food item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    /// Unique identifier, assigned by storage on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Chicken Breast")
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving, in grams
    pub protein: f64,
    /// Carbohydrates per serving, in grams
    pub carbs: f64,
    /// Fat per serving, in grams
    pub fat: f64,
    /// Reference amount the macro fields are expressed against (e.g., 100 for 100g)
    pub serving_size: f64,
    /// True for discrete items like "1 bar", false for mass/volume based items
    #[sea_orm(default_value = false)]
    pub is_unit_based: bool,
}

/// Defines relationships between `FoodItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One food item is referenced by many meal entries
    #[sea_orm(has_many = "super::meal_entry::Entity")]
    MealEntries,
}

impl Related<super::meal_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
