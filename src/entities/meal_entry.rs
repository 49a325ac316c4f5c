//! Meal entry entity - A logged consumption of some amount of a food item.
//!
//! `food_item_id` is a declared foreign key that the store does not enforce, so an entry may
//! point at an item that does not exist. Such orphans are skipped by aggregation.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Meal entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_entries")]
pub struct Model {
    /// Unique identifier, assigned by storage on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the consumed food item
    pub food_item_id: Option<i64>,
    /// Amount eaten, in the same unit as the food item's `serving_size`
    pub amount: f64,
    /// When the food was eaten (local time, no timezone)
    pub date: DateTime,
}

/// Defines relationships between `MealEntry` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each meal entry refers to one food item
    #[sea_orm(
        belongs_to = "super::food_item::Entity",
        from = "Column::FoodItemId",
        to = "super::food_item::Column::Id"
    )]
    FoodItem,
}

impl Related<super::food_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
