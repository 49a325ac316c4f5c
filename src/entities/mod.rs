//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod food_item;
pub mod meal_entry;

// Re-export specific types to avoid conflicts
pub use food_item::{Column as FoodItemColumn, Entity as FoodItem, Model as FoodItemModel};
pub use meal_entry::{Column as MealEntryColumn, Entity as MealEntry, Model as MealEntryModel};
