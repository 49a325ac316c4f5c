//! Core business logic - framework-agnostic food item, meal entry and totals operations.
//!
//! Every function takes a connection and returns a crate [`Result`](crate::errors::Result).
//! [`crate::store::NutritionStore`] wraps them behind a single handle.

pub mod food_item;
pub mod meal_entry;
pub mod totals;
pub mod validation;

pub use food_item::{NewFoodItem, add_food_item, get_food_item_by_id, search_food_items};
pub use meal_entry::{NewMealEntry, add_meal_entry, get_meal_entries_for_date};
pub use totals::{DailyTotals, get_daily_totals};
pub use validation::{validate_food_item, validate_meal_entry};
