//! Optional input checks for callers.
//!
//! The store accepts whatever it is given: blank names, negative macros and a zero serving size
//! all go straight into the tables. Callers that want cleaner data run these checks before
//! inserting. Nothing in [`crate::core`] or [`crate::store`] calls them.

use crate::{
    core::{food_item::NewFoodItem, meal_entry::NewMealEntry},
    errors::{Error, Result},
};

fn check_food_macro(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidFoodItem {
            message: format!("{field} must be a non-negative number, got {value}"),
        });
    }
    Ok(())
}

/// Checks that a food item has a name, non-negative macros and a positive serving size.
///
/// # Errors
/// Returns `Error::InvalidFoodItem` naming the first rejected field.
pub fn validate_food_item(item: &NewFoodItem) -> Result<()> {
    if item.name.trim().is_empty() {
        return Err(Error::InvalidFoodItem {
            message: "name cannot be empty".to_string(),
        });
    }

    check_food_macro("calories", item.calories)?;
    check_food_macro("protein", item.protein)?;
    check_food_macro("carbs", item.carbs)?;
    check_food_macro("fat", item.fat)?;

    if !item.serving_size.is_finite() || item.serving_size <= 0.0 {
        return Err(Error::InvalidFoodItem {
            message: format!(
                "serving_size must be a positive number, got {}",
                item.serving_size
            ),
        });
    }

    Ok(())
}

/// Checks that a meal entry has a positive amount.
///
/// # Errors
/// Returns `Error::InvalidMealEntry` if the amount is zero, negative or not finite.
pub fn validate_meal_entry(entry: &NewMealEntry) -> Result<()> {
    if !entry.amount.is_finite() || entry.amount <= 0.0 {
        return Err(Error::InvalidMealEntry {
            message: format!("amount must be a positive number, got {}", entry.amount),
        });
    }
    Ok(())
}
