//! Unified error types for the nutrition store.
//!
//! Storage failures are split by the kind of operation that hit them so callers can tell an
//! unusable store apart from a failed insert or a failed query. The underlying `DbErr` is always
//! kept as the source, unmodified.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the store and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing store could not be opened, created, or given its schema.
    #[error("Storage unavailable at {location}: {source}")]
    StorageUnavailable {
        /// Location the store was opened from
        location: String,
        /// Engine error that caused the failure
        #[source]
        source: DbErr,
    },

    /// An insert did not complete.
    #[error("Storage write failed: {0}")]
    StorageWriteFailed(#[source] DbErr),

    /// A query did not complete. Never raised for "no rows".
    #[error("Storage read failed: {0}")]
    StorageReadFailed(#[source] DbErr),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Rejected by [`crate::core::validation::validate_food_item`].
    #[error("Invalid food item: {message}")]
    InvalidFoodItem {
        /// Which field was rejected and why
        message: String,
    },

    /// Rejected by [`crate::core::validation::validate_meal_entry`].
    #[error("Invalid meal entry: {message}")]
    InvalidMealEntry {
        /// Which field was rejected and why
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
