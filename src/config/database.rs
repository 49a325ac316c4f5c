//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`, marked
//! `IF NOT EXISTS` so opening an existing store is a no-op for the schema.
//!
//! Connections are capped at one per store and open with `PRAGMA foreign_keys = OFF`: the
//! `meal_entries.food_item_id` foreign key is declared but not enforced. The pool never recycles
//! that connection, since an in-memory store lives and dies with it.

use crate::entities::{FoodItem, MealEntry};
use crate::errors::{Error, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::time::Duration;
use tracing::{debug, info, instrument};

const IN_MEMORY_URL: &str = "sqlite::memory:";

// The pool only takes durations, so "never" is spelled as a century.
const HELD_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Turns a store location into a `SQLite` connection URL.
///
/// Full `sqlite:` URLs are passed through. `:memory:` maps to an in-memory database. Anything
/// else is treated as a file path, created on first open.
#[must_use]
pub fn database_url(location: &str) -> String {
    if location.starts_with("sqlite:") {
        location.to_string()
    } else if location == ":memory:" {
        IN_MEMORY_URL.to_string()
    } else {
        format!("sqlite://{location}?mode=rwc")
    }
}

/// Pool settings for the store at `location`: exactly one connection, kept for the lifetime of
/// the handle, with foreign key enforcement off.
#[must_use]
pub fn connect_options(location: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url(location));
    options
        .max_connections(1)
        .min_connections(1)
        .max_lifetime(HELD_CONNECTION_LIFETIME)
        .idle_timeout(HELD_CONNECTION_LIFETIME)
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(|opts| opts.foreign_keys(false));
    options
}

/// Opens a single-connection handle to the store at `location`.
///
/// # Errors
/// Returns `Error::StorageUnavailable` if the location cannot be opened or created.
#[instrument]
pub async fn connect(location: &str) -> Result<DatabaseConnection> {
    let options = connect_options(location);
    debug!("Opening database connection to: {}", options.get_url());

    Database::connect(options)
        .await
        .map_err(|source| Error::StorageUnavailable {
            location: location.to_string(),
            source,
        })
}

/// Creates the `food_items` and `meal_entries` tables if they do not exist yet.
///
/// # Errors
/// Returns the engine error if either `CREATE TABLE` statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut food_item_table = schema.create_table_from_entity(FoodItem);
    food_item_table.if_not_exists();
    let mut meal_entry_table = schema.create_table_from_entity(MealEntry);
    meal_entry_table.if_not_exists();

    db.execute(builder.build(&food_item_table)).await?;
    db.execute(builder.build(&meal_entry_table)).await?;

    Ok(())
}

/// Opens the store at `location` and makes sure both tables exist.
///
/// # Errors
/// Returns `Error::StorageUnavailable` if the store cannot be opened or its schema cannot be
/// created.
pub async fn init_db(location: &str) -> Result<DatabaseConnection> {
    let db = connect(location).await?;

    info!("Database connection opened. Ensuring tables are created...");
    create_tables(&db)
        .await
        .map_err(|source| Error::StorageUnavailable {
            location: location.to_string(),
            source,
        })?;

    Ok(db)
}
