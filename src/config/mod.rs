/// Database connection and table creation
pub mod database;

/// Store location settings from the environment or `nutrition.toml`
pub mod settings;

pub use settings::{StoreConfig, load_config, load_default_config, resolve_config};
