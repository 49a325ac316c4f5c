//! Store configuration loading.
//!
//! The only setting is where the store lives. It comes from the `NUTRITION_DB_PATH`
//! environment variable, then from an optional `nutrition.toml` file, then from the built-in
//! default.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the store location
pub const DATABASE_PATH_ENV: &str = "NUTRITION_DB_PATH";

/// File name used when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "fitness_tracker.db";

/// Config file looked up by [`load_default_config`]
pub const DEFAULT_CONFIG_FILE: &str = "nutrition.toml";

/// Configuration structure representing the whole `nutrition.toml` file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// File path (or `sqlite:` URL) of the backing store
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Loads store configuration from a TOML file.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or is not valid TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StoreConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Picks the store configuration from an environment value and a config file path.
///
/// A non-blank `env_value` wins. Otherwise `config_file` is read if it exists, and the default
/// location is used if it does not. Blank environment values count as unset.
///
/// # Errors
/// Returns `Error::Config` if `config_file` exists but cannot be read or parsed.
pub fn resolve_config(env_value: Option<String>, config_file: &Path) -> Result<StoreConfig> {
    if let Some(database_path) = env_value.filter(|value| !value.trim().is_empty()) {
        return Ok(StoreConfig { database_path });
    }

    if config_file.exists() {
        return load_config(config_file);
    }

    Ok(StoreConfig::default())
}

/// Resolves the store configuration for the running process.
///
/// `NUTRITION_DB_PATH` wins when set and non-blank. Otherwise `./nutrition.toml` is read if it
/// exists, and the default location is used if it does not.
///
/// # Errors
/// Returns `Error::Config` if `nutrition.toml` exists but cannot be read or parsed.
pub fn load_default_config() -> Result<StoreConfig> {
    resolve_config(
        std::env::var(DATABASE_PATH_ENV).ok(),
        Path::new(DEFAULT_CONFIG_FILE),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_store_config() {
        let toml_str = r#"
            database_path = "data/meals.db"
        "#;

        let config: StoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database_path, "data/meals.db");
    }

    #[test]
    fn test_missing_path_falls_back_to_default() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.database_path, "fitness_tracker.db");
    }

    #[test]
    fn test_load_config_from_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!(
            "nutrition-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "database_path = \"custom.db\"\n").unwrap();

        let config = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config?.database_path, "custom.db");
        Ok(())
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("definitely/not/here/nutrition.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let path = std::env::temp_dir().join(format!(
            "nutrition-config-invalid-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "database_path = [").unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nutrition-config-{name}-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_resolve_env_value_wins_over_file() -> Result<()> {
        let path = write_temp_config("env-wins", "database_path = \"from_file.db\"\n");

        let config = resolve_config(Some("from_env.db".to_string()), &path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config?.database_path, "from_env.db");
        Ok(())
    }

    #[test]
    fn test_resolve_uses_file_without_env_value() -> Result<()> {
        let path = write_temp_config("file-used", "database_path = \"from_file.db\"\n");

        let config = resolve_config(None, &path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config?.database_path, "from_file.db");
        Ok(())
    }

    #[test]
    fn test_resolve_defaults_without_env_or_file() -> Result<()> {
        let missing = Path::new("definitely/not/here/nutrition.toml");

        let config = resolve_config(None, missing)?;
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        Ok(())
    }

    #[test]
    fn test_resolve_treats_blank_env_value_as_unset() -> Result<()> {
        let missing = Path::new("definitely/not/here/nutrition.toml");
        assert_eq!(
            resolve_config(Some(String::new()), missing)?.database_path,
            DEFAULT_DATABASE_PATH
        );
        assert_eq!(
            resolve_config(Some("   ".to_string()), missing)?.database_path,
            DEFAULT_DATABASE_PATH
        );

        let path = write_temp_config("blank-env", "database_path = \"from_file.db\"\n");
        let config = resolve_config(Some(String::new()), &path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config?.database_path, "from_file.db");
        Ok(())
    }

    #[test]
    fn test_resolve_reports_invalid_file() {
        let path = write_temp_config("resolve-invalid", "database_path = [");

        let result = resolve_config(None, &path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
