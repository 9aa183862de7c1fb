//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TWISCENT_DATA_DIR` - Directory for persisted records (default: `.twiscent`)
//! - `TWISCENT_CATALOG` - Path to a JSON catalog file (default: built-in catalog)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart and profile records
    pub data_dir: PathBuf,
    /// JSON catalog file to load instead of the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = match get_optional_env("TWISCENT_DATA_DIR") {
            Some(dir) => non_empty_path("TWISCENT_DATA_DIR", dir)?,
            None => PathBuf::from(".twiscent"),
        };
        let catalog_path = get_optional_env("TWISCENT_CATALOG")
            .map(|path| non_empty_path("TWISCENT_CATALOG", path))
            .transpose()?;

        Ok(Self {
            data_dir,
            catalog_path,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reject empty paths so a blank variable fails loudly instead of writing
/// records into the working directory root.
fn non_empty_path(key: &str, value: String) -> Result<PathBuf, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "path must not be empty".to_string(),
        ));
    }
    Ok(PathBuf::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_path_accepts_value() {
        let path = non_empty_path("TEST_VAR", "data/shop".to_string()).unwrap();
        assert_eq!(path, PathBuf::from("data/shop"));
    }

    #[test]
    fn test_non_empty_path_rejects_blank() {
        let result = non_empty_path("TEST_VAR", "   ".to_string());
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
