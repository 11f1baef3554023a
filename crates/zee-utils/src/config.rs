//! Configuration management utilities
//!
//! Process configuration comes from environment variables, optionally seeded
//! from a dotenv-style file before anything else reads them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable selecting the deployment environment
pub const ENV_VAR: &str = "ZEE_ENV";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested env file could not be read or parsed
    #[error("Failed to load env file {}: {source}", path.display())]
    EnvFile {
        /// Path that was requested
        path: PathBuf,
        /// Underlying dotenv error
        #[source]
        source: dotenvy::Error,
    },

    /// The default `.env` file exists but is malformed
    #[error("Failed to load .env: {0}")]
    DefaultEnvFile(#[from] dotenvy::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (dev, prod, etc.)
    pub environment: String,
    /// Env file that was loaded at startup, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "zee-rs".to_string(),
            environment: "development".to_string(),
            env_file: None,
        }
    }
}

impl Config {
    /// Build the configuration from process environment
    ///
    /// Call [`load_env_file`] first so values from `.env` are visible.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(environment) = std::env::var(ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
        {
            config.environment = environment;
        }
        config
    }

    /// Record the env file that was loaded
    pub fn with_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.env_file = path;
        self
    }
}

/// Load variables from a dotenv file into the process environment
///
/// With `Some(path)` the file must exist. With `None` the default `.env` lookup
/// is used and a missing file is not an error. Variables that are already set
/// are left untouched.
///
/// Returns the path of the file that was loaded.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app_name, "zee-rs");
        assert_eq!(config.environment, "development");
        assert!(config.env_file.is_none());
    }

    #[test]
    fn test_load_explicit_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ZEE_UTILS_TEST_LOADED=from-file").unwrap();

        let loaded = load_env_file(Some(file.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(file.path()));
        assert_eq!(
            std::env::var("ZEE_UTILS_TEST_LOADED").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn test_missing_explicit_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.env");

        let result = load_env_file(Some(&missing));
        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_with_env_file() {
        let config = Config::default().with_env_file(Some(PathBuf::from(".env")));
        assert_eq!(config.env_file, Some(PathBuf::from(".env")));
    }
}
