use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::HiveConfig;

/// Why `hive/config.toml` could not be turned into a [`HiveConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read Hive config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Hive config '{path}' is not valid TOML for this client: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid Hive config: {message}")]
    ValidationError { message: String },
}

impl HiveConfig {
    /// `hive/config.toml` under the platform config directory, or under the
    /// working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hive")
            .join("config.toml")
    }

    /// Read the config from [`HiveConfig::config_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read the config at `path`.
    ///
    /// A client that has never been configured has no file; that case yields
    /// the built-in queue bound, daily goal, spin length and log filter.
    /// Sections missing from an existing file keep their defaults too.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no hive config, using defaults");
                return Ok(HiveConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: HiveConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded hive config");
        Ok(config)
    }

    /// Reject values the store or the raffle spinner cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problem = if self.store.max_queued_actions == 0 {
            Some("store.max_queued_actions must be at least 1")
        } else if self.raffle.spin_ticks == 0 {
            Some("raffle.spin_ticks must be at least 1")
        } else if self.logging.filter.trim().is_empty() {
            Some("logging.filter must not be empty")
        } else {
            None
        };

        match problem {
            Some(message) => Err(ConfigError::ValidationError {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }
}
