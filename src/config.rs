//! Configuration
//!
//! Settings are read from TOML. Lookup order: an explicit path, then
//! `<config dir>/extfile/config.toml` when that file exists, then defaults.
//!
//! ```toml
//! default_algorithm = "sha-256"
//! buffer_size = 65536
//! human_readable = true
//!
//! [logging]
//! level = "warn"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{ExtFileError, Result};
use crate::hash::{HashAlgorithm, DEFAULT_BUFFER_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Algorithm used when none is given on the command line
    #[serde(deserialize_with = "deserialize_algorithm")]
    pub default_algorithm: HashAlgorithm,
    /// Read buffer for deep comparison
    pub buffer_size: usize,
    /// Format sizes with units rather than raw byte counts
    pub human_readable: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "extfile=debug"
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: HashAlgorithm::Sha256,
            buffer_size: DEFAULT_BUFFER_SIZE,
            human_readable: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> std::result::Result<HashAlgorithm, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    HashAlgorithm::select(&name).map_err(|_| {
        serde::de::Error::custom(format!("unsupported hash algorithm '{}'", name))
    })
}

impl Config {
    /// Default location of the config file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("extfile").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_path() {
                Some(p) if p.is_file() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ExtFileError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&text).map_err(|reason| ExtFileError::Config {
            path: path.to_path_buf(),
            reason,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse TOML text; the error is a human-readable reason
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let config: Config = toml::from_str(text).map_err(|e| e.to_string())?;

        if config.buffer_size == 0 {
            return Err("buffer_size must be greater than zero".to_string());
        }

        Ok(config)
    }
}
