//! Configuration loading from the environment and disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::schema::DaemonConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the JSON config file.
pub const TEMPLATES_FILE: &str = "TEMPLATES_FILE";

/// Environment variable naming the discovery backend base URL.
pub const CONSUL_HOST: &str = "CONSUL_HOST";

/// Error type for startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid discovery base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The two required pieces of environment a daemon needs to start.
#[derive(Debug)]
pub struct StartupEnv {
    /// Path of the JSON config file.
    pub templates_file: PathBuf,

    /// Base URL of the discovery backend.
    pub discovery_url: Url,
}

impl StartupEnv {
    /// Resolve the startup environment from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let templates_file = lookup(TEMPLATES_FILE).ok_or(ConfigError::MissingEnv(TEMPLATES_FILE))?;
        let discovery = lookup(CONSUL_HOST).ok_or(ConfigError::MissingEnv(CONSUL_HOST))?;

        let discovery_url = Url::parse(&discovery).map_err(|source| ConfigError::InvalidUrl {
            url: discovery.clone(),
            source,
        })?;

        Ok(Self {
            templates_file: PathBuf::from(templates_file),
            discovery_url,
        })
    }
}

/// Load and validate the JSON config file.
pub fn load_config(path: &Path) -> Result<DaemonConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: DaemonConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
