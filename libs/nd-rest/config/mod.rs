//! Controller endpoint configuration
//!
//! The core itself only needs a configured backend; this module carries the
//! standard way callers assemble one, loading the endpoint from an optional
//! YAML file with credentials coming from the environment (`.env` supported).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Connection settings for a Nexus Dashboard-style controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NdConfig {
    /// Controller base URL, e.g. `https://nd.example.com`
    pub url: String,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    /// Username from environment (not in YAML)
    #[serde(skip)]
    pub username: String,

    /// Password from environment (not in YAML)
    #[serde(skip)]
    pub password: String,
}

impl NdConfig {
    /// Load configuration entirely from the environment
    /// (`ND_URL`, `ND_USERNAME`, `ND_PASSWORD`, optional `ND_INSECURE`).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the endpoint from a YAML file, with credentials and overrides
    /// taken from the environment.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        dotenv::dotenv().ok();

        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: NdConfig = serde_yaml::from_str(&yaml_content)?;

        if let Ok(url) = std::env::var("ND_URL") {
            info!("Overriding controller URL from environment variable");
            config.url = url;
        }
        config.username = require_env("ND_USERNAME", |name| std::env::var(name).ok())?;
        config.password = require_env("ND_PASSWORD", |name| std::env::var(name).ok())?;

        config.validate()?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = require_env("ND_URL", &lookup)?;
        let username = require_env("ND_USERNAME", &lookup)?;
        let password = require_env("ND_PASSWORD", &lookup)?;
        let insecure = match lookup("ND_INSECURE") {
            Some(raw) => raw.parse::<bool>().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "ND_INSECURE must be a boolean value, got '{}'",
                    raw
                ))
            })?,
            None => false,
        };

        let config = Self {
            url,
            insecure,
            username,
            password,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::ValidationError(
                "url must start with http:// or https://".to_string(),
            ));
        }
        if self.username.is_empty() {
            return Err(ConfigError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Log configuration summary (never the password).
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Controller URL: {}", self.url);
        info!("  Username: {}", self.username);
        info!("  Insecure TLS: {}", self.insecure);
    }
}

fn require_env(name: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::EnvVarMissing(name.to_string())),
    }
}

/// Check the environment needed for acceptance tests against a live
/// controller: `ND_URL`, `ND_USERNAME`, `ND_PASSWORD` and `ND_VAL_REL_DN`
/// must all be set. Only presence is checked for `ND_VAL_REL_DN`.
pub fn precheck_acceptance_env() -> Result<()> {
    for name in ["ND_URL", "ND_USERNAME", "ND_PASSWORD", "ND_VAL_REL_DN"] {
        require_env(name, |n| std::env::var(n).ok())?;
    }
    Ok(())
}
