//! Configuration service implementation.
//!
//! Loads `ClientConfig` from `config.toml` (`~/.config/academy/config.toml` by
//! default) and applies environment overrides.

use crate::paths::AcademyPaths;
use academy_core::config::ClientConfig;
use academy_core::error::{AcademyError, Result};
use std::fs;
use std::path::PathBuf;

/// Overrides `ClientConfig::base_url`.
pub const ENV_API_URL: &str = "ACADEMY_API_URL";
/// Overrides `ClientConfig::timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "ACADEMY_TIMEOUT_SECS";

/// Configuration service that reads the client configuration file.
///
/// Priority: environment variables > config.toml > built-in defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the platform config file.
    pub fn new() -> Result<Self> {
        let path = AcademyPaths::config_file().map_err(|e| AcademyError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a service for a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads the configuration with environment overrides applied.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = self.load_file()?;
        apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Loads the configuration file alone. A missing or empty file yields defaults.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                self.path.display()
            );
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        Ok(toml::from_str(&content)?)
    }
}

/// Applies `ACADEMY_*` overrides using `lookup` to read variables.
pub fn apply_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|url| !url.trim().is_empty()) {
        config.base_url = url;
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.timeout_secs = raw.trim().parse().map_err(|_| {
            AcademyError::config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
        })?;
    }

    Ok(config)
}
