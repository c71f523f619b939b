//! Platform paths for Academy configuration and storage files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/academy/           # Config directory (dirs::config_dir)
//! ├── config.toml              # Client configuration
//! └── storage.json             # Persistent key-value storage (tokens, progress)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR_NAME: &str = "academy";

/// Unified path management for the Academy client.
pub struct AcademyPaths;

impl AcademyPaths {
    /// Returns the Academy configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/academy/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the default key-value storage file.
    ///
    /// # Security Note
    ///
    /// This file holds bearer tokens; it is written with 600 permissions on Unix.
    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("storage.json"))
    }
}
