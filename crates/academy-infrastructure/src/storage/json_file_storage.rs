//! File-backed key-value storage.
//!
//! Keeps every key in a single JSON object file. Writes go through a
//! temporary file and an atomic rename while an exclusive advisory lock is
//! held, so concurrent processes never observe a half-written file.

use crate::paths::AcademyPaths;
use academy_core::config::ClientConfig;
use academy_core::error::{AcademyError, Result};
use academy_core::storage::KeyValueStore;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// JSON object file used as persistent key-value storage.
///
/// # File Format
///
/// ```json
/// { "authToken": "eyJ...", "course_4_last_lesson": "12" }
/// ```
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage handle for `path`. The file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens the storage file named by `config`, or the platform default.
    pub fn for_config(config: &ClientConfig) -> Result<Self> {
        let path = match &config.storage_file {
            Some(path) => path.clone(),
            None => AcademyPaths::storage_file()
                .map_err(|e| AcademyError::config(e.to_string()))?,
        };
        Ok(Self::new(path))
    }

    /// Returns the path to the storage file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries. A missing or empty file is an empty map.
    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(AcademyError::storage(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        // Tokens live here; keep the file user-only on Unix.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Read-modify-write under the exclusive lock.
    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AcademyError::storage("Storage path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

impl KeyValueStore for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entries = self.load()?;
        Ok(entries.get(key).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Exclusive advisory lock held for the duration of a write.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        use fs2::FileExt;
        file.lock_exclusive()
            .map_err(|e| AcademyError::storage(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        use fs2::FileExt;
        let _ = self.file.unlock();
    }
}
