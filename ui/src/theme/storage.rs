use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const STYLE_KEY: &str = "theme-style";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Persistent string key-value store the theme choice survives in.
pub trait ThemeStorage {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Map-backed storage for tests and one-shot sessions.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    available: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            available: true,
        }
    }

    /// A store where every access fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            available: false,
        }
    }

    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            available: true,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat TOML table on disk, e.g. `~/.config/folio/state.toml`:
///
/// ```toml
/// theme = "dark-green"
/// theme-style = "pixelated"
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // An unreadable file is replaced rather than blocking every later write.
        let mut values = self.load().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable theme state: {e}");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = toml::to_string(&values).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_none!(assert_ok!(storage.get(THEME_KEY)));

        assert_ok!(storage.set(THEME_KEY, "light-blue"));
        assert_eq!(
            assert_ok!(storage.get(THEME_KEY)).as_deref(),
            Some("light-blue")
        );
    }

    #[test]
    fn test_default_memory_storage_accepts_writes() {
        let mut storage = MemoryStorage::default();
        assert_ok!(storage.set(THEME_KEY, "light-green"));
        assert_eq!(
            assert_ok!(storage.get(THEME_KEY)).as_deref(),
            Some("light-green")
        );
    }

    #[test]
    fn test_unavailable_memory_storage() {
        let mut storage = MemoryStorage::unavailable();
        assert_matches!(storage.get(THEME_KEY), Err(StorageError::Unavailable));
        assert_matches!(
            storage.set(THEME_KEY, "dark-blue"),
            Err(StorageError::Unavailable)
        );
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut storage = FileStorage::new(&path);
        assert_none!(assert_ok!(storage.get(THEME_KEY)));

        assert_ok!(storage.set(THEME_KEY, "dark-green"));
        assert_ok!(storage.set(STYLE_KEY, "pixelated"));

        let reopened = FileStorage::new(&path);
        assert_eq!(
            assert_ok!(reopened.get(THEME_KEY)).as_deref(),
            Some("dark-green")
        );
        assert_eq!(
            assert_ok!(reopened.get(STYLE_KEY)).as_deref(),
            Some("pixelated")
        );

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("theme-style = \"pixelated\""));
    }

    #[test]
    fn test_corrupt_file_is_reported_then_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "theme = [not toml").unwrap();

        let mut storage = FileStorage::new(&path);
        assert_matches!(storage.get(THEME_KEY), Err(StorageError::Parse { .. }));

        assert_ok!(storage.set(THEME_KEY, "light-purple"));
        assert_eq!(
            assert_ok!(storage.get(THEME_KEY)).as_deref(),
            Some("light-purple")
        );
    }
}
