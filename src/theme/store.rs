use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{ Path, PathBuf };
use crate::error::ThemeError;

/// Durable key/value slot for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Process-local store. Used by tests and as the fallback when nothing
/// durable is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object on disk, for desktop builds.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, ThemeError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut values = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable preferences at {}: {}", self.path.display(), e);
            HashMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        log::debug!("Saved preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage(&self) -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(|e| ThemeError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?.set_item(key, value).map_err(|e| ThemeError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_value("theme", "light");
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("other").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStore::new(&path).save("theme", "dark").unwrap();
        FileStore::new(&path).save("font", "large").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.load("font").unwrap().as_deref(), Some("large"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_malformed_read_errors_but_save_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load("theme"), Err(ThemeError::Malformed(_))));

        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));
    }
}
