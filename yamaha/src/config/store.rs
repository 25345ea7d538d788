use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use log::debug;

use super::{ConfigError, ConfigStore};

/// In-process preferences, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let values = self
            .values
            .read()
            .map_err(|_| ConfigError::Parse("preference lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| ConfigError::Parse("preference lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a flat TOML table on disk.
///
/// A missing file reads as empty and is created on the first save.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.read_table()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ConfigError::Parse("preference lock poisoned".to_string()))?;

        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, toml::to_string(&table)?)?;

        debug!("Saved preference {} to {}", key, self.path.display());
        Ok(())
    }
}
