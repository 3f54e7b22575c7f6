use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::domain::{AppError, Config};
use crate::ports::KeyValueStore;

/// Key-value store keeping one JSON file per key under the data directory.
#[derive(Debug, Clone)]
pub struct FilesystemKeyValueStore {
    root_path: PathBuf,
}

impl FilesystemKeyValueStore {
    /// Create a store rooted at the configured data directory.
    pub fn new(config: &Config) -> Self {
        Self { root_path: config.data_dir.clone() }
    }

    pub fn with_root(root_path: impl Into<PathBuf>) -> Self {
        Self { root_path: root_path.into() }
    }

    fn ensure_valid_key(key: &str) -> Result<(), AppError> {
        if Self::is_key_valid(key) {
            Ok(())
        } else {
            Err(AppError::InvalidStorageKey(key.to_string()))
        }
    }

    fn is_key_valid(key: &str) -> bool {
        !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            && Path::new(key).components().all(|c| matches!(c, Component::Normal(_)))
    }

    fn value_file(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FilesystemKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::ensure_valid_key(key)?;
        match fs::read_to_string(self.value_file(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::ensure_valid_key(key)?;
        fs::create_dir_all(&self.root_path)?;

        // Replace the whole value in one rename so readers never see a partial write.
        let target = self.value_file(key);
        let staging = self.root_path.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value)?;
        if let Err(err) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::ensure_valid_key(key)?;
        match fs::remove_file(self.value_file(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
