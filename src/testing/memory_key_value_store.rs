use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// In-memory key-value store for testing.
///
/// Clones share state, so a second store handle can observe what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().unwrap().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::Io(io::Error::other("disk full")));
        }
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::Io(io::Error::other("disk full")));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
