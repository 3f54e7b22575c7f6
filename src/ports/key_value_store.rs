use crate::domain::AppError;

/// Port for a durable key-value store with whole-value reads and writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete the value stored under `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
