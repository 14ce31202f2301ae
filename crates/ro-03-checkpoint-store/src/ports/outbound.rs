//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::StoreError;

/// Abstract key-value store for checkpoint records.
///
/// Records are write-once: [`KeyValueStore::put_if_absent`] never replaces an
/// existing value. Implementations must be safe to share across threads.
pub trait KeyValueStore: Send + Sync {
    /// Check if a key exists.
    fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// Get a value by key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` unless `key` is taken. Returns `false` when it was.
    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        (**self).put_if_absent(key, value)
    }
}
