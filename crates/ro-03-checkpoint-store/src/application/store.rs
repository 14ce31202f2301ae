//! Typed checkpoint access over a byte-level [`KeyValueStore`].

use crate::domain::errors::CheckpointError;
use crate::domain::key::CheckpointKey;
use crate::ports::outbound::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// Write-once typed checkpoint store. Values are encoded with `bincode`.
pub struct CheckpointStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CheckpointStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying byte store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the record under `key`, or `None` when nothing was saved yet.
    pub fn check<T: DeserializeOwned>(&self, key: &CheckpointKey) -> Result<Option<T>, CheckpointError> {
        let storage_key = key.storage_key();
        let Some(bytes) = self.store.get(&storage_key)? else {
            debug!(key = %storage_key, "Checkpoint miss");
            return Ok(None);
        };

        let value = bincode::deserialize(&bytes).map_err(|e| CheckpointError::Decode {
            key: storage_key.clone(),
            message: e.to_string(),
        })?;
        debug!(key = %storage_key, bytes = bytes.len(), "Checkpoint hit");
        Ok(Some(value))
    }

    /// Persist `value` under `key` unless a record exists.
    ///
    /// Returns `false` (and keeps the existing record) when the key is taken.
    pub fn save<T: Serialize>(&self, key: &CheckpointKey, value: &T) -> Result<bool, CheckpointError> {
        let storage_key = key.storage_key();
        let bytes = bincode::serialize(value).map_err(|e| CheckpointError::Encode {
            key: storage_key.clone(),
            message: e.to_string(),
        })?;

        let written = self.store.put_if_absent(&storage_key, &bytes)?;
        if written {
            info!(key = %storage_key, bytes = bytes.len(), "Checkpoint saved");
        } else {
            debug!(key = %storage_key, "Checkpoint already present, keeping original");
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{FileKVStore, InMemoryKVStore};
    use shared_types::{NamedOrdering, Permutation, SeriesKind, Stage, StrategyFamily};

    fn key(family: StrategyFamily) -> CheckpointKey {
        CheckpointKey::new("demo", Stage::Test, SeriesKind::RawData, family)
    }

    fn orderings(name: &str) -> Vec<NamedOrdering> {
        vec![NamedOrdering::new(
            name,
            Permutation::try_new(vec![2, 0, 1]).unwrap(),
        )]
    }

    #[test]
    fn test_save_then_check() {
        let store = CheckpointStore::new(InMemoryKVStore::new());
        let k = key(StrategyFamily::Naive);

        assert_eq!(store.check::<Vec<NamedOrdering>>(&k).unwrap(), None);
        assert!(store.save(&k, &orderings("Sorting")).unwrap());
        assert_eq!(store.check(&k).unwrap(), Some(orderings("Sorting")));
    }

    #[test]
    fn test_save_is_write_once() {
        let store = CheckpointStore::new(InMemoryKVStore::new());
        let k = key(StrategyFamily::Feature);

        assert!(store.save(&k, &orderings("first")).unwrap());
        assert!(!store.save(&k, &orderings("second")).unwrap());
        assert_eq!(store.check(&k).unwrap(), Some(orderings("first")));
    }

    #[test]
    fn test_corrupt_record_is_decode_error() {
        let store = CheckpointStore::new(InMemoryKVStore::new());
        let k = key(StrategyFamily::Projection);
        store.inner().put_if_absent(&k.storage_key(), &[1, 2]).unwrap();

        let result = store.check::<Vec<NamedOrdering>>(&k);
        assert!(matches!(result, Err(CheckpointError::Decode { .. })));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(FileKVStore::open(dir.path()).unwrap());
        let k = key(StrategyFamily::Clustering);

        store.save(&k, &orderings("Ward Euclidean")).unwrap();
        assert!(dir.path().join("demo-test-raw-data-clustering.ckpt").is_file());

        let reopened = CheckpointStore::new(FileKVStore::open(dir.path()).unwrap());
        assert_eq!(reopened.check(&k).unwrap(), Some(orderings("Ward Euclidean")));
    }
}
