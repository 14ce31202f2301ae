use crate::adapters::lock::StoreLock;
use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;
use parking_lot::Mutex;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed key-value store: one file per key.
///
/// Writes take a process-local mutex and the directory's [`StoreLock`], then
/// go through a temp file that is fsynced and renamed into place. A reader
/// therefore sees either no record or a complete one, and concurrent writers
/// (threads or processes) agree on a single first writer.
pub struct FileKVStore {
    dir: PathBuf,
    write_guard: Mutex<()>,
}

impl FileKVStore {
    /// Record file extension
    pub const EXTENSION: &'static str = "ckpt";

    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "Opened checkpoint directory");
        Ok(Self {
            dir,
            write_guard: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\', '\0'])
            && key != StoreLock::LOCK_FILE;
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.{}", Self::EXTENSION)))
    }
}

impl KeyValueStore for FileKVStore {
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.record_path(key)?.is_file())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.record_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let path = self.record_path(key)?;

        let _guard = self.write_guard.lock();
        let _lock = StoreLock::acquire(&self.dir)?;

        if path.exists() {
            return Ok(false);
        }

        let temp_path = path.with_extension(format!("{}.tmp", Self::EXTENSION));
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value)?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(true)
    }
}
