//! # Directory Lock
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on
//! Windows). The lock is held for the duration of one write.

use crate::domain::errors::StoreError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Exclusive lock on a checkpoint directory, released on drop.
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Lock file name
    pub const LOCK_FILE: &'static str = "LOCK";

    /// Block until the directory lock is acquired.
    pub fn acquire(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(Self::LOCK_FILE);
        let lock_error = |e: std::io::Error| StoreError::Lock {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(lock_error)?;
        file.lock_exclusive().map_err(lock_error)?;

        Ok(Self { file, path })
    }

    /// Try to take the lock without blocking; `None` when another holder has it.
    pub fn try_acquire(dir: &Path) -> Result<Option<Self>, StoreError> {
        let path = dir.join(Self::LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(Self { file, path })),
            Err(_) => Ok(None),
        }
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // The lock file itself stays; other writers may be waiting on it.
        #[allow(clippy::incompatible_msrv)]
        let _ = self.file.unlock();
    }
}
