//! Advisory lock guarding changes to the store
//!
//! Two processes changing the same store could interleave their renames, so
//! mutating operations hold an exclusive lock on `<root>/.lock`. The lock is
//! taken without waiting: a second process fails with `StoreLocked`.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use fd_lock::RwLock;

use crate::error::{self, Result, StratusError};

/// Lock file name at the store root
pub const LOCK_FILE: &str = ".lock";

/// Run `f` while holding the store lock
pub fn exclusive<T>(root: &Path, f: impl FnOnce() -> Result<T>) -> Result<T> {
    fs::create_dir_all(root).map_err(|e| error::fs::io_at("Failed to create", root, e))?;
    let path = root.join(LOCK_FILE);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(&path)
        .map_err(|e| error::fs::io_at("Failed to open", &path, e))?;

    let mut lock = RwLock::new(file);
    let _guard = lock.try_write().map_err(|e| match e.kind() {
        ErrorKind::WouldBlock => StratusError::StoreLocked { path: path.clone() },
        _ => error::fs::io_at("Failed to lock", &path, e),
    })?;
    tracing::debug!(lock = %path.display(), "store locked");

    f()
}
