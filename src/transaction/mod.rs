//! Transaction support for atomic bundle changes
//!
//! A bundle directory is only ever replaced by renames inside the store root,
//! so a reader sees either the old bundle, the new one, or (for uninstall)
//! nothing. Work happens in hidden directories next to the bundle:
//!
//! - a *staging* directory receives new content (install, update)
//! - a *trash* directory receives the current bundle (update, uninstall)
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new(&root, "ruby");
//! let staging = transaction.stage()?;
//! // fill `staging`...
//! transaction.stash_existing()?;
//! transaction.promote()?;
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // the stashed bundle is moved back
//! ```

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{self, Result};

/// Prefix of directories receiving new bundle content
pub const STAGING_PREFIX: &str = ".staging-";

/// Prefix of directories receiving bundles on their way out
pub const TRASH_PREFIX: &str = ".trash-";

/// A pending change to one bundle directory
#[derive(Debug)]
pub struct Transaction {
    root: PathBuf,
    name: String,
    target: PathBuf,

    /// New content, removed on drop unless promoted
    staging: Option<TempDir>,

    /// Holds the previous bundle while the change is in flight
    trash: Option<TempDir>,

    stashed: bool,
    promoted: bool,
    committed: bool,
}

impl Transaction {
    /// Start a transaction for `<root>/<name>`
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            name: name.to_string(),
            target: root.join(name),
            staging: None,
            trash: None,
            stashed: false,
            promoted: false,
            committed: false,
        }
    }

    /// Create an empty staging directory and return its path
    pub fn stage(&mut self) -> Result<PathBuf> {
        let staging = hidden_dir(&self.root, STAGING_PREFIX, &self.name)?;
        let path = staging.path().to_path_buf();
        tracing::debug!(staging = %path.display(), "staging directory created");
        self.staging = Some(staging);
        Ok(path)
    }

    /// Move the current bundle out of the way
    ///
    /// This is a single rename; on failure the bundle is left where it was.
    pub fn stash_existing(&mut self) -> Result<()> {
        let trash = hidden_dir(&self.root, TRASH_PREFIX, &self.name)?;
        let stash = trash.path().join(&self.name);
        fs::rename(&self.target, &stash)
            .map_err(|e| error::fs::io_at("Failed to move aside", &self.target, e))?;
        tracing::debug!(stash = %stash.display(), "bundle moved aside");
        self.trash = Some(trash);
        self.stashed = true;
        Ok(())
    }

    /// Move the staged content into place
    pub fn promote(&mut self) -> Result<()> {
        let staging = self
            .staging
            .as_ref()
            .ok_or_else(|| error::fs::io_error("nothing has been staged"))?;
        fs::rename(staging.path(), &self.target)
            .map_err(|e| error::fs::io_at("Failed to move into place", &self.target, e))?;
        self.promoted = true;
        Ok(())
    }

    /// Make the change permanent and delete the previous bundle, if any
    ///
    /// The change is already visible at this point, so failing to delete the
    /// stash is only logged; a hidden trash directory is left behind.
    pub fn commit(mut self) {
        self.committed = true;
        if let Some(trash) = self.trash.take() {
            let path = trash.path().to_path_buf();
            if let Err(e) = trash.close() {
                tracing::warn!(path = %path.display(), "failed to delete old bundle: {e}");
            }
        }
        // The staging directory has been renamed away; dropping it is a no-op.
        drop(self.staging.take());
    }

    /// Undo whatever has happened so far
    pub fn rollback(&mut self) -> Result<()> {
        if self.committed {
            return Ok(());
        }

        if self.promoted {
            // Put the new content back into staging so it is dropped with it
            if let Some(staging) = &self.staging {
                fs::rename(&self.target, staging.path())
                    .map_err(|e| error::fs::io_at("Failed to withdraw", &self.target, e))?;
            }
            self.promoted = false;
        }

        if self.stashed {
            if let Some(trash) = &self.trash {
                let stash = trash.path().join(&self.name);
                fs::rename(&stash, &self.target)
                    .map_err(|e| error::fs::io_at("Failed to restore", &self.target, e))?;
                tracing::debug!(target = %self.target.display(), "bundle restored");
            }
            self.stashed = false;
        }

        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = self.rollback() {
                tracing::warn!("Rollback failed: {e}");
                // Keep the stash on disk rather than deleting the only copy
                if self.stashed {
                    if let Some(trash) = self.trash.take() {
                        let kept = trash.keep();
                        tracing::warn!(path = %kept.display(), "previous bundle kept here");
                    }
                }
            }
        }
    }
}

/// Create a uniquely named hidden directory directly under `root`
fn hidden_dir(root: &Path, prefix: &str, name: &str) -> Result<TempDir> {
    fs::create_dir_all(root).map_err(|e| error::fs::io_at("Failed to create", root, e))?;
    tempfile::Builder::new()
        .prefix(&format!("{prefix}{name}-"))
        .tempdir_in(root)
        .map_err(|e| error::fs::io_at("Failed to create a directory in", root, e))
}
