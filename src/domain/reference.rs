//! How a user refers to a bundle on the command line
//!
//! Anything containing a path separator is a path to a bundle directory;
//! everything else is a name inside the store.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// A bundle named by store name or by directory path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleRef {
    Name(String),
    Path(PathBuf),
}

impl BundleRef {
    pub fn parse(input: &str) -> Self {
        if input.contains('/') || input.contains(std::path::MAIN_SEPARATOR) {
            BundleRef::Path(PathBuf::from(input))
        } else {
            BundleRef::Name(input.to_string())
        }
    }

    /// Directory the reference points at, given the store root
    pub fn resolve(&self, root: &Path) -> PathBuf {
        match self {
            BundleRef::Name(name) => root.join(name),
            BundleRef::Path(path) => path.clone(),
        }
    }
}

impl fmt::Display for BundleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleRef::Name(name) => f.write_str(name),
            BundleRef::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Check that `name` can be used as a directory directly under the store root
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a relative path component")
    } else if name.starts_with('.') {
        Some("name starts with '.'")
    } else if name.contains('/') || name.contains('\\') {
        Some("name contains a path separator")
    } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("name contains whitespace or control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(error::bundle::invalid_name(name, reason)),
        None => Ok(()),
    }
}
