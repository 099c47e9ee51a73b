//! Bundle store errors

use std::path::PathBuf;

use super::StratusError;

/// Creates a bundle not found error
pub fn not_found(name: impl Into<String>) -> StratusError {
    StratusError::BundleNotFound { name: name.into() }
}

/// Creates an invalid bundle name error
pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> StratusError {
    StratusError::InvalidBundleName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an already installed error
pub fn already_installed(name: impl Into<String>, path: impl Into<PathBuf>) -> StratusError {
    StratusError::AlreadyInstalled {
        name: name.into(),
        path: path.into(),
    }
}

/// Creates a not installed error
pub fn not_installed(name: impl Into<String>) -> StratusError {
    StratusError::NotInstalled { name: name.into() }
}

/// Creates a missing metadata error
pub fn metadata_missing(name: impl Into<String>, field: impl Into<String>) -> StratusError {
    StratusError::MetadataMissing {
        name: name.into(),
        field: field.into(),
    }
}

/// Creates a validation error carrying every problem found
pub fn invalid(name: impl Into<String>, problems: Vec<String>) -> StratusError {
    StratusError::BundleInvalid {
        name: name.into(),
        problems,
    }
}
