//! File system errors

use std::path::Path;

use super::StratusError;

/// Wraps an IO error with the operation and path it happened on
pub fn io_at(operation: &str, path: &Path, err: std::io::Error) -> StratusError {
    StratusError::IoError {
        message: format!("{operation} {}: {err}", path.display()),
        source: Some(err),
    }
}

/// Creates an IO error without an underlying cause
pub fn io_error(message: impl Into<String>) -> StratusError {
    StratusError::IoError {
        message: message.into(),
        source: None,
    }
}
