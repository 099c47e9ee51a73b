//! Configuration errors

use std::path::Path;

use super::StratusError;

pub fn not_found(path: &Path) -> StratusError {
    StratusError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

pub fn read_failed(path: &Path, reason: impl ToString) -> StratusError {
    StratusError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn parse_failed(path: &Path, reason: impl ToString) -> StratusError {
    StratusError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn invalid(message: impl Into<String>) -> StratusError {
    StratusError::ConfigInvalid {
        message: message.into(),
    }
}
