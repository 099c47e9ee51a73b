//! Git operation errors

use super::StratusError;

/// Creates a generic git operation error
pub fn operation_failed(message: impl Into<String>) -> StratusError {
    StratusError::GitOperationFailed {
        message: message.into(),
    }
}

/// Creates a clone failure error
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> StratusError {
    StratusError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a repository not found error
pub fn repository_not_found(url: impl Into<String>) -> StratusError {
    StratusError::RepositoryNotFound { url: url.into() }
}

/// Creates a fetch timeout error
pub fn timed_out(url: impl Into<String>, seconds: u64) -> StratusError {
    StratusError::FetchTimedOut {
        url: url.into(),
        seconds,
    }
}
