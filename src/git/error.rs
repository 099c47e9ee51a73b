//! Git error interpretation
//!
//! libgit2 reports most transport failures as free-form messages. This module
//! sorts them into a few kinds so callers can react (e.g. a missing remote
//! repository means the bundle does not exist) and users get a short reason.

use git2::{Error, ErrorClass, ErrorCode};

/// What went wrong, as far as the message tells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RepositoryNotFound,
    AuthenticationFailed,
    /// The server stopped answering within the configured timeout
    TimedOut,
    PermissionDenied,
    Network,
    Certificate,
    Ssl,
    /// A callback asked libgit2 to stop
    Cancelled,
    Other,
}

type Check = fn(&str, ErrorClass) -> bool;

const CLASSIFICATIONS: &[(Check, FailureKind)] = &[
    (
        |msg, _| {
            msg.contains("not found")
                || msg.contains("404")
                || msg.contains("does not exist")
                || msg.contains("no such file")
                || msg.contains("could not find repository")
                || msg.contains("too many redirects")
        },
        FailureKind::RepositoryNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        FailureKind::AuthenticationFailed,
    ),
    (
        |msg, _| msg.contains("timed out") || msg.contains("timeout"),
        FailureKind::TimedOut,
    ),
    (
        |msg, _| msg.contains("permission denied") || msg.contains("access denied"),
        FailureKind::PermissionDenied,
    ),
    (
        |msg, _| {
            msg.contains("connection")
                || msg.contains("network")
                || msg.contains("resolve")
        },
        FailureKind::Network,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("certificate"),
        FailureKind::Certificate,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("ssl"),
        FailureKind::Ssl,
    ),
];

pub fn classify(err: &Error) -> FailureKind {
    if err.code() == ErrorCode::User {
        return FailureKind::Cancelled;
    }
    let message = err.message().to_lowercase();
    CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(&message, err.class()))
        .map_or(FailureKind::Other, |(_, kind)| *kind)
}

/// Short, user-facing reason for a git failure
pub fn describe(err: &Error) -> String {
    match classify(err) {
        FailureKind::RepositoryNotFound => "Repository not found".to_string(),
        FailureKind::AuthenticationFailed => "Authentication failed".to_string(),
        FailureKind::TimedOut => "Timed out".to_string(),
        FailureKind::PermissionDenied => "Permission denied".to_string(),
        FailureKind::Network => format!("Network error: {}", err.message()),
        FailureKind::Certificate => "Certificate error".to_string(),
        FailureKind::Ssl => "SSL error".to_string(),
        FailureKind::Cancelled => "Transfer cancelled".to_string(),
        FailureKind::Other => match err.class() {
            ErrorClass::Http => format!("HTTP error: {}", err.message()),
            ErrorClass::Ssh => format!("SSH error: {}", err.message()),
            _ => err.message().to_string(),
        },
    }
}
