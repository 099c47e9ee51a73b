//! Error types and handling for stratus-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`bundle`]: Bundle store errors
//! - [`git`]: Git operation errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod git;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundle store operations
#[derive(Error, Diagnostic, Debug)]
pub enum StratusError {
    // Bundle errors
    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(stratus::bundle::not_found),
        help("Check the bundle name, or add it to the registry in your configuration file")
    )]
    BundleNotFound { name: String },

    #[error("Invalid bundle name '{name}': {reason}")]
    #[diagnostic(
        code(stratus::bundle::invalid_name),
        help("Bundle names are single directory names such as 'ruby' or 'markdown'")
    )]
    InvalidBundleName { name: String, reason: String },

    #[error("Bundle '{name}' is already installed")]
    #[diagnostic(
        code(stratus::bundle::already_installed),
        help("Run 'stratus-bundle update {name}' to fetch the latest version")
    )]
    AlreadyInstalled { name: String, path: PathBuf },

    #[error("Bundle '{name}' is not installed")]
    #[diagnostic(
        code(stratus::bundle::not_installed),
        help("Run 'stratus-bundle list' to see installed bundles")
    )]
    NotInstalled { name: String },

    #[error("Bundle '{name}' has no {field}")]
    #[diagnostic(code(stratus::bundle::metadata_not_found))]
    MetadataMissing { name: String, field: String },

    #[error("Bundle '{name}' is invalid: {}", .problems.join("; "))]
    #[diagnostic(code(stratus::bundle::invalid))]
    BundleInvalid { name: String, problems: Vec<String> },

    #[error("Failed to install bundles: {}", .failed.join(", "))]
    #[diagnostic(
        code(stratus::bundle::setup_failed),
        help("The remaining bundles were installed; retry the failed ones with 'stratus-bundle install'")
    )]
    SetupFailed { failed: Vec<String> },

    #[error("Invalid bundles: {}", .failed.join(", "))]
    #[diagnostic(
        code(stratus::bundle::test_failed),
        help("Run 'stratus-bundle update <name>' or fix the bundle's bundle.yaml")
    )]
    TestFailed { failed: Vec<String> },

    #[error("Bundle store is locked: {path}")]
    #[diagnostic(
        code(stratus::store::locked),
        help("Another stratus-bundle process is modifying the store; wait for it to finish")
    )]
    StoreLocked { path: PathBuf },

    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(stratus::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(stratus::git::clone_failed),
        help("Check that the URL is correct and you have access to the repository")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Repository not found: {url}")]
    #[diagnostic(code(stratus::git::repository_not_found))]
    RepositoryNotFound { url: String },

    #[error("Fetching {url} timed out after {seconds}s")]
    #[diagnostic(
        code(stratus::git::timed_out),
        help("Raise the limit with --timeout or 'fetch_timeout_secs' in the configuration file")
    )]
    FetchTimedOut { url: String, seconds: u64 },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(stratus::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(stratus::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(stratus::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(stratus::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(stratus::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl StratusError {
    /// Name of the bundle an error refers to, when it refers to one
    pub fn bundle_name(&self) -> Option<&str> {
        match self {
            StratusError::BundleNotFound { name }
            | StratusError::InvalidBundleName { name, .. }
            | StratusError::AlreadyInstalled { name, .. }
            | StratusError::NotInstalled { name }
            | StratusError::MetadataMissing { name, .. }
            | StratusError::BundleInvalid { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StratusError {
    fn from(err: std::io::Error) -> Self {
        StratusError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_yaml::Error> for StratusError {
    fn from(err: serde_yaml::Error) -> Self {
        StratusError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StratusError {
    fn from(err: serde_json::Error) -> Self {
        StratusError::IoError {
            message: format!("Failed to encode JSON: {err}"),
            source: None,
        }
    }
}

impl From<git2::Error> for StratusError {
    fn from(err: git2::Error) -> Self {
        StratusError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StratusError>;
