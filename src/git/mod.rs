//! Git operations for fetching bundles
//!
//! This module handles:
//! - Cloning repositories (HTTPS, SSH and local paths) under a deadline and
//!   libgit2's server timeouts
//! - Interpreting libgit2 failures
//! - Reading the origin url of an installed bundle
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/ and the SSH agent
//! - Git credential helpers

pub mod auth;
pub mod clone;
pub mod error;
pub mod remote;
pub mod url;

pub use clone::{clone, set_network_timeout};
pub use remote::origin_url;
