//! Command implementations for the stratus-bundle CLI
//!
//! Commands print results to stdout; failures are returned to `main`,
//! which prints them to stderr.

pub mod completions;
pub mod install;
pub mod list;
pub mod setup;
pub mod show;
pub mod uninstall;
pub mod update;
pub mod version;
