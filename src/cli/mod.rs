//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: the single bundle name taken by install, uninstall and update
//! - list: List command arguments
//! - show: Show command arguments
//! - test: Test command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod list;
pub mod show;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use show::ShowArgs;
pub use test::TestArgs;

use crate::config::Overrides;

/// stratus-bundle - manage Stratus editor bundles
#[derive(Parser, Debug)]
#[command(
    name = "stratus-bundle",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, update and validate Stratus editor bundles",
    after_help = "EXAMPLES:\n  \
                  stratus-bundle install ruby      Install a bundle\n  \
                  stratus-bundle list              List installed bundles\n  \
                  stratus-bundle test              Validate every installed bundle\n  \
                  stratus-bundle setup             Install the common bundles"
)]
pub struct Cli {
    /// Bundle store directory
    #[arg(long, short = 'd', global = true, env = "STRATUS_BUNDLE_DIR")]
    pub dir: Option<PathBuf>,

    /// Settings file (defaults to stratus/bundle.yaml in the user config directory)
    #[arg(long, short = 'c', global = true, env = "STRATUS_BUNDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Give up on a fetch after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides given on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            dir: self.dir.clone(),
            config: self.config.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the names of all installed bundles
    List(ListArgs),

    /// Install the bundle
    Install(BundleArgs),

    /// Uninstall the bundle
    Uninstall(BundleArgs),

    /// Update the bundle to the latest version
    Update(BundleArgs),

    /// Print information about the bundle
    Show(ShowArgs),

    /// Check whether bundles are valid
    Test(TestArgs),

    /// Install a set of common bundles
    Setup,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}

impl Commands {
    /// Whether the command needs the store configuration
    pub fn needs_store(&self) -> bool {
        !matches!(self, Commands::Completions(_) | Commands::Version)
    }
}
