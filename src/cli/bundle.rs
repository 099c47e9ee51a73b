use clap::Parser;

/// A single bundle name, shared by install, uninstall and update
#[derive(Parser, Debug)]
pub struct BundleArgs {
    /// Bundle name, e.g. ruby
    pub name: String,
}
