use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed bundles:\n    stratus-bundle list\n\n\
                  Machine-readable output:\n    stratus-bundle list --json")]
pub struct ListArgs {
    /// Print bundles as a JSON array
    #[arg(long)]
    pub json: bool,
}
