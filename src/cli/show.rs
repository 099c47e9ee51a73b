use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show bundle information:\n    stratus-bundle show ruby\n\n\
                  Machine-readable output:\n    stratus-bundle show ruby --json")]
pub struct ShowArgs {
    /// Installed bundle name
    pub name: String,

    /// Print the bundle as a JSON object
    #[arg(long)]
    pub json: bool,
}
