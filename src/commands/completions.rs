//! Shell completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Write the completion script for `shell` to `out`
fn generate(args: &CompletionsArgs, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, out);
}

pub fn run(args: &CompletionsArgs) -> Result<()> {
    generate(args, &mut std::io::stdout().lock());
    Ok(())
}
