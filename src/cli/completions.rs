use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    stratus-bundle completions bash > ~/.bash_completion.d/stratus-bundle\n\n\
                  Generate zsh completions:\n    stratus-bundle completions zsh > ~/.zfunc/_stratus-bundle\n\n\
                  Generate fish completions:\n    stratus-bundle completions fish > ~/.config/fish/completions/stratus-bundle.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
