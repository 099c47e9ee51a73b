//! stratus-bundle - Stratus editor bundle manager
//!
//! Installs, updates, removes and validates editor bundles kept as git
//! checkouts under a single store directory.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod git;
mod store;
mod transaction;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::StoreConfig;
use error::{Result, StratusError};
use store::BundleStore;

/// Environment variable holding a log filter, e.g. `STRATUS_LOG=debug`
const LOG_ENV: &str = "STRATUS_LOG";

/// Log to stderr: `STRATUS_LOG` if set, else `debug` when verbose, else `warn`
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;

    if !cli.command.needs_store() {
        return match cli.command {
            Commands::Completions(args) => commands::completions::run(&args),
            _ => commands::version::run(),
        };
    }

    let config = StoreConfig::load(&cli.overrides())?;
    git::set_network_timeout(config.fetch_timeout)?;
    let store = BundleStore::new(&config);
    tracing::debug!(dir = %store.root().display(), "using bundle store");

    match cli.command {
        Commands::List(args) => commands::list::run(&store, &args),
        Commands::Install(args) => commands::install::run(&store, &args, verbose),
        Commands::Uninstall(args) => commands::uninstall::run(&store, &args),
        Commands::Update(args) => commands::update::run(&store, &args, verbose),
        Commands::Show(args) => commands::show::run(&store, &args),
        Commands::Test(args) => commands::test::run(&store, &args),
        Commands::Setup => commands::setup::run(&store, &config.common_bundles),
        Commands::Completions(args) => commands::completions::run(&args),
        Commands::Version => commands::version::run(),
    }
}

/// Error text as printed on failure, with the diagnostic's help if any
fn render_error(e: &StratusError) -> String {
    let mut out = format!("\n  {e}\n");
    if let Some(help) = e.help() {
        out.push_str(&format!("  help: {help}\n"));
    }
    out
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(bundle = e.bundle_name(), "command failed: {e:?}");
        eprintln!("{}", render_error(&e));
        std::process::exit(1);
    }
}
