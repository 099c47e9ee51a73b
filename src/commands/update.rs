//! Update command

use crate::cli::BundleArgs;
use crate::error::Result;
use crate::store::BundleStore;
use crate::ui::{self, format};

pub fn run(store: &BundleStore, args: &BundleArgs, verbose: bool) -> Result<()> {
    let mut reporter = ui::reporter(verbose);
    let bundle = ui::with_progress(
        reporter.as_mut(),
        &format!("updating {}", args.name),
        || store.update(&args.name),
    )?;

    println!();
    println!("{}", format::action_line("update", &bundle.label()));
    println!();
    Ok(())
}
