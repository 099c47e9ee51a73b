//! Uninstall command

use crate::cli::BundleArgs;
use crate::error::Result;
use crate::store::BundleStore;
use crate::ui::format;

pub fn run(store: &BundleStore, args: &BundleArgs) -> Result<()> {
    store.uninstall(&args.name)?;

    println!();
    println!("{}", format::action_line("uninstall", &args.name));
    println!();
    Ok(())
}
