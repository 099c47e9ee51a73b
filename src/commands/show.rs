//! Show command

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::store::BundleStore;
use crate::ui::format;

pub fn run(store: &BundleStore, args: &ShowArgs) -> Result<()> {
    let bundle = store.show(&args.name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    println!();
    println!("{}", format::show_block(&bundle));
    println!();
    Ok(())
}
