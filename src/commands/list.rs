//! List command

use serde::Serialize;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::store::BundleStore;
use crate::ui::format;

#[derive(Debug, Serialize)]
struct ListEntry {
    name: String,
    version: Option<String>,
}

/// Installed bundles sorted by name, with versions where readable
fn entries(store: &BundleStore) -> Result<Vec<ListEntry>> {
    let mut names = store.list()?;
    names.sort();
    Ok(names
        .into_iter()
        .map(|name| {
            let version = match store.show(&name) {
                Ok(bundle) => Some(bundle.version),
                Err(e) => {
                    tracing::debug!(bundle = %name, "no version: {e}");
                    None
                }
            };
            ListEntry { name, version }
        })
        .collect())
}

pub fn run(store: &BundleStore, args: &ListArgs) -> Result<()> {
    let entries = entries(store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("Installed bundles:");
    println!();
    for entry in &entries {
        println!("{}", format::list_line(&entry.name, entry.version.as_deref()));
    }
    println!();
    Ok(())
}
