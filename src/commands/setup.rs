//! Setup command: install the common bundle set

use crate::error::Result;
use crate::store::{BundleStore, SetupOutcome};
use crate::ui::format;

fn print_outcome(name: &str, outcome: &SetupOutcome) {
    match outcome {
        SetupOutcome::Installed(bundle) => {
            println!("{}", format::action_line("install", &bundle.label()));
        }
        SetupOutcome::Skipped => {
            println!("{}", format::action_line("skip", &format!("{name} (already installed)")));
        }
        SetupOutcome::Failed(e) => {
            eprintln!("{}", format::fail_line(name));
            eprintln!("{}", format::detail_lines(&e.to_string()));
        }
    }
}

/// Outcome lines are printed as each bundle finishes, so no spinner runs here
pub fn run(store: &BundleStore, common_bundles: &[String]) -> Result<()> {
    tracing::debug!(count = common_bundles.len(), "installing common bundles");

    println!();
    let report = store.setup(common_bundles, print_outcome)?;
    println!();
    tracing::debug!(installed = report.installed().count(), "setup finished");

    match report.into_result() {
        Ok(_) => {
            println!("Success");
            Ok(())
        }
        Err(e) => {
            println!("Error");
            Err(e)
        }
    }
}
