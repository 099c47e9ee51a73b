//! Structural validation of bundle directories
//!
//! Read-only: nothing here touches the directory being checked, so
//! validating the same bundle twice gives the same answer.

use std::path::Path;

use crate::config::manifest::{BundleManifest, MANIFEST_FILE};
use crate::error::{self, Result};

/// Check the bundle at `path`, reporting it as `label` in errors
///
/// With `expected_name`, the manifest's name must match it. Returns the
/// manifest when the bundle is valid; otherwise every problem found.
pub fn check(path: &Path, label: &str, expected_name: Option<&str>) -> Result<BundleManifest> {
    if !path.is_dir() {
        return Err(error::bundle::not_found(label));
    }

    let manifest_path = path.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(error::bundle::invalid(
            label,
            vec![format!("{MANIFEST_FILE} is missing")],
        ));
    }

    let manifest = BundleManifest::load(path).map_err(|e| {
        error::bundle::invalid(label, vec![format!("{MANIFEST_FILE} could not be read: {e}")])
    })?;

    let problems = manifest.problems(expected_name);
    if problems.is_empty() {
        Ok(manifest)
    } else {
        Err(error::bundle::invalid(label, problems))
    }
}
