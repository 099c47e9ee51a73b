//! Bundle manifest (`bundle.yaml`)
//!
//! Every bundle carries a manifest at its root describing the bundle.
//! All fields are optional at parse time; [`BundleManifest::problems`]
//! reports which required ones are missing so validation can list them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result, StratusError};

/// Manifest file name at the root of every bundle
pub const MANIFEST_FILE: &str = "bundle.yaml";

/// Bundle metadata from bundle.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Bundle version (free-form, no semantic versioning)
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "scalar")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source location, when it differs from the checkout's origin remote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Accept `version: 1.2` and `version: 3` as well as quoted strings
fn scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        Some(serde_yaml::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

impl BundleManifest {
    /// Parse a manifest from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read the manifest of the bundle at `bundle_dir`
    pub fn load(bundle_dir: &Path) -> Result<Self> {
        let path = bundle_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)
            .map_err(|e| error::fs::io_at("Failed to read", &path, e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            StratusError::ConfigParseFailed { reason, .. } => error::config::parse_failed(&path, reason),
            other => other,
        })
    }

    /// Required fields that are missing or blank, plus a name mismatch
    /// against `dir_name` when one is given
    pub fn problems(&self, dir_name: Option<&str>) -> Vec<String> {
        let mut problems = Vec::new();

        match non_blank(self.name.as_deref()) {
            None => problems.push(format!("{MANIFEST_FILE} has no name")),
            Some(name) => {
                if let Some(dir_name) = dir_name {
                    if name != dir_name {
                        problems.push(format!(
                            "{MANIFEST_FILE} names the bundle '{name}' but its directory is '{dir_name}'"
                        ));
                    }
                }
            }
        }

        if non_blank(self.version.as_deref()).is_none() {
            problems.push(format!("{MANIFEST_FILE} has no version"));
        }

        problems
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
