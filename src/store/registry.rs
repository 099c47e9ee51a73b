//! Bundle name to source url lookup

use std::collections::BTreeMap;

use crate::config::RegistrySettings;
use crate::error::{self, Result};

/// Resolves a bundle name to a url `git::clone` can fetch
pub trait Registry {
    fn resolve(&self, name: &str) -> Result<String>;
}

/// Registry built from the `registry` section of the settings file
///
/// The explicit table wins; otherwise the url template is filled in.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredRegistry {
    bundles: BTreeMap<String, String>,
    url_template: Option<String>,
}

impl ConfiguredRegistry {
    pub fn new(bundles: BTreeMap<String, String>, url_template: Option<String>) -> Self {
        Self {
            bundles,
            url_template,
        }
    }

    /// Registry that only fills in `template`
    #[cfg(test)]
    pub fn from_template(template: impl Into<String>) -> Self {
        Self::new(BTreeMap::new(), Some(template.into()))
    }
}

impl From<&RegistrySettings> for ConfiguredRegistry {
    fn from(settings: &RegistrySettings) -> Self {
        Self::new(settings.bundles.clone(), settings.url_template.clone())
    }
}

impl Registry for ConfiguredRegistry {
    fn resolve(&self, name: &str) -> Result<String> {
        if let Some(url) = self.bundles.get(name) {
            return Ok(url.clone());
        }
        self.url_template
            .as_ref()
            .map(|template| template.replace("{name}", name))
            .ok_or_else(|| error::bundle::not_found(name))
    }
}
