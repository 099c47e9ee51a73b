//! Installed bundle metadata

use std::path::PathBuf;

use serde::Serialize;

use crate::config::manifest::BundleManifest;

/// An installed bundle as read from its directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bundle {
    pub name: String,
    pub version: String,
    pub author: Option<String>,
    pub description: Option<String>,
    /// Where the bundle was fetched from
    pub url: Option<String>,
    pub path: PathBuf,
}

impl Bundle {
    /// Build from a manifest that is known to carry a version
    ///
    /// `origin_url` is used when the manifest does not name its source.
    pub fn from_manifest(
        name: &str,
        path: PathBuf,
        version: String,
        manifest: BundleManifest,
        origin_url: Option<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            version,
            author: manifest.author,
            description: manifest.description,
            url: manifest.url.or(origin_url),
            path,
        }
    }

    /// `name@version`, as printed after install and update
    pub fn label(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_url_wins_over_origin() {
        let manifest = BundleManifest {
            url: Some("https://example.com/declared.git".into()),
            ..BundleManifest::default()
        };
        let bundle = Bundle::from_manifest(
            "ruby",
            PathBuf::from("/store/ruby"),
            "1.0".into(),
            manifest,
            Some("https://example.com/origin.git".into()),
        );
        assert_eq!(bundle.url.as_deref(), Some("https://example.com/declared.git"));
        assert_eq!(bundle.label(), "ruby@1.0");
    }

    #[test]
    fn test_origin_url_used_as_fallback() {
        let bundle = Bundle::from_manifest(
            "ruby",
            PathBuf::from("/store/ruby"),
            "1.0".into(),
            BundleManifest::default(),
            Some("https://example.com/origin.git".into()),
        );
        assert_eq!(bundle.url.as_deref(), Some("https://example.com/origin.git"));
        assert_eq!(bundle.author, None);
    }
}
