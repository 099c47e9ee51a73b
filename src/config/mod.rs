//! Configuration for the bundle store
//!
//! This module handles:
//! - [`StoreConfig`]: the settings file (`bundle.yaml` under the user config dir)
//!   merged with command-line and environment overrides
//! - [`manifest`]: per-bundle metadata files

pub mod manifest;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{self, Result};

/// Application directory name under the platform config/data dirs
const APP_DIR: &str = "stratus";

/// Settings file name under the config dir
const CONFIG_FILE: &str = "bundle.yaml";

/// Store root directory name under the data dir
const BUNDLES_DIR: &str = "bundles";

/// Default limit for a single clone
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 300;

/// Default location bundles are fetched from
pub const DEFAULT_URL_TEMPLATE: &str = "https://github.com/stratus-bundles/{name}.git";

/// Bundles installed by `setup` when the settings file names none
pub const DEFAULT_COMMON_BUNDLES: &[&str] = &[
    "css",
    "html",
    "javascript",
    "json",
    "markdown",
    "python",
    "ruby",
    "shell",
];

/// Registry section of the settings file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    /// Url with a `{name}` placeholder, tried after the explicit table
    pub url_template: Option<String>,

    /// Explicit bundle name to url table
    pub bundles: BTreeMap<String, String>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            url_template: Some(DEFAULT_URL_TEMPLATE.to_string()),
            bundles: BTreeMap::new(),
        }
    }
}

/// Raw contents of the settings file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Settings {
    dir: Option<PathBuf>,
    fetch_timeout_secs: Option<u64>,
    registry: RegistrySettings,
    common_bundles: Option<Vec<String>>,
}

/// Resolved configuration handed to the bundle store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store root; every bundle lives in `<dir>/<name>`
    pub dir: PathBuf,

    /// Upper bound on a single fetch
    pub fetch_timeout: Duration,

    pub registry: RegistrySettings,

    /// Bundles installed by `setup`
    pub common_bundles: Vec<String>,
}

/// Values given on the command line (or via their environment variables)
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Build a configuration rooted at `dir` with default settings
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            registry: RegistrySettings::default(),
            common_bundles: DEFAULT_COMMON_BUNDLES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Load the settings file and apply overrides
    ///
    /// An explicitly named settings file must exist; the default one is optional.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let settings = match &overrides.config {
            Some(path) => {
                if !path.is_file() {
                    return Err(error::config::not_found(path));
                }
                read_settings(path)?
            }
            None => match default_config_path() {
                Some(path) if path.is_file() => read_settings(&path)?,
                _ => Settings::default(),
            },
        };

        let dir = match (&overrides.dir, settings.dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => expand_home(&dir),
            (None, None) => default_store_dir()?,
        };

        let timeout_secs = overrides
            .timeout_secs
            .or(settings.fetch_timeout_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(error::config::invalid("fetch timeout must be at least 1 second"));
        }

        if let Some(template) = &settings.registry.url_template {
            if !template.contains("{name}") {
                return Err(error::config::invalid(format!(
                    "registry url_template '{template}' has no {{name}} placeholder"
                )));
            }
        }

        let mut config = Self::with_dir(dir);
        config.fetch_timeout = Duration::from_secs(timeout_secs);
        config.registry = settings.registry;
        if let Some(common) = settings.common_bundles {
            config.common_bundles = common;
        }

        tracing::debug!(
            dir = %config.dir.display(),
            timeout_secs,
            "loaded store configuration"
        );
        Ok(config)
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| error::config::read_failed(path, e))?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&content).map_err(|e| error::config::parse_failed(path, e))
}

/// Default settings file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}

/// Default store root
///
/// Uses the platform's standard data location (e.g. XDG on Linux,
/// Application Support on macOS) with a `stratus/bundles` subdirectory.
pub fn default_store_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| {
        error::config::invalid("could not determine a data directory; pass --dir")
    })?;
    Ok(base.join(APP_DIR).join(BUNDLES_DIR))
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}
