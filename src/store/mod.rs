//! The bundle store
//!
//! Every bundle lives in its own directory directly under the store root,
//! named after the bundle. Hidden entries under the root (`.lock`, staging
//! and trash directories) belong to the store itself and are never bundles.
//!
//! Changes go through [`Transaction`] so they are atomic from the caller's
//! view, and through [`lock::exclusive`] so two processes never change the
//! store at the same time. Reads take no lock.

pub mod lock;
pub mod registry;
pub mod setup;
pub mod validate;


use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::StoreConfig;
use crate::config::manifest::BundleManifest;
use crate::domain::{Bundle, BundleRef, validate_name};
use crate::error::{self, Result, StratusError};
use crate::git;
use crate::transaction::Transaction;

pub use registry::{ConfiguredRegistry, Registry};
pub use setup::{SetupOutcome, SetupReport};

/// Manages the bundles installed under one root directory
pub struct BundleStore {
    root: PathBuf,
    registry: Box<dyn Registry>,
    fetch_timeout: Duration,
}

impl BundleStore {
    /// Open the store described by `config`, using its configured registry
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_registry(
            &config.dir,
            ConfiguredRegistry::from(&config.registry),
            config.fetch_timeout,
        )
    }

    pub fn with_registry(
        root: impl Into<PathBuf>,
        registry: impl Registry + 'static,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            root: root.into(),
            registry: Box::new(registry),
            fetch_timeout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the bundle `name` lives (whether or not it is installed)
    pub fn bundle_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.bundle_path(name).is_dir()
    }

    /// Names of installed bundles, in no particular order
    ///
    /// A store root that does not exist yet holds no bundles.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(error::fs::io_at("Failed to read", &self.root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| error::fs::io_at("Failed to read", &self.root, e))?;
            let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
                continue;
            };
            if name.starts_with('.') || !entry.path().is_dir() {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    /// Fetch the bundle `name` from the registry and install it
    ///
    /// Fails without touching the store if the bundle is already installed,
    /// unknown to the registry, cannot be fetched, or is not a valid bundle.
    pub fn install(&self, name: &str) -> Result<Bundle> {
        validate_name(name)?;
        self.ensure_not_installed(name)?;
        lock::exclusive(&self.root, || self.install_locked(name))
    }

    fn install_locked(&self, name: &str) -> Result<Bundle> {
        self.ensure_not_installed(name)?;
        let url = self.registry.resolve(name)?;
        tracing::info!(bundle = name, url = %url, "installing");

        let mut transaction = Transaction::new(&self.root, name);
        self.fetch_staged(&mut transaction, name, &url)?;
        transaction.promote()?;
        transaction.commit();

        self.show(name)
    }

    /// Remove the bundle `name`
    ///
    /// The bundle disappears in a single rename; its files are deleted after.
    pub fn uninstall(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.ensure_installed(name)?;
        lock::exclusive(&self.root, || {
            self.ensure_installed(name)?;
            tracing::info!(bundle = name, "uninstalling");
            let mut transaction = Transaction::new(&self.root, name);
            transaction.stash_existing()?;
            transaction.commit();
            Ok(())
        })
    }

    /// Replace the bundle `name` with the latest content from its source
    ///
    /// The source is the checkout's `origin` remote, falling back to the
    /// manifest url and then the registry. On any failure the installed
    /// bundle is left exactly as it was.
    pub fn update(&self, name: &str) -> Result<Bundle> {
        validate_name(name)?;
        self.ensure_installed(name)?;
        lock::exclusive(&self.root, || {
            self.ensure_installed(name)?;
            let url = self.source_url(name)?;
            tracing::info!(bundle = name, url = %url, "updating");

            let mut transaction = Transaction::new(&self.root, name);
            self.fetch_staged(&mut transaction, name, &url)?;
            transaction.stash_existing()?;
            transaction.promote()?;
            transaction.commit();

            self.show(name)
        })
    }

    /// Metadata of the installed bundle `name`
    ///
    /// A bundle that is not in the store is reported as not found.
    pub fn show(&self, name: &str) -> Result<Bundle> {
        validate_name(name)?;
        if !self.is_installed(name) {
            return Err(error::bundle::not_found(name));
        }
        let path = self.bundle_path(name);

        let manifest = BundleManifest::load(&path).map_err(|e| {
            tracing::debug!(bundle = name, "unreadable manifest: {e}");
            error::bundle::metadata_missing(name, crate::config::manifest::MANIFEST_FILE)
        })?;
        let version = manifest
            .version
            .clone()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| error::bundle::metadata_missing(name, "version"))?;

        Ok(Bundle::from_manifest(
            name,
            path.clone(),
            version,
            manifest,
            git::origin_url(&path),
        ))
    }

    /// Check that the referenced directory is a well-formed bundle
    ///
    /// Bundles in the store must also carry their directory name in the
    /// manifest; bundles named by path need not.
    pub fn test(&self, bundle: &BundleRef) -> Result<()> {
        let path = bundle.resolve(&self.root);
        let label = bundle.to_string();
        let expected_name = match bundle {
            BundleRef::Name(name) => {
                validate_name(name)?;
                Some(name.as_str())
            }
            BundleRef::Path(_) => None,
        };
        validate::check(&path, &label, expected_name).map(|_| ())
    }

    /// Install each of `names`, continuing past failures
    ///
    /// Bundles that are already installed are skipped. `on_outcome` is
    /// called as each bundle finishes.
    pub fn setup(
        &self,
        names: &[String],
        mut on_outcome: impl FnMut(&str, &SetupOutcome),
    ) -> Result<SetupReport> {
        lock::exclusive(&self.root, || {
            let mut report = SetupReport::default();
            for name in names {
                let outcome = match validate_name(name).and_then(|()| self.install_locked(name)) {
                    Ok(bundle) => SetupOutcome::Installed(bundle),
                    Err(StratusError::AlreadyInstalled { .. }) => SetupOutcome::Skipped,
                    Err(e) => {
                        tracing::warn!(bundle = %name, "setup install failed: {e}");
                        SetupOutcome::Failed(e)
                    }
                };
                on_outcome(name, &outcome);
                report.push(name.clone(), outcome);
            }
            Ok(report)
        })
    }

    fn ensure_installed(&self, name: &str) -> Result<()> {
        if self.is_installed(name) {
            Ok(())
        } else {
            Err(error::bundle::not_installed(name))
        }
    }

    fn ensure_not_installed(&self, name: &str) -> Result<()> {
        let path = self.bundle_path(name);
        if path.exists() {
            Err(error::bundle::already_installed(name, path))
        } else {
            Ok(())
        }
    }

    fn source_url(&self, name: &str) -> Result<String> {
        let path = self.bundle_path(name);
        if let Some(url) = git::origin_url(&path) {
            return Ok(url);
        }
        let declared = BundleManifest::load(&path).ok().and_then(|m| m.url);
        match declared {
            Some(url) => Ok(url),
            None => self.registry.resolve(name),
        }
    }

    /// Clone `url` into a staging directory and validate it as bundle `name`
    fn fetch_staged(&self, transaction: &mut Transaction, name: &str, url: &str) -> Result<()> {
        let staging = transaction.stage()?;
        git::clone(url, &staging, self.fetch_timeout).map_err(|e| match e {
            StratusError::RepositoryNotFound { .. } => error::bundle::not_found(name),
            other => other,
        })?;
        validate::check(&staging, name, Some(name))?;
        Ok(())
    }
}
