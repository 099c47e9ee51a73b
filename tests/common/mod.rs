//! Common test utilities for stratus-bundle integration tests
//!
//! A [`TestStore`] owns a temporary bundle store, a directory of local git
//! repositories standing in for remote bundle sources, and a settings file
//! whose registry points at them.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, Signature};
use tempfile::TempDir;

pub struct TestStore {
    pub temp: TempDir,
    /// Store root (not created until something is installed)
    pub dir: PathBuf,
    /// Directory holding one git repository per remote bundle
    pub remotes: PathBuf,
    /// Settings file passed via STRATUS_BUNDLE_CONFIG
    pub config: PathBuf,
}

impl TestStore {
    /// Store whose registry resolves every name under `remotes`, and whose
    /// common bundle set is `common`
    pub fn with_common(common: &[&str]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = temp.path().join("bundles");
        let remotes = temp.path().join("remotes");
        fs::create_dir_all(&remotes).expect("Failed to create remotes directory");

        let config = temp.path().join("bundle.yaml");
        let common_list = common
            .iter()
            .map(|name| format!("\"{name}\""))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            &config,
            format!(
                "fetch_timeout_secs: 60\nregistry:\n  url_template: \"{}/{{name}}\"\ncommon_bundles: [{common_list}]\n",
                remotes.display()
            ),
        )
        .expect("Failed to write settings file");

        Self {
            temp,
            dir,
            remotes,
            config,
        }
    }

    pub fn new() -> Self {
        Self::with_common(&[])
    }

    /// `stratus-bundle` pointed at this store
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stratus-bundle").expect("binary should build");
        cmd.env("STRATUS_BUNDLE_DIR", &self.dir);
        cmd.env("STRATUS_BUNDLE_CONFIG", &self.config);
        cmd.env_remove("STRATUS_LOG");
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Create a remote bundle repository with a valid manifest
    pub fn remote_bundle(&self, name: &str, version: &str) -> PathBuf {
        self.remote_with_manifest(
            name,
            &format!(
                "name: {name}\nversion: \"{version}\"\nauthor: Test Author\ndescription: {name} support\n"
            ),
        )
    }

    /// Create a remote bundle repository with arbitrary manifest content
    pub fn remote_with_manifest(&self, name: &str, manifest: &str) -> PathBuf {
        let path = self.remotes.join(name);
        fs::create_dir_all(path.join("syntaxes")).expect("Failed to create bundle directory");
        let repo = Repository::init(&path).expect("Failed to init repository");
        fs::write(path.join("bundle.yaml"), manifest).expect("Failed to write manifest");
        fs::write(path.join("syntaxes").join(format!("{name}.json")), "{}")
            .expect("Failed to write syntax file");
        commit_all(&repo, "Initial commit");
        path
    }

    /// Commit a new version to an existing remote bundle
    pub fn bump_remote(&self, name: &str, version: &str) {
        let path = self.remotes.join(name);
        let repo = Repository::open(&path).expect("Failed to open repository");
        fs::write(
            path.join("bundle.yaml"),
            format!("name: {name}\nversion: \"{version}\"\nauthor: Test Author\n"),
        )
        .expect("Failed to write manifest");
        commit_all(&repo, &format!("Release {version}"));
    }

    /// Place a bundle directory straight into the store, bypassing install
    pub fn write_installed(&self, name: &str, manifest: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::create_dir_all(&path).expect("Failed to create bundle directory");
        fs::write(path.join("bundle.yaml"), manifest).expect("Failed to write manifest");
        path
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.dir.join(name).is_dir()
    }

    /// Every entry of the store root, hidden ones included, sorted
    pub fn entries(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Stage everything in the work tree and commit it on HEAD
pub fn commit_all(repo: &Repository, message: &str) {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        Signature::now("Test", "test@example.com").expect("Failed to build signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("Failed to commit");
}
