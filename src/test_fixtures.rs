//! Shared fixtures for unit tests
//!
//! Builds local git repositories that stand in for remote bundle sources,
//! so install and update can be exercised without a network.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository, Signature};
use tempfile::TempDir;

/// A directory of bundle repositories, one per bundle name
pub struct RemoteBundles {
    temp: TempDir,
}

impl RemoteBundles {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Url template resolving names to repositories in this directory
    pub fn url_template(&self) -> String {
        format!("{}/{{name}}", self.temp.path().display())
    }

    /// Create a valid bundle repository named `name` at `version`
    pub fn create(&self, name: &str, version: &str) -> PathBuf {
        self.create_with_manifest(
            name,
            &format!("name: {name}\nversion: \"{version}\"\nauthor: Test Author\n"),
        )
    }

    /// Create a bundle repository with arbitrary manifest content
    pub fn create_with_manifest(&self, name: &str, manifest: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::create_dir_all(path.join("syntaxes")).unwrap();
        let repo = Repository::init(&path).unwrap();
        fs::write(path.join("bundle.yaml"), manifest).unwrap();
        fs::write(path.join("syntaxes").join(format!("{name}.json")), "{}").unwrap();
        commit_all(&repo, "Initial commit");
        path
    }

    /// Create a repository without any manifest
    pub fn create_without_manifest(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        fs::create_dir_all(&path).unwrap();
        let repo = Repository::init(&path).unwrap();
        fs::write(path.join("README"), "no manifest here").unwrap();
        commit_all(&repo, "Initial commit");
        path
    }

    /// Commit a new version of an existing bundle repository
    pub fn bump(&self, name: &str, version: &str) {
        let path = self.temp.path().join(name);
        let repo = Repository::open(&path).unwrap();
        fs::write(
            path.join("bundle.yaml"),
            format!("name: {name}\nversion: \"{version}\"\nauthor: Test Author\n"),
        )
        .unwrap();
        commit_all(&repo, &format!("Release {version}"));
    }

    /// Commit a broken manifest to an existing bundle repository
    pub fn break_manifest(&self, name: &str) {
        let path = self.temp.path().join(name);
        let repo = Repository::open(&path).unwrap();
        fs::write(path.join("bundle.yaml"), "author: nobody\n").unwrap();
        commit_all(&repo, "Break manifest");
    }
}

/// Stage everything in the working tree and commit it on HEAD
pub fn commit_all(repo: &Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .unwrap();
}

/// Write a bundle directory (not a git checkout) at `dir/name`
pub fn write_bundle_dir(dir: &Path, name: &str, manifest: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join("bundle.yaml"), manifest).unwrap();
    path
}
