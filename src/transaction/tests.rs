#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

fn store_with_bundle(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let bundle = temp.path().join("ruby");
    fs::create_dir_all(&bundle).unwrap();
    fs::write(bundle.join("bundle.yaml"), content).unwrap();
    (temp, bundle)
}

fn entries(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_stage_and_promote_new_bundle() {
    let temp = TempDir::new().unwrap();
    let mut transaction = Transaction::new(temp.path(), "css");

    let staging = transaction.stage().unwrap();
    assert!(
        staging
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".staging-css-")
    );
    fs::write(staging.join("bundle.yaml"), "name: css").unwrap();

    transaction.promote().unwrap();
    transaction.commit();

    assert_eq!(entries(temp.path()), vec!["css"]);
    assert!(temp.path().join("css/bundle.yaml").is_file());
}

#[test]
fn test_uncommitted_stage_leaves_nothing_behind() {
    let temp = TempDir::new().unwrap();
    {
        let mut transaction = Transaction::new(temp.path(), "css");
        let staging = transaction.stage().unwrap();
        fs::write(staging.join("partial"), "half a clone").unwrap();
        // Dropped without commit
    }
    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_stash_and_commit_removes_bundle() {
    let (temp, bundle) = store_with_bundle("name: ruby");
    let mut transaction = Transaction::new(temp.path(), "ruby");

    transaction.stash_existing().unwrap();
    assert!(!bundle.exists());
    transaction.commit();

    assert!(entries(temp.path()).is_empty());
}

#[test]
fn test_uncommitted_stash_is_restored() {
    let (temp, bundle) = store_with_bundle("name: ruby\nversion: '1'");
    {
        let mut transaction = Transaction::new(temp.path(), "ruby");
        transaction.stash_existing().unwrap();
        assert!(!bundle.exists());
    }
    assert_eq!(entries(temp.path()), vec!["ruby"]);
    assert_eq!(
        fs::read_to_string(bundle.join("bundle.yaml")).unwrap(),
        "name: ruby\nversion: '1'"
    );
}

#[test]
fn test_replace_keeps_only_new_content() {
    let (temp, bundle) = store_with_bundle("version: old");
    let mut transaction = Transaction::new(temp.path(), "ruby");

    let staging = transaction.stage().unwrap();
    fs::write(staging.join("bundle.yaml"), "version: new").unwrap();
    transaction.stash_existing().unwrap();
    transaction.promote().unwrap();
    transaction.commit();

    assert_eq!(entries(temp.path()), vec!["ruby"]);
    assert_eq!(
        fs::read_to_string(bundle.join("bundle.yaml")).unwrap(),
        "version: new"
    );
}

#[test]
fn test_rollback_after_promote_restores_old_content() {
    let (temp, bundle) = store_with_bundle("version: old");
    {
        let mut transaction = Transaction::new(temp.path(), "ruby");
        let staging = transaction.stage().unwrap();
        fs::write(staging.join("bundle.yaml"), "version: new").unwrap();
        transaction.stash_existing().unwrap();
        transaction.promote().unwrap();
        // Dropped without commit
    }
    assert_eq!(entries(temp.path()), vec!["ruby"]);
    assert_eq!(
        fs::read_to_string(bundle.join("bundle.yaml")).unwrap(),
        "version: old"
    );
}

#[test]
fn test_promote_without_stage_fails() {
    let temp = TempDir::new().unwrap();
    let mut transaction = Transaction::new(temp.path(), "ruby");
    assert!(transaction.promote().is_err());
}

#[test]
fn test_stash_missing_bundle_fails() {
    let temp = TempDir::new().unwrap();
    let mut transaction = Transaction::new(temp.path(), "ruby");
    assert!(transaction.stash_existing().is_err());
    drop(transaction);
    assert!(entries(temp.path()).is_empty());
}
