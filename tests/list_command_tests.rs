//! List command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_list_empty_store() {
    let store = common::TestStore::new();
    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("\nInstalled bundles:\n\n\n");
}

#[test]
fn test_list_sorted_with_versions() {
    let store = common::TestStore::new();
    store.write_installed("ruby", "name: ruby\nversion: '2.0'\n");
    store.write_installed("css", "name: css\nversion: '1.1'\n");
    store.write_installed("json", "name: json\n");

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            "\nInstalled bundles:\n\n  * css (1.1)\n  * json (unknown)\n  * ruby (2.0)\n\n",
        );
}

#[test]
fn test_list_ignores_hidden_entries() {
    let store = common::TestStore::new();
    store.write_installed("ruby", "name: ruby\nversion: '2.0'\n");
    std::fs::create_dir_all(store.dir.join(".trash-css-x1")).unwrap();

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ruby"))
        .stdout(predicate::str::contains("trash").not());
}

#[test]
fn test_list_json() {
    let store = common::TestStore::new();
    store.write_installed("ruby", "name: ruby\nversion: '2.0'\n");
    store.write_installed("css", "name: css\n");

    let output = store.cmd().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        entries,
        serde_json::json!([
            { "name": "css", "version": null },
            { "name": "ruby", "version": "2.0" }
        ])
    );
}

#[test]
fn test_list_after_install_and_uninstall() {
    let store = common::TestStore::new();
    for name in ["a", "b", "c"] {
        store.remote_bundle(name, "1.0");
        store.cmd().args(["install", name]).assert().success();
    }
    store.cmd().args(["uninstall", "b"]).assert().success();

    store
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout("\nInstalled bundles:\n\n  * a (1.0)\n  * c (1.0)\n\n");
}
