/// Linter integration tests: checks against packs written to disk.

use disorder_content::core::lint::{lint_directory, LintError};
use disorder_content::core::pipeline::{run, RunOptions};
use serde_json::Value;
use std::path::Path;

fn write_pack(root: &Path) {
    run(&RunOptions {
        theme_path: None,
        seed: 42,
        authoring_root: root.join("data"),
        aggregate_root: root.join("game"),
    })
    .unwrap();
}

#[test]
fn fresh_pack_passes() {
    let tmp = tempfile::tempdir().unwrap();
    write_pack(tmp.path());
    let report = lint_directory(&tmp.path().join("game")).unwrap();
    assert!(report.is_clean(), "{:?}", report.errors);
    assert!(report.warnings.is_empty());
}

#[test]
fn tampered_pack_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write_pack(tmp.path());

    let path = tmp.path().join("game/factions.json");
    let mut doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    doc["factions"][0]["unlockableCards"][0] = Value::from("card_that_never_was");
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let report = lint_directory(&tmp.path().join("game")).unwrap();
    assert!(!report.is_clean());
    assert!(report.errors[0].contains("card_that_never_was"));
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = lint_directory(&tmp.path().join("nowhere")).unwrap_err();
    assert!(matches!(err, LintError::Io { .. }));
}
