use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

// Every CLI test here exercises a path that fails validation before the
// terminal is initialized; the interactive session itself is covered by the
// unit tests over App and PickerState.

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive multi-select picker",
        ));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("multipick"));
}

#[test]
fn test_cli_rejects_single_choice_file() {
    cargo_bin_cmd!()
        .arg(fixture_path("single.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two choices"));
}

#[test]
fn test_cli_rejects_duplicate_choices() {
    cargo_bin_cmd!()
        .arg(fixture_path("duplicate.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate choice"))
        .stderr(predicate::str::contains("tea"));
}

#[test]
fn test_cli_rejects_empty_stdin() {
    cargo_bin_cmd!()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two choices"));
}

#[test]
fn test_cli_rejects_single_choice_on_stdin() {
    cargo_bin_cmd!()
        .write_stdin("only\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 1"));
}

#[test]
fn test_cli_rejects_unknown_preselect() {
    cargo_bin_cmd!()
        .arg(fixture_path("beverages.txt"))
        .arg("--selected")
        .arg("Milk")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not one of the choices"))
        .stderr(predicate::str::contains("Milk"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.txt")
        .assert()
        .failure();
}

#[test]
fn test_fixture_files_exist() {
    // Verify all our test fixtures are present
    assert!(fixture_path("beverages.txt").exists());
    assert!(fixture_path("duplicate.txt").exists());
    assert!(fixture_path("single.txt").exists());
}

#[test]
fn test_fixture_beverages_content() {
    let content = fs::read_to_string(fixture_path("beverages.txt")).unwrap();
    assert!(content.contains("Capucino"));
    assert!(content.contains("Latte"));
    assert!(content.contains("Espresso"));
}
