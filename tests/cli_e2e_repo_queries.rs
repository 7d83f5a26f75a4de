//! End-to-end tests for the repository query commands: `submodules`,
//! `manifests`, and `ls-files`.
//!
//! These lookups are advisory, so the commands must succeed (with empty
//! output) even when the queried repository state does not exist.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Get a Command for the ci-audit binary
fn ci_audit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ci-audit").unwrap();
    cmd.env_remove("CI_AUDIT_ROOT");
    cmd
}

#[test]
fn test_submodules_lists_declared_paths() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".gitmodules")
        .write_str(
            "[submodule \"a\"]\n\tpath = libs/a\n\turl = https://example.com/a.git\n\
             [submodule \"b\"]\n\tpath = libs/b\n\turl = https://example.com/b.git\n",
        )
        .unwrap();

    ci_audit_cmd()
        .arg("submodules")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::eq("libs/a\nlibs/b\n"));
}

#[test]
fn test_submodules_full_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".gitmodules")
        .write_str("[submodule \"a\"]\n\tpath = libs/a\n\turl = https://example.com/a.git\n")
        .unwrap();

    ci_audit_cmd()
        .arg("submodules")
        .arg("--root")
        .arg(temp.path())
        .arg("--full-path")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            temp.path().join("libs/a").display().to_string(),
        ));
}

#[test]
fn test_submodules_without_gitmodules_succeeds_empty() {
    let temp = assert_fs::TempDir::new().unwrap();

    ci_audit_cmd()
        .arg("submodules")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_manifests_finds_files_and_skips_vendored() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("components/wifi/.build-test-rules.yml")
        .write_str("components: {}\n")
        .unwrap();
    temp.child("app/managed_components/dep/.build-test-rules.yml")
        .write_str("components: {}\n")
        .unwrap();

    ci_audit_cmd()
        .arg("manifests")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("components/wifi/.build-test-rules.yml"))
        .stdout(predicate::str::contains("managed_components").not());
}

#[test]
fn test_ls_files_outside_repository_succeeds_empty() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("loose.txt").write_str("not tracked").unwrap();

    ci_audit_cmd()
        .arg("ls-files")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ls_files_warning_visible_at_warn_level() {
    let temp = assert_fs::TempDir::new().unwrap();

    ci_audit_cmd()
        .arg("ls-files")
        .arg("--root")
        .arg(temp.path())
        .arg("--log-level")
        .arg("warn")
        .assert()
        .success()
        .stderr(predicate::str::contains("Git command failed"));
}
