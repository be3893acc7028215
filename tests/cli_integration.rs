//! Integration tests for the CredVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.  The
//! master password is supplied through `CREDVAULT_PASSWORD` so no prompt
//! is shown, and each test runs in its own temp dir with cheap Argon2
//! settings in `.credvault.toml`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const FAST_CONFIG: &str = "db_path = \"vault.db\"
argon2_memory_kib = 8192
argon2_iterations = 1
argon2_parallelism = 1
";

/// Helper: get a Command pointing at the credvault binary.
fn credvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("credvault").expect("binary should exist")
}

/// Helper: a temp project dir with a fast config file.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".credvault.toml").write_str(FAST_CONFIG).unwrap();
    tmp
}

/// Helper: a credvault command in `dir` with the given master password.
fn in_dir(dir: &TempDir, password: &str) -> Command {
    let mut cmd = credvault();
    cmd.current_dir(dir.path())
        .env("CREDVAULT_PASSWORD", password)
        .env_remove("CREDVAULT_NEW_PASSWORD")
        .env_remove("CREDVAULT_DB");
    cmd
}

fn init(dir: &TempDir, password: &str) {
    in_dir(dir, password).arg("init").assert().success();
}

#[test]
fn help_flag_shows_usage() {
    credvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("master password"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("change-password"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn no_args_shows_help() {
    credvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let output = credvault()
        .args(["generate", "--length", "24", "--no-symbols"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let pw = String::from_utf8(output.stdout).unwrap();
    let pw = pw.trim_end();
    assert_eq!(pw.len(), 24);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn generate_rejects_out_of_range_length() {
    credvault().args(["generate", "-l", "2"]).assert().failure();
}

#[test]
fn init_creates_database_once() {
    let tmp = project();
    init(&tmp, "master-pw");
    tmp.child("vault.db").assert(predicate::path::exists());

    in_dir(&tmp, "other-pw")
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn status_reports_initialization() {
    let tmp = project();
    in_dir(&tmp, "pw")
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("No master password"));

    init(&tmp, "pw");
    in_dir(&tmp, "pw")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Master password is set"));
}

#[test]
fn add_list_delete_flow() {
    let tmp = project();
    init(&tmp, "pw");

    in_dir(&tmp, "pw")
        .args(["add", "banana", "b-secret"])
        .assert()
        .success();
    in_dir(&tmp, "pw")
        .args(["add", "Apple", "a-secret"])
        .assert()
        .success();

    let listed = in_dir(&tmp, "pw")
        .args(["list", "--show"])
        .output()
        .unwrap();
    assert!(listed.status.success());
    let stdout = String::from_utf8(listed.stdout).unwrap();
    let apple = stdout.find("Apple").expect("Apple listed");
    let banana = stdout.find("banana").expect("banana listed");
    assert!(apple < banana);
    assert!(stdout.contains("a-secret"));

    // Masked by default.
    in_dir(&tmp, "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("a-secret").not());

    in_dir(&tmp, "pw")
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted #1"));

    // Deleting again is not an error.
    in_dir(&tmp, "pw")
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    in_dir(&tmp, "pw")
        .args(["list", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b-secret").not());
}

#[test]
fn delete_missing_id_without_force_is_a_no_op() {
    let tmp = project();
    init(&tmp, "pw");

    in_dir(&tmp, "pw")
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to delete"));
}

#[test]
fn wrong_password_is_unauthorized() {
    let tmp = project();
    init(&tmp, "right");

    in_dir(&tmp, "wrong")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthorized"));

    in_dir(&tmp, "wrong")
        .args(["add", "svc", "secret"])
        .assert()
        .failure();
}

#[test]
fn add_generate_stores_generated_password() {
    let tmp = project();
    init(&tmp, "pw");

    in_dir(&tmp, "pw")
        .args(["add", "Forum", "--generate", "--length", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored password for 'Forum'"));

    in_dir(&tmp, "pw")
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"service\": \"Forum\""));
}

#[test]
fn export_csv_to_stdout_and_file() {
    let tmp = project();
    init(&tmp, "pw");
    in_dir(&tmp, "pw")
        .args(["add", "Gmail", "abc,123"])
        .assert()
        .success();

    in_dir(&tmp, "pw")
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("id,service,secret"))
        .stdout(predicate::str::contains("1,Gmail,\"abc,123\""));

    in_dir(&tmp, "pw")
        .args(["export", "--output", "dump.csv"])
        .assert()
        .success();
    tmp.child("dump.csv")
        .assert(predicate::str::contains("Gmail"));

    in_dir(&tmp, "pw")
        .args(["export", "--output", "vault.db"])
        .assert()
        .failure();
}

#[test]
fn change_password_rotates_master() {
    let tmp = project();
    init(&tmp, "old-pw");

    in_dir(&tmp, "old-pw")
        .env("CREDVAULT_NEW_PASSWORD", "new-pw")
        .arg("change-password")
        .assert()
        .success();

    in_dir(&tmp, "old-pw").arg("list").assert().failure();
    in_dir(&tmp, "new-pw").arg("list").assert().success();
}

#[test]
fn db_command_switches_and_remembers_location() {
    let tmp = project();
    init(&tmp, "pw");

    in_dir(&tmp, "pw")
        .args(["db", "other.db"])
        .assert()
        .success();
    tmp.child("other.db").assert(predicate::path::exists());
    tmp.child(".credvault.toml")
        .assert(predicate::str::contains("other.db"));

    // The new database has no master password yet.
    in_dir(&tmp, "pw")
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("No master password"));

    // --db overrides the remembered location.
    in_dir(&tmp, "pw")
        .args(["status", "--db", "vault.db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Master password is set"));
}

#[test]
fn completions_for_bash() {
    credvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("credvault"));
}
