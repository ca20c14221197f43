//! End-to-end tests for the coinsend binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn coinsend(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coinsend").unwrap();
    cmd.env("COINSEND_DATA_DIR", dir.path());
    cmd
}

fn fast_send(dir: &TempDir) -> Command {
    let mut cmd = coinsend(dir);
    cmd.args(["send", "--delay-ms", "0", "--duration-ms", "0"]);
    cmd
}

#[test]
fn send_commits_and_prints_new_balance() {
    let dir = TempDir::new().unwrap();

    fast_send(&dir)
        .args(["--to", "alice", "--amount", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sending..."))
        .stdout(predicate::str::contains(
            "100,000 coins successfully sent to alice!",
        ))
        .stdout(predicate::str::contains(
            "The recipient should receive the coins within 24 hours.",
        ))
        .stdout(predicate::str::contains("Sent to: alice"))
        .stdout(predicate::str::contains("-100,000"))
        .stdout(predicate::str::contains("New balance: 92,438,280"));
}

#[test]
fn send_accepts_grouped_amounts() {
    let dir = TempDir::new().unwrap();

    fast_send(&dir)
        .args(["--to", "bob", "--amount", "5,000", "--balance", "12000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: 7,000"));
}

#[test]
fn send_rejects_amount_above_balance() {
    let dir = TempDir::new().unwrap();

    fast_send(&dir)
        .args(["--to", "carol", "--amount", "1000", "--balance", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You only have 500 coins"))
        .stdout(predicate::str::contains("Balance: 500"))
        .stdout(predicate::str::contains("Sent to:").not());
}

#[test]
fn send_rejects_blank_receiver() {
    let dir = TempDir::new().unwrap();

    fast_send(&dir)
        .args(["--to", "   ", "--amount", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a receiver username and select a coin amount to proceed.",
        ));
}

#[test]
fn send_rejects_unparseable_amount() {
    let dir = TempDir::new().unwrap();

    fast_send(&dir)
        .args(["--to", "dave", "--amount", "lots"])
        .assert()
        .failure();
}

#[test]
fn presets_lists_amounts() {
    let dir = TempDir::new().unwrap();

    coinsend(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting balance: 92,538,280"))
        .stdout(predicate::str::contains("1,000,000"));
}

#[test]
fn init_writes_settings_and_config_reads_them() {
    let dir = TempDir::new().unwrap();

    coinsend(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));
    assert!(dir.path().join("config.json").exists());

    coinsend(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial balance:    92,538,280"))
        .stdout(predicate::str::contains("Network delay:      2500 ms"));
}

#[test]
fn invalid_settings_are_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "preset_amounts": [] }"#,
    )
    .unwrap();

    coinsend(&dir)
        .arg("presets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("preset_amounts"));
}
