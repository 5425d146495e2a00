use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn area51(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("area51").expect("binary built");
    cmd.env_remove("AREA51_TOKEN_SECRET")
        .arg("--color")
        .arg("never")
        .arg("--config")
        .arg(config);
    cmd
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, area51::testkit::config::config_toml(dir)).expect("write config");
    path
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("area51")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("create-admin"));
}

#[test]
fn config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    area51(&config)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_fails_without_secret() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[server]\nport = 9000\n").unwrap();

    area51(&config)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("auth.token_secret"));
}

#[test]
fn config_validate_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    area51(&dir.path().join("nope.toml"))
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn secret_can_come_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[server]\nport = 9000\n").unwrap();

    area51(&config)
        .env("AREA51_TOKEN_SECRET", "an-environment-secret-of-32-bytes!")
        .args(["config", "validate"])
        .assert()
        .success();
}

#[test]
fn config_show_hides_the_secret() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    area51(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded"))
        .stdout(predicate::str::contains(area51::testkit::config::TOKEN_SECRET).not());
}

#[test]
fn json_output_is_line_delimited() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let output = area51(&config)
        .args(["--json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["type"].is_string(), "{line}");
    }
}

#[test]
fn migrate_then_create_admin() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    area51(&config)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied"));
    assert!(dir.path().join("area51.db").exists());

    area51(&config)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema is up to date"));

    area51(&config)
        .args([
            "create-admin",
            "--email",
            "root@area51.test",
            "--password",
            "majestic-12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("root@area51.test"));
}
