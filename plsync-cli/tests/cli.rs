use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const CONFIG: &str = "\
source_url: https://example.com/playlist
dest_repo: acme/DC05OKTOBER2025
targets:
  prefix: DC
  month: OKTOBER
  year: '2025'
  days: 3
";

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn plsync() -> Command {
    Command::cargo_bin("plsync").expect("binary built")
}

#[test]
fn plan_lists_every_destination() {
    let config = write_config(CONFIG);

    plsync()
        .args(["plan", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 destinations in acme/DC05OKTOBER2025"))
        .stdout(predicate::str::contains("DC01OKTOBER2025"))
        .stdout(predicate::str::contains("DC03OKTOBER2025"));
}

#[test]
fn invalid_cutoff_fails_at_startup() {
    let config = write_config(&format!("{CONFIG}expire_hour: 24\n"));

    plsync()
        .args(["plan", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cutoff time"));
}

#[test]
fn missing_config_file_is_reported_with_its_path() {
    plsync()
        .args(["plan", "--config", "/nonexistent/plsync.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn run_requires_the_token_env_var() {
    let config = write_config(CONFIG);

    plsync()
        .args(["run", "--config"])
        .arg(config.path())
        .env_remove("GITHUB_PAT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_PAT"));
}

#[test]
fn status_requires_the_token_env_var() {
    let config = write_config(CONFIG);

    plsync()
        .args(["status", "--config"])
        .arg(config.path())
        .env_remove("GITHUB_PAT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_PAT"));
}
