#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "5 5\n1 2 N\nLFLFLFLFF\n3 3 E\nFFRFFRFRRF\n";

fn mowsim(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mowsim").unwrap();
    cmd.current_dir(dir.path()).env_remove("MOWSIM_CONFIG");
    cmd
}

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.txt");
    std::fs::write(&path, content).unwrap();
    path
}

// ---------------------------------------------------------------------------
// mowsim run
// ---------------------------------------------------------------------------

#[test]
fn run_prints_final_states_in_input_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .assert()
        .success()
        .stdout("mower-1: 1 3 N\nmower-2: 5 1 E\n");
}

#[test]
fn run_json_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = mowsim(&dir)
        .args(["run", "--json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["width"], 5);
    assert_eq!(report["height"], 5);
    assert_eq!(report["mowers"]["mower-2"]["x"], 5);
    assert_eq!(report["mowers"]["mower-2"]["y"], 1);
    assert_eq!(report["mowers"]["mower-2"]["orientation"], "E");
    assert!(report["finished_at"].is_string());
}

#[test]
fn run_many_mowers_orders_numerically() {
    let dir = TempDir::new().unwrap();
    let mut content = String::from("11 11\n");
    for i in 0..11 {
        content.push_str(&format!("{i} {i} N\nRF\n"));
    }
    let input = write_input(&dir, &content);
    let output = mowsim(&dir).arg("run").arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(':').next().unwrap())
        .collect();
    assert_eq!(keys.len(), 11);
    assert_eq!(keys[1], "mower-2");
    assert_eq!(keys[10], "mower-11");
}

#[test]
fn run_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    std::fs::write(dir.path().join("mowsim.yaml"), "channel_capacity: 1\n").unwrap();
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("mower-1: 1 3 N"));
}

#[test]
fn run_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let config = dir.path().join("custom.yaml");
    std::fs::write(&config, "channel_capacity: 0\n").unwrap();
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("channel_capacity"));
}

#[test]
fn run_with_generous_deadline_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    mowsim(&dir)
        .args(["run", "--deadline-ms", "30000"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("mower-2: 5 1 E"));
}

#[test]
fn run_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    mowsim(&dir)
        .args(["run", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input"));
}

#[test]
fn run_reports_bad_command_with_line() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "5 5\n1 2 N\nLFX\n");
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn run_reports_collision_at_setup() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "5 5\n1 2 N\nF\n1 2 E\nF\n");
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("already occupied"));
}

#[test]
fn run_reports_invalid_lawn() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "0 5\n");
    mowsim(&dir)
        .arg("run")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid lawn dimensions"));
}

// ---------------------------------------------------------------------------
// mowsim check
// ---------------------------------------------------------------------------

#[test]
fn check_summarizes_valid_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    mowsim(&dir)
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lawn 5x5 with 2 mower(s): ok"))
        .stdout(predicate::str::contains("mower-2"));
}

#[test]
fn check_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, SAMPLE);
    let output = mowsim(&dir)
        .args(["check", "-j"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["mowers"][0]["key"], "mower-1");
    assert_eq!(out["mowers"][0]["commands"], 9);
    assert_eq!(out["mowers"][1]["orientation"], "E");
}

#[test]
fn check_rejects_mower_outside_lawn() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "5 5\n6 1 N\nF\n");
    mowsim(&dir)
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the lawn"));
}

#[test]
fn check_rejects_incomplete_definition() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "5 5\n1 2 N\nF\n3 3 E");
    mowsim(&dir)
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 5: incomplete mower definition"));
}
