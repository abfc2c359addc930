use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn foxhare(constants: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("foxhare").unwrap();
    cmd.arg("--constants").arg(constants);
    cmd
}

#[test]
fn test_params_creates_constants_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .arg("params")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Constants file created with default values.",
        ))
        .stdout(predicate::str::contains("1. Rabbit Birth Rate: 0.1000"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "0.1000\n0.0500\n0.0200\n0.0100\n0.1000\n"
    );
}

#[test]
fn test_params_json() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");
    fs::write(&path, "0.3\n0.0\n0.01\n0.02\n0.4\n").unwrap();

    let output = foxhare(&path)
        .arg("params")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["birth_rate"], 0.3);
    assert_eq!(value["fox_death_rate"], 0.4);
}

#[test]
fn test_run_table() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "--rabbits", "100", "--foxes", "10", "--steps", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time\tRabbits\tFoxes"))
        .stdout(predicate::str::contains("1\t90\t19\n"))
        .stdout(predicate::str::contains("5\t0\t54\n"));
}

#[test]
fn test_run_dual_chart() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "-r", "100", "-f", "10", "-s", "5", "--view", "dual"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Each '*' represents approximately 3 individuals.",
        ));
}

#[test]
fn test_run_fox_vs_rabbit_chart() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "-r", "100", "-f", "10", "-s", "5"])
        .args(["--view", "fox-vs-rabbit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Each '*' represents approximately 3 Rabbits and 2 Foxes.",
        ))
        .stdout(predicate::str::contains("\n100\t*****\n"));
}

#[test]
fn test_run_json() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    let output = foxhare(&path)
        .args(["run", "-r", "100", "-f", "10", "-s", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["series"]["rabbits"], serde_json::json!([100, 90, 64]));
    assert_eq!(value["series"]["foxes"], serde_json::json!([10, 19, 34]));
    assert_eq!(value["parameters"]["predation_rate"], 0.02);
}

#[test]
fn test_run_zero_steps_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "-r", "100", "-f", "10", "-s", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be a positive integer."));
}

#[test]
fn test_run_steps_above_limit_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "-r", "100", "-f", "10", "-s", "1000001"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Duration must be at most 1000000 time steps.",
        ));
}

#[test]
fn test_run_negative_population_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .args(["run", "-r", "-5", "-f", "10", "-s", "3"])
        .assert()
        .failure();
}

#[test]
fn test_interactive_session() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .write_stdin("4\n3\n100\n10\n1\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("===== Fox-Hare Population Simulation ====="))
        .stdout(predicate::str::contains(
            "No simulation data available. Please run a simulation first.",
        ))
        .stdout(predicate::str::contains("Simulation completed successfully."))
        .stdout(predicate::str::contains("0\t100\t10\n1\t90\t19\n"))
        .stdout(predicate::str::contains("Exiting program."));
}

#[test]
fn test_interactive_edit_persists() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .arg("interactive")
        .write_stdin("2\n2\n0.3\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Constants saved successfully."));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "0.1000\n0.3000\n0.0200\n0.0100\n0.1000\n"
    );
}

#[test]
fn test_interactive_rejects_zero_duration() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .write_stdin("3\n100\n10\n0\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration must be a positive integer."))
        .stdout(predicate::str::contains(
            "No simulation data available. Please run a simulation first.",
        ));
}

#[test]
fn test_interactive_closed_stdin_exits_cleanly() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("constants.txt");

    foxhare(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting program."));
}
