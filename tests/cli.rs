#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_inputs(dir: &std::path::Path, workers: usize) {
    let mut csv = String::from("id,name,address\n");
    for i in 1..=workers {
        csv.push_str(&format!("w{i},Worker {i},\n"));
    }
    fs::write(dir.join("workers.csv"), csv).unwrap();
    fs::write(
        dir.join("locations.csv"),
        "id,name,address,min,max\nl1,Depot,,1,1\nl2,Annex,,1,1\n",
    )
    .unwrap();
    write_settings(dir, "2025-10-01", "2025-10-01", "no");
}

fn write_settings(dir: &std::path::Path, start: &str, end: &str, saturdays: &str) {
    fs::write(
        dir.join("settings.json"),
        format!(
            r#"{{"workers_csv":"workers.csv","locations_csv":"locations.csv",
                "start":"{start}","end":"{end}",
                "working_saturdays":"{saturdays}","working_sundays":"no"}}"#
        ),
    )
    .unwrap();
}

#[test]
fn run_check_and_show() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path(), 6);
    let roster = dir.path().join("roster.json");

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("run")
        .arg("--settings")
        .arg(dir.path().join("settings.json"))
        .arg("--out-json")
        .arg(&roster)
        .args(["--view", "slots"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shifts planned for 2025-10-01 shift 1 (06:00):",
        ))
        .stdout(predicate::str::contains("Assigned 6"));

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("check")
        .arg("--roster")
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no conflicts"));

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("show")
        .arg("--roster")
        .arg(&roster)
        .args(["--view", "locations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location l2, Annex."));
}

#[test]
fn understaffed_run_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path(), 4);

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("run")
        .arg("--settings")
        .arg(dir.path().join("settings.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Warning: 4 workers for 6 minimum places"))
        .stdout(predicate::str::contains("2 slot(s) under minimum"));
}

#[test]
fn run_without_inputs_fails() {
    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .args(["run", "--start", "2025-10-01", "--end", "2025-10-02"])
        .assert()
        .failure();
}

#[test]
fn reversed_range_schedules_nothing() {
    let dir = tempdir().unwrap();
    write_inputs(dir.path(), 6);
    write_settings(dir.path(), "2025-10-05", "2025-10-01", "no");

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("run")
        .arg("--settings")
        .arg(dir.path().join("settings.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 0"));
}

#[test]
fn weekend_flag_overrides_settings_file() {
    // 2025-10-04 is a Saturday
    let dir = tempdir().unwrap();
    write_inputs(dir.path(), 6);
    write_settings(dir.path(), "2025-10-04", "2025-10-04", "yes");
    let settings = dir.path().join("settings.json");

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("run")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 6"));

    Command::cargo_bin("shiftfill-cli")
        .unwrap()
        .arg("run")
        .arg("--settings")
        .arg(&settings)
        .args(["--saturdays", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned 0"));
}
