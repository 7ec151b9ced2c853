use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyglobal(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("studyglobal").expect("bin");
    cmd.env("STUDYGLOBAL_DATA_DIR", data_dir).env_remove("RUST_LOG");
    cmd
}

fn run(data_dir: &Path, args: &[&str]) {
    studyglobal(data_dir).args(args).assert().success();
}

#[test]
fn init_seeds_offices_and_settings() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"))
        .stdout(predicate::str::contains("10 demo offices"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").join("offices.json").exists());
}

#[test]
fn config_shows_override_variable() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("STUDYGLOBAL_DATA_DIR"))
        .stdout(predicate::str::contains("Office page size:   20"));
}

#[test]
fn set_and_show_fields() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "set", "personal.full_name.first_name", "Ayesha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Name = Ayesha"));

    studyglobal(temp.path())
        .args(["wizard", "show", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ayesha"))
        .stdout(predicate::str::contains("Pakistan"));
}

#[test]
fn ielts_overall_is_computed_after_each_band() {
    let temp = TempDir::new().unwrap();

    run(temp.path(), &["wizard", "set", "test_scores.ielts_scores.listening", "7.5"]);
    run(temp.path(), &["wizard", "set", "test_scores.ielts_scores.reading", "7"]);
    run(temp.path(), &["wizard", "set", "test_scores.ielts_scores.writing", "6.5"]);

    studyglobal(temp.path())
        .args(["wizard", "set", "test_scores.ielts_scores.speaking", "6.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IELTS overall band: 7.0"));
}

#[test]
fn ielts_band_is_capped_at_nine() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "set", "test_scores.ielts_scores.listening", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IELTS Listening = 9"));
}

#[test]
fn unknown_field_is_an_error() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "set", "personal.nickname", "Ash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field: personal.nickname"));
}

#[test]
fn goto_is_guarded() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "goto", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 5: Personal Details"))
        .stdout(predicate::str::contains("Moved").not())
        .stderr(predicate::str::is_empty());

    studyglobal(temp.path())
        .args(["wizard", "goto", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));

    run(temp.path(), &["wizard", "next"]);
    run(temp.path(), &["wizard", "next"]);
    run(temp.path(), &["wizard", "goto", "1"]);

    studyglobal(temp.path())
        .args(["wizard", "goto", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3 of 5: Test Scores"));
}

#[test]
fn submit_only_on_final_step() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available on step 5"));

    for _ in 0..4 {
        run(temp.path(), &["wizard", "next"]);
    }

    studyglobal(temp.path())
        .args(["wizard", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Application submitted."));

    let submissions: Vec<_> = fs::read_dir(temp.path().join("submissions"))
        .unwrap()
        .collect();
    assert_eq!(submissions.len(), 1);
}

#[test]
fn degrees_can_be_added_and_removed() {
    let temp = TempDir::new().unwrap();

    let output = studyglobal(temp.path())
        .args(["wizard", "degree", "add"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout.trim().trim_start_matches("Added degree ").to_string();

    run(temp.path(), &["wizard", "degree", "set", &id, "program_name", "MSc Physics"]);

    studyglobal(temp.path())
        .args(["wizard", "show", "academic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MSc Physics"));

    studyglobal(temp.path())
        .args(["wizard", "degree", "set", &id, "grade", "A"])
        .assert()
        .failure();

    run(temp.path(), &["wizard", "degree", "remove", &id]);

    studyglobal(temp.path())
        .args(["wizard", "show", "academic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Additional degrees: none"));
}

#[test]
fn export_application_json() {
    let temp = TempDir::new().unwrap();
    run(temp.path(), &["wizard", "set", "personal.email", "ayesha@example.pk"]);
    run(temp.path(), &["wizard", "next"]);

    let output = studyglobal(temp.path())
        .args(["wizard", "export", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["current_step"], 2);
    assert_eq!(doc["completed_steps"], serde_json::json!([1]));
    assert_eq!(doc["profile"]["personal"]["email"], "ayesha@example.pk");
}

#[test]
fn reset_discards_draft() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["wizard", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draft to discard."));

    run(temp.path(), &["wizard", "next"]);

    studyglobal(temp.path())
        .args(["wizard", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft discarded."));

    studyglobal(temp.path())
        .args(["wizard", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 5"));
}

#[test]
fn office_list_filter_and_delete() {
    let temp = TempDir::new().unwrap();

    studyglobal(temp.path())
        .args(["office", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NYC-001"))
        .stdout(predicate::str::contains("Page 1 of 1 (10 offices)"));

    studyglobal(temp.path())
        .args(["office", "list", "--filter", "renovation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEN-007"))
        .stdout(predicate::str::contains("NYC-001").not());

    studyglobal(temp.path())
        .args(["office", "delete", "NYC-001", "2", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 office(s): LA-002, NYC-001"))
        .stdout(predicate::str::contains("8 office(s) remaining."));

    studyglobal(temp.path())
        .args(["office", "show", "NYC-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    studyglobal(temp.path())
        .args(["office", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 10 demo offices."));
}

#[test]
fn office_export_csv() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("offices.csv");

    studyglobal(temp.path())
        .args(["office", "export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 10 offices"));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(text.starts_with("ID,Office Code,Office Name"));
}

#[test]
fn audit_log_records_mutations() {
    let temp = TempDir::new().unwrap();

    run(temp.path(), &["wizard", "set", "personal.full_name.first_name", "Omar"]);
    run(temp.path(), &["office", "delete", "SEA-005"]);

    let log = fs::read_to_string(temp.path().join("audit.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"create\""));
    assert!(lines[1].contains("\"delete\""));
}
