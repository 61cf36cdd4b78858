use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with HOME pointed at a scratch dir so settings never leak between tests.
fn subreports(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("subreports").unwrap();
    cmd.env("HOME", home.path()).env_remove("SUBREPORTS_LOG");
    cmd
}

#[test]
fn list_filters_by_inclusive_range() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .args(["list", "--from", "2024-03-01", "--to", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered Reports (6 found)"))
        .stdout(predicate::str::contains("Operations Report 98"))
        .stdout(predicate::str::contains("Operations Report 5 ").not());
}

#[test]
fn list_json_preserves_collection_order() {
    let home = TempDir::new().unwrap();
    let output = subreports(&home)
        .args(["list", "--from", "2024-03-01", "--to", "2024-03-15", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let reports: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = reports.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 14, 38, 62, 86, 98]);
}

#[test]
fn list_without_range_shows_everything() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered Reports (100 found)"));
}

#[test]
fn list_empty_window_shows_placeholder() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .args(["list", "--from", "2030-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reports found matching the criteria."))
        .stdout(predicate::str::contains("Filtered Reports (0 found)"));
}

#[test]
fn list_rejects_malformed_bound() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .args(["list", "--from", "03/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn download_with_nothing_selected_fails() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .arg("download")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select reports to download."));

    // unknown ids select nothing
    subreports(&home)
        .args(["download", "--ids", "500"])
        .assert()
        .failure();
}

#[test]
fn download_stub_reports_count() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .args(["download", "--ids", "1,2,3,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initiating download for 3 selected reports."));
}

#[test]
fn download_writes_manifest() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("manifests");
    subreports(&home)
        .args(["download", "--ids", "4,10", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 reports"));

    let manifest = std::fs::read_dir(&out).unwrap().next().unwrap().unwrap().path();
    let content = std::fs::read_to_string(manifest).unwrap();
    assert!(content.contains("/reports/report4.pdf"));
    assert!(content.contains("/reports/report10.pdf"));
}

#[test]
fn config_changes_sample_size() {
    let home = TempDir::new().unwrap();
    subreports(&home)
        .args(["config", "--report-count", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings"));

    subreports(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:      12"));
}

#[test]
fn data_file_with_bad_date_is_never_listed() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("reports.json");
    std::fs::write(
        &data,
        r#"[
            {"id": 1, "name": "Good", "description": "ok", "date": "2024-05-01", "status": "Processed", "url": "/r1.pdf"},
            {"id": 2, "name": "Broken", "description": "bad", "date": "2024-99-99", "status": "Failed", "url": "/r2.pdf"}
        ]"#,
    )
    .unwrap();

    subreports(&home)
        .arg("--data")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered Reports (1 found)"))
        .stdout(predicate::str::contains("Broken").not());

    subreports(&home)
        .arg("--data")
        .arg(&data)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bad dates:  1"));
}
