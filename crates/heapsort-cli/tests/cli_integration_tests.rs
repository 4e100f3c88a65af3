//! CLI integration tests
//!
//! Drive the built `heapsort` binary against a throwaway database.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("store.db")
}

fn heapsort(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heapsort"))
        .env_remove("HEAPSORT_DB")
        .env_remove("HEAPSORT_OWNER")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn create(db: &Path, elements: &str) -> i64 {
    let out = heapsort(db, &["--json", "array", "create", "--elements", elements]);
    json(&out)["id"].as_i64().unwrap()
}

#[test]
fn test_create_and_show_array() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let id = create(&db, "5,-3,8");

    let out = heapsort(&db, &["array", "show", &id.to_string()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[5, -3, 8]"), "stdout: {}", stdout);
}

#[test]
fn test_create_generated_with_seed_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let args = [
        "--json", "--seed", "42", "array", "create", "--size", "6", "--min", "-5", "--max", "5",
    ];

    let a = json(&heapsort(&db, &args));
    let b = json(&heapsort(&db, &args));

    assert_eq!(a["elements"], b["elements"]);
    assert_ne!(a["id"], b["id"]);
    assert_eq!(a["elements"].as_array().unwrap().len(), 6);
}

#[test]
fn test_create_without_elements_or_size_fails() {
    let temp_dir = TempDir::new().unwrap();
    let out = heapsort(&db_path(&temp_dir), &["array", "create"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("either elements or size"), "stderr: {}", stderr);
}

#[test]
fn test_add_and_slice() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "1,2,3").to_string();

    let out = heapsort(
        &db,
        &["--json", "array", "add", &id, "9", "--position", "after", "--index", "1"],
    );
    assert_eq!(json(&out)["elements"], serde_json::json!([1, 2, 9, 3]));

    let out = heapsort(&db, &["--json", "array", "slice", &id, "--start", "-3", "--end", "2"]);
    assert_eq!(json(&out), serde_json::json!([1, 2]));
}

#[test]
fn test_add_with_unknown_position_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "1").to_string();

    let out = heapsort(&db, &["array", "add", &id, "4", "--position", "middle"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("'middle'"));
}

#[test]
fn test_sort_run_records_history() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "5,3,8,1,9,2");

    let out = heapsort(&db, &["--json", "sort", "run", "--id", &id.to_string()]);
    let outcome = json(&out);
    assert_eq!(outcome["sorted"], serde_json::json!([1, 2, 3, 5, 8, 9]));
    assert_eq!(outcome["original"], serde_json::json!([5, 3, 8, 1, 9, 2]));

    let history = json(&heapsort(&db, &["--json", "sort", "history"]));
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["array_id"], serde_json::json!(id));
}

#[test]
fn test_sort_preview_does_not_record() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let outcome = json(&heapsort(
        &db,
        &["--json", "--seed", "1", "sort", "preview", "--size", "20"],
    ));
    assert_eq!(outcome["sorted"].as_array().unwrap().len(), 20);

    let history = json(&heapsort(&db, &["--json", "sort", "history"]));
    assert_eq!(history, serde_json::json!([]));
}

#[test]
fn test_owners_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "1,2").to_string();

    let out = heapsort(&db, &["--owner", "2", "array", "show", &id]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ERR_NOT_FOUND"));

    let list = json(&heapsort(&db, &["--json", "--owner", "2", "array", "list"]));
    assert_eq!(list, serde_json::json!([]));
}

#[test]
fn test_delete_array() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "4").to_string();

    let out = heapsort(&db, &["array", "delete", &id]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(&format!("Deleted array {}", id)));

    let out = heapsort(&db, &["array", "show", &id]);
    assert!(!out.status.success());
}

#[test]
fn test_update_with_no_elements_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "4").to_string();

    let out = heapsort(&db, &["array", "update", &id]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ERR_EMPTY_INPUT"));
}
