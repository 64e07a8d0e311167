use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn docscout() -> Command {
    Command::cargo_bin("docscout").unwrap()
}

#[test]
fn test_search_single_file() -> Result<()> {
    let dir = tempdir()?;
    let file = dir.path().join("greeting.txt");
    fs::write(&file, "hello world")?;

    docscout()
        .args(["search", "hello", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("0-5"))
        .stdout(predicate::str::contains("Found 1 matches"));
    Ok(())
}

#[test]
fn test_search_folder() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "a test line\nno hit\nTEST again")?;

    docscout()
        .args(["search", "test", "--ignore-case", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Found 2 matches"));
    Ok(())
}

#[test]
fn test_invalid_pattern_fails() -> Result<()> {
    let dir = tempdir()?;

    docscout()
        .args(["search", "[unclosed", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
    Ok(())
}

#[test]
fn test_missing_file_reports_extract_error() -> Result<()> {
    docscout()
        .args(["search", "x", "--file", "no_such_file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file 'no_such_file.txt'"));
    Ok(())
}

#[test]
fn test_requires_a_target() -> Result<()> {
    docscout().args(["search", "pattern"]).assert().failure();
    Ok(())
}

#[test]
fn test_export_writes_csv() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("data.txt"), "needle one\nneedle two")?;
    let out = dir.path().join("results.csv");

    docscout()
        .args(["search", "needle", "--dir"])
        .arg(dir.path())
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 results"));

    let exported = fs::read_to_string(&out)?;
    assert!(exported.starts_with("File Name,Line Number,Matched Text,Full Line"));
    assert!(exported.contains("data.txt,1,needle,needle one"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("data.txt"), "one needle")?;

    let assert = docscout()
        .args(["search", "needle", "--json", "--dir"])
        .arg(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let record: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap())?;
    assert_eq!(record["file_name"], "data.txt");
    assert_eq!(record["line_number"], 1);
    assert_eq!(record["matched_text"], "needle");
    Ok(())
}

#[test]
fn test_save_and_list_queries() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("data.txt"), "needle")?;
    let queries = dir.path().join("saved_queries.json");

    docscout()
        .args(["search", "needle", "--save-query", "--queries-file"])
        .arg(&queries)
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();

    docscout()
        .args(["queries", "--file"])
        .arg(&queries)
        .assert()
        .success()
        .stdout(predicate::str::contains("needle"));
    Ok(())
}

#[test]
fn test_queries_with_no_history() -> Result<()> {
    let dir = tempdir()?;

    docscout()
        .args(["queries", "--file"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved queries"));
    Ok(())
}
