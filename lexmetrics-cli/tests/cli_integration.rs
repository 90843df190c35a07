//! Integration tests for the lexmetrics CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out StopWords/, MasterDictionary/ and textfile/ under `root`
fn write_data_root(root: &Path) {
    let stop_dir = root.join("StopWords");
    fs::create_dir_all(&stop_dir).unwrap();
    fs::write(
        stop_dir.join("StopWords_Names.txt"),
        "SMITH | Surnames from 1990 census > .002%. www.census.gov.genealogy/names/dist.all.last\nJOHNSON\n",
    )
    .unwrap();
    fs::write(stop_dir.join("StopWords_Generic.txt"), "ABOUT\nABOVE\n").unwrap();
    fs::write(stop_dir.join("StopWords_Currencies.txt"), b"EURO | \x80\n").unwrap();

    let dict_dir = root.join("MasterDictionary");
    fs::create_dir_all(&dict_dir).unwrap();
    fs::write(
        dict_dir.join("positive-words.txt"),
        "good\ngreat\nprofit\nson\n",
    )
    .unwrap();
    fs::write(dict_dir.join("negative-words.txt"), "bad\nloss\neuro\n").unwrap();

    let corpus = root.join("textfile");
    fs::create_dir_all(&corpus).unwrap();
    fs::write(
        corpus.join("37.txt"),
        "Our profit was great this year. We had no loss!",
    )
    .unwrap();
    fs::write(corpus.join("38.txt"), "Bad news. The euro fell.").unwrap();
    fs::write(corpus.join("39.txt"), "").unwrap();
}

fn lexmetrics() -> Command {
    let mut cmd = Command::cargo_bin("lexmetrics").unwrap();
    cmd.env_remove("LEXMETRICS_DATA_ROOT");
    cmd
}

fn analyze_in(root: &Path) -> Command {
    let mut cmd = lexmetrics();
    cmd.arg("analyze").arg("--data-root").arg(root).arg("-q");
    cmd
}

#[test]
fn test_analyze_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    let output = analyze_in(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["37"]["POSITIVE SCORE"], 2);
    assert_eq!(value["37"]["NEGATIVE SCORE"], 1);
    assert_eq!(value["37"]["POLARITY SCORE"], 0.33);
    assert_eq!(value["37"]["PERSONAL PRONOUNS"], 2);
    assert_eq!(value["38"]["POLARITY SCORE"], -1.0);
    assert!(value.get("39").is_none());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Document 39"));
}

#[test]
fn test_analyze_text_output() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    analyze_in(temp_dir.path())
        .args(["-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document 37"))
        .stdout(predicate::str::contains("  POLARITY SCORE: 0.33"))
        .stdout(predicate::str::contains("  AVG SENTENCE LENGTH: 5"));
}

#[test]
fn test_analyze_markdown_output() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    analyze_in(temp_dir.path())
        .args(["-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| ID | POSITIVE SCORE |"))
        .stdout(predicate::str::contains("| 37 | 2 | 1 | 0.33 |"))
        .stdout(predicate::str::contains("*Total documents: 2*"));
}

#[test]
fn test_analyze_output_file() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());
    let output_path = temp_dir.path().join("metrics.json");

    analyze_in(temp_dir.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["38"]["NEGATIVE SCORE"], 1);
}

#[test]
fn test_analyze_glob_input() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());
    let pattern = format!("{}/textfile/3[78].txt", temp_dir.path().display());

    analyze_in(temp_dir.path())
        .args(["-i", &pattern])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"37\""))
        .stdout(predicate::str::contains("\"38\""))
        .stderr(predicate::str::contains("Document 39").not());
}

#[test]
fn test_modes_agree() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    let sequential = analyze_in(temp_dir.path())
        .args(["-m", "sequential"])
        .output()
        .unwrap();
    let parallel = analyze_in(temp_dir.path())
        .args(["-m", "parallel", "-t", "2"])
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_missing_master_list_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());
    fs::remove_file(temp_dir.path().join("MasterDictionary/positive-words.txt")).unwrap();

    analyze_in(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load lexicon resources"));
}

#[test]
fn test_nonexistent_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    analyze_in(temp_dir.path())
        .args(["-i", "/nonexistent/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_validate_command() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    lexmetrics()
        .arg("validate")
        .arg("--data-root")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Resources are valid!"))
        .stdout(predicate::str::contains("Positive words: 3"))
        .stdout(predicate::str::contains("Negative words: 2"))
        .stdout(predicate::str::contains("General stop words: 179"));
}

#[test]
fn test_generated_config_drives_analysis() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());
    let config_path = temp_dir.path().join("lexmetrics.toml");

    lexmetrics()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    // data_root "." resolves against the config file's directory
    lexmetrics()
        .arg("analyze")
        .arg("-c")
        .arg(&config_path)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"37\""));
}

#[test]
fn test_data_root_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    write_data_root(temp_dir.path());

    lexmetrics()
        .env("LEXMETRICS_DATA_ROOT", temp_dir.path())
        .args(["analyze", "-q", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Document 38"));
}

#[test]
fn test_list_metrics() {
    lexmetrics()
        .args(["list", "metrics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PERCENTAGE OF COMPLEX WORDS"))
        .stdout(predicate::str::contains("FOG INDEX"));
}

#[test]
fn test_list_formats() {
    lexmetrics()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}
