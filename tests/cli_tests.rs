//! End-to-end tests of the `pairalign` binary
//!
//! Each test writes a FASTA fixture to a temporary directory, runs the
//! binary, and checks the exit status, standard output and output file.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn pairalign() -> Command {
    Command::cargo_bin("pairalign").expect("Binary should be built")
}

fn read_output(path: &Path) -> String {
    fs::read_to_string(path).expect("Output file should exist")
}

#[test]
fn test_missing_arguments_print_usage_and_exit_1() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "in.fa", ">a\nACGT\n");

    pairalign()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    pairalign()
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    // Nothing besides the input was created
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_input_reports_path_and_exit_1() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.txt");
    let missing = dir.path().join("missing.fa");

    pairalign()
        .arg(&missing)
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("There is no file with name"))
        .stdout(predicate::str::contains("missing.fa"));

    assert!(!output.exists());
}

#[test]
fn test_empty_file_succeeds_with_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "empty.fa", "");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of sequences: 0"));

    assert_eq!(read_output(&output), "");
}

#[test]
fn test_single_record_yields_no_pairs() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "one.fa", ">only\nACGTACGT\n");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of sequences: 1"))
        .stdout(predicate::str::contains(">Alignment").not());

    assert_eq!(read_output(&output), "");
}

#[test]
fn test_three_records_produce_three_pairs_in_order() {
    let dir = TempDir::new().unwrap();
    let input = fixture(
        &dir,
        "three.fa",
        ">s0\nACGTACGT\n>s1\nACGTTCGT\n>s2\r\nACG\r\nTACG\r\n",
    );
    let output = dir.path().join("out.txt");

    pairalign().arg(&input).arg(&output).assert().success();

    let text = read_output(&output);
    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();
    assert_eq!(
        headers,
        vec![
            ">Alignment of sequences 0 and 1",
            ">Alignment of sequences 0 and 2",
            ">Alignment of sequences 1 and 2",
        ]
    );
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_flank_example_output_and_diagnostics() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "flank.fa", ">query\nCCC\n>target\nAAA\nCCC\nGGG\n");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading sequences..."))
        .stdout(predicate::str::contains("Number of sequences: 2"))
        .stdout(predicate::str::contains(">Alignment of sequences 0 and 1"))
        .stdout(predicate::str::contains("T: CCC (3 - 5)"))
        .stdout(predicate::str::contains("Q: CCC (0 - 2)"))
        .stdout(predicate::str::contains("Edit distance: 0"))
        .stdout(predicate::str::contains("Percent identity: 33"))
        .stdout(predicate::str::contains("Infix Percent identity: 100"));

    assert_eq!(
        read_output(&output),
        ">Alignment of sequences 0 and 1\nAAACCCGGG\n"
    );
}

#[test]
fn test_no_view_flag() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "flank.fa", ">query\nCCC\n>target\nAAACCCGGG\n");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .arg("--no-view")
        .assert()
        .success()
        .stdout(predicate::str::contains("T: ").not())
        .stdout(predicate::str::contains("Edit distance: 0"));
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "flank.fa", ">query\nCCC\n>target\nAAACCCGGG\n");
    let output = dir.path().join("out.txt");

    let assert = pairalign()
        .arg(&input)
        .arg(&output)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["first"], 0);
    assert_eq!(value["second"], 1);
    assert_eq!(value["edit_distance"], 0);
    assert_eq!(value["cigar"], "3=");

    // The output file is the same regardless of format
    assert_eq!(
        read_output(&output),
        ">Alignment of sequences 0 and 1\nAAACCCGGG\n"
    );
}

#[test]
fn test_tsv_format() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "pairs.fa", ">a\nACGT\n>b\nACGT\n>c\nACGA\n");
    let output = dir.path().join("out.txt");

    let assert = pairalign()
        .arg(&input)
        .arg(&output)
        .args(["--format", "tsv"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("first\tsecond\tedit_distance"));
    assert!(lines[1].starts_with("0\t1\t0\t"));
    assert!(lines[1].contains("\t100\t100\t"));
}

#[test]
fn test_strict_mode_rejects_headerless_input() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "bad.fa", "ACGT\n>b\nACGT\n");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Malformed FASTA"));

    // The permissive reader accepts the same file
    pairalign().arg(&input).arg(&output).assert().success();
    assert_eq!(
        read_output(&output),
        ">Alignment of sequences 0 and 1\nACGT\n"
    );
}

#[test]
fn test_fold_ambiguity_flag_applies_to_trace() {
    let dir = TempDir::new().unwrap();
    let input = fixture(&dir, "amb.fa", ">a\nACGB\n>b\nACGN\n");
    let output = dir.path().join("out.txt");

    pairalign()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance: 1"))
        .stdout(predicate::str::contains("Percent identity: 100"));

    pairalign()
        .arg(&input)
        .arg(&output)
        .arg("--fold-ambiguity")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance: 0"));
}
