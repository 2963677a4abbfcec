mod common;

use common::fpa;
use predicates::prelude::*;

#[test]
fn report_default_is_summary() {
    fpa()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY REPORT"))
        .stdout(predicate::str::contains("BY CATEGORY:"))
        .stdout(predicate::str::contains("Total Use Cases: 31"));
}

#[test]
fn report_category_type() {
    fpa()
        .args(["report", "--type", "category", "--category", "budgeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CATEGORY: BUDGETING & PLANNING"));
}

#[test]
fn report_category_type_requires_category() {
    fpa()
        .args(["report", "--type", "category"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --category"));
}

#[test]
fn report_reference_type() {
    fpa()
        .args(["report", "--type", "reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUICK REFERENCE GUIDE"));
}

#[test]
fn report_complexity_type() {
    fpa()
        .args(["report", "--type", "complexity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USE CASES BY COMPLEXITY LEVEL"))
        .stdout(predicate::str::contains("### BEGINNER"));
}

#[test]
fn report_cookbook_type() {
    fpa()
        .args(["report", "--type", "cookbook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PROMPT COOKBOOK"));
}

#[test]
fn report_markdown_type() {
    fpa()
        .args(["report", "--type", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Table of Contents"))
        .stdout(predicate::str::contains("### Automated Budget Consolidation"));
}

#[test]
fn report_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.txt");

    fpa()
        .args(["report", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("SUMMARY REPORT"));
}

#[test]
fn report_rejects_unknown_type() {
    fpa()
        .args(["report", "--type", "pdf"])
        .assert()
        .failure();
}
