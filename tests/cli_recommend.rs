mod common;

use common::{fpa, json_output};
use predicates::prelude::*;

#[test]
fn recommend_by_role() {
    let json = json_output(&["recommend", "--role", "budget manager"]);
    let recs = json["recommendations"].as_array().unwrap();
    assert!(!recs.is_empty());
    assert!(recs.len() <= 10);
    for rec in recs {
        let category = rec["category"].as_str().unwrap();
        assert!(
            ["budgeting", "reporting", "scenario_planning"].contains(&category),
            "unexpected category {category} for a budget manager"
        );
    }
}

#[test]
fn recommend_by_tool() {
    let json = json_output(&["recommend", "--tool", "python"]);
    assert!(json["count"].as_u64().unwrap() > 0);
}

#[test]
fn recommend_by_challenge() {
    let json = json_output(&["recommend", "--challenge", "consolidation"]);
    let recs = json["recommendations"].as_array().unwrap();
    assert!(recs
        .iter()
        .any(|r| r["id"].as_str().unwrap() == "budget-001"));
}

#[test]
fn recommend_without_profile_fails() {
    fpa()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one of"));
}

#[test]
fn recommend_experience_alone_is_not_enough() {
    // Experience only boosts matches, it cannot create them.
    fpa()
        .args(["recommend", "--experience", "beginner"])
        .assert()
        .failure();
}

#[test]
fn recommend_human_output() {
    fpa()
        .args(["recommend", "--role", "controller"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recommended use cases"));
}
