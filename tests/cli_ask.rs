mod common;

use common::{fpa, json_output};
use predicates::prelude::*;

#[test]
fn ask_matches_multiple_phrases() {
    let json = json_output(&["ask", "automate", "our", "budget", "forecast", "reports"]);
    assert!(json["count"].as_u64().unwrap() > 0);
    assert!(json["results"].as_array().unwrap().len() <= 10);
    assert_eq!(json["task"], "automate our budget forecast reports");
    let detected: Vec<&str> = json["detected_categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(detected.contains(&"budgeting"));
    assert!(detected.contains(&"forecasting"));
}

#[test]
fn ask_scores_descend() {
    let json = json_output(&["ask", "month-end", "close", "in", "excel"]);
    let results = json["results"].as_array().unwrap();
    for pair in results.windows(2) {
        assert!(pair[0]["score"].as_f64().unwrap() >= pair[1]["score"].as_f64().unwrap());
    }
}

#[test]
fn ask_falls_back_to_plain_search() {
    // "valuation" is not a recognized phrase but appears in record text.
    let json = json_output(&["ask", "valuation"]);
    assert!(json["count"].as_u64().unwrap() > 0);
}

#[test]
fn ask_is_deterministic() {
    let a = json_output(&["ask", "variance", "reporting", "dashboard"]);
    let b = json_output(&["ask", "variance", "reporting", "dashboard"]);
    assert_eq!(a["results"], b["results"]);
}

#[test]
fn ask_without_task_fails() {
    fpa()
        .arg("ask")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Describe the task"));
}

#[test]
fn ask_human_output_lists_titles() {
    fpa()
        .args(["ask", "build a dcf model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEARCH RESULTS"))
        .stdout(predicate::str::contains("DCF Model Development"))
        .stdout(predicate::str::contains("Relevance:"));
}
