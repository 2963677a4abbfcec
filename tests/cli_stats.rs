mod common;

use common::{fpa, json_output};
use predicates::prelude::*;

#[test]
fn stats_counts_catalog() {
    fpa()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("31 use cases in the catalog"))
        .stdout(predicate::str::contains("By category:"))
        .stdout(predicate::str::contains("Sources:"));
}

#[test]
fn stats_json_structure() {
    let json = json_output(&["stats"]);
    assert_eq!(json["total"], 31);
    assert!(json["by_category"].is_array());
    assert!(json["by_complexity"].is_array());
    assert!(json["sources"].is_array());
    assert!(json.get("index").is_none());

    let category_sum: u64 = json["by_category"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["count"].as_u64().unwrap())
        .sum();
    assert_eq!(category_sum, 31);
}

#[test]
fn stats_detailed_includes_index() {
    let json = json_output(&["stats", "--detailed"]);
    let index = &json["index"];
    assert!(index["keyword_count"].as_u64().unwrap() > 0);
    let top = index["top_keywords"].as_array().unwrap();
    assert!(!top.is_empty());
    assert!(top[0]["records"].as_u64().unwrap() >= top[top.len() - 1]["records"].as_u64().unwrap());
}

#[test]
fn stats_keyword_lookup() {
    let json = json_output(&["stats", "--keyword", "Budget"]);
    let lookup = &json["keyword_lookup"];
    // Lookups are lowercased before hitting the index.
    assert_eq!(lookup["keyword"], "budget");
    let ids: Vec<&str> = lookup["ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(ids.contains(&"budget-001"));
}

#[test]
fn stats_keyword_lookup_unknown() {
    fpa()
        .args(["stats", "--keyword", "zzzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records indexed under 'zzzzz'"));
}

#[test]
fn stats_detailed_human_output() {
    fpa()
        .args(["stats", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search index:"))
        .stdout(predicate::str::contains("distinct keywords"));
}
