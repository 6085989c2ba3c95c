//! Tests for loading desired labels.

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_pascal_case_keys() {
    let content = r#"[
        {"Name": "Bug", "Color": "ff0000", "Description": "legacy"},
        {"Name": "feature", "Color": "00ff00", "Description": "new"}
    ]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");

    assert_eq!(
        labels,
        vec![
            DesiredLabel::new("Bug", "ff0000", "legacy"),
            DesiredLabel::new("feature", "00ff00", "new"),
        ]
    );
}

#[test]
fn test_parse_keys_case_insensitively() {
    let content = r#"[{"name": "bug", "COLOR": "f00", "description": "lower"}]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");

    assert_eq!(labels, vec![DesiredLabel::new("bug", "f00", "lower")]);
}

#[test]
fn test_missing_fields_become_empty() {
    let labels = parse_desired_labels(r#"[{"Name": "x"}]"#).expect("Failed to parse labels");

    assert_eq!(labels, vec![DesiredLabel::new("x", "", "")]);
}

#[test]
fn test_malformed_entries_become_zero_valued() {
    let content = r#"[42, {"Name": 7, "Color": "abc123", "Extra": true}, "text"]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");

    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0], DesiredLabel::default());
    assert_eq!(labels[1], DesiredLabel::new("", "abc123", ""));
    assert_eq!(labels[2], DesiredLabel::default());
}

#[test]
fn test_last_matching_key_wins() {
    let labels =
        parse_desired_labels(r#"[{"name": "a", "Name": "b"}]"#).expect("Failed to parse labels");

    assert_eq!(labels[0].name, "b");
}

#[test]
fn test_non_string_value_keeps_earlier_value() {
    let content = r#"[{"Name": "x", "name": 5, "Color": "abc", "COLOR": null}]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");

    assert_eq!(labels, vec![DesiredLabel::new("x", "abc", "")]);
}

#[test]
fn test_nested_values_are_skipped() {
    let content = r#"[{"Name": "x", "Description": {"text": "nested"}}, [1, [2]]]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");

    assert_eq!(
        labels,
        vec![DesiredLabel::new("x", "", ""), DesiredLabel::default()]
    );
}

#[test]
fn test_declared_order_is_preserved() {
    let content = r#"[{"Name": "c"}, {"Name": "a"}, {"Name": "b"}, {"Name": "a"}]"#;

    let labels = parse_desired_labels(content).expect("Failed to parse labels");
    let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(names, vec!["c", "a", "b", "a"]);
}

#[test]
fn test_empty_array_yields_no_labels() {
    let labels = parse_desired_labels("[]").expect("Failed to parse labels");

    assert!(labels.is_empty());
}

#[test]
fn test_empty_document_is_a_parse_error() {
    let result = parse_desired_labels("");

    assert!(matches!(result, Err(Error::ParseLabels(_))));
}

#[test]
fn test_non_array_document_is_a_parse_error() {
    let result = parse_desired_labels(r#"{"Name": "bug"}"#);

    assert!(matches!(result, Err(Error::ParseLabels(_))));
}

#[test]
fn test_load_desired_labels_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let labels_path = temp_dir.path().join("labels.json");
    let declared = vec![
        DesiredLabel::new("bug", "d73a4a", "Something isn't working"),
        DesiredLabel::new("good first issue", "7057ff", ""),
    ];
    fs::write(&labels_path, serde_json::to_string(&declared).unwrap())
        .expect("Failed to write label file");

    let labels = load_desired_labels(&labels_path).expect("Failed to load labels");

    assert_eq!(labels, declared);
}

#[test]
fn test_load_desired_labels_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let labels_path = temp_dir.path().join("missing.json");

    let result = load_desired_labels(&labels_path);

    match result {
        Err(Error::LoadFile { path, .. }) => assert_eq!(path, labels_path),
        other => panic!("Expected LoadFile error, got {other:?}"),
    }
}

#[test]
fn test_serialized_labels_use_file_key_names() {
    let value = serde_json::to_value(DesiredLabel::new("bug", "f00", "d")).unwrap();

    assert_eq!(value["Name"], "bug");
    assert_eq!(value["Color"], "f00");
    assert_eq!(value["Description"], "d");
}
