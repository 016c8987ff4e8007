// ABOUTME: Tests for null-tolerant dotted-path resolution across arbitrary nesting depth
// ABOUTME: Validates the absent-vs-schema-error distinction the scheduler relies on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use oura_exporter::errors::ResolveError;
use oura_exporter::resolver::resolve;
use serde_json::json;

#[test]
fn test_direct_field_lookup() {
    let record = json!({"score": 82, "day": "2025-08-27"});
    assert_eq!(resolve(&record, "score").unwrap(), Some(json!(82)));
}

#[test]
fn test_direct_null_field_is_absent() {
    let record = json!({"score": null});
    assert_eq!(resolve(&record, "score").unwrap(), None);
}

#[test]
fn test_nested_lookup() {
    let record = json!({"spo2_percentage": {"average": 97.5}});
    assert_eq!(
        resolve(&record, "spo2_percentage.average").unwrap(),
        Some(json!(97.5))
    );
}

#[test]
fn test_null_intermediate_is_absent() {
    let record = json!({"spo2_percentage": null});
    assert_eq!(resolve(&record, "spo2_percentage.average").unwrap(), None);
}

#[test]
fn test_null_leaf_is_absent() {
    let record = json!({"spo2_percentage": {"average": null}});
    assert_eq!(resolve(&record, "spo2_percentage.average").unwrap(), None);
}

#[test]
fn test_null_at_depth_three() {
    // Null anywhere along the chain short-circuits, whatever the depth.
    let record = json!({"a": {"b": null}});
    assert_eq!(resolve(&record, "a.b.c.d").unwrap(), None);

    let record = json!({"a": null});
    assert_eq!(resolve(&record, "a.b.c.d").unwrap(), None);
}

#[test]
fn test_unknown_field_is_schema_error() {
    let record = json!({"score": 82});
    let err = resolve(&record, "scrore").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownField { .. }));
}

#[test]
fn test_unknown_nested_field_is_schema_error() {
    let record = json!({"contributors": {"deep_sleep": 70}});
    let err = resolve(&record, "contributors.deep_slep").unwrap_err();
    match err {
        ResolveError::UnknownField { path, segment } => {
            assert_eq!(path, "contributors.deep_slep");
            assert_eq!(segment, "deep_slep");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_descending_into_scalar_is_schema_error() {
    let record = json!({"score": 82});
    let err = resolve(&record, "score.average").unwrap_err();
    assert!(matches!(err, ResolveError::NotAnObject { .. }));
}

#[test]
fn test_boolean_and_string_values_pass_through() {
    let record = json!({"is_longest": true, "ideal_bedtime": "22:30"});
    assert_eq!(resolve(&record, "is_longest").unwrap(), Some(json!(true)));
    assert_eq!(
        resolve(&record, "ideal_bedtime").unwrap(),
        Some(json!("22:30"))
    );
}
