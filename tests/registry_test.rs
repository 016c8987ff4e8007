// ABOUTME: Tests for lazy gauge materialization, idempotent registration, and value conversion
// ABOUTME: Asserts against the shared Prometheus registry the scrape endpoint reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use oura_exporter::config::{Category, CategoryKind, MetricDefinition};
use oura_exporter::errors::MetricError;
use oura_exporter::registry::MetricRegistry;
use serde_json::json;
use std::sync::Arc;

fn daily_sleep_category() -> Category {
    Category {
        name: CategoryKind::DailySleep,
        prefix: "oura_".to_owned(),
        metrics: vec![],
    }
}

fn score_metric() -> MetricDefinition {
    MetricDefinition {
        name: "score".to_owned(),
        iterator: None,
    }
}

#[test]
fn test_get_or_create_registers_once() {
    let shared = Arc::new(prometheus::Registry::new());
    let mut registry = MetricRegistry::new(Arc::clone(&shared));
    let category = daily_sleep_category();
    let def = score_metric();

    let first = registry.get_or_create(&category, &def).unwrap();
    let second = registry.get_or_create(&category, &def).unwrap();

    // A second registration of the same name would fail; the cached
    // handle must be returned instead.
    first.with_label_values(&["user@example.com"]).set(82.0);
    assert_eq!(
        second.with_label_values(&["user@example.com"]).get(),
        82.0
    );

    let families = shared.gather();
    assert_eq!(families.len(), 1);
    assert_eq!(families[0].get_name(), "oura_score");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_same_metric_name_in_different_categories() {
    let shared = Arc::new(prometheus::Registry::new());
    let mut registry = MetricRegistry::new(Arc::clone(&shared));
    let def = score_metric();

    let sleep = daily_sleep_category();
    let readiness = Category {
        name: CategoryKind::DailyReadiness,
        prefix: "oura_readiness_".to_owned(),
        metrics: vec![],
    };

    registry.get_or_create(&sleep, &def).unwrap();
    registry.get_or_create(&readiness, &def).unwrap();

    assert_eq!(shared.gather().len(), 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_observe_overwrites_value() {
    let shared = Arc::new(prometheus::Registry::new());
    let mut registry = MetricRegistry::new(shared);
    let category = daily_sleep_category();
    let def = score_metric();
    let gauge = registry.get_or_create(&category, &def).unwrap();

    registry
        .observe(&gauge, &["user@example.com"], "score", &json!(70))
        .unwrap();
    registry
        .observe(&gauge, &["user@example.com"], "score", &json!(82))
        .unwrap();

    assert_eq!(gauge.with_label_values(&["user@example.com"]).get(), 82.0);
}

#[test]
fn test_boolean_coerces_to_zero_or_one() {
    let shared = Arc::new(prometheus::Registry::new());
    let mut registry = MetricRegistry::new(shared);
    let category = Category {
        name: CategoryKind::SleepTime,
        prefix: "oura_sleep_time_".to_owned(),
        metrics: vec![],
    };
    let def = MetricDefinition {
        name: "is_longest".to_owned(),
        iterator: None,
    };
    let gauge = registry.get_or_create(&category, &def).unwrap();

    registry
        .observe(&gauge, &["user@example.com"], "is_longest", &json!(true))
        .unwrap();
    assert_eq!(gauge.with_label_values(&["user@example.com"]).get(), 1.0);

    registry
        .observe(&gauge, &["user@example.com"], "is_longest", &json!(false))
        .unwrap();
    assert_eq!(gauge.with_label_values(&["user@example.com"]).get(), 0.0);
}

#[test]
fn test_non_numeric_value_is_conversion_error() {
    let shared = Arc::new(prometheus::Registry::new());
    let mut registry = MetricRegistry::new(shared);
    let category = daily_sleep_category();
    let def = score_metric();
    let gauge = registry.get_or_create(&category, &def).unwrap();

    let err = registry
        .observe(&gauge, &["user@example.com"], "score", &json!("excellent"))
        .unwrap_err();
    assert!(matches!(err, MetricError::NotNumeric { .. }));
}
