// ABOUTME: Tests for YAML metric declaration loading and load-time category validation
// ABOUTME: Unknown category identifiers and missing required fields must fail at load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use oura_exporter::config::{CategoryKind, MetricsConfig};
use oura_exporter::errors::ConfigError;
use std::io::Write;

#[test]
fn test_parses_categories_in_declaration_order() {
    let yaml = r"
categories:
  - name: daily_sleep
    prefix: oura_
    metrics:
      - name: score
  - name: daily_spo2
    prefix: oura_spo2_
    metrics:
      - name: average
        iterator: spo2_percentage.average
";
    let config = MetricsConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.categories.len(), 2);
    assert_eq!(config.categories[0].name, CategoryKind::DailySleep);
    assert_eq!(config.categories[1].name, CategoryKind::DailySpo2);
    assert_eq!(config.categories[0].metrics[0].iterator(), "score");
    assert_eq!(
        config.categories[1].metrics[0].iterator(),
        "spo2_percentage.average"
    );
}

#[test]
fn test_unknown_category_fails_at_load() {
    let yaml = r"
categories:
  - name: daily_mood
    prefix: oura_
    metrics:
      - name: score
";
    assert!(matches!(
        MetricsConfig::from_yaml(yaml),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_metric_name_fails_at_load() {
    let yaml = r"
categories:
  - name: daily_sleep
    prefix: oura_
    metrics:
      - iterator: score
";
    assert!(MetricsConfig::from_yaml(yaml).is_err());
}

#[test]
fn test_missing_prefix_fails_at_load() {
    let yaml = r"
categories:
  - name: daily_sleep
    metrics:
      - name: score
";
    assert!(MetricsConfig::from_yaml(yaml).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "categories:\n  - name: heartrate\n    prefix: oura_heartrate_\n    metrics:\n      - name: bpm\n"
    )
    .unwrap();

    let config = MetricsConfig::load(file.path()).unwrap();
    assert_eq!(config.categories.len(), 1);
    assert_eq!(config.categories[0].name, CategoryKind::Heartrate);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = MetricsConfig::load(std::path::Path::new("/nonexistent/metrics.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_default_shipped_config_is_valid() {
    let config = MetricsConfig::load(std::path::Path::new("config/metrics.yml")).unwrap();
    assert!(!config.categories.is_empty());
    for category in &config.categories {
        assert!(!category.prefix.is_empty());
        assert!(!category.metrics.is_empty());
    }
}
