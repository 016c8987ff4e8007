// ABOUTME: Configuration module grouping environment settings and metric declarations
// ABOUTME: Environment config is read once at startup, metric declarations once from YAML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

/// Environment-driven process configuration
pub mod environment;
/// YAML metric declarations (categories and metric definitions)
pub mod metrics;

pub use environment::{LogLevel, ServerConfig};
pub use metrics::{Category, CategoryKind, MetricDefinition, MetricsConfig};
