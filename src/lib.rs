// ABOUTME: Prometheus exporter for Oura Ring wellness data
// ABOUTME: Configuration-driven metric collection engine plus the Oura v2 client and scrape endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

//! Polls the Oura Ring v2 API on a fixed cadence and republishes declared
//! response fields as Prometheus gauges.
//!
//! The metric surface is declared in YAML (categories of metric
//! definitions), extracted from the latest upstream record via
//! null-tolerant dotted-path resolution, and published through lazily
//! materialized gauge handles. The scrape endpoint serves the accumulated
//! state independently of the poll cycle.

/// Environment and YAML metric configuration
pub mod config;
/// Error types per concern
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Oura v2 API response models
pub mod models;
/// Upstream provider layer (HTTP client, OuraApi trait, Oura client)
pub mod providers;
/// Lazily materialized gauge handles over the shared Prometheus registry
pub mod registry;
/// Null-tolerant dotted-path field resolution
pub mod resolver;
/// HTTP scrape surface
pub mod routes;
/// The polling control loop
pub mod scheduler;

pub use config::{Category, CategoryKind, MetricDefinition, MetricsConfig, ServerConfig};
pub use errors::{ConfigError, MetricError, ProviderError, ResolveError};
pub use providers::{OuraApi, OuraClient};
pub use registry::{MetricRegistry, ACCOUNT_LABEL};
pub use scheduler::{PollWindows, PollingScheduler, POLL_INTERVAL};
