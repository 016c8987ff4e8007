// ABOUTME: Error types for configuration loading, Oura API calls, field resolution, and publication
// ABOUTME: One thiserror enum per concern so callers can match on the failure class they isolate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the metric declarations.
///
/// All of these are fatal at startup: without a valid configuration no
/// metric can ever be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read metrics config {path}: {source}")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration document is not valid YAML or misses required fields.
    /// Unknown category names land here too: they fail enum deserialization.
    #[error("invalid metrics config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors from the upstream Oura API client
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level failure (connect, timeout, TLS, body read)
    #[error("Oura API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream responded with a non-success status
    #[error("Oura API returned {status} for {endpoint}")]
    ApiStatus {
        /// Endpoint path that was called
        endpoint: String,
        /// HTTP status code returned
        status: http::StatusCode,
    },

    /// Projecting a fetched record for field resolution failed
    #[error("failed to project record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from dotted-path field resolution.
///
/// These indicate a declaration/schema mismatch, not data absence: a null
/// or missing value along the path resolves to `None`, never to an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A path segment names a field the record's schema does not have
    #[error("field '{segment}' does not exist on record (path '{path}')")]
    UnknownField {
        /// Full dotted path from the metric declaration
        path: String,
        /// Segment that failed to resolve
        segment: String,
    },

    /// A path segment was applied to a non-object value
    #[error("cannot descend into non-object value at '{segment}' (path '{path}')")]
    NotAnObject {
        /// Full dotted path from the metric declaration
        path: String,
        /// Segment that was applied to a scalar or array
        segment: String,
    },
}

/// Errors from the per-metric publication step
#[derive(Debug, Error)]
pub enum MetricError {
    /// Field resolution hit a schema mismatch
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Resolved value is neither numeric nor boolean
    #[error("value {value} for metric '{metric}' is not publishable as a gauge")]
    NotNumeric {
        /// Metric name from the declaration
        metric: String,
        /// The offending JSON value
        value: serde_json::Value,
    },

    /// Gauge registration with the shared registry failed
    #[error("metric registration failed: {0}")]
    Register(#[from] prometheus::Error),
}
