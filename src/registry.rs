// ABOUTME: Lazily materialized gauge handles keyed by (category, metric name)
// ABOUTME: Registers each gauge with the shared Prometheus registry exactly once, never deregisters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use prometheus::{GaugeVec, Opts, Registry};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{Category, MetricDefinition};
use crate::errors::MetricError;

/// Label applied to every published gauge, valued with the account email
pub const ACCOUNT_LABEL: &str = "email";

/// Owner of all materialized gauge handles.
///
/// Handles are created on first successful observation and cached for the
/// life of the process. The underlying `prometheus::Registry` is shared
/// with the scrape endpoint; gauge values are atomic, so a concurrent
/// scrape observes either the previous or the new value, never a torn one.
pub struct MetricRegistry {
    registry: Arc<Registry>,
    gauges: HashMap<(String, String), GaugeVec>,
}

impl MetricRegistry {
    /// Create a registry backed by the shared Prometheus registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            gauges: HashMap::new(),
        }
    }

    /// Return the cached gauge for (category, metric), creating and
    /// registering it on first use. Registration happens at most once per
    /// pair; repeated calls return clones of the same underlying handle.
    pub fn get_or_create(
        &mut self,
        category: &Category,
        def: &MetricDefinition,
    ) -> Result<GaugeVec, MetricError> {
        let key = (category.name.to_string(), def.name.clone());
        if let Some(gauge) = self.gauges.get(&key) {
            return Ok(gauge.clone());
        }

        let metric_name = format!("{}{}", category.prefix, def.name);
        let help = format!("Oura {} {}", category.name, def.name);
        let gauge = GaugeVec::new(Opts::new(metric_name, help), &[ACCOUNT_LABEL])?;
        self.registry.register(Box::new(gauge.clone()))?;
        self.gauges.insert(key, gauge.clone());
        Ok(gauge)
    }

    /// Set the gauge's current value for the given label values,
    /// overwriting whatever was there. Booleans coerce to 0/1; any
    /// non-numeric value is a conversion error for the caller to isolate.
    pub fn observe(
        &self,
        gauge: &GaugeVec,
        label_values: &[&str],
        metric_name: &str,
        value: &Value,
    ) -> Result<(), MetricError> {
        let value = gauge_value(metric_name, value)?;
        gauge.with_label_values(label_values).set(value);
        Ok(())
    }

    /// Number of materialized handles, for logging
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    /// Whether no handle has been materialized yet
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}

/// Convert a resolved JSON value to a gauge value
fn gauge_value(metric_name: &str, value: &Value) -> Result<f64, MetricError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| MetricError::NotNumeric {
            metric: metric_name.to_owned(),
            value: value.clone(),
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(MetricError::NotNumeric {
            metric: metric_name.to_owned(),
            value: value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(gauge_value("m", &json!(true)).unwrap(), 1.0);
        assert_eq!(gauge_value("m", &json!(false)).unwrap(), 0.0);
    }

    #[test]
    fn test_string_is_not_publishable() {
        assert!(matches!(
            gauge_value("firmware", &json!("2.9.1")),
            Err(MetricError::NotNumeric { .. })
        ));
    }
}
