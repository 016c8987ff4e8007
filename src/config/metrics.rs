// ABOUTME: Metric declaration model loaded from YAML: categories, prefixes, and field paths
// ABOUTME: Category identifiers deserialize into a closed enum so unknown names fail at load time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::errors::ConfigError;

/// Closed set of Oura data categories this exporter can poll.
///
/// The YAML `name:` field deserializes directly into this enum, so a
/// misspelled or unsupported category is a load-time error rather than a
/// silent no-op during polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    DailyActivity,
    DailyReadiness,
    DailyResilience,
    DailySleep,
    DailySpo2,
    DailyStress,
    EnhancedTag,
    Heartrate,
    PersonalInfo,
    RestModePeriod,
    RingConfiguration,
    Session,
    Sleep,
    SleepTime,
    Vo2Max,
    Workout,
}

impl CategoryKind {
    /// The snake_case identifier as it appears in configuration and logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyActivity => "daily_activity",
            Self::DailyReadiness => "daily_readiness",
            Self::DailyResilience => "daily_resilience",
            Self::DailySleep => "daily_sleep",
            Self::DailySpo2 => "daily_spo2",
            Self::DailyStress => "daily_stress",
            Self::EnhancedTag => "enhanced_tag",
            Self::Heartrate => "heartrate",
            Self::PersonalInfo => "personal_info",
            Self::RestModePeriod => "rest_mode_period",
            Self::RingConfiguration => "ring_configuration",
            Self::Session => "session",
            Self::Sleep => "sleep",
            Self::SleepTime => "sleep_time",
            Self::Vo2Max => "vo2_max",
            Self::Workout => "workout",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration of one field to publish as a gauge
#[derive(Debug, Clone, Deserialize)]
pub struct MetricDefinition {
    /// Metric name, appended to the category prefix
    pub name: String,
    /// Dotted path into the record; defaults to `name` when omitted
    #[serde(default)]
    pub iterator: Option<String>,
}

impl MetricDefinition {
    /// The field path to resolve against the current record
    pub fn iterator(&self) -> &str {
        self.iterator.as_deref().unwrap_or(&self.name)
    }
}

/// A named group of metrics sharing one upstream category and name prefix
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Category identifier selecting the upstream operation
    pub name: CategoryKind,
    /// Prefix prepended to every metric name in this category
    pub prefix: String,
    /// Declared metrics, published in declaration order
    pub metrics: Vec<MetricDefinition>,
}

/// Root of the metric declarations, immutable after load
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Categories polled each cycle, in declaration order
    pub categories: Vec<Category>,
}

impl MetricsConfig {
    /// Load declarations from a YAML file. Any failure here is fatal at
    /// startup since no metric can be produced without the declarations.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Parse declarations from a YAML string
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterator_defaults_to_name() {
        let def = MetricDefinition {
            name: "score".to_owned(),
            iterator: None,
        };
        assert_eq!(def.iterator(), "score");
    }

    #[test]
    fn test_iterator_override() {
        let def = MetricDefinition {
            name: "spo2_average".to_owned(),
            iterator: Some("spo2_percentage.average".to_owned()),
        };
        assert_eq!(def.iterator(), "spo2_percentage.average");
    }

    #[test]
    fn test_category_kind_round_trip() {
        let kind: CategoryKind = serde_yaml::from_str("daily_activity").unwrap();
        assert_eq!(kind, CategoryKind::DailyActivity);
        assert_eq!(kind.as_str(), "daily_activity");
    }
}
