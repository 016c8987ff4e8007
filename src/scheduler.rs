// ABOUTME: Polling control loop: windows, category dispatch, latest-record selection, publication
// ABOUTME: Per-category and per-metric failures are isolated so one bad fetch or field never aborts a cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

//! The polling scheduler.
//!
//! Each cycle walks the declared categories in order, fetches the matching
//! upstream collection, selects the newest record, and publishes every
//! declared metric from it. Failure isolation is strict: a fetch error or
//! empty result skips that category for the cycle, and a resolution or
//! conversion error skips that one metric. Nothing below the per-metric
//! step escapes past the category, and nothing below the per-category step
//! escapes past the cycle.

use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::config::{Category, CategoryKind, MetricDefinition, MetricsConfig};
use crate::errors::{MetricError, ProviderError};
use crate::models::ApiCollection;
use crate::providers::OuraApi;
use crate::registry::MetricRegistry;
use crate::resolver;

/// Fixed gap between the end of one cycle and the start of the next
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Days of lookback for daily aggregate categories
const DAILY_LOOKBACK_DAYS: i64 = 7;

/// The two lookback windows used by category dispatch, computed once per
/// cycle in the configured timezone.
#[derive(Debug, Clone)]
pub struct PollWindows {
    /// Today's date in the configured timezone
    pub today: NaiveDate,
    /// Seven days before today, date precision
    pub start_date: NaiveDate,
    /// The current instant
    pub now: DateTime<Utc>,
    /// Twenty-four hours before now, timestamp precision
    pub day_ago: DateTime<Utc>,
}

impl PollWindows {
    /// Compute both windows for the current instant
    pub fn compute(timezone: Tz) -> Self {
        let local = Utc::now().with_timezone(&timezone);
        let today = local.date_naive();
        let start_date = (local - ChronoDuration::days(DAILY_LOOKBACK_DAYS)).date_naive();
        let now = local.with_timezone(&Utc);
        let day_ago = now - ChronoDuration::days(1);
        Self {
            today,
            start_date,
            now,
            day_ago,
        }
    }
}

/// Outcome of one category fetch after latest-record selection
enum CategorySnapshot {
    /// Fetch succeeded but the window held no records
    Empty,
    /// The newest record from the returned page
    Current {
        record: Value,
        count: usize,
    },
}

/// Drives the poll cycle against an `OuraApi` implementation.
///
/// Owns the metric registry for writes; the scrape endpoint holds its own
/// handle to the underlying Prometheus registry for reads.
pub struct PollingScheduler {
    api: Arc<dyn OuraApi>,
    config: Arc<MetricsConfig>,
    registry: MetricRegistry,
    label_values: Vec<String>,
    timezone: Tz,
}

impl PollingScheduler {
    /// Create a scheduler. `account_email` is the label value applied to
    /// every gauge, resolved once at startup from the personal info fetch.
    pub fn new(
        api: Arc<dyn OuraApi>,
        config: Arc<MetricsConfig>,
        registry: MetricRegistry,
        account_email: String,
        timezone: Tz,
    ) -> Self {
        Self {
            api,
            config,
            registry,
            label_values: vec![account_email],
            timezone,
        }
    }

    /// Run cycles forever. The sleep follows the cycle, so a slow cycle
    /// shifts the schedule instead of overlapping the next one.
    pub async fn run(mut self) {
        loop {
            self.run_cycle().await;
            info!(handles = self.registry.len(), "metric gathering cycle complete");
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Process every declared category once, in declaration order
    pub async fn run_cycle(&mut self) {
        let windows = PollWindows::compute(self.timezone);
        let config = Arc::clone(&self.config);
        for category in &config.categories {
            self.process_category(category, &windows).await;
        }
    }

    async fn process_category(&mut self, category: &Category, windows: &PollWindows) {
        debug!(category = %category.name, "gathering category data");

        let snapshot = match self.fetch_latest(category.name, windows).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(category = %category.name, error = %e, "category fetch failed, skipping this cycle");
                return;
            }
        };

        let record = match snapshot {
            CategorySnapshot::Empty => {
                warn!(
                    category = %category.name,
                    start_date = %windows.start_date,
                    end_date = %windows.today,
                    "no records found for window, skipping this cycle"
                );
                return;
            }
            CategorySnapshot::Current { record, count } => {
                info!(
                    category = %category.name,
                    entries = count,
                    latest = observed_at(&record),
                    "selected latest record"
                );
                record
            }
        };

        for def in &category.metrics {
            if let Err(e) = self.publish_metric(category, def, &record) {
                error!(
                    category = %category.name,
                    metric = %def.name,
                    error = %e,
                    "failed to publish metric"
                );
            }
        }
    }

    /// Dispatch the category to its upstream operation and select the
    /// current record. The match is exhaustive over the closed category
    /// set, so there is no unrecognized-identifier path at runtime.
    async fn fetch_latest(
        &self,
        kind: CategoryKind,
        w: &PollWindows,
    ) -> Result<CategorySnapshot, ProviderError> {
        Ok(match kind {
            CategoryKind::DailyActivity => {
                snapshot(self.api.daily_activity(w.start_date, w.today).await?)?
            }
            CategoryKind::DailyReadiness => {
                snapshot(self.api.daily_readiness(w.start_date, w.today).await?)?
            }
            CategoryKind::DailyResilience => {
                snapshot(self.api.daily_resilience(w.start_date, w.today).await?)?
            }
            CategoryKind::DailySleep => {
                snapshot(self.api.daily_sleep(w.start_date, w.today).await?)?
            }
            CategoryKind::DailySpo2 => {
                snapshot(self.api.daily_spo2(w.start_date, w.today).await?)?
            }
            CategoryKind::DailyStress => {
                snapshot(self.api.daily_stress(w.start_date, w.today).await?)?
            }
            CategoryKind::SleepTime => {
                snapshot(self.api.sleep_time(w.start_date, w.today).await?)?
            }
            CategoryKind::Vo2Max => snapshot(self.api.vo2_max(w.start_date, w.today).await?)?,
            CategoryKind::Heartrate => snapshot(self.api.heartrate(w.day_ago, w.now).await?)?,
            CategoryKind::RestModePeriod => {
                snapshot(self.api.rest_mode_periods(w.day_ago, w.now).await?)?
            }
            CategoryKind::Session => snapshot(self.api.sessions(w.day_ago, w.now).await?)?,
            CategoryKind::Sleep => snapshot(self.api.sleep_periods(w.day_ago, w.now).await?)?,
            CategoryKind::Workout => snapshot(self.api.workouts(w.day_ago, w.now).await?)?,
            CategoryKind::EnhancedTag => {
                snapshot(self.api.enhanced_tags(w.day_ago, w.now).await?)?
            }
            CategoryKind::RingConfiguration => snapshot(self.api.ring_configuration().await?)?,
            CategoryKind::PersonalInfo => {
                let info = self.api.personal_info().await?;
                CategorySnapshot::Current {
                    record: serde_json::to_value(&info)?,
                    count: 1,
                }
            }
        })
    }

    /// Resolve one declared field and set its gauge. An absent field is
    /// the expected case and only logged at debug; resolution, conversion,
    /// and registration errors propagate to the per-metric isolation in
    /// `process_category`.
    fn publish_metric(
        &mut self,
        category: &Category,
        def: &MetricDefinition,
        record: &Value,
    ) -> Result<(), MetricError> {
        let full_name = format!("{}{}", category.prefix, def.name);
        match resolver::resolve(record, def.iterator())? {
            None => {
                debug!(metric = %full_name, "no value this cycle, skipping");
            }
            Some(value) => {
                debug!(metric = %full_name, %value, "publishing");
                let gauge = self.registry.get_or_create(category, def)?;
                let labels: Vec<&str> = self.label_values.iter().map(String::as_str).collect();
                self.registry.observe(&gauge, &labels, &def.name, &value)?;
            }
        }
        Ok(())
    }
}

/// Select the newest record from a fetched page and project it for field
/// resolution. Records arrive oldest first, so the newest is the last.
fn snapshot<T: Serialize>(
    mut collection: ApiCollection<T>,
) -> Result<CategorySnapshot, serde_json::Error> {
    let count = collection.data.len();
    match collection.data.pop() {
        None => Ok(CategorySnapshot::Empty),
        Some(latest) => Ok(CategorySnapshot::Current {
            record: serde_json::to_value(&latest)?,
            count,
        }),
    }
}

/// Best-effort marker of when the selected record was observed, for logs
fn observed_at(record: &Value) -> &str {
    record
        .get("day")
        .and_then(Value::as_str)
        .or_else(|| record.get("timestamp").and_then(Value::as_str))
        .unwrap_or("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_selects_last_record() {
        let collection = ApiCollection {
            data: vec![json!({"score": 1}), json!({"score": 2})],
            next_token: None,
        };
        match snapshot(collection).unwrap() {
            CategorySnapshot::Current { record, count } => {
                assert_eq!(count, 2);
                assert_eq!(record["score"], json!(2));
            }
            CategorySnapshot::Empty => panic!("expected a record"),
        }
    }

    #[test]
    fn test_snapshot_empty_page() {
        let collection: ApiCollection<serde_json::Value> = ApiCollection {
            data: vec![],
            next_token: None,
        };
        assert!(matches!(
            snapshot(collection).unwrap(),
            CategorySnapshot::Empty
        ));
    }

    #[test]
    fn test_observed_at_prefers_day() {
        let record = json!({"day": "2025-08-27", "timestamp": "2025-08-27T08:00:00+00:00"});
        assert_eq!(observed_at(&record), "2025-08-27");
        let record = json!({"timestamp": "2025-08-27T08:00:00+00:00"});
        assert_eq!(observed_at(&record), "2025-08-27T08:00:00+00:00");
    }
}
