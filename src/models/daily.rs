// ABOUTME: Daily aggregate records: activity, readiness, resilience, sleep, SpO2, stress, VO2 max
// ABOUTME: All keyed by a calendar day in the account's timezone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Contributor scores feeding the daily activity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyActivityContributors {
    pub meet_daily_targets: Option<i64>,
    pub move_every_hour: Option<i64>,
    pub recovery_time: Option<i64>,
    pub stay_active: Option<i64>,
    pub training_frequency: Option<i64>,
    pub training_volume: Option<i64>,
}

/// MET sample series attached to a daily activity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMetSamples {
    /// Sampling interval in seconds
    pub interval: f64,
    pub items: Vec<Option<f64>>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// One day of activity aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyActivity {
    pub id: Option<String>,
    /// Activity class per 5-minute slot, encoded as a digit string
    pub class_5_min: Option<String>,
    pub score: Option<i64>,
    pub active_calories: Option<i64>,
    pub average_met_minutes: Option<f64>,
    pub contributors: Option<DailyActivityContributors>,
    pub equivalent_walking_distance: Option<i64>,
    pub high_activity_met_minutes: Option<i64>,
    pub high_activity_time: Option<i64>,
    pub inactivity_alerts: Option<i64>,
    pub low_activity_met_minutes: Option<i64>,
    pub low_activity_time: Option<i64>,
    pub medium_activity_met_minutes: Option<i64>,
    pub medium_activity_time: Option<i64>,
    pub met: Option<ActivityMetSamples>,
    pub meters_to_target: Option<i64>,
    pub non_wear_time: Option<i64>,
    pub resting_time: Option<i64>,
    pub sedentary_met_minutes: Option<i64>,
    pub sedentary_time: Option<i64>,
    pub steps: Option<i64>,
    pub target_calories: Option<i64>,
    pub target_meters: Option<i64>,
    pub total_calories: Option<i64>,
    pub day: NaiveDate,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Contributor scores feeding the daily readiness score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReadinessContributors {
    pub activity_balance: Option<i64>,
    pub body_temperature: Option<i64>,
    pub hrv_balance: Option<i64>,
    pub previous_day_activity: Option<i64>,
    pub previous_night: Option<i64>,
    pub recovery_index: Option<i64>,
    pub resting_heart_rate: Option<i64>,
    pub sleep_balance: Option<i64>,
}

/// One day of readiness aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReadiness {
    pub id: Option<String>,
    pub contributors: Option<DailyReadinessContributors>,
    pub day: NaiveDate,
    pub score: Option<i64>,
    pub temperature_deviation: Option<f64>,
    pub temperature_trend_deviation: Option<f64>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Contributor scores feeding the daily resilience level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResilienceContributors {
    pub sleep_recovery: Option<f64>,
    pub daytime_recovery: Option<f64>,
    pub stress: Option<f64>,
}

/// One day of resilience data. `level` is categorical and not publishable
/// as a gauge; only the contributor scores are metric candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResilience {
    pub id: Option<String>,
    pub contributors: Option<DailyResilienceContributors>,
    pub day: NaiveDate,
    pub level: Option<String>,
}

/// Contributor scores feeding the daily sleep score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySleepContributors {
    pub deep_sleep: Option<i64>,
    pub efficiency: Option<i64>,
    pub latency: Option<i64>,
    pub rem_sleep: Option<i64>,
    pub restfulness: Option<i64>,
    pub timing: Option<i64>,
    pub total_sleep: Option<i64>,
}

/// One day of sleep score aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySleep {
    pub id: Option<String>,
    pub contributors: Option<DailySleepContributors>,
    pub day: NaiveDate,
    pub score: Option<i64>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Nested SpO2 percentage aggregate; null for nights without SpO2 data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spo2Percentage {
    pub average: Option<f64>,
}

/// One day of blood oxygen saturation data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySpo2 {
    pub id: Option<String>,
    pub day: NaiveDate,
    pub spo2_percentage: Option<Spo2Percentage>,
}

/// One day of stress data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStress {
    pub id: Option<String>,
    pub day: NaiveDate,
    /// Seconds of high stress during the day
    pub stress_high: Option<i64>,
    /// Seconds of high recovery during the day
    pub recovery_high: Option<i64>,
    pub day_summary: Option<String>,
}

/// One VO2 max estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vo2Max {
    pub id: Option<String>,
    pub vo2_max: Option<f64>,
    pub day: NaiveDate,
    pub timestamp: Option<DateTime<FixedOffset>>,
}
