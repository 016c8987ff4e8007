// ABOUTME: Detailed sleep period records with HR/HRV series and readiness sub-object
// ABOUTME: Also the recommended sleep time records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sampled series attached to a sleep period (heart rate or HRV)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepSampleSeries {
    /// Sampling interval in seconds
    pub interval: f64,
    pub items: Vec<Option<f64>>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Readiness contributors computed for a single sleep period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepReadinessContributors {
    pub activity_balance: Option<i64>,
    pub body_temperature: Option<i64>,
    pub hrv_balance: Option<i64>,
    pub previous_day_activity: Option<i64>,
    pub previous_night: Option<i64>,
    pub recovery_index: Option<i64>,
    pub resting_heart_rate: Option<i64>,
    pub sleep_balance: Option<i64>,
}

/// Readiness summary computed for a single sleep period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepReadiness {
    pub contributors: Option<SleepReadinessContributors>,
    pub score: Option<i64>,
    pub temperature_deviation: Option<f64>,
    pub temperature_trend_deviation: Option<f64>,
}

/// One detailed sleep period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepPeriod {
    pub id: String,
    pub average_breath: Option<f64>,
    pub average_heart_rate: Option<f64>,
    pub average_hrv: Option<i64>,
    pub awake_time: Option<i64>,
    pub bedtime_end: Option<DateTime<FixedOffset>>,
    pub bedtime_start: Option<DateTime<FixedOffset>>,
    pub day: Option<NaiveDate>,
    pub deep_sleep_duration: Option<i64>,
    pub efficiency: Option<i64>,
    pub heart_rate: Option<SleepSampleSeries>,
    pub hrv: Option<SleepSampleSeries>,
    pub latency: Option<i64>,
    pub light_sleep_duration: Option<i64>,
    pub low_battery_alert: Option<bool>,
    pub lowest_heart_rate: Option<i64>,
    /// Movement class per 30-second slot, encoded as a digit string
    pub movement_30_sec: Option<String>,
    pub period: Option<i64>,
    pub readiness: Option<SleepReadiness>,
    pub readiness_score_delta: Option<f64>,
    pub rem_sleep_duration: Option<i64>,
    pub restless_periods: Option<i64>,
    pub ring_id: Option<String>,
    /// Sleep phase per 5-minute slot, encoded as a digit string
    pub sleep_phase_5_min: Option<String>,
    pub sleep_score_delta: Option<f64>,
    pub sleep_algorithm_version: Option<String>,
    pub sleep_analysis_reason: Option<String>,
    pub time_in_bed: Option<i64>,
    pub total_sleep_duration: Option<i64>,
    #[serde(rename = "type")]
    pub sleep_type: Option<String>,
}

/// Recommended bedtime window for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepTime {
    pub id: Option<String>,
    pub bedtime_end_delta: Option<i64>,
    pub bedtime_start_delta: Option<i64>,
    pub day: Option<NaiveDate>,
    pub ideal_bedtime: Option<String>,
    pub is_longest: Option<bool>,
    pub midpoint_time: Option<i64>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}
