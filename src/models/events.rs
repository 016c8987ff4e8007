// ABOUTME: Event-window records: heart rate samples, rest mode periods, sessions, workouts, tags
// ABOUTME: Fetched with a 24-hour lookback window instead of the 7-day daily window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One heart rate sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub bpm: i64,
    /// Measurement context (awake, rest, sleep, session, workout)
    pub source: String,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// One rest mode period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestModePeriod {
    pub id: Option<String>,
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// One guided or unguided session (breathing, meditation, nap)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Option<String>,
    pub day: Option<NaiveDate>,
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    #[serde(rename = "type")]
    pub session_type: Option<String>,
    pub heart_rate: Option<HeartRateSample>,
    pub motion_count: Option<i64>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Heart rate segment within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutHeartRate {
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    pub heart_rate: Option<i64>,
}

/// Intensity segment within a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutIntensity {
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    pub met_value: Option<f64>,
}

/// One recorded workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: Option<String>,
    /// Activity type (walking, running, cycling, ...)
    pub activity: Option<String>,
    pub calories: Option<i64>,
    pub day: Option<NaiveDate>,
    pub distance: Option<i64>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    pub heart_rate: Option<Vec<WorkoutHeartRate>>,
    pub intensity: Option<Vec<WorkoutIntensity>>,
    pub max_heart_rate: Option<i64>,
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// One enhanced tag annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedTag {
    pub id: Option<String>,
    pub day: Option<NaiveDate>,
    pub start_datetime: Option<DateTime<FixedOffset>>,
    pub end_datetime: Option<DateTime<FixedOffset>>,
    pub tag_type_code: Option<i64>,
    pub text: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Free-form tag metadata, shape not fixed by the API
    pub metadata: Option<serde_json::Value>,
}
