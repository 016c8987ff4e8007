// ABOUTME: Account-scoped records: personal info singleton and ring configuration
// ABOUTME: Personal info doubles as the credential validity check and label source at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The account holder's profile. Unlike every other category this is a
/// single record, not a collection; its email is the label value applied
/// to every published gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub id: Option<String>,
    pub age: Option<i64>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in meters
    pub height: Option<f64>,
    pub biological_sex: Option<String>,
    pub email: String,
}

/// Configuration and firmware state of one ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfiguration {
    pub id: Option<String>,
    pub battery_level: Option<i64>,
    pub device_type: Option<String>,
    pub firmware_version: Option<String>,
    pub hardware_revision: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}
