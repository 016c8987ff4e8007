// ABOUTME: Oura v2 API response models with explicit optional typing at every nesting level
// ABOUTME: Shared ApiCollection envelope plus per-domain record modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

//! Response models for the Oura v2 user-collection endpoints.
//!
//! Every field the API may omit or null is an `Option`, so a partially
//! populated record deserializes cleanly and the field resolver can treat
//! null at any depth as "no value this cycle". None of these types use
//! `skip_serializing_if`: the resolver relies on declared-but-null fields
//! staying visible in the serialized projection.

use serde::{Deserialize, Serialize};

/// Account-scoped records: personal info and ring configuration
pub mod account;
/// Daily aggregate records: activity, readiness, resilience, sleep, SpO2, stress, VO2 max
pub mod daily;
/// Event-window records: heart rate, rest mode, sessions, workouts, tags
pub mod events;
/// Detailed sleep period and sleep time records
pub mod sleep;

pub use account::*;
pub use daily::*;
pub use events::*;
pub use sleep::*;

/// Standard Oura collection envelope: one page of records plus an opaque
/// continuation token. The exporter only consults the returned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCollection<T> {
    /// Records in upstream order, oldest first
    pub data: Vec<T>,
    /// Continuation token for the next page, if any
    pub next_token: Option<String>,
}
