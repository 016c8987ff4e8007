// ABOUTME: Oura v2 API client: bearer-token REST calls, one operation per data category
// ABOUTME: The OuraApi trait is the dispatch seam between the scheduler and the upstream API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ProviderError;
use crate::models::{
    ApiCollection, DailyActivity, DailyReadiness, DailyResilience, DailySleep, DailySpo2,
    DailyStress, EnhancedTag, HeartRateSample, PersonalInfo, RestModePeriod, RingConfiguration,
    Session, SleepPeriod, SleepTime, Vo2Max, Workout,
};

use super::http_client::shared_client;

/// Base URL for the Oura v2 user-collection API
pub const OURA_API_BASE_URL: &str = "https://api.ouraring.com/v2/usercollection";

/// One fetch operation per Oura data category.
///
/// Daily aggregate categories take a date-precision window; event
/// categories take a timestamp-precision window. `personal_info` and
/// `ring_configuration` take no window at all.
#[async_trait]
pub trait OuraApi: Send + Sync {
    async fn personal_info(&self) -> Result<PersonalInfo, ProviderError>;

    async fn daily_activity(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyActivity>, ProviderError>;

    async fn daily_readiness(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyReadiness>, ProviderError>;

    async fn daily_resilience(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyResilience>, ProviderError>;

    async fn daily_sleep(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailySleep>, ProviderError>;

    async fn daily_spo2(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailySpo2>, ProviderError>;

    async fn daily_stress(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyStress>, ProviderError>;

    async fn sleep_time(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<SleepTime>, ProviderError>;

    async fn vo2_max(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<Vo2Max>, ProviderError>;

    async fn heartrate(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<HeartRateSample>, ProviderError>;

    async fn rest_mode_periods(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<RestModePeriod>, ProviderError>;

    async fn sessions(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<Session>, ProviderError>;

    async fn sleep_periods(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<SleepPeriod>, ProviderError>;

    async fn workouts(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<Workout>, ProviderError>;

    async fn enhanced_tags(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<EnhancedTag>, ProviderError>;

    async fn ring_configuration(&self) -> Result<ApiCollection<RingConfiguration>, ProviderError>;
}

/// Oura v2 REST client authenticated with a personal access token
pub struct OuraClient {
    access_token: String,
    base_url: String,
}

impl OuraClient {
    /// Create a client against the production Oura API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: OURA_API_BASE_URL.to_owned(),
        }
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(endpoint, "calling Oura API");

        let response = shared_client()
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::ApiStatus {
                endpoint: endpoint.to_owned(),
                status,
            });
        }

        Ok(response.json().await?)
    }

    fn date_window(start: NaiveDate, end: NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
        ]
    }

    // Event endpoints other than heartrate take date-precision parameters;
    // the timestamp window is truncated to its date components upstream.
    fn event_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<(&'static str, String)> {
        Self::date_window(start.date_naive(), end.date_naive())
    }

    fn datetime_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<(&'static str, String)> {
        vec![
            (
                "start_datetime",
                start.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            (
                "end_datetime",
                end.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ]
    }
}

#[async_trait]
impl OuraApi for OuraClient {
    async fn personal_info(&self) -> Result<PersonalInfo, ProviderError> {
        self.get_json("personal_info", &[]).await
    }

    async fn daily_activity(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyActivity>, ProviderError> {
        self.get_json("daily_activity", &Self::date_window(start, end))
            .await
    }

    async fn daily_readiness(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyReadiness>, ProviderError> {
        self.get_json("daily_readiness", &Self::date_window(start, end))
            .await
    }

    async fn daily_resilience(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyResilience>, ProviderError> {
        self.get_json("daily_resilience", &Self::date_window(start, end))
            .await
    }

    async fn daily_sleep(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailySleep>, ProviderError> {
        self.get_json("daily_sleep", &Self::date_window(start, end))
            .await
    }

    async fn daily_spo2(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailySpo2>, ProviderError> {
        self.get_json("daily_spo2", &Self::date_window(start, end))
            .await
    }

    async fn daily_stress(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<DailyStress>, ProviderError> {
        self.get_json("daily_stress", &Self::date_window(start, end))
            .await
    }

    async fn sleep_time(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<SleepTime>, ProviderError> {
        self.get_json("sleep_time", &Self::date_window(start, end))
            .await
    }

    async fn vo2_max(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ApiCollection<Vo2Max>, ProviderError> {
        self.get_json("vO2_max", &Self::date_window(start, end)).await
    }

    async fn heartrate(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<HeartRateSample>, ProviderError> {
        self.get_json("heartrate", &Self::datetime_window(start, end))
            .await
    }

    async fn rest_mode_periods(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<RestModePeriod>, ProviderError> {
        self.get_json("rest_mode_period", &Self::event_window(start, end))
            .await
    }

    async fn sessions(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<Session>, ProviderError> {
        self.get_json("session", &Self::event_window(start, end))
            .await
    }

    async fn sleep_periods(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<SleepPeriod>, ProviderError> {
        self.get_json("sleep", &Self::event_window(start, end)).await
    }

    async fn workouts(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<Workout>, ProviderError> {
        self.get_json("workout", &Self::event_window(start, end))
            .await
    }

    async fn enhanced_tags(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ApiCollection<EnhancedTag>, ProviderError> {
        self.get_json("enhanced_tag", &Self::event_window(start, end))
            .await
    }

    async fn ring_configuration(&self) -> Result<ApiCollection<RingConfiguration>, ProviderError> {
        self.get_json("ring_configuration", &[]).await
    }
}
