// ABOUTME: Environment-driven process configuration: credential, timezone, port, log level
// ABOUTME: Read once at startup; the timezone identifier must be a valid IANA zone name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;

/// Default scrape endpoint port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default metric declarations file path
pub const DEFAULT_METRICS_CONFIG: &str = "config/metrics.yml";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{s}")
    }
}

/// Process configuration resolved from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Oura personal access token; absence is a fatal startup condition
    /// checked by the binary, not here
    pub access_token: Option<String>,
    /// Timezone used to compute poll windows
    pub timezone: Tz,
    /// Listen port for the scrape endpoint
    pub http_port: u16,
    /// Log verbosity
    pub log_level: LogLevel,
    /// Path to the YAML metric declarations
    pub metrics_config: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `TZ` names an unknown timezone or `PORT` is
    /// not a valid port number.
    pub fn from_env() -> Result<Self> {
        let timezone = match env::var("TZ") {
            Ok(tz) => tz
                .parse::<Tz>()
                .map_err(|_| anyhow!("unknown timezone identifier: {tz}"))?,
            Err(_) => Tz::UTC,
        };

        let http_port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|_| anyhow!("invalid PORT value: {port}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let log_level = env::var("LOGLEVEL")
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();

        let metrics_config = env::var("METRICS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_METRICS_CONFIG));

        Ok(Self {
            access_token: env::var("OURA_ACCESS_TOKEN").ok(),
            timezone,
            http_port,
            log_level,
            metrics_config,
        })
    }

    /// Human-readable startup summary (token elided)
    pub fn summary(&self) -> String {
        format!(
            "timezone={} port={} log_level={} metrics_config={} token_present={}",
            self.timezone,
            self.http_port,
            self.log_level,
            self.metrics_config.display(),
            self.access_token.is_some()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }
}
