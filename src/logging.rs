// ABOUTME: Structured logging setup with env-selectable level and output format
// ABOUTME: Pretty for development, compact or JSON for deployments; hyper noise filtered down
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use anyhow::Result;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Base log level when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Build from the configured level plus `LOG_FORMAT`
    pub fn from_env(level: LogLevel) -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set, and
    /// is used verbatim so its per-target directives are honored. Only the
    /// fallback filter holds hyper and reqwest internals at warn to keep
    /// polling debug logs usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = build_filter(self.level, env::var("RUST_LOG").ok().as_deref())?;

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .try_init()?;
            }
            LogFormat::Pretty => {
                registry
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .try_init()?;
            }
            LogFormat::Compact => {
                registry
                    .with(tracing_subscriber::fmt::layer().compact())
                    .try_init()?;
            }
        }

        Ok(())
    }
}

/// Initialize logging for the given level with the format taken from env
pub fn init(level: LogLevel) -> Result<()> {
    LoggingConfig::from_env(level).init()
}

fn build_filter(level: LogLevel, rust_log: Option<&str>) -> Result<EnvFilter> {
    Ok(match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(level.to_string())
            .add_directive("hyper=warn".parse()?)
            .add_directive("reqwest=warn".parse()?),
    })
}
