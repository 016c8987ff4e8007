// ABOUTME: Exporter binary: startup checks, scrape server spawn, and the polling loop
// ABOUTME: Exits 1 when the access token is missing or rejected by the Oura API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

//! # Oura Prometheus Exporter
//!
//! Validates the access credential, loads the metric declarations, starts
//! the scrape endpoint, and runs the 60-second polling loop until the
//! process is terminated.

use anyhow::Result;
use clap::Parser;
use oura_exporter::{
    config::{MetricsConfig, ServerConfig},
    logging,
    providers::{OuraApi, OuraClient},
    registry::MetricRegistry,
    routes,
    scheduler::PollingScheduler,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "oura-exporter")]
#[command(about = "Prometheus exporter for Oura Ring wellness data")]
struct Args {
    /// Metric declarations file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the scrape endpoint port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(path) = args.config {
        config.metrics_config = path;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }

    logging::init(config.log_level)?;
    info!("starting oura-exporter: {}", config.summary());

    // No metric can be produced without the declarations; refuse to start.
    let metrics_config = match MetricsConfig::load(&config.metrics_config) {
        Ok(metrics_config) => Arc::new(metrics_config),
        Err(e) => {
            error!("failed to load metric declarations: {e}");
            return Err(e.into());
        }
    };
    info!(
        categories = metrics_config.categories.len(),
        "metric declarations loaded"
    );

    let prometheus_registry = Arc::new(prometheus::Registry::new());
    let server_registry = Arc::clone(&prometheus_registry);
    let http_port = config.http_port;
    tokio::spawn(async move {
        if let Err(e) = routes::serve(server_registry, http_port).await {
            error!("metrics endpoint failed: {e}");
        }
    });

    let Some(access_token) = config.access_token.clone() else {
        error!("OURA_ACCESS_TOKEN env is not defined. Please set it!");
        std::process::exit(1);
    };

    let client = Arc::new(OuraClient::new(access_token));

    // Credential validity is confirmed by the one fetch every later call
    // depends on; its email becomes the label on every gauge.
    let personal_info = match client.personal_info().await {
        Ok(info) => info,
        Err(e) => {
            error!("OURA_ACCESS_TOKEN is not usable: {e}");
            std::process::exit(1);
        }
    };
    info!(email = %personal_info.email, "credential validated");

    let registry = MetricRegistry::new(Arc::clone(&prometheus_registry));
    let scheduler = PollingScheduler::new(
        client,
        metrics_config,
        registry,
        personal_info.email,
        config.timezone,
    );

    scheduler.run().await;
    Ok(())
}
