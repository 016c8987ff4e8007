// ABOUTME: HTTP surface for scraping: /metrics in Prometheus text format plus a /health probe
// ABOUTME: Served from its own task, always readable regardless of poll-cycle phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use prometheus::{Encoder, Registry, TextEncoder};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Build the scrape router over the shared Prometheus registry
pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(registry)
}

/// Bind and serve the scrape endpoint until the process exits
pub async fn serve(registry: Arc<Registry>, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "metrics endpoint listening");
    axum::serve(listener, router(registry)).await?;
    Ok(())
}

async fn metrics_handler(State(registry): State<Arc<Registry>>) -> impl IntoResponse {
    let metric_families = registry.gather();
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
            buffer,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to encode metrics: {e}"),
        )
            .into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Gauge, Opts};

    #[test]
    fn test_router_builds_with_registered_gauge() {
        let registry = Arc::new(Registry::new());
        let gauge = Gauge::with_opts(Opts::new("oura_score", "Oura daily_sleep score")).unwrap();
        registry.register(Box::new(gauge)).unwrap();
        let _ = router(registry);
    }
}
