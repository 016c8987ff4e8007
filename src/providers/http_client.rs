// ABOUTME: Lazily built shared HTTP client for Oura API calls
// ABOUTME: One pooled client per process, with fixed timeouts sized for the 60s poll cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

// Both bounds sit well under the poll interval, so a stalled request can
// never bleed into the next cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// The process-wide pooled HTTP client.
///
/// Built on first use; every Oura API call goes through the same client so
/// connections to the API host are reused across categories and cycles.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_client_is_a_singleton() {
        assert!(std::ptr::eq(shared_client(), shared_client()));
    }
}
