// ABOUTME: Upstream provider layer: shared HTTP client, OuraApi trait, and the Oura v2 client
// ABOUTME: The trait is the seam the scheduler is tested through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-exporter contributors

/// Shared HTTP client with connection pooling
pub mod http_client;
/// Oura v2 API client and the `OuraApi` trait
pub mod oura;

pub use http_client::shared_client;
pub use oura::{OuraApi, OuraClient};
