// ABOUTME: Shared HTTP client with connection pooling for lookup API calls
// ABOUTME: Singleton with configurable timeouts initialized once at engine startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Physiq AI

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every outgoing request
const USER_AGENT: &str = concat!("physiq-engine/", env!("CARGO_PKG_VERSION"));

/// Idle connections kept warm per host; every lookup hits the one nutrition host
const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Call once at engine startup before the first lookup. If never called,
/// defaults apply (30s timeout, 10s connect timeout). Has no effect once
/// the client has been built.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let _ = CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs));
}

/// Get the shared HTTP client for lookup API calls
///
/// The client pools connections across all lookups. Falls back to default
/// timeouts if `initialize_shared_client()` was not called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS
            .get()
            .copied()
            .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS));

        ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
