// src/http.rs
// Shared HTTP client for outbound provider calls

use std::time::Duration;

/// Per-request timeout for provider calls. Image edits routinely take
/// 30-60s on the synchronous endpoints.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Create the shared HTTP client.
///
/// Built once at startup and cloned into each provider; reqwest pools
/// connections internally.
pub fn create_shared_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10)
        .user_agent(concat!("womancart-hero/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Trim a provider error body before it goes into logs or error messages
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(max_chars).collect();
    out.push('…');
    out
}
